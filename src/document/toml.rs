//! TOML literal extraction.
//!
//! Parsing is left to `toml_edit`, which keeps the byte span of every value.
//! The walker follows the resulting table structure, so `[[array]]` tables,
//! sub-tables and dotted keys all land on the path the data actually has.

use std::ops::Range;

use toml_edit::{Item, Table, Value};

use crate::error::Result;

use super::{Literal, PathSegment};

pub(super) fn extract(text: &str) -> Result<Vec<Literal<'_>>> {
    let document = toml_edit::Document::parse(text)?;

    let mut walker = TomlWalker {
        text,
        path: Vec::new(),
        literals: Vec::new(),
    };
    walker.table(document.as_table());
    // Tables are stored by key, not by position.
    walker.literals.sort_by_key(|literal| literal.range.start);

    log::trace!("toml: {} string literals", walker.literals.len());
    Ok(walker.literals)
}

struct TomlWalker<'a> {
    text: &'a str,
    path: Vec<PathSegment>,
    literals: Vec<Literal<'a>>,
}

impl<'a> TomlWalker<'a> {
    fn table(&mut self, table: &Table) {
        for (key, item) in table.iter() {
            self.path.push(key.into());
            self.item(item);
            self.path.pop();
        }
    }

    fn item(&mut self, item: &Item) {
        match item {
            Item::None => {}
            Item::Value(value) => self.value(value),
            Item::Table(table) => self.table(table),
            Item::ArrayOfTables(tables) => {
                for (index, table) in tables.iter().enumerate() {
                    self.path.push(PathSegment::Index(index));
                    self.table(table);
                    self.path.pop();
                }
            }
        }
    }

    fn value(&mut self, value: &Value) {
        match value {
            Value::String(string) => match string.span() {
                Some(span) => self.string(span),
                None => log::trace!("toml: string without a span"),
            },
            Value::Array(array) => {
                for (index, value) in array.iter().enumerate() {
                    self.path.push(PathSegment::Index(index));
                    self.value(value);
                    self.path.pop();
                }
            }
            Value::InlineTable(table) => {
                for (key, value) in table.iter() {
                    self.path.push(key.into());
                    self.value(value);
                    self.path.pop();
                }
            }
            Value::Integer(_) | Value::Float(_) | Value::Boolean(_) | Value::Datetime(_) => {}
        }
    }

    /// Record the string whose raw token, quotes included, spans `span`.
    fn string(&mut self, span: Range<usize>) {
        let Some(raw) = self.text.get(span.clone()) else {
            return;
        };
        let inner = content_range(raw);
        let range = span.start + inner.start..span.start + inner.end;

        self.literals.push(Literal {
            content: &self.text[range.clone()],
            range,
            path: self.path.clone(),
        });
    }
}

/// Byte range of the content inside a raw string token.
///
/// Multi-line strings drop the line break right after the opening
/// delimiter. Extra quotes before the closing delimiter are content.
fn content_range(raw: &str) -> Range<usize> {
    for delimiter in ["\"\"\"", "'''"] {
        if raw.len() >= 6 && raw.starts_with(delimiter) && raw.ends_with(delimiter) {
            let body = &raw[3..raw.len() - 3];
            let skip = if body.starts_with("\r\n") {
                2
            } else if body.starts_with('\n') {
                1
            } else {
                0
            };
            return 3 + skip..raw.len() - 3;
        }
    }

    let end = raw.len().saturating_sub(1).max(1);
    1.min(end)..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocumentError;

    fn paths(text: &str) -> Vec<(String, &str)> {
        extract(text)
            .unwrap()
            .into_iter()
            .map(|literal| (literal.dotted_path(), literal.content))
            .collect()
    }

    #[test]
    fn basic_and_literal_strings() {
        let text = "title = \"<red>Hi\"\npath = 'C:\\<bold>'\n";
        assert_eq!(
            paths(text),
            vec![
                ("title".to_string(), "<red>Hi"),
                ("path".to_string(), "C:\\<bold>"),
            ]
        );
    }

    #[test]
    fn tables_and_dotted_keys() {
        let text = r#"
# messages
[server]
motd = "<gold>Welcome" # trailing comment

[server."chat format"]
prefix.player = "<gray>"
"#;
        assert_eq!(
            paths(text),
            vec![
                ("server.motd".to_string(), "<gold>Welcome"),
                ("server.chat format.prefix.player".to_string(), "<gray>"),
            ]
        );
    }

    #[test]
    fn array_of_tables_are_indexed() {
        let text = "[[rank]]\nname = \"<red>admin\"\n[[rank]]\nname = \"<aqua>mod\"\n";
        assert_eq!(
            paths(text),
            vec![
                ("rank.0.name".to_string(), "<red>admin"),
                ("rank.1.name".to_string(), "<aqua>mod"),
            ]
        );
    }

    #[test]
    fn sub_table_of_array_element() {
        let text = "[[a]]\nx = \"1\"\n[a.b]\ny = \"<red>z\"\n[[a]]\nx = \"2\"\n";
        assert_eq!(
            paths(text),
            vec![
                ("a.0.x".to_string(), "1"),
                ("a.0.b.y".to_string(), "<red>z"),
                ("a.1.x".to_string(), "2"),
            ]
        );
    }

    #[test]
    fn literals_come_in_document_order() {
        let text = "[b]\nx = \"1\"\n[a]\ny = \"2\"\n[b.c]\nz = \"3\"\n";
        let starts: Vec<_> = extract(text)
            .unwrap()
            .iter()
            .map(|literal| literal.range.start)
            .collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
        assert_eq!(paths(text)[2], ("b.c.z".to_string(), "3"));
    }

    #[test]
    fn arrays_and_inline_tables() {
        let text = "lines = [\n  \"<red>a\", # first\n  'b',\n]\npoint = { x = 1, label = \"<u>p\" }\n";
        assert_eq!(
            paths(text),
            vec![
                ("lines.0".to_string(), "<red>a"),
                ("lines.1".to_string(), "b"),
                ("point.label".to_string(), "<u>p"),
            ]
        );
    }

    #[test]
    fn multiline_strings() {
        let text = "a = \"\"\"\n<rainbow>x\ny\"\"\"\nb = '''<u>z'''\nc = \"\"\"q\"\"\"\"\n";
        let literals = extract(text).unwrap();
        assert_eq!(literals[0].content, "<rainbow>x\ny");
        assert_eq!(literals[0].range.start, 8);
        assert_eq!(literals[1].content, "<u>z");
        assert_eq!(literals[2].content, "q\"");
    }

    #[test]
    fn escapes_stay_raw() {
        let text = "a = \"\\u00e9<red>\\\"x\"\n";
        assert_eq!(paths(text), vec![("a".to_string(), "\\u00e9<red>\\\"x")]);
    }

    #[test]
    fn scalars_are_skipped() {
        let text = "n = -1_000\nf = 6.02e+23\nb = true\nd = 1979-05-27 07:32:00Z\nt = 07:32:00\ns = \"<red>x\"\n";
        assert_eq!(paths(text), vec![("s".to_string(), "<red>x")]);
    }

    #[test]
    fn crlf_line_endings() {
        let text = "a = \"<red>x\"\r\nb = \"\"\"\r\ny\"\"\"\r\n";
        assert_eq!(
            paths(text),
            vec![("a".to_string(), "<red>x"), ("b".to_string(), "y")]
        );
    }

    #[test]
    fn content_range_forms() {
        assert_eq!(content_range("\"ab\""), 1..3);
        assert_eq!(content_range("''"), 1..1);
        assert_eq!(content_range("\"\"\"\"\"\""), 3..3);
        assert_eq!(content_range("'''\nx'''"), 4..5);
    }

    #[test]
    fn malformed_documents() {
        for text in [
            "a = \"open\n",
            "a \"b\"",
            "a = 1 b = 2",
            "[table",
            "a = [1, 2",
            "a =",
            "a = 1\na = 2\n",
        ] {
            assert!(
                matches!(extract(text), Err(DocumentError::Toml(_))),
                "{text:?}"
            );
        }
    }
}
