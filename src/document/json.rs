//! JSON literal extraction.
//!
//! The document is parsed with `nom` into a skeleton that keeps only what
//! literal extraction needs: string slices borrowed from the input and the
//! container structure around them. Every other scalar is validated and
//! dropped.

use nom::{
    IResult, Offset,
    branch::alt,
    bytes::complete::{is_not, tag, take_while_m_n},
    character::complete::{char, digit0, digit1, multispace0, one_of, satisfy},
    combinator::{cut, eof, map, opt, recognize},
    error::{VerboseError, VerboseErrorKind, context},
    multi::{many0_count, separated_list0},
    sequence::{delimited, pair, preceded, separated_pair, terminated, tuple},
};

use crate::error::{DocumentError, Result};

use super::{Literal, PathSegment};

/// Containers nested deeper than this are rejected.
const MAX_DEPTH: usize = 128;

type JsonResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Parsed document, reduced to strings and their containers.
enum Json<'a> {
    /// Raw string content, escapes verbatim.
    String(&'a str),
    Array(Vec<Json<'a>>),
    Object(Vec<(&'a str, Json<'a>)>),
    Scalar,
}

pub(super) fn extract(text: &str) -> Result<Vec<Literal<'_>>> {
    let (_, root) = document(text).map_err(|err| to_error(text, err))?;

    let mut walker = JsonWalker {
        text,
        path: Vec::new(),
        literals: Vec::new(),
    };
    walker.walk(&root);

    log::trace!("json: {} string literals", walker.literals.len());
    Ok(walker.literals)
}

fn document(input: &str) -> JsonResult<'_, Json<'_>> {
    terminated(
        delimited(multispace0, |i| value(i, 0), multispace0),
        context("end of document", eof),
    )(input)
}

fn value(input: &str, depth: usize) -> JsonResult<'_, Json<'_>> {
    if depth > MAX_DEPTH {
        return Err(nom::Err::Failure(VerboseError {
            errors: vec![(input, VerboseErrorKind::Context("shallower nesting"))],
        }));
    }

    context(
        "a value",
        alt((
            map(string, Json::String),
            |i| object(i, depth),
            |i| array(i, depth),
            map(alt((tag("true"), tag("false"), tag("null"), number)), |_| {
                Json::Scalar
            }),
        )),
    )(input)
}

fn object(input: &str, depth: usize) -> JsonResult<'_, Json<'_>> {
    preceded(
        char('{'),
        cut(terminated(
            map(separated_list0(char(','), |i| member(i, depth)), Json::Object),
            preceded(multispace0, context("`,` or `}`", char('}'))),
        )),
    )(input)
}

fn member(input: &str, depth: usize) -> JsonResult<'_, (&str, Json<'_>)> {
    separated_pair(
        preceded(multispace0, string),
        cut(preceded(multispace0, context("`:`", char(':')))),
        |i| element(i, depth),
    )(input)
}

fn array(input: &str, depth: usize) -> JsonResult<'_, Json<'_>> {
    preceded(
        char('['),
        cut(terminated(
            map(separated_list0(char(','), |i| element(i, depth)), Json::Array),
            preceded(multispace0, context("`,` or `]`", char(']'))),
        )),
    )(input)
}

fn element(input: &str, depth: usize) -> JsonResult<'_, Json<'_>> {
    delimited(multispace0, |i| value(i, depth + 1), multispace0)(input)
}

/// A quoted string; yields the raw content between the quotes.
fn string(input: &str) -> JsonResult<'_, &str> {
    preceded(
        char('"'),
        cut(terminated(
            recognize(many0_count(alt((
                is_not("\"\\"),
                recognize(preceded(char('\\'), cut(escape))),
            )))),
            context("closing `\"`", char('"')),
        )),
    )(input)
}

/// `\uXXXX`, or any other single character after the backslash.
fn escape(input: &str) -> JsonResult<'_, &str> {
    context(
        "an escape sequence",
        alt((
            recognize(preceded(
                char('u'),
                take_while_m_n(4, 4, |c: char| c.is_ascii_hexdigit()),
            )),
            recognize(satisfy(|c| c != 'u')),
        )),
    )(input)
}

/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
fn number(input: &str) -> JsonResult<'_, &str> {
    recognize(tuple((
        opt(char('-')),
        alt((tag("0"), recognize(pair(one_of("123456789"), digit0)))),
        opt(pair(char('.'), cut(context("a digit", digit1)))),
        opt(tuple((
            one_of("eE"),
            opt(one_of("+-")),
            cut(context("an exponent", digit1)),
        ))),
    )))(input)
}

/// Report the innermost labelled failure.
fn to_error(text: &str, err: nom::Err<VerboseError<&str>>) -> DocumentError {
    let error = match err {
        nom::Err::Error(error) | nom::Err::Failure(error) => error,
        nom::Err::Incomplete(_) => {
            return DocumentError::Json {
                expected: "more input",
                offset: text.len(),
            };
        }
    };

    let labelled = error.errors.iter().find_map(|(input, kind)| match kind {
        VerboseErrorKind::Context(label) => Some((*input, *label)),
        _ => None,
    });
    let (input, expected) = labelled
        .or_else(|| error.errors.first().map(|(input, _)| (*input, "valid JSON")))
        .unwrap_or((text, "valid JSON"));

    DocumentError::Json {
        expected,
        offset: text.offset(input),
    }
}

struct JsonWalker<'a> {
    text: &'a str,
    path: Vec<PathSegment>,
    literals: Vec<Literal<'a>>,
}

impl<'a> JsonWalker<'a> {
    fn walk(&mut self, json: &Json<'a>) {
        match json {
            Json::String(content) => {
                let content = *content;
                let start = self.text.offset(content);
                self.literals.push(Literal {
                    content,
                    range: start..start + content.len(),
                    path: self.path.clone(),
                });
            }
            Json::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    self.path.push(PathSegment::Index(index));
                    self.walk(item);
                    self.path.pop();
                }
            }
            Json::Object(members) => {
                for (key, item) in members {
                    self.path.push((*key).into());
                    self.walk(item);
                    self.path.pop();
                }
            }
            Json::Scalar => {}
        }
    }
}
