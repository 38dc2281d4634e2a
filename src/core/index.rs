//! Query evaluation - parses index query strings and matches documents
//!
//! Understands the language `QueryExpression` serializes to: `field:value`
//! terms joined by `AND` / `OR`, with parenthesised sub-queries. Clauses
//! fold left-to-right with no operator precedence.

use chumsky::prelude::*;

use crate::core::query::{Combinator, Field};
use crate::core::service::SearchError;

/// Something a filter can be evaluated against
pub trait Document {
    /// Value of `field` for this document, `None` if it has none
    fn value(&self, field: Field) -> Option<String>;
}

/// Parsed query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Term { field: Field, value: String },
    Group(Vec<(Combinator, Filter)>),
}

impl Filter {
    /// Parse a query string
    pub fn parse(query: &str) -> Result<Self, SearchError> {
        let (raw, errs) = ws()
            .ignore_then(expr())
            .then_ignore(ws())
            .then_ignore(end())
            .parse(query)
            .into_output_errors();

        match raw {
            Some(raw) => raw.resolve(),
            None => Err(errs
                .first()
                .map(|e| {
                    let message = if e.found().is_none() {
                        "unexpected end of query".to_string()
                    } else {
                        e.to_string()
                    };
                    syntax(e.span().start, message)
                })
                .unwrap_or_else(|| syntax(0, "empty query"))),
        }
    }

    /// Evaluate against a document
    pub fn matches(&self, doc: &impl Document) -> bool {
        match self {
            Filter::Term { field, value } => doc.value(*field).as_deref() == Some(value.as_str()),
            Filter::Group(clauses) => {
                let mut iter = clauses.iter();
                let Some((_, first)) = iter.next() else {
                    return false;
                };
                iter.fold(first.matches(doc), |acc, (combinator, filter)| match combinator {
                    Combinator::And => acc && filter.matches(doc),
                    Combinator::Or => acc || filter.matches(doc),
                })
            }
        }
    }
}

/// Parse tree before field names are checked
#[derive(Debug)]
enum Raw<'a> {
    Term { field: &'a str, value: &'a str },
    Group(Vec<(Combinator, Raw<'a>)>),
}

impl Raw<'_> {
    fn resolve(self) -> Result<Filter, SearchError> {
        match self {
            Raw::Term { field, value } => {
                let field = field
                    .parse::<Field>()
                    .map_err(|_| SearchError::UnknownField(field.to_string()))?;
                Ok(Filter::Term {
                    field,
                    value: value.to_string(),
                })
            }
            Raw::Group(clauses) => clauses
                .into_iter()
                .map(|(combinator, raw)| Ok((combinator, raw.resolve()?)))
                .collect::<Result<Vec<_>, SearchError>>()
                .map(Filter::Group),
        }
    }
}

type ParserInput<'a> = &'a str;
type ParserExtra<'a> = extra::Err<Rich<'a, char>>;

fn ws<'a>() -> impl Parser<'a, ParserInput<'a>, (), ParserExtra<'a>> + Clone {
    one_of(" \t\r\n").repeated().ignored()
}

fn ws1<'a>() -> impl Parser<'a, ParserInput<'a>, (), ParserExtra<'a>> + Clone {
    one_of(" \t\r\n").repeated().at_least(1).ignored()
}

fn is_word_char(c: &char) -> bool {
    !c.is_whitespace() && *c != '(' && *c != ')'
}

/// `field:value`; the value may itself contain `:`
fn term<'a>() -> impl Parser<'a, ParserInput<'a>, Raw<'a>, ParserExtra<'a>> + Clone {
    let field = any()
        .filter(|c: &char| is_word_char(c) && *c != ':')
        .repeated()
        .at_least(1)
        .to_slice();
    let value = any().filter(is_word_char).repeated().at_least(1).to_slice();

    field
        .then_ignore(just(':'))
        .then(value)
        .map(|(field, value)| Raw::Term { field, value })
}

fn combinator<'a>() -> impl Parser<'a, ParserInput<'a>, Combinator, ParserExtra<'a>> + Clone {
    choice((
        text::keyword("AND").to(Combinator::And),
        text::keyword("OR").to(Combinator::Or),
    ))
}

/// `primary ((AND | OR) primary)*`, kept flat so evaluation folds left to right
fn expr<'a>() -> impl Parser<'a, ParserInput<'a>, Raw<'a>, ParserExtra<'a>> {
    recursive(|expr| {
        let group = just('(')
            .ignore_then(ws())
            .ignore_then(expr)
            .then_ignore(ws())
            .then_ignore(just(')'));
        let primary = choice((group, term()));

        primary
            .clone()
            .then(
                ws1()
                    .ignore_then(combinator())
                    .then_ignore(ws1())
                    .then(primary)
                    .repeated()
                    .collect::<Vec<_>>(),
            )
            .map(|(first, rest)| {
                let mut clauses = vec![(Combinator::And, first)];
                clauses.extend(rest);
                Raw::Group(clauses)
            })
    })
}

fn syntax(position: usize, message: impl Into<String>) -> SearchError {
    SearchError::Syntax {
        position,
        message: message.into(),
    }
}
