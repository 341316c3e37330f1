//! OSGi clause lists
//!
//! ```text
//! clauses   := clause (',' clause)* ','?
//! clause    := part (';' part)*
//! part      := parameter | element
//! parameter := element ('=' | ':=') element
//! element   := quoted | text+
//! ```
//!
//! Parentheses, brackets and a colon not followed by `=` are ordinary text. Inside quotes every
//! token is text. The grammar runs over the logical value tokens, so continuation lines are
//! already joined.

use crate::manifest::ast::{Clause, HeaderValue, Parameter, ParameterKind, ValueText};
use crate::manifest::lexing::TokenKind;
use crate::manifest::parsing::headers::{HeaderParser, StandardHeaderParser, ValueInput};
use chumsky::prelude::*;
use std::ops::Range;
use tracing::debug;

/// Value tokens as the clause grammar sees them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ValueToken {
    Text,
    /// Text made only of whitespace
    Space,
    Quote,
    Comma,
    Semicolon,
    Equals,
    /// `:=`
    Directive,
}

type ValueSpan = (ValueToken, Range<usize>);

type ParserError = Simple<ValueSpan>;

#[derive(Debug, Clone)]
struct RawElement {
    pieces: Vec<Range<usize>>,
    quoted: bool,
    range: Range<usize>,
}

#[derive(Debug, Clone)]
enum RawPart {
    Path(RawElement),
    Parameter {
        name: RawElement,
        kind: ParameterKind,
        value: RawElement,
    },
}

impl RawPart {
    fn range(&self) -> Range<usize> {
        match self {
            RawPart::Path(element) => element.range.clone(),
            RawPart::Parameter { name, value, .. } => name.range.start..value.range.end,
        }
    }
}

/// Parses a comma separated list of clauses.
///
/// Values the grammar rejects are returned as standard text values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClauseHeaderParser;

impl HeaderParser for ClauseHeaderParser {
    fn name(&self) -> &str {
        "clauses"
    }

    fn parse(&self, input: &ValueInput<'_>) -> HeaderValue {
        let tokens = classify(input);
        if tokens.is_empty() {
            return HeaderValue::Clauses {
                clauses: Vec::new(),
                range: input.range(),
            };
        }

        match clauses().parse(tokens) {
            Ok(raw) => HeaderValue::Clauses {
                clauses: raw
                    .into_iter()
                    .filter_map(|parts| build_clause(input, parts))
                    .collect(),
                range: input.range(),
            },
            Err(errors) => {
                debug!(
                    range = ?input.range(),
                    errors = errors.len(),
                    "value is not a clause list, keeping it as text"
                );
                StandardHeaderParser.parse(input)
            }
        }
    }
}

/// Map the logical value tokens onto the clause grammar's alphabet.
fn classify(input: &ValueInput<'_>) -> Vec<ValueSpan> {
    let logical = input.logical_tokens();
    let mut tokens = Vec::with_capacity(logical.len());
    let mut iter = logical.iter().peekable();

    while let Some((kind, range)) = iter.next() {
        let token = match kind {
            TokenKind::Quote => ValueToken::Quote,
            TokenKind::Comma => ValueToken::Comma,
            TokenKind::Semicolon => ValueToken::Semicolon,
            TokenKind::Equals => ValueToken::Equals,
            TokenKind::Colon => match iter.peek() {
                Some((TokenKind::Equals, next)) if next.start == range.end => {
                    let end = next.end;
                    iter.next();
                    tokens.push((ValueToken::Directive, range.start..end));
                    continue;
                }
                _ => ValueToken::Text,
            },
            _ if input.text(range).trim().is_empty() => ValueToken::Space,
            _ => ValueToken::Text,
        };
        tokens.push((token, range.clone()));
    }

    tokens
}

fn token(kind: ValueToken) -> impl Parser<ValueSpan, Range<usize>, Error = ParserError> + Clone {
    filter(move |(t, _): &ValueSpan| *t == kind).map(|(_, range)| range)
}

fn element() -> impl Parser<ValueSpan, RawElement, Error = ParserError> + Clone {
    let space = token(ValueToken::Space).repeated();

    let quoted = token(ValueToken::Quote)
        .then(
            filter(|(t, _): &ValueSpan| *t != ValueToken::Quote)
                .map(|(_, range)| range)
                .repeated(),
        )
        .then(token(ValueToken::Quote))
        .map(|((open, pieces), close)| RawElement {
            pieces,
            quoted: true,
            range: open.start..close.end,
        });

    let bare = filter(|(t, _): &ValueSpan| matches!(t, ValueToken::Text | ValueToken::Space))
        .map(|(_, range)| range)
        .repeated()
        .at_least(1)
        .map(|pieces: Vec<Range<usize>>| {
            let start = pieces.first().map(|r| r.start).unwrap_or(0);
            let end = pieces.last().map(|r| r.end).unwrap_or(start);
            RawElement {
                pieces,
                quoted: false,
                range: start..end,
            }
        });

    space
        .clone()
        .ignore_then(quoted)
        .then_ignore(space)
        .or(bare)
}

fn clauses() -> impl Parser<ValueSpan, Vec<Vec<RawPart>>, Error = ParserError> {
    let operator = token(ValueToken::Equals)
        .to(ParameterKind::Attribute)
        .or(token(ValueToken::Directive).to(ParameterKind::Directive));

    let parameter = element()
        .then(operator)
        .then(element())
        .map(|((name, kind), value)| RawPart::Parameter { name, kind, value });

    let part = parameter.or(element().map(RawPart::Path));

    let clause = part
        .separated_by(token(ValueToken::Semicolon))
        .allow_trailing()
        .at_least(1);

    clause
        .separated_by(token(ValueToken::Comma))
        .allow_trailing()
        .at_least(1)
        .then_ignore(end())
}

fn element_text(input: &ValueInput<'_>, element: &RawElement) -> ValueText {
    let joined: String = element
        .pieces
        .iter()
        .map(|range| input.text(range))
        .collect();
    if element.quoted {
        ValueText::new(joined, element.range.clone())
    } else {
        ValueText::new(joined.trim(), element.range.clone())
    }
}

/// Clauses with nothing but whitespace are dropped.
fn build_clause(input: &ValueInput<'_>, parts: Vec<RawPart>) -> Option<Clause> {
    let start = parts.first().map(|part| part.range().start)?;
    let end = parts.last().map(|part| part.range().end)?;

    let mut paths = Vec::new();
    let mut parameters = Vec::new();
    for part in parts {
        match part {
            RawPart::Path(element) => {
                let text = element_text(input, &element);
                if element.quoted || !text.text.is_empty() {
                    paths.push(text);
                }
            }
            RawPart::Parameter { name, kind, value } => {
                let range = name.range.start..value.range.end;
                parameters.push(Parameter {
                    kind,
                    name: element_text(input, &name),
                    value: element_text(input, &value),
                    range,
                });
            }
        }
    }

    if paths.is_empty() && parameters.is_empty() {
        return None;
    }
    Some(Clause {
        paths,
        parameters,
        range: start..end,
    })
}
