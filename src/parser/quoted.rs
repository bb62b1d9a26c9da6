//! Quoted-string tokenizer
//!
//! Rules:
//! - a string opens with `'` or `"` and closes with the same quote
//! - the other kind of quote is literal inside a string
//! - a backslash takes the following character literally
//! - text outside strings is skipped

use super::{parse, CharCursor, ParseError, ParserState, StateFactory};

const DOUBLE_QUOTE: char = '"';
const SINGLE_QUOTE: char = '\'';
const BACKSLASH: char = '\\';

/// States of the quoted-string tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotedStringState {
    /// Outside any string
    Start,
    /// Inside a `"` string
    InDoubleQuote,
    /// Inside a `'` string
    InSingleQuote,
}

impl QuotedStringState {
    /// Collect characters up to `closing`, then emit the string
    fn accept_string(
        input: &mut CharCursor<'_>,
        parsed: &mut Vec<String>,
        closing: char,
    ) -> Option<Self> {
        let mut token = String::new();
        while let Some(ch) = input.next() {
            if ch == closing {
                parsed.push(token);
                return Some(QuotedStringState::Start);
            }
            // A trailing backslash is kept as is
            let literal = match ch {
                BACKSLASH => input.next().unwrap_or(BACKSLASH),
                other => other,
            };
            token.push(literal);
        }
        None
    }
}

impl ParserState for QuotedStringState {
    fn accept(&self, input: &mut CharCursor<'_>, parsed: &mut Vec<String>) -> Option<Self> {
        match self {
            QuotedStringState::Start => input.find_map(|ch| match ch {
                DOUBLE_QUOTE => Some(QuotedStringState::InDoubleQuote),
                SINGLE_QUOTE => Some(QuotedStringState::InSingleQuote),
                _ => None,
            }),
            QuotedStringState::InDoubleQuote => Self::accept_string(input, parsed, DOUBLE_QUOTE),
            QuotedStringState::InSingleQuote => Self::accept_string(input, parsed, SINGLE_QUOTE),
        }
    }
}

/// Factory for the quoted-string tokenizer; input must end outside a string
#[derive(Debug, Clone, Copy, Default)]
pub struct QuotedStrings;

impl StateFactory for QuotedStrings {
    type State = QuotedStringState;

    fn start_state(&self) -> QuotedStringState {
        QuotedStringState::Start
    }

    fn illegal_end_state(&self, state: &QuotedStringState) -> Option<String> {
        (*state != QuotedStringState::Start)
            .then(|| "reached end of input while within a string".to_string())
    }
}

/// Every quoted string in `input`, quotes and escapes removed
pub fn parse_quoted_strings(input: &str) -> Result<Vec<String>, ParseError> {
    parse(&QuotedStrings, input)
}
