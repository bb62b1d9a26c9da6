//! State-driven tokenizer
//!
//! A [`StateFactory`] hands out the start state and judges the end state.
//! Each [`ParserState`] consumes characters from a [`CharCursor`], appends
//! tokens, and may ask for a transition. Parsing runs until the input is
//! used up.

mod cursor;
mod quoted;

pub use cursor::CharCursor;
pub use quoted::{parse_quoted_strings, QuotedStringState, QuotedStrings};

use thiserror::Error;

/// Errors raised while tokenizing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Cursor asked for a character past the end
    #[error("past end of input")]
    EndOfInput,

    /// Input ran out in a state the factory does not accept as final
    #[error("{0}")]
    IllegalEndState(String),
}

/// One state of a tokenizer
pub trait ParserState: Sized {
    /// Consume input, pushing finished tokens onto `parsed`
    ///
    /// Returns the state to move to, or `None` to stay put.
    fn accept(&self, input: &mut CharCursor<'_>, parsed: &mut Vec<String>) -> Option<Self>;
}

/// Supplies the states of a tokenizer
pub trait StateFactory {
    /// States this factory produces
    type State: ParserState;

    /// State parsing starts in
    fn start_state(&self) -> Self::State;

    /// Error message if `state` is not a legal place for input to end
    fn illegal_end_state(&self, state: &Self::State) -> Option<String>;
}

/// Run the tokenizer described by `factory` over `input`
pub fn parse<F: StateFactory>(factory: &F, input: &str) -> Result<Vec<String>, ParseError> {
    let mut parsed = Vec::new();
    let mut cursor = CharCursor::from(input);
    let mut state = factory.start_state();

    while cursor.has_next() {
        if let Some(next) = state.accept(&mut cursor, &mut parsed) {
            state = next;
        }
    }

    match factory.illegal_end_state(&state) {
        Some(message) => Err(ParseError::IllegalEndState(message)),
        None => Ok(parsed),
    }
}
