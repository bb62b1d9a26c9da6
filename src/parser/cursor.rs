//! Character cursor over borrowed text

use super::ParseError;

/// Lazy, finite sequence of the characters of a source string
///
/// An absent source behaves like an empty one.
#[derive(Debug, Clone)]
pub struct CharCursor<'a> {
    source: &'a str,
    at: usize,
}

impl<'a> CharCursor<'a> {
    /// Cursor at the start of `source`
    pub fn new(source: Option<&'a str>) -> Self {
        Self {
            source: source.unwrap_or_default(),
            at: 0,
        }
    }

    /// True while characters remain
    pub fn has_next(&self) -> bool {
        self.at < self.source.len()
    }

    /// Next character, [`ParseError::EndOfInput`] past the end
    pub fn try_next(&mut self) -> Result<char, ParseError> {
        let ch = self.source[self.at..]
            .chars()
            .next()
            .ok_or(ParseError::EndOfInput)?;
        self.at += ch.len_utf8();
        Ok(ch)
    }

    /// Text not consumed yet
    pub fn remaining(&self) -> &'a str {
        &self.source[self.at..]
    }
}

impl<'a> From<&'a str> for CharCursor<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(Some(source))
    }
}

impl Iterator for CharCursor<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let bytes = self.source.len() - self.at;
        ((bytes + 3) / 4, Some(bytes))
    }
}
