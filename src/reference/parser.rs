//! Position Parser
//!
//! Parses textual positions into [`Position`] values.
//!
//! Grammar:
//! ```text
//! position  = book ws+ chapter ":" verse "." word
//! book      = token [ws+ token]
//! token     = word-char+
//! chapter   = number        (>= 1)
//! verse     = number        (>= 1)
//! word      = number        (>= 1, displayed word number)
//! ```

use super::types::Position;
use thiserror::Error;

/// Position parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionParseError {
    #[error("Empty position string")]
    Empty,

    #[error("Missing book abbreviation")]
    MissingBook,

    #[error("Invalid book abbreviation '{0}'")]
    InvalidBook(String),

    #[error("Expected number at position {0}")]
    ExpectedNumber(usize),

    #[error("Unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),

    #[error("Unexpected trailing input at position {0}")]
    TrailingInput(usize),

    #[error("{0} must be at least 1")]
    Zero(&'static str),
}

/// Parser state over the `chapter:verse.word` tail
struct Parser<'a> {
    input: &'a str,
    pos: usize,
    /// Offset of `input` inside the full position string
    base: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, base: usize) -> Self {
        Self { input, pos: 0, base }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn offset(&self) -> usize {
        self.base + self.pos
    }

    fn expect(&mut self, expected: char) -> Result<(), PositionParseError> {
        match self.peek() {
            Some(ch) if ch == expected => {
                self.advance();
                Ok(())
            }
            Some(ch) => Err(PositionParseError::UnexpectedChar(ch, self.offset())),
            None => Err(PositionParseError::ExpectedNumber(self.offset())),
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Parse a sequence of ASCII digits as u32
    fn parse_number(&mut self) -> Result<u32, PositionParseError> {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }

        if self.pos == start {
            return Err(PositionParseError::ExpectedNumber(self.base + start));
        }

        self.input[start..self.pos]
            .parse()
            .map_err(|_| PositionParseError::ExpectedNumber(self.base + start))
    }

    /// Parse a number that must be at least 1
    fn parse_ordinal(&mut self, what: &'static str) -> Result<u32, PositionParseError> {
        match self.parse_number()? {
            0 => Err(PositionParseError::Zero(what)),
            n => Ok(n),
        }
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Validate the book part: one or two word-char tokens
fn parse_book(book: &str) -> Result<String, PositionParseError> {
    let tokens: Vec<&str> = book.split_whitespace().collect();

    if tokens.is_empty() || book.starts_with(char::is_whitespace) {
        return Err(PositionParseError::MissingBook);
    }
    if tokens.len() > 2 || tokens.iter().any(|t| !t.chars().all(is_word_char)) {
        return Err(PositionParseError::InvalidBook(book.to_string()));
    }

    Ok(tokens.join(" "))
}

/// Parse a position string, reporting why it is malformed
pub fn try_parse(input: &str) -> Result<Position, PositionParseError> {
    if input.is_empty() {
        return Err(PositionParseError::Empty);
    }

    // The reference is the last whitespace-separated chunk; everything
    // before it is the book.
    let split = input
        .char_indices()
        .filter(|(_, ch)| ch.is_whitespace())
        .map(|(i, ch)| (i, i + ch.len_utf8()))
        .last()
        .ok_or(PositionParseError::MissingBook)?;
    let (book_end, tail_start) = split;

    let book_abbr = parse_book(&input[..book_end])?;

    let mut parser = Parser::new(&input[tail_start..], tail_start);
    let chapter = parser.parse_ordinal("chapter")?;
    parser.expect(':')?;
    let verse = parser.parse_ordinal("verse")?;
    parser.expect('.')?;
    let display_word = parser.parse_ordinal("word number")?;

    if !parser.at_end() {
        return Err(PositionParseError::TrailingInput(parser.offset()));
    }

    Ok(Position {
        book_abbr,
        chapter,
        verse,
        word_index: display_word - 1,
    })
}

/// Parse a position string; malformed input yields `None`
pub fn parse(input: &str) -> Option<Position> {
    match try_parse(input) {
        Ok(position) => Some(position),
        Err(e) => {
            tracing::debug!("Ignoring malformed position {:?}: {}", input, e);
            None
        }
    }
}
