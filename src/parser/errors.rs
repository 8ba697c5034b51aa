use thiserror::Error;

use super::lexer::Token;
use crate::language::InvalidLabel;

/// Input text that does not match any token of the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised token \"{text}\" at position {position}")]
pub struct TokenizationError {
    text: String,
    position: usize,
}

impl TokenizationError {
    pub(crate) fn new(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }

    /// The unrecognised text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the unrecognised text in the input
    pub fn position(&self) -> usize {
        self.position
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsingError {
    #[error("empty expression")]
    Empty,

    #[error("expected {expected} but found {found} at position {position}")]
    UnexpectedToken {
        expected: &'static str,
        found: Token,
        position: usize,
    },

    #[error("expression nested deeper than {limit} levels at position {position}")]
    TooDeep { limit: usize, position: usize },

    #[error(transparent)]
    Tokenization(#[from] TokenizationError),

    #[error(transparent)]
    InvalidLabel(#[from] InvalidLabel),
}
