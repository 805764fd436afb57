//! Data models for subtitle generation.

use super::timestamp::format_timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Classification of a recognized token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A spoken word. Anything that is not punctuation counts as a word.
    #[default]
    Word,
    /// A punctuation mark with no timing of its own.
    Punctuation,
}

/// One recognized word or punctuation mark with timing metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Literal content.
    pub text: String,
    /// Start time in seconds.
    pub start: Option<f64>,
    /// End time in seconds.
    pub end: Option<f64>,
    /// Word or punctuation.
    pub kind: TokenKind,
}

impl Token {
    /// Create a timed word token.
    pub fn word(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start: Some(start),
            end: Some(end),
            kind: TokenKind::Word,
        }
    }

    /// Create an untimed punctuation token.
    pub fn punctuation(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start: None,
            end: None,
            kind: TokenKind::Punctuation,
        }
    }

    pub fn is_punctuation(&self) -> bool {
        self.kind == TokenKind::Punctuation
    }
}

/// One timed subtitle block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cue {
    /// 1-based position in the document.
    pub sequence: usize,
    /// Start time in seconds.
    pub start_seconds: f64,
    /// End time in seconds.
    pub end_seconds: f64,
    /// One or two lines of text.
    pub text: String,
    /// Indices of the tokens this cue consumed.
    pub tokens: Range<usize>,
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n{}\n{} --> {}\n{}\n",
            self.sequence,
            format_timestamp(self.start_seconds),
            format_timestamp(self.end_seconds),
            self.text
        )
    }
}
