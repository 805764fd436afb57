//! Amazon Transcribe output document.

use crate::error::{Result, SrtError};
use crate::srt::{Token, TokenKind};
use serde::{Deserialize, Serialize};

/// Top-level transcript document as written by a finished transcription job.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AwsTranscript {
    #[serde(rename = "jobName")]
    pub job_name: String,
    #[serde(rename = "accountId")]
    pub account_id: String,
    pub results: TranscriptResults,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TranscriptResults {
    pub transcripts: Vec<TranscriptText>,
    pub items: Vec<TranscriptItem>,
}

/// Whole-utterance text.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TranscriptText {
    pub transcript: String,
}

/// A single recognized word or punctuation mark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

/// A candidate reading of an item with its confidence.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Alternative {
    #[serde(default)]
    pub confidence: String,
    pub content: String,
}

/// Item classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Pronunciation,
    Punctuation,
    #[serde(other)]
    Other,
}

impl From<ItemType> for TokenKind {
    fn from(item_type: ItemType) -> Self {
        match item_type {
            ItemType::Punctuation => TokenKind::Punctuation,
            ItemType::Pronunciation | ItemType::Other => TokenKind::Word,
        }
    }
}

/// Parse a decimal seconds field. Punctuation timing is ignored.
fn parse_seconds(index: usize, field: &'static str, value: Option<&str>) -> Result<Option<f64>> {
    let Some(raw) = value else {
        return Ok(None);
    };

    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
        _ => Err(SrtError::MalformedTimestamp {
            index,
            field,
            value: raw.to_string(),
        }),
    }
}

impl TranscriptItem {
    /// Convert this item, found at `index` in the item list, into a token.
    pub fn to_token(&self, index: usize) -> Result<Token> {
        let text = self
            .alternatives
            .first()
            .map(|a| a.content.clone())
            .ok_or(SrtError::MissingAlternative { index })?;

        let kind = TokenKind::from(self.item_type);
        if kind == TokenKind::Punctuation {
            return Ok(Token::punctuation(text));
        }

        Ok(Token {
            text,
            start: parse_seconds(index, "start_time", self.start_time.as_deref())?,
            end: parse_seconds(index, "end_time", self.end_time.as_deref())?,
            kind,
        })
    }
}

impl AwsTranscript {
    /// Decode a transcript document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether the job that produced this document finished.
    pub fn is_completed(&self) -> bool {
        self.status.is_empty() || self.status.eq_ignore_ascii_case("COMPLETED")
    }

    /// Full transcript text, if the document carries one.
    pub fn full_text(&self) -> Option<&str> {
        self.results
            .transcripts
            .first()
            .map(|t| t.transcript.as_str())
    }

    /// Convert every item into a token, in document order.
    pub fn tokens(&self) -> Result<Vec<Token>> {
        self.results
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| item.to_token(index))
            .collect()
    }
}
