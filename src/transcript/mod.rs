//! Transcript input documents.
//!
//! Decodes the JSON produced by a speech-to-text provider and maps its items
//! onto the [`Token`](crate::srt::Token) stream consumed by the cue builder.

mod aws;

pub use aws::{Alternative, AwsTranscript, ItemType, TranscriptItem, TranscriptResults, TranscriptText};
