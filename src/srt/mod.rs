//! SRT generation from word-level transcripts.
//!
//! Everything in this module is a pure transform: no I/O, no logging and no
//! shared state, so independent token streams can be converted in parallel.
//!
//! # Cue packing
//!
//! Tokens are packed into cues of at most two lines. A cue keeps taking
//! tokens until their combined length reaches [`CueLayout::max_cue_chars`];
//! the first line is closed by the token that pushes the running count past
//! [`CueLayout::max_line_chars`]. Punctuation is fused onto the text before
//! it and borrows the end time of the preceding token.

mod builder;
mod models;
mod timestamp;

pub use builder::{render, tokens_to_srt, CueBuilder, CueLayout};
pub use models::{Cue, Token, TokenKind};
pub use timestamp::{format_timestamp, parse_timestamp};
