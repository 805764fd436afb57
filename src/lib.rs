//! transcribe2srt - Word-level transcripts to SRT subtitles
//!
//! Turns the timed word/punctuation stream of a speech-to-text transcript
//! into an SRT document of numbered, two-line cues.
//!
//! # Architecture
//!
//! - `srt` - Timestamp formatting and cue packing (pure, no I/O)
//! - `transcript` - Transcript JSON model and token mapping
//! - `convert` - Conversion pipeline with logging
//! - `config` - Configuration management
//! - `cli` - Command line interface
//!
//! # Example
//!
//! ```rust
//! use transcribe2srt::srt::{tokens_to_srt, Token};
//!
//! let tokens = vec![
//!     Token::word("Good", 0.0, 0.4),
//!     Token::word("morning", 0.4, 1.1),
//! ];
//!
//! let srt = tokens_to_srt(&tokens).unwrap();
//! assert_eq!(srt, "\n1\n00:00:00,000 --> 00:00:01,100\nGood morning \n");
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod srt;
pub mod transcript;

pub use error::{Result, SrtError};
