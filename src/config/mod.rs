//! Configuration module for transcribe2srt.
//!
//! Handles loading and validating application settings.

mod settings;

pub use settings::{GeneralSettings, Settings, SubtitleSettings};
