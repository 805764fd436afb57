//! CLI module for transcribe2srt.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// transcribe2srt - Word-level transcripts to SRT subtitles
///
/// Reads a speech-to-text transcript document and prints it as an SRT
/// subtitle file with two-line cues.
#[derive(Parser, Debug)]
#[command(name = "transcribe2srt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TRANSCRIBE2SRT_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a transcript JSON document to SRT on stdout
    Convert {
        /// Transcript JSON file ("-" or omitted reads stdin)
        input: Option<String>,

        /// Characters after which the first line of a cue is closed
        #[arg(long)]
        max_line_chars: Option<usize>,

        /// Characters after which a cue stops taking tokens
        #[arg(long)]
        max_cue_chars: Option<usize>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
