//! Convert command implementation.

use crate::cli::output::format_duration;
use crate::cli::Output;
use crate::config::Settings;
use crate::convert::Converter;
use anyhow::{Context, Result};
use std::io::Read;
use tracing::debug;

/// Read transcript JSON from a file, or stdin when the input is "-" or absent.
fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        Some(path) if path != "-" => {
            let path = Settings::expand_path(path);
            debug!("Reading transcript from {}", path.display());
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read transcript file {}", path.display()))
        }
        _ => {
            debug!("Reading transcript from stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read transcript from stdin")?;
            Ok(buf)
        }
    }
}

/// Run the convert command.
pub fn run_convert(
    input: Option<&str>,
    max_line_chars: Option<usize>,
    max_cue_chars: Option<usize>,
    mut settings: Settings,
) -> Result<()> {
    if let Some(n) = max_line_chars {
        settings.subtitles.max_line_chars = n;
    }
    if let Some(n) = max_cue_chars {
        settings.subtitles.max_cue_chars = n;
    }

    let converter = Converter::new(&settings)?;
    let json = read_input(input)?;
    let conversion = converter.convert_json(&json)?;

    if conversion.cue_count == 0 {
        Output::warning("Transcript contains no items; nothing to convert.");
        return Ok(());
    }

    print!("{}", conversion.srt);

    let job = if conversion.job_name.is_empty() {
        "transcript".to_string()
    } else {
        format!("'{}'", conversion.job_name)
    };
    Output::success(&format!(
        "Converted {} ({} cues from {} tokens, {})",
        job,
        conversion.cue_count,
        conversion.token_count,
        format_duration(conversion.duration_seconds)
    ));

    Ok(())
}
