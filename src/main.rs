//! transcribe2srt CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use transcribe2srt::cli::{commands, Cli, Commands, Output};
use transcribe2srt::config::Settings;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        Output::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(Settings::expand_path(path).as_path()))?,
        None => Settings::load()?,
    };

    // Initialize logging
    let log_level = match cli.verbose {
        0 => settings.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("transcribe2srt={}", log_level)),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Execute command
    match &cli.command {
        Commands::Convert {
            input,
            max_line_chars,
            max_cue_chars,
        } => {
            commands::run_convert(input.as_deref(), *max_line_chars, *max_cue_chars, settings)?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings, cli.config.as_deref())?;
        }
    }

    Ok(())
}
