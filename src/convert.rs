//! Conversion pipeline.
//!
//! Decodes a transcript document, packs its tokens into cues and renders the
//! SRT document. This is the only layer that logs; the `srt` module stays pure.

use crate::config::Settings;
use crate::error::Result;
use crate::srt::{render, CueBuilder};
use crate::transcript::AwsTranscript;
use tracing::{debug, info, instrument, warn};

/// Result of converting one transcript.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Job that produced the transcript (empty if the document has none).
    pub job_name: String,
    /// Number of transcript items consumed.
    pub token_count: usize,
    /// Number of cues emitted.
    pub cue_count: usize,
    /// End of the last cue in seconds.
    pub duration_seconds: f64,
    /// The rendered SRT document.
    pub srt: String,
}

/// Converts transcript documents to SRT.
pub struct Converter {
    builder: CueBuilder,
}

impl Converter {
    /// Create a converter from validated settings.
    pub fn new(settings: &Settings) -> Result<Self> {
        let builder = CueBuilder::new(settings.subtitles.layout())?;
        let layout = builder.layout();
        info!(
            "Using cue layout: {} chars per line, {} chars per cue",
            layout.max_line_chars, layout.max_cue_chars
        );

        Ok(Self { builder })
    }

    /// Create a converter around an existing cue builder.
    pub fn with_builder(builder: CueBuilder) -> Self {
        Self { builder }
    }

    /// Convert transcript JSON text.
    pub fn convert_json(&self, json: &str) -> Result<Conversion> {
        let transcript = AwsTranscript::from_json(json)?;
        self.convert(&transcript)
    }

    /// Convert a decoded transcript.
    #[instrument(skip_all, fields(job = %transcript.job_name))]
    pub fn convert(&self, transcript: &AwsTranscript) -> Result<Conversion> {
        if !transcript.is_completed() {
            warn!("Transcript status is {}, output may be incomplete", transcript.status);
        }

        let tokens = transcript.tokens()?;
        debug!(
            "Decoded {} tokens ({} chars of transcript text)",
            tokens.len(),
            transcript.full_text().map_or(0, |t| t.chars().count())
        );

        if tokens.is_empty() {
            warn!("Transcript has no items, producing an empty document");
        }

        let cues = self.builder.build(&tokens)?;
        let duration_seconds = cues.last().map(|c| c.end_seconds).unwrap_or(0.0);
        info!("Built {} cues from {} tokens", cues.len(), tokens.len());

        Ok(Conversion {
            job_name: transcript.job_name.clone(),
            token_count: tokens.len(),
            cue_count: cues.len(),
            duration_seconds,
            srt: render(&cues),
        })
    }
}
