//! SRT timestamp formatting and parsing (`HH:MM:SS,mmm`).

use regex::Regex;
use std::sync::LazyLock;

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2,}):(\d{2}):(\d{2})[,.](\d{3})$").expect("timestamp pattern is valid")
});

/// Format seconds as an SRT timestamp (00:00:00,000).
///
/// Hours are zero-padded to two digits but never wrap. Milliseconds are
/// truncated, not rounded, after allowing for binary representation error
/// of a few ulps. Negative and non-finite input is outside the
/// contract and formats as zero.
pub fn format_timestamp(seconds: f64) -> String {
    let seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };

    // Decimal inputs such as 1.001 land a few ulps below the millisecond in
    // binary; lift by that much only, so real sub-millisecond values truncate.
    let ms = seconds * 1000.0;
    let total_ms = (ms + ms * 4.0 * f64::EPSILON) as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let ms = total_ms % 1000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, ms)
}

/// Parse an SRT timestamp back into seconds.
///
/// Accepts either `,` or `.` before the milliseconds.
pub fn parse_timestamp(timestamp: &str) -> Option<f64> {
    let caps = TIMESTAMP_RE.captures(timestamp.trim())?;
    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u64>().ok());

    let hours = field(1)?;
    let minutes = field(2)?;
    let secs = field(3)?;
    let ms = field(4)?;

    if minutes >= 60 || secs >= 60 {
        return None;
    }

    let total_ms = ((hours * 60 + minutes) * 60 + secs) * 1000 + ms;
    Some(total_ms as f64 / 1000.0)
}
