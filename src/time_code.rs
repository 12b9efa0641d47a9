use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;

// @module: Time encoding conversions between seconds and subtitle formats

// @const: SRT timestamp regex (HH:MM:SS,mmm with unbounded hours)
static SRT_TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2,}):(\d{2}):(\d{2}),(\d{3})$").unwrap()
});

/// Format seconds as an SRT timestamp: `HH:MM:SS,mmm`.
///
/// Hours are not wrapped; values beyond 99 hours simply grow wider.
/// Milliseconds are truncated, not rounded.
pub fn to_srt_time(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0) as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{:02}:{:02}:{:02},{:03}", h, m, s, ms)
}

/// Format seconds as an ASS event timestamp: `H:MM:SS.cc`.
///
/// Hours are unpadded and centiseconds truncated, which is what the
/// ASS event grid expects.
pub fn to_styled_time(seconds: f64) -> String {
    let total_cs = (seconds * 100.0) as u64;
    let h = total_cs / 360_000;
    let m = (total_cs % 360_000) / 6_000;
    let s = (total_cs % 6_000) / 100;
    let cs = total_cs % 100;
    format!("{}:{:02}:{:02}.{:02}", h, m, s, cs)
}

/// Format seconds as a human-readable `MM:SS` span for the transcript
/// document.
///
/// Known limitation: there is no hour field. The minute field keeps
/// counting past 59, so values of one hour or more are not representable
/// in the conventional sense.
pub fn to_human_time(seconds: f64) -> String {
    let total_s = seconds as u64;
    format!("{:02}:{:02}", total_s / 60, total_s % 60)
}

/// Parse a `MM:SS` span back into seconds.
///
/// Permissive by design: anything that is not exactly two colon-separated
/// integer fields yields 0.0 rather than an error. Phrase headers carry the
/// only timing that survives a round trip, so a malformed span collapses
/// the phrase to the document origin instead of failing the whole parse.
pub fn parse_human_time(value: &str) -> f64 {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() != 2 {
        return 0.0;
    }
    match (parts[0].trim().parse::<u64>(), parts[1].trim().parse::<u64>()) {
        (Ok(m), Ok(s)) => (m * 60 + s) as f64,
        _ => 0.0,
    }
}

/// Convert an SRT timestamp (`HH:MM:SS,mmm`) to the ASS encoding
/// (`H:MM:SS.cc`).
///
/// Milliseconds become centiseconds by dividing by 10 and rounding to
/// nearest, saturating at 99 to keep the two-digit field.
pub fn srt_time_to_styled_time(srt_time: &str) -> Result<String, SubtitleError> {
    let caps = SRT_TIME_REGEX
        .captures(srt_time.trim())
        .ok_or_else(|| SubtitleError::MalformedTimeField {
            field: srt_time.to_string(),
        })?;

    // Captures are all-digit by construction, parse cannot fail.
    let h: u64 = caps[1].parse().unwrap_or(0);
    let m: u64 = caps[2].parse().unwrap_or(0);
    let s: u64 = caps[3].parse().unwrap_or(0);
    let ms: u64 = caps[4].parse().unwrap_or(0);

    let cs = (((ms as f64) / 10.0).round() as u64).min(99);

    Ok(format!("{}:{:02}:{:02}.{:02}", h, m, s, cs))
}
