use once_cell::sync::Lazy;
use regex::Regex;

use crate::asr::Word;
use crate::chunking::PhraseChunk;
use crate::errors::TranscriptError;
use crate::time_code;

// @module: Human-editable transcript document, round trip

// @const: Phrase header regex (`Phrase <N>: [<MM:SS> - <MM:SS>]`)
static PHRASE_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Phrase\s+(\d+):\s*\[\s*(\d+:\d{2})\s*-\s*(\d+:\d{2})\s*\]").unwrap()
});

const PREAMBLE: &str = "\
# Edit the 'Text:' line of any phrase below, then resync to regenerate
# the subtitles. Phrase timing comes from the header span; per-word times
# are re-derived evenly across the phrase, so the original word timing is
# not preserved once a phrase is edited.
# The numbered word breakdown is reference only and is never read back.
";

/// Serialize chunks into the editable transcript document.
///
/// Each chunk becomes a labeled block: a header with the 1-based ordinal
/// and the phrase span, a `Text:` line carrying the editable phrase text,
/// and a per-word breakdown for human reference.
pub fn write_transcript(chunks: &[PhraseChunk]) -> String {
    let mut out = String::new();
    out.push_str(PREAMBLE);
    out.push('\n');

    for (i, chunk) in chunks.iter().enumerate() {
        out.push_str(&format!(
            "Phrase {}: [{} - {}]\n",
            i + 1,
            time_code::to_human_time(chunk.start()),
            time_code::to_human_time(chunk.end())
        ));
        out.push_str(&format!("Text: {}\n", chunk.text()));
        for (j, word) in chunk.words.iter().enumerate() {
            out.push_str(&format!(
                "    {}. [{} - {}] {}\n",
                j + 1,
                time_code::to_human_time(word.start),
                time_code::to_human_time(word.end),
                word.text
            ));
        }
        out.push('\n');
    }

    out
}

/// Parse an edited transcript document back into phrase chunks.
///
/// Scans for phrase headers; the next non-blank line after a header must
/// begin with `Text:`. The phrase text is split on whitespace and each
/// word is given an equal share of the phrase span, so only phrase-level
/// timing survives the round trip. A document with zero recognizable
/// phrase blocks is a hard failure, never an empty result.
pub fn parse_transcript(content: &str) -> Result<Vec<PhraseChunk>, TranscriptError> {
    let lines: Vec<&str> = content.lines().collect();
    let mut chunks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(caps) = PHRASE_HEADER_REGEX.captures(lines[i]) else {
            i += 1;
            continue;
        };

        let ordinal: usize = caps[1].parse().unwrap_or(chunks.len() + 1);
        let phrase_start = time_code::parse_human_time(&caps[2]);
        let phrase_end = time_code::parse_human_time(&caps[3]);
        i += 1;

        // The next non-blank line carries the editable text
        while i < lines.len() && lines[i].trim().is_empty() {
            i += 1;
        }
        let text_line = lines
            .get(i)
            .map(|l| l.trim())
            .filter(|l| l.starts_with("Text:"))
            .ok_or(TranscriptError::MissingText { ordinal })?;
        i += 1;

        let words: Vec<&str> = text_line["Text:".len()..].split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        chunks.push(redistribute(&words, phrase_start, phrase_end));
    }

    if chunks.is_empty() {
        return Err(TranscriptError::NoPhrases);
    }
    Ok(chunks)
}

/// Give each word an equal share of the phrase span.
///
/// The last word's end is pinned to the phrase end so the span is
/// reproduced exactly despite the division.
fn redistribute(words: &[&str], phrase_start: f64, phrase_end: f64) -> PhraseChunk {
    let count = words.len();
    let word_duration = (phrase_end - phrase_start) / count as f64;

    let timed: Vec<Word> = words
        .iter()
        .enumerate()
        .map(|(j, text)| {
            let start = phrase_start + j as f64 * word_duration;
            let end = if j + 1 == count {
                phrase_end
            } else {
                phrase_start + (j + 1) as f64 * word_duration
            };
            Word::new(*text, start, end)
        })
        .collect();

    PhraseChunk::new(timed)
}
