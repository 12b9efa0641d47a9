use std::fmt;

use crate::asr::Word;
use crate::time_code;

// @module: Plain (SRT) subtitle format model

/// A single SRT entry with timing in seconds
#[derive(Debug, Clone, PartialEq)]
pub struct SrtEntry {
    /// 1-based sequence number
    pub seq_num: usize,

    /// Start time in seconds
    pub start: f64,

    /// End time in seconds
    pub end: f64,

    /// Entry text, possibly multi-line
    pub text: String,
}

impl SrtEntry {
    pub fn new(seq_num: usize, start: f64, end: f64, text: String) -> Self {
        SrtEntry {
            seq_num,
            start,
            end,
            text,
        }
    }
}

impl fmt::Display for SrtEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(
            f,
            "{} --> {}",
            time_code::to_srt_time(self.start),
            time_code::to_srt_time(self.end)
        )?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// One word per entry, each spanning exactly the word's own timing.
///
/// This is the legacy whole-word output: no continuity between entries,
/// gaps between words are left unrendered.
pub fn entries_from_words(words: &[Word]) -> Vec<SrtEntry> {
    words
        .iter()
        .enumerate()
        .map(|(i, w)| SrtEntry::new(i + 1, w.start, w.end, w.text.clone()))
        .collect()
}

/// Serialize entries as an SRT document
pub fn write_srt(entries: &[SrtEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.to_string());
    }
    out
}

/// An SRT block as read from disk, time fields kept verbatim.
///
/// The line-based conversion mode validates the time fields itself, so the
/// parser does not interpret them here.
#[derive(Debug, Clone, PartialEq)]
pub struct SrtBlock {
    /// Block index as written in the file
    pub index: usize,

    /// Raw start time field, e.g. `00:00:01,000`
    pub start_time: String,

    /// Raw end time field
    pub end_time: String,

    /// Text lines of the block, in order
    pub text_lines: Vec<String>,

    /// 1-based line number where the block starts, for reporting
    pub line: usize,
}

/// Parse SRT content into raw blocks.
///
/// Lenient on the index line (a missing or garbled index falls back to the
/// block ordinal) and on the time fields (kept verbatim). A block whose
/// second line carries no ` --> ` separator is kept with its time fields
/// left empty, which the conversion step then reports as skipped.
pub fn parse_srt_blocks(content: &str) -> Vec<SrtBlock> {
    let mut blocks = Vec::new();
    let lines: Vec<&str> = content.lines().collect();
    let mut i = 0;
    let mut ordinal = 0;

    while i < lines.len() {
        // Skip blank separators
        while i < lines.len() && lines[i].trim().is_empty() {
            i += 1;
        }
        if i >= lines.len() {
            break;
        }

        let block_start_line = i + 1;
        ordinal += 1;
        let index = lines[i].trim().parse::<usize>().unwrap_or(ordinal);
        i += 1;

        let (start_time, end_time) = if i < lines.len() {
            match lines[i].split_once(" --> ") {
                Some((s, e)) => {
                    i += 1;
                    (s.trim().to_string(), e.trim().to_string())
                }
                None => (String::new(), String::new()),
            }
        } else {
            (String::new(), String::new())
        };

        let mut text_lines = Vec::new();
        while i < lines.len() && !lines[i].trim().is_empty() {
            text_lines.push(lines[i].to_string());
            i += 1;
        }

        blocks.push(SrtBlock {
            index,
            start_time,
            end_time,
            text_lines,
            line: block_start_line,
        });
    }

    blocks
}
