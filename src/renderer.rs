use anyhow::{anyhow, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::chunking::PhraseChunk;
use crate::srt::SrtBlock;
use crate::styles::{self, StylePreset};
use crate::time_code;

// @module: Styled (ASS) subtitle rendering

/// Line break marker inside ASS event text
const ASS_LINE_BREAK: &str = "\\N";

/// Selectable per-word highlight strategies.
///
/// Both strategies emit one event per word; they differ in what the event
/// shows. `Phrase` is the canonical mode and keeps the whole phrase on
/// screen with the current word marked inline. `Word` is the legacy mode
/// that shows only the current word, styled through a secondary emphasis
/// style instead of inline markup.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStrategy {
    /// Whole phrase with the current word wrapped in highlight markup
    #[default]
    Phrase,
    /// One bare word per event, no cross-word continuity
    Word,
}

impl HighlightStrategy {
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Phrase => "phrase".to_string(),
            Self::Word => "word".to_string(),
        }
    }
}

impl std::fmt::Display for HighlightStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for HighlightStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "phrase" => Ok(Self::Phrase),
            "word" => Ok(Self::Word),
            _ => Err(anyhow!("Invalid highlight strategy: {}", s)),
        }
    }
}

/// A single styled subtitle event, write-once
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleEvent {
    /// Start time in seconds
    pub start: f64,

    /// End time in seconds
    pub end: f64,

    /// Name of the style record this event references
    pub style_name: String,

    /// Event text, possibly carrying inline override tags
    pub text: String,
}

/// A line-based block dropped during conversion, reported to the caller.
///
/// Skips are never silent: the conversion returns them alongside the
/// events so the caller can log or reject the run.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedBlock {
    /// Block index as written in the source file
    pub index: usize,

    /// 1-based line number where the block starts
    pub line: usize,

    /// Why the block was dropped
    pub reason: String,
}

/// Options controlling the styled rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Highlight strategy for chunk rendering
    pub strategy: HighlightStrategy,

    /// Style preset name; unknown names fall back to `modern`
    pub style: String,

    /// Highlight colour as a bare BGR hex sextet, e.g. `00E5FF`
    pub highlight_color: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            strategy: HighlightStrategy::default(),
            style: styles::DEFAULT_STYLE.to_string(),
            highlight_color: "00E5FF".to_string(),
        }
    }
}

/// Renders phrase chunks (or pre-segmented SRT blocks) into ASS scripts
pub struct SubtitleRenderer {
    options: RenderOptions,
}

impl SubtitleRenderer {
    /// Create a renderer with default options
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Create a renderer with custom options
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render chunks into events according to the configured strategy.
    ///
    /// The phrase strategy guarantees zero-gap, zero-overlap coverage: an
    /// event ends where the next word starts, crossing chunk boundaries,
    /// and only the very last event ends at its own word's end. The word
    /// strategy keeps each event on its word's own timing.
    pub fn render_events(&self, chunks: &[PhraseChunk]) -> Vec<SubtitleEvent> {
        match self.options.strategy {
            HighlightStrategy::Phrase => self.render_phrase_events(chunks),
            HighlightStrategy::Word => Self::render_word_events(chunks),
        }
    }

    fn render_phrase_events(&self, chunks: &[PhraseChunk]) -> Vec<SubtitleEvent> {
        let mut events = Vec::new();
        for (ci, chunk) in chunks.iter().enumerate() {
            for (wi, word) in chunk.words.iter().enumerate() {
                let end = if wi + 1 < chunk.words.len() {
                    chunk.words[wi + 1].start
                } else if let Some(next_chunk) = chunks.get(ci + 1) {
                    next_chunk.start()
                } else {
                    word.end
                };

                let text = chunk
                    .words
                    .iter()
                    .enumerate()
                    .map(|(i, w)| {
                        if i == wi {
                            format!(
                                "{{\\b1\\1c&H{}&}}{}{{\\r}}",
                                self.options.highlight_color, w.text
                            )
                        } else {
                            w.text.clone()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ");

                events.push(SubtitleEvent {
                    start: word.start,
                    end,
                    style_name: "Default".to_string(),
                    text,
                });
            }
        }
        events
    }

    fn render_word_events(chunks: &[PhraseChunk]) -> Vec<SubtitleEvent> {
        chunks
            .iter()
            .flat_map(|c| c.words.iter())
            .map(|word| SubtitleEvent {
                start: word.start,
                end: word.end,
                style_name: "Emphasis".to_string(),
                text: word.text.clone(),
            })
            .collect()
    }

    /// Render chunks into a complete ASS script
    pub fn render_script(&self, chunks: &[PhraseChunk]) -> String {
        let events = self.render_events(chunks);
        let preset = styles::preset(&self.options.style);

        let mut style_records = vec![style_record("Default", preset, "&H00FFFFFF", false)];
        if self.options.strategy == HighlightStrategy::Word {
            let primary = format!("&H00{}", self.options.highlight_color);
            style_records.push(style_record("Emphasis", preset, &primary, true));
        }

        write_ass_script(&style_records, &events)
    }

    /// Convert pre-segmented SRT blocks into a complete ASS script.
    ///
    /// Blocks whose time fields do not parse are dropped and returned as
    /// skip records; the script is built from whatever survived.
    pub fn convert_blocks(&self, blocks: &[SrtBlock]) -> (String, Vec<SkippedBlock>) {
        let preset = styles::preset(&self.options.style);
        let style_name = preset.name.to_string();

        let mut events = Vec::new();
        let mut skipped = Vec::new();

        for block in blocks {
            let start = match time_code::srt_time_to_styled_time(&block.start_time) {
                Ok(t) => t,
                Err(e) => {
                    skipped.push(SkippedBlock {
                        index: block.index,
                        line: block.line,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            let end = match time_code::srt_time_to_styled_time(&block.end_time) {
                Ok(t) => t,
                Err(e) => {
                    skipped.push(SkippedBlock {
                        index: block.index,
                        line: block.line,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            events.push(FormattedEvent {
                start,
                end,
                style_name: style_name.clone(),
                text: block.text_lines.join(ASS_LINE_BREAK),
            });
        }

        debug!(
            "Converted {} blocks into {} events ({} skipped)",
            blocks.len(),
            events.len(),
            skipped.len()
        );

        let style_records = vec![style_record(&style_name, preset, "&H00FFFFFF", false)];
        (write_ass_header_and_events(&style_records, &events), skipped)
    }
}

impl Default for SubtitleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// An event whose times are already in ASS text form
struct FormattedEvent {
    start: String,
    end: String,
    style_name: String,
    text: String,
}

/// One `Style:` record line for the `[V4+ Styles]` section
fn style_record(name: &str, preset: &StylePreset, primary_colour: &str, bold: bool) -> String {
    format!(
        "Style: {},{},{},{},&H000000FF,&H00000000,&H64000000,{},0,0,0,100,100,0,0,1,{},{},{},60,60,{},1",
        name,
        preset.font,
        preset.size,
        primary_colour,
        if bold { -1 } else { 0 },
        preset.outline_width,
        preset.shadow_depth,
        preset.alignment,
        preset.margin_vertical,
    )
}

fn write_ass_script(style_records: &[String], events: &[SubtitleEvent]) -> String {
    let formatted: Vec<FormattedEvent> = events
        .iter()
        .map(|e| FormattedEvent {
            start: time_code::to_styled_time(e.start),
            end: time_code::to_styled_time(e.end),
            style_name: e.style_name.clone(),
            text: e.text.clone(),
        })
        .collect();
    write_ass_header_and_events(style_records, &formatted)
}

fn write_ass_header_and_events(style_records: &[String], events: &[FormattedEvent]) -> String {
    let mut out = String::new();
    out.push_str("[Script Info]\n");
    out.push_str("Title: phrasesync generated subtitles\n");
    out.push_str("ScriptType: v4.00+\n");
    out.push_str("WrapStyle: 0\n");
    out.push_str("ScaledBorderAndShadow: yes\n");
    out.push_str("YCbCr Matrix: TV.709\n");
    out.push('\n');
    out.push_str("[V4+ Styles]\n");
    out.push_str("Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\n");
    for record in style_records {
        out.push_str(record);
        out.push('\n');
    }
    out.push('\n');
    out.push_str("[Events]\n");
    out.push_str("Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n");
    for event in events {
        out.push_str(&format!(
            "Dialogue: 0,{},{},{},,0,0,0,,{}\n",
            event.start, event.end, event.style_name, event.text
        ));
    }
    out
}
