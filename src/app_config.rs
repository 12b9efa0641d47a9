use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::chunking::{self, ChunkOptions};
use crate::renderer::{HighlightStrategy, RenderOptions};
use crate::styles;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.

// @const: Bare BGR hex sextet, e.g. 00E5FF
static COLOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9A-Fa-f]{6}$").unwrap());

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Maximum number of words per phrase chunk
    #[serde(default = "default_max_words_per_chunk")]
    pub max_words_per_chunk: usize,

    /// Strings a word must end with to close a phrase
    #[serde(default = "chunking::default_sentence_terminators")]
    pub sentence_terminators: Vec<String>,

    /// Style preset name for rendered scripts
    #[serde(default = "default_style")]
    pub style: String,

    /// Highlight settings
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Per-word highlight settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HighlightConfig {
    /// Rendering strategy: whole phrase with inline markup, or bare words
    #[serde(default)]
    pub strategy: HighlightStrategy,

    /// Highlight colour as a bare BGR hex sextet
    #[serde(default = "default_highlight_color")]
    pub color: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            strategy: HighlightStrategy::default(),
            color: default_highlight_color(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_words_per_chunk: default_max_words_per_chunk(),
            sentence_terminators: chunking::default_sentence_terminators(),
            style: default_style(),
            highlight: HighlightConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_words_per_chunk == 0 {
            return Err(anyhow!("max_words_per_chunk must be at least 1"));
        }

        if self.sentence_terminators.is_empty() {
            return Err(anyhow!("sentence_terminators must not be empty"));
        }
        if self.sentence_terminators.iter().any(|t| t.is_empty()) {
            return Err(anyhow!("sentence_terminators must not contain empty strings"));
        }

        if !COLOR_REGEX.is_match(&self.highlight.color) {
            return Err(anyhow!(
                "highlight.color must be a 6-digit BGR hex value, got '{}'",
                self.highlight.color
            ));
        }

        // An unknown style name is allowed and falls back to "modern" at
        // render time; it is not a validation failure.
        Ok(())
    }

    /// Segmentation options derived from this configuration
    pub fn chunk_options(&self) -> ChunkOptions {
        ChunkOptions {
            max_words_per_chunk: self.max_words_per_chunk,
            pause_gap_threshold: chunking::PAUSE_GAP_THRESHOLD,
            sentence_terminators: self.sentence_terminators.clone(),
        }
    }

    /// Rendering options derived from this configuration
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            strategy: self.highlight.strategy,
            style: self.style.clone(),
            highlight_color: self.highlight.color.clone(),
        }
    }

    /// Whether the configured style names a known preset
    pub fn has_known_style(&self) -> bool {
        styles::is_known_preset(&self.style)
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_max_words_per_chunk() -> usize {
    chunking::DEFAULT_MAX_WORDS_PER_CHUNK
}

fn default_style() -> String {
    styles::DEFAULT_STYLE.to_string()
}

fn default_highlight_color() -> String {
    "00E5FF".to_string()
}
