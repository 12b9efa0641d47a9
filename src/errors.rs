/*!
 * Error types for the phrasesync application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while working with subtitle formats
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// A time field in a line-based block does not match the SRT pattern
    #[error("Malformed time field: '{field}'")]
    MalformedTimeField {
        /// The offending field text
        field: String,
    },

    /// A block could not be parsed into an entry
    #[error("Malformed subtitle block starting at line {line}: {reason}")]
    MalformedBlock {
        /// 1-based line number where the block starts
        line: usize,
        /// What went wrong
        reason: String,
    },
}

/// Errors that can occur while parsing an edited transcript document
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// The document yielded zero recognizable phrase blocks
    #[error("No phrase blocks found in transcript document; expected headers like 'Phrase 1: [00:00 - 00:05]'")]
    NoPhrases,

    /// A phrase header was found but its Text: line is missing
    #[error("Phrase {ordinal} has no 'Text:' line")]
    MissingText {
        /// 1-based phrase ordinal from the header
        ordinal: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// A referenced input path does not exist
    #[error("Input not found: {0}")]
    InputNotFound(PathBuf),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle format handling
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from transcript round-trip parsing
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
