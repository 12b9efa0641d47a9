use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

// @module: Typed ingestion of recognition results from the ASR boundary

/// A single timestamped word as produced by the recognizer.
///
/// Times are seconds from the start of the audio. Words are created once at
/// the ingestion boundary and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Word {
    /// The recognized token, punctuation included
    #[serde(rename = "word")]
    pub text: String,

    /// Start time in seconds
    pub start: f64,

    /// End time in seconds
    pub end: f64,
}

impl Word {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Word {
            text: text.into(),
            start,
            end,
        }
    }

    /// Duration of the word in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// One recognition batch from the ASR collaborator.
///
/// Batches without word-level timing carry no `result` field and contribute
/// nothing to the word sequence.
#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionResult {
    /// Word-level timing records, absent when the batch had none
    #[serde(default)]
    pub result: Option<Vec<Word>>,

    /// Flat batch text, unused by the engine but present in the wire format
    #[serde(default)]
    pub text: Option<String>,
}

/// Parse a JSON document holding the ordered recognition batches.
///
/// The accepted shape is a JSON array of batch objects, each optionally
/// carrying a `result` array of `{word, start, end}` records.
pub fn parse_recognition_json(content: &str) -> Result<Vec<RecognitionResult>> {
    let results: Vec<RecognitionResult> = serde_json::from_str(content)
        .map_err(|e| anyhow!("Failed to parse recognition JSON: {}", e))?;
    Ok(results)
}

/// Flatten recognition batches into one ordered word sequence, validating
/// each word at the boundary.
///
/// Validation is structural only: every word must satisfy `start <= end`
/// and carry non-negative times. Ordering across words is assumed from the
/// recognizer and never repaired.
pub fn flatten_words(results: &[RecognitionResult]) -> Result<Vec<Word>> {
    let mut words = Vec::new();
    for (batch_idx, batch) in results.iter().enumerate() {
        let Some(batch_words) = &batch.result else {
            continue;
        };
        for word in batch_words {
            if word.start < 0.0 || word.end < 0.0 {
                return Err(anyhow!(
                    "Negative timestamp for word '{}' in batch {}",
                    word.text,
                    batch_idx
                ));
            }
            if word.start > word.end {
                return Err(anyhow!(
                    "Word '{}' in batch {} starts at {:.3}s after it ends at {:.3}s",
                    word.text,
                    batch_idx,
                    word.start,
                    word.end
                ));
            }
            words.push(word.clone());
        }
    }
    Ok(words)
}
