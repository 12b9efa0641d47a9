use crate::asr::Word;

// @module: Phrase segmentation of the flat word sequence

/// Default cap on words per phrase chunk
pub const DEFAULT_MAX_WORDS_PER_CHUNK: usize = 4;

/// Pause gap (seconds) beyond which an open multi-word chunk is closed
pub const PAUSE_GAP_THRESHOLD: f64 = 0.5;

/// Sentence-terminal marks recognized by default.
///
/// Covers Latin punctuation plus the Devanagari danda/double danda and
/// CJK full stops; the set is configuration, not policy, so any script can
/// be accommodated without touching the segmentation loop.
pub fn default_sentence_terminators() -> Vec<String> {
    [".", "!", "?", ":", "।", "॥", "。", "！", "？"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Options controlling phrase segmentation
#[derive(Debug, Clone)]
pub struct ChunkOptions {
    /// Maximum number of words per chunk
    pub max_words_per_chunk: usize,

    /// Gap in seconds between consecutive words that forces a break
    pub pause_gap_threshold: f64,

    /// Strings a word must end with to count as sentence-terminal
    pub sentence_terminators: Vec<String>,
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self {
            max_words_per_chunk: DEFAULT_MAX_WORDS_PER_CHUNK,
            pause_gap_threshold: PAUSE_GAP_THRESHOLD,
            sentence_terminators: default_sentence_terminators(),
        }
    }
}

/// A contiguous run of words grouped for display as one subtitle unit.
///
/// Chunks are created by segmentation or by the transcript parser and are
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseChunk {
    /// The member words, in original order
    pub words: Vec<Word>,
}

impl PhraseChunk {
    pub fn new(words: Vec<Word>) -> Self {
        PhraseChunk { words }
    }

    /// Start of the phrase span: the first word's start
    pub fn start(&self) -> f64 {
        self.words.first().map_or(0.0, |w| w.start)
    }

    /// End of the phrase span: the last word's end
    pub fn end(&self) -> f64 {
        self.words.last().map_or(0.0, |w| w.end)
    }

    /// Space-joined phrase text
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Segments an ordered word sequence into phrase chunks.
pub struct ChunkBuilder {
    options: ChunkOptions,
}

impl ChunkBuilder {
    /// Create a builder with default options
    pub fn new() -> Self {
        Self::with_options(ChunkOptions::default())
    }

    /// Create a builder with custom options
    pub fn with_options(options: ChunkOptions) -> Self {
        Self { options }
    }

    /// Split `words` into phrase chunks.
    ///
    /// Three OR'd breakpoints: the open chunk reaching the word cap, the
    /// appended word ending with a sentence-terminal mark, and a pause gap
    /// beyond the threshold when the open chunk already holds more than one
    /// word. The pause rule closes the open chunk before the gapped word is
    /// appended; the other two close it after. Any trailing non-empty chunk
    /// is always emitted, so every input word lands in exactly one chunk.
    pub fn build(&self, words: &[Word]) -> Vec<PhraseChunk> {
        let max_words = self.options.max_words_per_chunk.max(1);
        let mut chunks = Vec::new();
        let mut open: Vec<Word> = Vec::new();

        for word in words {
            if open.len() > 1 {
                let gap = word.start - open.last().map_or(0.0, |w| w.end);
                if gap > self.options.pause_gap_threshold {
                    chunks.push(PhraseChunk::new(std::mem::take(&mut open)));
                }
            }

            open.push(word.clone());

            if open.len() >= max_words || self.is_sentence_terminal(&word.text) {
                chunks.push(PhraseChunk::new(std::mem::take(&mut open)));
            }
        }

        if !open.is_empty() {
            chunks.push(PhraseChunk::new(open));
        }

        chunks
    }

    fn is_sentence_terminal(&self, text: &str) -> bool {
        self.options
            .sentence_terminators
            .iter()
            .any(|mark| !mark.is_empty() && text.ends_with(mark.as_str()))
    }
}

impl Default for ChunkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
