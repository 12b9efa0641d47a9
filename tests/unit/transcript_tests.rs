/*!
 * Tests for the transcript round trip
 */

use phrasesync::asr::Word;
use phrasesync::chunking::{ChunkBuilder, PhraseChunk};
use phrasesync::errors::TranscriptError;
use phrasesync::transcript::{parse_transcript, write_transcript};

fn word(text: &str, start: f64, end: f64) -> Word {
    Word::new(text, start, end)
}

#[test]
fn test_writeTranscript_shouldIncludePreambleAndBreakdown() {
    let chunks = vec![PhraseChunk::new(vec![
        word("Hello", 0.0, 1.0),
        word("world.", 1.0, 2.0),
    ])];
    let doc = write_transcript(&chunks);

    // Instructional preamble precedes the first phrase block
    assert!(doc.starts_with('#'));
    assert!(doc.find('#').unwrap() < doc.find("Phrase 1:").unwrap());
    assert!(doc.contains("Text: Hello world."));
    assert!(doc.contains("2. [00:01 - 00:02] world."));
}

/// Round-trip bound: N words, each of duration (E-S)/N, first start == S,
/// last end == E
#[test]
fn test_roundTrip_withEditedText_shouldRedistributeUniformly() {
    let doc = "\
Phrase 1: [00:10 - 00:16]
Text: completely new wording here

Phrase 2: [00:20 - 00:22]
Text: short
";
    let chunks = parse_transcript(doc).unwrap();
    assert_eq!(chunks.len(), 2);

    let first = &chunks[0];
    assert_eq!(first.words.len(), 4);
    let expected_duration = (16.0 - 10.0) / 4.0;
    for w in &first.words {
        assert!((w.duration() - expected_duration).abs() < 1e-9);
    }
    assert_eq!(first.words[0].start, 10.0);
    assert_eq!(first.words[3].end, 16.0);

    let second = &chunks[1];
    assert_eq!(second.words.len(), 1);
    assert_eq!(second.words[0].start, 20.0);
    assert_eq!(second.words[0].end, 22.0);
}

#[test]
fn test_roundTrip_withWriterOutput_shouldSurviveUnedited() {
    let original = ChunkBuilder::new().build(&[
        word("Some", 1.0, 1.4),
        word("timed", 1.4, 1.9),
        word("speech.", 1.9, 3.0),
    ]);
    let doc = write_transcript(&original);
    let restored = parse_transcript(&doc).unwrap();

    assert_eq!(restored.len(), original.len());
    assert_eq!(restored[0].text(), original[0].text());
    // Phrase spans survive at whole-second precision
    assert_eq!(restored[0].start(), 1.0);
    assert_eq!(restored[0].end(), 3.0);
}

#[test]
fn test_parseTranscript_withProseOnly_shouldFailWithNoPhrases() {
    let err = parse_transcript("An essay with no structure at all.\n").unwrap_err();
    assert!(matches!(err, TranscriptError::NoPhrases));
}

#[test]
fn test_parseTranscript_withEmptyTextLine_shouldSkipThatPhrase() {
    let doc = "\
Phrase 1: [00:00 - 00:02]
Text:

Phrase 2: [00:03 - 00:05]
Text: kept words
";
    let chunks = parse_transcript(doc).unwrap();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text(), "kept words");
}

#[test]
fn test_parseTranscript_withBlankLineBeforeText_shouldStillFindIt() {
    let doc = "Phrase 1: [00:00 - 00:02]\n\nText: across the blank\n";
    let chunks = parse_transcript(doc).unwrap();
    assert_eq!(chunks[0].words.len(), 3);
}

#[test]
fn test_parseTranscript_withBreakdownLines_shouldNeverReparseThem() {
    // Hand-edit the text while leaving the stale breakdown in place
    let doc = "\
Phrase 1: [00:00 - 00:04]
Text: four brand new words
    1. [00:00 - 00:02] old
    2. [00:02 - 00:04] junk
";
    let chunks = parse_transcript(doc).unwrap();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text(), "four brand new words");
    assert_eq!(chunks[0].words.len(), 4);
}
