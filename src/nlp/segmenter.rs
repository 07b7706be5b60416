//! Sentence segmentation
//!
//! Splits text on sentence-final punctuation, keeping the terminator inside
//! the sentence text. A small abbreviation list stops the most common false
//! boundaries ("dr. smith"). Transforms recompute segmentation on demand;
//! sentences are never persisted.

use crate::types::Sentence;
use rustc_hash::FxHashSet;

/// Words that a period does not terminate a sentence after.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "eg", "ie",
];

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Segment text into sentences in document order.
///
/// Fragments without any letters (stray punctuation, empty runs) are
/// dropped, so empty input yields an empty vector.
pub fn segment(text: &str) -> Vec<Sentence> {
    let abbreviations: FxHashSet<&str> = ABBREVIATIONS.iter().copied().collect();

    let mut sentences = Vec::new();
    let mut buf = String::new();
    let mut last_word = String::new();

    for ch in text.chars() {
        buf.push(ch);
        if ch.is_alphabetic() {
            last_word.push(ch.to_ascii_lowercase());
        } else if is_terminator(ch) {
            if !abbreviations.contains(last_word.as_str()) {
                flush(&mut buf, &mut sentences);
            }
            last_word.clear();
        } else {
            last_word.clear();
        }
    }
    flush(&mut buf, &mut sentences);

    sentences
}

fn flush(buf: &mut String, sentences: &mut Vec<Sentence>) {
    let trimmed = buf.trim();
    if trimmed.chars().any(|c| c.is_alphabetic()) {
        sentences.push(Sentence::new(trimmed, sentences.len()));
    }
    buf.clear();
}
