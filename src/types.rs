//! Core token and sentence types shared by every transform.

use serde::Serialize;

/// Coarse part-of-speech tags assigned by the rule/lexicon tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PosTag {
    Noun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Number,
    Other,
}

impl PosTag {
    /// Whether this tag marks a common noun — the only class the theme
    /// extractor counts.
    pub fn is_noun(self) -> bool {
        self == PosTag::Noun
    }

    /// Whether this tag can act as a sentence predicate.
    pub fn is_verbal(self) -> bool {
        matches!(self, PosTag::Verb | PosTag::Auxiliary)
    }
}

/// A single token with its position and tagger output.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Surface form, lowercased, punctuation-stripped.
    pub text: String,
    /// Naive lemma (verb stem / singular noun); falls back to `text`.
    pub lemma: String,
    /// Part-of-speech tag.
    pub pos: PosTag,
    /// Index of the sentence this token belongs to.
    pub sentence_idx: usize,
    /// Position of this token within the document token stream.
    pub token_idx: usize,
    /// Whether the token is a stopword in the loaded model.
    pub is_stopword: bool,
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PosTag,
        sentence_idx: usize,
        token_idx: usize,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            sentence_idx,
            token_idx,
            is_stopword: false,
        }
    }

    /// Content words that participate in sentence-overlap similarity.
    pub fn is_content_word(&self) -> bool {
        !self.is_stopword
            && matches!(
                self.pos,
                PosTag::Noun | PosTag::Verb | PosTag::Adjective | PosTag::Adverb
            )
    }
}

/// A segmented sentence: its text (terminator included) and its position in
/// the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    pub text: String,
    pub index: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noun_predicate_split() {
        assert!(PosTag::Noun.is_noun());
        assert!(!PosTag::Verb.is_noun());
        assert!(PosTag::Verb.is_verbal());
        assert!(PosTag::Auxiliary.is_verbal());
        assert!(!PosTag::Adjective.is_verbal());
    }

    #[test]
    fn test_content_word_excludes_stopwords() {
        let mut token = Token::new("cat", "cat", PosTag::Noun, 0, 0);
        assert!(token.is_content_word());
        token.is_stopword = true;
        assert!(!token.is_content_word());
    }

    #[test]
    fn test_function_words_are_not_content() {
        let token = Token::new("on", "on", PosTag::Preposition, 0, 0);
        assert!(!token.is_content_word());
    }
}
