//! Sentence simplification
//!
//! Reduces each sentence to a subject–verb–object skeleton when one is
//! extractable. The decision is an explicit two-branch enum: either a full
//! SVO skeleton was found, or the sentence passes through verbatim. Most
//! real-world sentences take the pass-through branch; that fallback is part
//! of the contract, not a degradation.

use crate::model::LanguageModel;
use crate::nlp::{segment, Tokenizer};
use crate::types::{PosTag, Token};

/// Outcome of shallow SVO extraction for one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Simplification {
    /// All three roles were found; render as a canonical skeleton.
    Skeleton {
        subjects: Vec<String>,
        verbs: Vec<String>,
        objects: Vec<String>,
    },
    /// At least one role is missing; keep the original sentence.
    PassThrough,
}

impl Simplification {
    /// Render the simplified sentence, falling back to `original` for the
    /// pass-through branch.
    pub fn render(&self, original: &str) -> String {
        match self {
            Simplification::Skeleton {
                subjects,
                verbs,
                objects,
            } => format!(
                "{} {} {}.",
                subjects.join(" and "),
                verbs.join(", "),
                objects.join(" and ")
            ),
            Simplification::PassThrough => original.to_string(),
        }
    }
}

/// Shallow SVO sentence simplifier.
#[derive(Debug, Clone, Copy)]
pub struct SentenceSimplifier<'m> {
    model: &'m LanguageModel,
}

impl<'m> SentenceSimplifier<'m> {
    pub fn new(model: &'m LanguageModel) -> Self {
        Self { model }
    }

    /// Simplify every sentence and join the results with single spaces.
    pub fn simplify(&self, text: &str) -> String {
        let sentences = segment(text);
        let grouped = Tokenizer::new(self.model).tokenize_sentences(text);

        let mut parts = Vec::with_capacity(sentences.len());
        for sentence in &sentences {
            let tokens = grouped.get(sentence.index).map(Vec::as_slice).unwrap_or(&[]);
            parts.push(extract_svo(tokens).render(&sentence.text));
        }

        let simplified = parts.join(" ");
        log::debug!(
            "simplified {} sentences ({} chars)",
            sentences.len(),
            simplified.len()
        );
        simplified
    }

    /// Per-sentence extraction, exposed for inspection of which branch
    /// fired.
    pub fn simplify_sentence(&self, sentence_tokens: &[Token]) -> Simplification {
        extract_svo(sentence_tokens)
    }
}

/// Find subjects, the root predicate, and direct objects in one sentence.
///
/// The root is the first non-auxiliary verb (the first auxiliary if no
/// full verb exists). Nominal subjects are nouns/pronouns before the root;
/// direct objects are nouns/pronouns after it. A noun right after a
/// preposition is that preposition's object, not a subject or direct
/// object, so it is skipped; a conjunction re-opens collection.
fn extract_svo(tokens: &[Token]) -> Simplification {
    let root = tokens
        .iter()
        .position(|t| t.pos == PosTag::Verb)
        .or_else(|| tokens.iter().position(|t| t.pos == PosTag::Auxiliary));
    let root = match root {
        Some(idx) => idx,
        None => return Simplification::PassThrough,
    };

    let subjects = collect_nominals(&tokens[..root]);
    let objects = collect_nominals(&tokens[root + 1..]);
    let verbs = vec![tokens[root].text.clone()];

    if subjects.is_empty() || objects.is_empty() {
        return Simplification::PassThrough;
    }

    Simplification::Skeleton {
        subjects,
        verbs,
        objects,
    }
}

/// Nouns and pronouns in a token range, minus prepositional objects.
fn collect_nominals(tokens: &[Token]) -> Vec<String> {
    let mut nominals = Vec::new();
    let mut in_prep_phrase = false;

    for token in tokens {
        match token.pos {
            PosTag::Preposition => in_prep_phrase = true,
            PosTag::Conjunction => in_prep_phrase = false,
            PosTag::Noun | PosTag::Pronoun => {
                if in_prep_phrase {
                    // the preposition's object; phrase ends here
                    in_prep_phrase = false;
                } else {
                    nominals.push(token.text.clone());
                }
            }
            _ => {}
        }
    }

    nominals
}
