//! Per-sentence sentiment labeling
//!
//! Lexicon-driven polarity scoring. Each sentence gets a compound score in
//! [-1, 1] from summed word valences, with negation flips and intensity
//! boosters applied in a short lookback window, then a three-way label.

use crate::model::LanguageModel;
use crate::nlp::{segment, Tokenizer};
use crate::types::Token;

/// Compound score at or above this is Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below this is Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Normalization constant for the compound score.
const ALPHA: f64 = 15.0;
/// Multiplier applied to a valence preceded by a negator.
const NEGATION_FACTOR: f64 = -0.74;
/// How many preceding tokens are checked for negators and boosters.
const LOOKBACK: usize = 3;

/// Three-way polarity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Polarity::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Polarity::Positive => "Positive",
            Polarity::Negative => "Negative",
            Polarity::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

/// Sentiment verdict for one sentence.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SentenceSentiment {
    pub sentence: String,
    pub compound: f64,
    pub polarity: Polarity,
}

/// Lexicon-based sentiment analyzer.
#[derive(Debug, Clone, Copy)]
pub struct SentimentAnalyzer<'m> {
    model: &'m LanguageModel,
}

impl<'m> SentimentAnalyzer<'m> {
    pub fn new(model: &'m LanguageModel) -> Self {
        Self { model }
    }

    /// Score every sentence in document order.
    pub fn analyze(&self, text: &str) -> Vec<SentenceSentiment> {
        let sentences = segment(text);
        let grouped = Tokenizer::new(self.model).tokenize_sentences(text);

        let verdicts: Vec<SentenceSentiment> = sentences
            .iter()
            .map(|sentence| {
                let tokens = grouped.get(sentence.index).map(Vec::as_slice).unwrap_or(&[]);
                let compound = self.compound(tokens);
                SentenceSentiment {
                    sentence: sentence.text.clone(),
                    compound,
                    polarity: Polarity::from_compound(compound),
                }
            })
            .collect();
        log::debug!("scored {} sentences for sentiment", verdicts.len());
        verdicts
    }

    /// Compound score for one tokenized sentence.
    pub fn compound(&self, tokens: &[Token]) -> f64 {
        let lexicon = self.model.valence();
        let mut sum = 0.0;

        for (idx, token) in tokens.iter().enumerate() {
            let Some(mut valence) = lexicon.valence(&token.text) else {
                continue;
            };

            let window_start = idx.saturating_sub(LOOKBACK);
            for prior in &tokens[window_start..idx] {
                if lexicon.is_negator(&prior.text) {
                    valence *= NEGATION_FACTOR;
                } else if let Some(boost) = lexicon.booster(&prior.text) {
                    // boosters scale magnitude in the direction of the word
                    if valence > 0.0 {
                        valence += boost;
                    } else if valence < 0.0 {
                        valence -= boost;
                    }
                }
            }

            sum += valence;
        }

        normalize_score(sum)
    }
}

/// Map an unbounded valence sum into [-1, 1].
fn normalize_score(sum: f64) -> f64 {
    if sum == 0.0 {
        return 0.0;
    }
    sum / (sum * sum + ALPHA).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LanguageModel {
        LanguageModel::load().expect("embedded model loads")
    }

    #[test]
    fn test_positive_sentence() {
        let model = model();
        let verdicts = SentimentAnalyzer::new(&model).analyze("the trip was wonderful.");
        assert_eq!(verdicts.len(), 1);
        assert_eq!(verdicts[0].polarity, Polarity::Positive);
        assert!(verdicts[0].compound >= POSITIVE_THRESHOLD);
    }

    #[test]
    fn test_negative_sentence() {
        let model = model();
        let verdicts = SentimentAnalyzer::new(&model).analyze("the launch was a terrible disaster.");
        assert_eq!(verdicts[0].polarity, Polarity::Negative);
        assert!(verdicts[0].compound <= NEGATIVE_THRESHOLD);
    }

    #[test]
    fn test_neutral_sentence() {
        let model = model();
        let verdicts = SentimentAnalyzer::new(&model).analyze("the report covers three regions.");
        assert_eq!(verdicts[0].polarity, Polarity::Neutral);
        assert_eq!(verdicts[0].compound, 0.0);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let model = model();
        let analyzer = SentimentAnalyzer::new(&model);
        let plain = analyzer.analyze("the food was good.");
        let negated = analyzer.analyze("the food was not good.");
        assert_eq!(plain[0].polarity, Polarity::Positive);
        assert_eq!(negated[0].polarity, Polarity::Negative);
    }

    #[test]
    fn test_booster_amplifies() {
        let model = model();
        let analyzer = SentimentAnalyzer::new(&model);
        let plain = analyzer.analyze("the food was good.");
        let boosted = analyzer.analyze("the food was very good.");
        assert!(boosted[0].compound > plain[0].compound);
    }

    #[test]
    fn test_each_sentence_scored_independently() {
        let model = model();
        let verdicts =
            SentimentAnalyzer::new(&model).analyze("the day was wonderful. the night was awful.");
        assert_eq!(verdicts.len(), 2);
        assert_eq!(verdicts[0].polarity, Polarity::Positive);
        assert_eq!(verdicts[1].polarity, Polarity::Negative);
    }

    #[test]
    fn test_compound_stays_bounded() {
        let model = model();
        let text = "wonderful wonderful wonderful wonderful wonderful wonderful.";
        let verdicts = SentimentAnalyzer::new(&model).analyze(text);
        assert!(verdicts[0].compound <= 1.0);
        assert!(verdicts[0].compound > 0.9);
    }
}
