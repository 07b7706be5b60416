//! Theme extraction
//!
//! Ranks candidate theme words (non-stopword nouns) by raw document
//! frequency. Ties break by first appearance in the document, so repeated
//! runs over the same text always produce the same ordering.

use rustc_hash::FxHashMap;

use crate::model::LanguageModel;
use crate::nlp::Tokenizer;

/// Default number of themes reported.
pub const DEFAULT_THEME_COUNT: usize = 9;

/// A ranked theme word with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Theme {
    pub word: String,
    pub count: usize,
}

/// Frequency-based theme extractor.
#[derive(Debug, Clone, Copy)]
pub struct ThemeExtractor<'m> {
    model: &'m LanguageModel,
    top_n: usize,
}

impl<'m> ThemeExtractor<'m> {
    pub fn new(model: &'m LanguageModel) -> Self {
        Self {
            model,
            top_n: DEFAULT_THEME_COUNT,
        }
    }

    /// Override how many themes are returned.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Extract the most frequent theme words, highest count first.
    pub fn extract(&self, text: &str) -> Vec<Theme> {
        let tokens = Tokenizer::new(self.model).tokenize(text);

        // first_seen preserves document order for the tie-break
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        let mut first_seen: Vec<&str> = Vec::new();
        for token in &tokens {
            if !token.pos.is_noun() || token.is_stopword {
                continue;
            }
            let entry = counts.entry(token.text.as_str()).or_insert(0);
            if *entry == 0 {
                first_seen.push(token.text.as_str());
            }
            *entry += 1;
        }

        let mut ranked: Vec<(usize, &str)> = first_seen
            .iter()
            .enumerate()
            .map(|(order, word)| (order, *word))
            .collect();
        ranked.sort_by(|a, b| counts[b.1].cmp(&counts[a.1]).then(a.0.cmp(&b.0)));

        let themes: Vec<Theme> = ranked
            .into_iter()
            .take(self.top_n)
            .map(|(_, word)| Theme {
                word: word.to_string(),
                count: counts[word],
            })
            .collect();
        log::debug!("ranked {} candidate themes, kept {}", counts.len(), themes.len());
        themes
    }

    /// Just the words, in rank order.
    pub fn extract_words(&self, text: &str) -> Vec<String> {
        self.extract(text).into_iter().map(|t| t.word).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LanguageModel {
        LanguageModel::load().expect("embedded model loads")
    }

    #[test]
    fn test_frequency_ordering() {
        let model = model();
        let themes = ThemeExtractor::new(&model)
            .extract("the cat chased the cat. a dog watched the cat and the dog.");
        assert_eq!(themes[0].word, "cat");
        assert_eq!(themes[0].count, 3);
        assert_eq!(themes[1].word, "dog");
        assert_eq!(themes[1].count, 2);
    }

    #[test]
    fn test_ties_break_by_first_appearance() {
        let model = model();
        let words = ThemeExtractor::new(&model).extract_words("a bird saw a fish. a fish saw a bird.");
        assert_eq!(words, vec!["bird".to_string(), "fish".to_string()]);
    }

    #[test]
    fn test_stopwords_and_non_nouns_excluded() {
        let model = model();
        let words =
            ThemeExtractor::new(&model).extract_words("the dog quickly chased the red ball.");
        assert!(words.contains(&"dog".to_string()));
        assert!(words.contains(&"ball".to_string()));
        assert!(!words.contains(&"the".to_string()));
        assert!(!words.contains(&"quickly".to_string()));
        assert!(!words.contains(&"chased".to_string()));
    }

    #[test]
    fn test_top_n_caps_output() {
        let model = model();
        let themes = ThemeExtractor::new(&model)
            .with_top_n(2)
            .extract("apples oranges pears plums grapes.");
        assert_eq!(themes.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let model = model();
        assert!(ThemeExtractor::new(&model).extract("").is_empty());
    }
}
