//! Named-entity extraction
//!
//! Buckets text spans into four fixed categories: persons, locations,
//! dates, organizations. Matching is gazetteer- and pattern-driven over
//! tagged tokens; the text is normalized (lowercase) so nothing here leans
//! on capitalization. Spans are collected into sets, so duplicates collapse
//! and anything outside the four categories is ignored.

use crate::model::gazetteer::{is_year, Gazetteer};
use crate::model::LanguageModel;
use crate::nlp::Tokenizer;
use crate::types::{PosTag, Token};
use serde::Serialize;
use std::collections::BTreeSet;

/// The four entity buckets. `BTreeSet` gives set semantics with stable
/// iteration order for display and serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntityBuckets {
    pub persons: BTreeSet<String>,
    pub locations: BTreeSet<String>,
    pub dates: BTreeSet<String>,
    pub organizations: BTreeSet<String>,
}

impl EntityBuckets {
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
            && self.locations.is_empty()
            && self.dates.is_empty()
            && self.organizations.is_empty()
    }

    /// Total number of unique spans across all four buckets.
    pub fn len(&self) -> usize {
        self.persons.len() + self.locations.len() + self.dates.len() + self.organizations.len()
    }
}

/// Gazetteer-driven entity extractor.
#[derive(Debug, Clone, Copy)]
pub struct EntityExtractor<'m> {
    model: &'m LanguageModel,
}

impl<'m> EntityExtractor<'m> {
    pub fn new(model: &'m LanguageModel) -> Self {
        Self { model }
    }

    /// Extract entity spans from text.
    ///
    /// Empty or garbled input degrades to empty buckets; there is no error
    /// path.
    pub fn extract(&self, text: &str) -> EntityBuckets {
        let tokens = Tokenizer::new(self.model).tokenize(text);
        let gazetteer = self.model.gazetteer();
        let mut buckets = EntityBuckets::default();

        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            let next = tokens
                .get(i + 1)
                .filter(|n| n.sentence_idx == token.sentence_idx);

            // Two-word locations win over everything ("new york bank"
            // is a place followed by a word, not an organization).
            if let Some(next) = next {
                let pair = format!("{} {}", token.text, next.text);
                if gazetteer.is_two_word_location(&pair) {
                    buckets.locations.insert(pair);
                    i += 2;
                    continue;
                }
            }

            // Organization: <name> <corporate suffix>, e.g. "acme corp".
            if let Some(next) = next {
                if gazetteer.is_org_suffix(&next.text) && is_name_candidate(token, gazetteer) {
                    buckets
                        .organizations
                        .insert(format!("{} {}", token.text, next.text));
                    i += 2;
                    continue;
                }
            }

            if gazetteer.is_org_name(&token.text) {
                buckets.organizations.insert(token.text.clone());
                i += 1;
                continue;
            }

            if gazetteer.is_location(&token.text) {
                buckets.locations.insert(token.text.clone());
                i += 1;
                continue;
            }

            // Title + surname ("dr smith"). A following given name is left
            // for the given-name rule so "dr john smith" yields the full
            // name.
            if gazetteer.is_title(&token.text) {
                if let Some(next) = next {
                    if !gazetteer.is_given_name(&next.text) && is_name_candidate(next, gazetteer)
                    {
                        buckets.persons.insert(next.text.clone());
                        i += 2;
                        continue;
                    }
                }
                i += 1;
                continue;
            }

            // Given name, optionally followed by a surname.
            if gazetteer.is_given_name(&token.text) {
                if let Some(next) = next {
                    if is_name_candidate(next, gazetteer) {
                        buckets
                            .persons
                            .insert(format!("{} {}", token.text, next.text));
                        i += 2;
                        continue;
                    }
                }
                buckets.persons.insert(token.text.clone());
                i += 1;
                continue;
            }

            // Month, optionally absorbing day/year numbers ("january 2020",
            // "march 5 2021"). "may" only counts with a number after it;
            // otherwise it is the modal verb.
            let month_usable = gazetteer.is_month(&token.text)
                && (token.pos != PosTag::Auxiliary
                    || next.map(|n| n.pos == PosTag::Number).unwrap_or(false));
            if month_usable {
                let mut span = token.text.clone();
                let mut j = i + 1;
                while let Some(n) = tokens
                    .get(j)
                    .filter(|n| n.sentence_idx == token.sentence_idx && n.pos == PosTag::Number)
                {
                    span.push(' ');
                    span.push_str(&n.text);
                    j += 1;
                }
                buckets.dates.insert(span);
                i = j;
                continue;
            }

            if is_year(&token.text) || gazetteer.is_standalone_date_word(&token.text) {
                buckets.dates.insert(token.text.clone());
                i += 1;
                continue;
            }

            i += 1;
        }

        log::debug!("extracted {} entity spans", buckets.len());
        buckets
    }
}

/// Whether a token can serve as a surname or organization name: an unknown
/// content noun.
fn is_name_candidate(token: &Token, gazetteer: &Gazetteer) -> bool {
    token.pos == PosTag::Noun && !token.is_stopword && !gazetteer.is_known(&token.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LanguageModel {
        LanguageModel::load().expect("embedded model loads")
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_scenario() {
        let model = model();
        let buckets = EntityExtractor::new(&model)
            .extract("john smith visited paris in 2020. he works at acme corp.");

        assert_eq!(buckets.persons, set(&["john smith"]));
        assert_eq!(buckets.locations, set(&["paris"]));
        assert_eq!(buckets.dates, set(&["2020"]));
        assert_eq!(buckets.organizations, set(&["acme corp"]));
    }

    #[test]
    fn test_pronouns_are_not_persons() {
        let model = model();
        let buckets = EntityExtractor::new(&model).extract("he visited her yesterday.");
        assert!(buckets.persons.is_empty());
        assert_eq!(buckets.dates, set(&["yesterday"]));
    }

    #[test]
    fn test_duplicates_collapse() {
        let model = model();
        let buckets =
            EntityExtractor::new(&model).extract("paris is lovely. paris is crowded. paris.");
        assert_eq!(buckets.locations.len(), 1);
    }

    #[test]
    fn test_two_word_location() {
        let model = model();
        let buckets = EntityExtractor::new(&model).extract("anna moved to new york in march.");
        assert!(buckets.locations.contains("new york"));
        assert!(buckets.persons.contains("anna"));
        assert!(buckets.dates.contains("march"));
    }

    #[test]
    fn test_month_absorbs_numbers() {
        let model = model();
        let buckets = EntityExtractor::new(&model).extract("the meeting happened on march 5 2021.");
        assert!(buckets.dates.contains("march 5 2021"));
    }

    #[test]
    fn test_modal_may_is_not_a_date() {
        let model = model();
        let buckets = EntityExtractor::new(&model).extract("she may visit london.");
        assert!(buckets.dates.is_empty());
        assert!(buckets.locations.contains("london"));

        let buckets = EntityExtractor::new(&model).extract("they met in may 2019.");
        assert!(buckets.dates.contains("may 2019"));
    }

    #[test]
    fn test_title_and_surname() {
        let model = model();
        let buckets = EntityExtractor::new(&model).extract("dr watson examined the sample.");
        assert_eq!(buckets.persons, set(&["watson"]));
    }

    #[test]
    fn test_known_org_name() {
        let model = model();
        let buckets = EntityExtractor::new(&model).extract("nasa announced the mission.");
        assert_eq!(buckets.organizations, set(&["nasa"]));
    }

    #[test]
    fn test_empty_input() {
        let model = model();
        let buckets = EntityExtractor::new(&model).extract("");
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_garbled_input_degrades_gracefully() {
        let model = model();
        let buckets = EntityExtractor::new(&model).extract("qwzx vplk mmnb.");
        assert!(buckets.is_empty());
    }
}
