//! The linguistic model
//!
//! A process-wide, read-only bundle of lexicons: stopwords, POS rules,
//! entity gazetteers, and the sentiment valence table. Loaded once at
//! startup by [`LanguageModel::load`] and passed by shared reference into
//! every transform — there is no module-level global and no lazy
//! download-on-first-use. A load failure is fatal: no transform can degrade
//! gracefully without the model.

pub mod gazetteer;
pub mod pos;
pub mod valence;

use crate::error::{Error, Result};
use crate::nlp::stopwords::StopwordFilter;
use gazetteer::Gazetteer;
use pos::PosLexicon;
use valence::ValenceLexicon;

/// Language the embedded lexicons cover.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Read-only linguistic model shared by all transforms.
///
/// `Send + Sync` by construction, so a concurrent deployment can share one
/// instance behind an `Arc`; request-scoped data (cleaned text, sentences)
/// stays request-local.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    stopwords: StopwordFilter,
    pos: PosLexicon,
    gazetteer: Gazetteer,
    valence: ValenceLexicon,
}

impl LanguageModel {
    /// Provision the model at startup.
    ///
    /// Validates that every lexicon is populated; an empty table means the
    /// model cannot support its transforms and yields
    /// [`Error::ModelUnavailable`]. Non-retryable by design.
    pub fn load() -> Result<Self> {
        let stopwords = StopwordFilter::new(DEFAULT_LANGUAGE);
        if stopwords.is_empty() {
            return Err(Error::ModelUnavailable(format!(
                "no stopword list for language '{DEFAULT_LANGUAGE}'"
            )));
        }

        let pos = PosLexicon::new();
        if pos.is_empty() {
            return Err(Error::ModelUnavailable("empty part-of-speech lexicon".into()));
        }

        let gazetteer = Gazetteer::new();
        if gazetteer.is_empty() {
            return Err(Error::ModelUnavailable("empty entity gazetteer".into()));
        }

        let valence = ValenceLexicon::new();
        if valence.is_empty() {
            return Err(Error::ModelUnavailable("empty sentiment lexicon".into()));
        }

        log::info!(
            "language model loaded: {} stopwords, {} pos entries, {} gazetteer entries, {} valence entries",
            stopwords.len(),
            pos.len(),
            gazetteer.len(),
            valence.len()
        );

        Ok(Self {
            stopwords,
            pos,
            gazetteer,
            valence,
        })
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    pub fn pos(&self) -> &PosLexicon {
        &self.pos
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    pub fn valence(&self) -> &ValenceLexicon {
        &self.valence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_succeeds() {
        let model = LanguageModel::load().expect("embedded model loads");
        assert!(!model.stopwords().is_empty());
        assert!(!model.pos().is_empty());
        assert!(!model.gazetteer().is_empty());
        assert!(!model.valence().is_empty());
    }

    #[test]
    fn test_model_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LanguageModel>();
    }
}
