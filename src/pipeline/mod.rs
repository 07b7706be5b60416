//! Analysis pipeline
//!
//! Normalizes a document once, then dispatches to whichever transforms the
//! request selects. Every transform reads the same cleaned text and the
//! same shared model; nothing here holds mutable state between calls.

use serde::Serialize;

use crate::entity::{EntityBuckets, EntityExtractor};
use crate::model::LanguageModel;
use crate::nlp::normalize;
use crate::sentiment::{SentenceSentiment, SentimentAnalyzer};
use crate::simplify::SentenceSimplifier;
use crate::summarizer::Summarizer;
use crate::themes::ThemeExtractor;

/// Longest raw-text preview carried in a report.
pub const PREVIEW_CHAR_LIMIT: usize = 1000;

/// Which analysis sections to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub entities: bool,
    pub simplify: bool,
    pub summary: bool,
    pub themes: bool,
    pub sentiment: bool,
}

impl AnalysisRequest {
    /// Every section enabled.
    pub fn all() -> Self {
        Self {
            entities: true,
            simplify: true,
            summary: true,
            themes: true,
            sentiment: true,
        }
    }

    /// No sections enabled; turn on fields individually.
    pub fn none() -> Self {
        Self {
            entities: false,
            simplify: false,
            summary: false,
            themes: false,
            sentiment: false,
        }
    }
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self::all()
    }
}

/// Output of one analysis run. Sections the request skipped are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub preview: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<EntityBuckets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub themes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Vec<SentenceSentiment>>,
}

/// Front door of the crate: one analyzer per loaded model.
#[derive(Debug, Clone, Copy)]
pub struct DocumentAnalyzer<'m> {
    model: &'m LanguageModel,
}

impl<'m> DocumentAnalyzer<'m> {
    pub fn new(model: &'m LanguageModel) -> Self {
        Self { model }
    }

    /// Run the selected transforms over one document.
    pub fn analyze(&self, raw: &str, request: &AnalysisRequest) -> AnalysisReport {
        let cleaned = normalize(raw);
        let text = cleaned.as_str();
        log::info!(
            "analyzing document: {} raw chars, {} cleaned chars",
            raw.chars().count(),
            text.chars().count()
        );

        AnalysisReport {
            preview: preview_of(raw),
            entities: request
                .entities
                .then(|| EntityExtractor::new(self.model).extract(text)),
            simplified: request
                .simplify
                .then(|| SentenceSimplifier::new(self.model).simplify(text)),
            summary: request
                .summary
                .then(|| Summarizer::new(self.model).summarize(text)),
            themes: request
                .themes
                .then(|| ThemeExtractor::new(self.model).extract_words(text)),
            sentiment: request
                .sentiment
                .then(|| SentimentAnalyzer::new(self.model).analyze(text)),
        }
    }
}

fn preview_of(raw: &str) -> String {
    raw.chars().take(PREVIEW_CHAR_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LanguageModel {
        LanguageModel::load().expect("embedded model loads")
    }

    #[test]
    fn test_all_sections_populated() {
        let model = model();
        let report = DocumentAnalyzer::new(&model)
            .analyze("The dog chased the cat. John Smith visited Paris.", &AnalysisRequest::all());
        assert!(report.entities.is_some());
        assert!(report.simplified.is_some());
        assert!(report.summary.is_some());
        assert!(report.themes.is_some());
        assert!(report.sentiment.is_some());
    }

    #[test]
    fn test_skipped_sections_are_none() {
        let model = model();
        let mut request = AnalysisRequest::none();
        request.summary = true;
        let report = DocumentAnalyzer::new(&model).analyze("A short note.", &request);
        assert!(report.entities.is_none());
        assert!(report.simplified.is_none());
        assert!(report.summary.is_some());
        assert!(report.themes.is_none());
        assert!(report.sentiment.is_none());
    }

    #[test]
    fn test_preview_is_capped() {
        let model = model();
        let long = "word ".repeat(400);
        let report = DocumentAnalyzer::new(&model).analyze(&long, &AnalysisRequest::none());
        assert_eq!(report.preview.chars().count(), PREVIEW_CHAR_LIMIT);
    }

    #[test]
    fn test_transforms_see_cleaned_text() {
        let model = model();
        let mut request = AnalysisRequest::none();
        request.entities = true;
        let report =
            DocumentAnalyzer::new(&model).analyze("John Smith visited PARIS!!!", &request);
        let entities = report.entities.expect("entities requested");
        assert!(entities.persons.contains("john smith"));
        assert!(entities.locations.contains("paris"));
    }

    #[test]
    fn test_report_serializes_without_skipped_sections() {
        let model = model();
        let mut request = AnalysisRequest::none();
        request.themes = true;
        let report = DocumentAnalyzer::new(&model).analyze("Cats and dogs.", &request);
        let json = serde_json::to_string(&report).expect("report serializes");
        assert!(json.contains("\"themes\""));
        assert!(!json.contains("\"summary\""));
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let model = model();
        let analyzer = DocumentAnalyzer::new(&model);
        let text = "The dog chased the cat. The cat sat on the mat.";
        let first = analyzer.analyze(text, &AnalysisRequest::all());
        let second = analyzer.analyze(text, &AnalysisRequest::all());
        assert_eq!(first, second);
    }
}
