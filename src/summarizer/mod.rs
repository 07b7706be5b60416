//! Extractive summarization
//!
//! TextRank over a sentence graph: each sentence is a node, edges carry a
//! length-normalized word-overlap weight, and PageRank picks the most
//! central sentences. The summary keeps document order regardless of rank,
//! so it reads like prose rather than a score listing.

use rustc_hash::FxHashSet;

use crate::graph::{CsrGraph, SentenceGraphBuilder};
use crate::model::LanguageModel;
use crate::nlp::{segment, Tokenizer};
use crate::pagerank::PageRank;

/// Default number of sentences in a summary.
pub const DEFAULT_SENTENCE_COUNT: usize = 5;

/// TextRank extractive summarizer.
#[derive(Debug, Clone, Copy)]
pub struct Summarizer<'m> {
    model: &'m LanguageModel,
    sentence_count: usize,
}

impl<'m> Summarizer<'m> {
    pub fn new(model: &'m LanguageModel) -> Self {
        Self {
            model,
            sentence_count: DEFAULT_SENTENCE_COUNT,
        }
    }

    /// Override how many sentences the summary keeps.
    pub fn with_sentence_count(mut self, sentence_count: usize) -> Self {
        self.sentence_count = sentence_count.max(1);
        self
    }

    /// Produce an extractive summary, sentences joined by single spaces.
    pub fn summarize(&self, text: &str) -> String {
        let sentences = segment(text);
        if sentences.is_empty() {
            return String::new();
        }

        // Short documents need no ranking.
        if sentences.len() <= self.sentence_count {
            return sentences
                .iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
        }

        let grouped = Tokenizer::new(self.model).tokenize_sentences(text);
        let term_sets: Vec<FxHashSet<String>> = sentences
            .iter()
            .map(|sentence| {
                grouped
                    .get(sentence.index)
                    .map(|tokens| {
                        tokens
                            .iter()
                            .filter(|t| t.is_content_word())
                            .map(|t| t.lemma.clone())
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .collect();

        let builder = SentenceGraphBuilder::from_sentence_terms(&term_sets);
        let graph = CsrGraph::from_builder(&builder);
        let result = PageRank::new().run(&graph);
        log::debug!(
            "sentence graph: {} nodes, {} edges, pagerank converged={} after {} iterations",
            graph.num_nodes,
            graph.num_edges(),
            result.converged,
            result.iterations
        );

        let mut chosen: Vec<usize> = result
            .top_n(self.sentence_count)
            .into_iter()
            .map(|(node, _)| node as usize)
            .collect();
        chosen.sort_unstable();

        chosen
            .into_iter()
            .filter_map(|idx| sentences.get(idx).map(|s| s.text.as_str()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LanguageModel {
        LanguageModel::load().expect("embedded model loads")
    }

    #[test]
    fn test_short_document_returned_whole() {
        let model = model();
        let text = "the dog barked. the cat slept.";
        assert_eq!(Summarizer::new(&model).summarize(text), text);
    }

    #[test]
    fn test_empty_input() {
        let model = model();
        assert_eq!(Summarizer::new(&model).summarize(""), "");
    }

    #[test]
    fn test_summary_keeps_document_order() {
        let model = model();
        let text = "alpha dogs chase rabbits in the field. \
                    beta cats watch birds near the pond. \
                    dogs and cats share the field at dusk. \
                    rabbits and birds avoid the field. \
                    the pond reflects the evening light.";
        let summary = Summarizer::new(&model).with_sentence_count(2).summarize(text);

        let sentences = segment(text);
        let positions: Vec<usize> = segment(&summary)
            .iter()
            .map(|s| {
                sentences
                    .iter()
                    .position(|orig| orig.text == s.text)
                    .expect("summary sentence comes from the document")
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert_eq!(positions.len(), 2);
    }

    #[test]
    fn test_central_sentence_selected() {
        let model = model();
        // The middle sentence shares vocabulary with everything else.
        let text = "dogs chase rabbits daily. \
                    dogs and cats and rabbits and birds meet here. \
                    cats watch birds quietly. \
                    nothing links this line whatsoever. \
                    ships sail oceans slowly.";
        let summary = Summarizer::new(&model).with_sentence_count(1).summarize(text);
        assert!(summary.contains("meet here"));
    }

    #[test]
    fn test_sentence_count_is_respected() {
        let model = model();
        let text = "one dog runs. two cats sleep. three birds sing. \
                    four fish swim. five mice hide. six owls hunt.";
        let summary = Summarizer::new(&model).with_sentence_count(3).summarize(text);
        assert_eq!(segment(&summary).len(), 3);
    }
}
