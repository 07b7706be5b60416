//! Sentence-similarity graph construction
//!
//! Builds the undirected weighted graph the summarizer ranks over: one node
//! per sentence, edges weighted by lexical overlap between the sentences'
//! content-term sets, normalized by log sentence lengths.

use rustc_hash::{FxHashMap, FxHashSet};

/// A sentence node under construction.
#[derive(Debug, Clone, Default)]
pub struct SentenceNode {
    /// Adjacency list: neighbor node ID -> accumulated edge weight.
    pub edges: FxHashMap<u32, f64>,
}

/// Mutable builder for the sentence-similarity graph.
///
/// Node IDs coincide with sentence indices: node `i` is the document's
/// `i`-th sentence.
#[derive(Debug, Default)]
pub struct SentenceGraphBuilder {
    nodes: Vec<SentenceNode>,
}

impl SentenceGraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create a builder with one node per sentence.
    pub fn with_nodes(count: usize) -> Self {
        Self {
            nodes: vec![SentenceNode::default(); count],
        }
    }

    /// Add weight to the undirected edge between two nodes. Self-loops are
    /// ignored.
    pub fn add_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to {
            return;
        }
        if let Some(node) = self.nodes.get_mut(from as usize) {
            *node.edges.entry(to).or_insert(0.0) += weight;
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            *node.edges.entry(from).or_insert(0.0) += weight;
        }
    }

    /// Build the full similarity graph from per-sentence content-term sets.
    ///
    /// Every sentence pair with at least one shared term gets an edge with
    /// the TextRank similarity weight.
    pub fn from_sentence_terms(terms: &[FxHashSet<String>]) -> Self {
        let mut builder = Self::with_nodes(terms.len());

        for i in 0..terms.len() {
            for j in (i + 1)..terms.len() {
                if let Some(weight) = similarity(&terms[i], &terms[j]) {
                    builder.add_edge(i as u32, j as u32, weight);
                }
            }
        }

        builder
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges, counting each undirected edge once.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    pub fn get_node(&self, id: u32) -> Option<&SentenceNode> {
        self.nodes.get(id as usize)
    }

    /// Iterate over all nodes with their IDs.
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &SentenceNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// TextRank sentence similarity: shared-term count normalized by the log of
/// both set sizes. `None` when the sentences share nothing.
///
/// The log normalization keeps long sentences from dominating purely by
/// length. For single-term sentences the denominator vanishes; the raw
/// overlap count is used instead.
fn similarity(a: &FxHashSet<String>, b: &FxHashSet<String>) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    let overlap = a.intersection(b).count();
    if overlap == 0 {
        return None;
    }

    let denominator = (a.len() as f64).ln() + (b.len() as f64).ln();
    if denominator > 0.0 {
        Some(overlap as f64 / denominator)
    } else {
        Some(overlap as f64)
    }
}
