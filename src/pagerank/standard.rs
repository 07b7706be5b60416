//! Weighted PageRank with power iteration
//!
//! Dangling nodes (sentences with no lexical overlap anywhere) distribute
//! their mass uniformly, so isolated sentences neither vanish nor trap
//! score.

use super::PageRankResult;
use crate::graph::CsrGraph;

/// Weighted PageRank over a CSR graph.
#[derive(Debug, Clone)]
pub struct PageRank {
    /// Damping factor (typically 0.85).
    pub damping: f64,
    /// Iteration cap.
    pub max_iterations: usize,
    /// Convergence threshold on the L1 delta.
    pub threshold: f64,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl PageRank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run the power iteration until convergence or the iteration cap.
    ///
    /// Always returns a usable result; `converged` reports whether the
    /// threshold was reached.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        let initial = 1.0 / n as f64;
        let mut scores = vec![initial; n];
        let mut next = vec![0.0; n];

        let dangling = graph.dangling_nodes();
        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            let dangling_mass: f64 = dangling.iter().map(|&d| scores[d as usize]).sum();
            let dangling_share = self.damping * dangling_mass / n as f64;

            next.fill(teleport + dangling_share);

            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);
                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        next[neighbor as usize] +=
                            self.damping * node_score * weight / total_weight;
                    }
                }
            }

            delta = scores
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut next);
        }

        // Renormalize against accumulated floating-point drift.
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        PageRankResult::new(scores, iterations, delta, delta <= self.threshold)
    }
}
