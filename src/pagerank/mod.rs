//! Graph-centrality ranking
//!
//! Weighted PageRank by power iteration over the sentence-similarity
//! graph. The observable contract is "top-K sentences by centrality";
//! the iteration runs to convergence or a fixed cap.

mod standard;

pub use standard::PageRank;

/// Result of a centrality computation.
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Score per node, indexed by node ID.
    pub scores: Vec<f64>,
    /// Iterations performed.
    pub iterations: usize,
    /// Final convergence delta (L1 norm).
    pub delta: f64,
    /// Whether the threshold was reached before the iteration cap.
    pub converged: bool,
}

impl PageRankResult {
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Top `n` nodes by score, highest first. Ties resolve to the earlier
    /// node ID so ranking stays deterministic.
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        indexed.truncate(n);
        indexed
    }

    /// Score of a single node; zero for out-of-range IDs.
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_orders_by_score() {
        let result = PageRankResult::new(vec![0.2, 0.5, 0.3], 10, 0.0, true);
        let top = result.top_n(2);
        assert_eq!(top[0].0, 1);
        assert_eq!(top[1].0, 2);
    }

    #[test]
    fn test_top_n_tie_break_is_node_order() {
        let result = PageRankResult::new(vec![0.25, 0.25, 0.5], 10, 0.0, true);
        let top = result.top_n(3);
        assert_eq!(top[0].0, 2);
        assert_eq!(top[1].0, 0);
        assert_eq!(top[2].0, 1);
    }

    #[test]
    fn test_score_out_of_range() {
        let result = PageRankResult::new(vec![0.5], 1, 0.0, true);
        assert_eq!(result.score(7), 0.0);
    }
}
