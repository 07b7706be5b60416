//! Compressed Sparse Row (CSR) graph representation
//!
//! The power-iteration ranker spends all of its time iterating neighbors;
//! CSR lays edges out contiguously so that loop stays cache-friendly.

use super::builder::SentenceGraphBuilder;

/// The sentence-similarity graph in CSR form.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes (sentences).
    pub num_nodes: usize,
    /// Row pointers: node i's edges live at `row_ptr[i]..row_ptr[i+1]`.
    pub row_ptr: Vec<usize>,
    /// Target node for each edge.
    pub col_idx: Vec<u32>,
    /// Edge weights.
    pub weights: Vec<f64>,
    /// Out-degree per node.
    pub out_degree: Vec<u32>,
    /// Total outgoing weight per node.
    pub total_weight: Vec<f64>,
}

impl CsrGraph {
    /// Freeze a builder into CSR form. Edges are sorted per node for
    /// deterministic iteration.
    pub fn from_builder(builder: &SentenceGraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut out_degree = Vec::with_capacity(num_nodes);
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for (_, node) in builder.nodes() {
            let mut edges: Vec<_> = node.edges.iter().map(|(&k, &v)| (k, v)).collect();
            edges.sort_by_key(|(k, _)| *k);

            out_degree.push(edges.len() as u32);
            total_weight.push(edges.iter().map(|(_, w)| w).sum());

            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }

            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            out_degree,
            total_weight,
        }
    }

    /// Iterate over `(neighbor, weight)` pairs of a node.
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    pub fn degree(&self, node: u32) -> u32 {
        self.out_degree[node as usize]
    }

    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Total directed edge count (each undirected edge counted twice).
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Nodes with no outgoing edges. Common here: sentences sharing no
    /// content terms with any other sentence.
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.out_degree[n as usize] == 0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            out_degree: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}
