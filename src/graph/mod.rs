//! Sentence-similarity graph
//!
//! Construction and CSR storage for the graph the summarizer ranks.

pub mod builder;
pub mod csr;

pub use builder::SentenceGraphBuilder;
pub use csr::CsrGraph;
