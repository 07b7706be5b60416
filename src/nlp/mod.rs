//! Natural language processing primitives
//!
//! Normalization, sentence segmentation, tokenization, and stopword
//! filtering. Every transform builds on these.

pub mod normalizer;
pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;

pub use normalizer::{normalize, CleanedText};
pub use segmenter::segment;
pub use tokenizer::Tokenizer;
