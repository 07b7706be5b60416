//! textlens: document analysis toolkit
//!
//! Five independent transforms over plain text, sharing one normalizer and
//! one embedded language model: entity extraction, sentence simplification,
//! extractive summarization, theme ranking, and per-sentence sentiment.
//! `pipeline::DocumentAnalyzer` is the front door; each transform module is
//! also usable on its own.

pub mod entity;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod model;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod sentiment;
pub mod simplify;
pub mod summarizer;
pub mod themes;
pub mod types;

pub use entity::{EntityBuckets, EntityExtractor};
pub use error::{Error, Result};
pub use model::LanguageModel;
pub use nlp::{normalize, segment, CleanedText, Tokenizer};
pub use pipeline::{AnalysisReport, AnalysisRequest, DocumentAnalyzer};
pub use sentiment::{Polarity, SentenceSentiment, SentimentAnalyzer};
pub use simplify::{SentenceSimplifier, Simplification};
pub use summarizer::Summarizer;
pub use themes::{Theme, ThemeExtractor};
pub use types::{PosTag, Sentence, Token};
