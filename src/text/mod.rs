//! Text normalization

pub mod stopwords;
pub mod tokenizer;

pub use tokenizer::{normalize, Tokenizer};
