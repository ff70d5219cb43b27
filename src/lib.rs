//! # Relate Library
//!
//! Related-article recommendations from pretrained word embeddings. Each
//! article becomes the centroid of its words' vectors; related articles are
//! the nearest centroids by Euclidean distance.
//!
//! ```no_run
//! use relate::{recommend, Corpus, EmbeddingTable, Tokenizer};
//! use std::path::Path;
//!
//! # fn main() -> relate::Result<()> {
//! let table = EmbeddingTable::load(Path::new("glove.6B.300d.txt"))?;
//! let corpus = Corpus::load(Path::new("bbc"), &table, &Tokenizer::english())?;
//! let article = corpus.get("business/223.txt")?;
//! for related in recommend(article, &corpus, 5) {
//!     println!("{}", related.title());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod processing;
pub mod recommend;
pub mod storage;
pub mod text;
pub mod ui;

pub use crate::core::{DocumentRecord, Embedding, Listing};
pub use error::{Error, Result};
pub use processing::vectorize;
pub use recommend::{distances_from, rank, recommend, RankedRecommendation};
pub use storage::{Corpus, EmbeddingTable};
pub use text::Tokenizer;
