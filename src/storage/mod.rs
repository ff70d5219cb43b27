//! Startup loaders: word vectors and the article corpus

pub mod corpus;
pub mod glove;

pub use corpus::Corpus;
pub use glove::EmbeddingTable;
