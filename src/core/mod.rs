//! Core domain types

pub mod document;
pub mod embedding;

pub use document::{DocumentRecord, Listing};
pub use embedding::Embedding;
