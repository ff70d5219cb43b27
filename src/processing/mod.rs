//! Text to vector processing

pub mod vectorize;

pub use vectorize::{analyze, centroid, vectorize, Analysis};
