//! Document centroid computation

use crate::core::Embedding;
use crate::error::{Error, Result};
use crate::storage::EmbeddingTable;
use crate::text::Tokenizer;

/// Token-level breakdown of one vectorization
#[derive(Debug)]
pub struct Analysis {
	pub tokens: Vec<String>,
	pub in_vocabulary: Vec<String>,
	pub centroid: Result<Embedding>,
}

impl Analysis {
	/// Share of tokens found in the table, 0.0 for no tokens
	pub fn coverage(&self) -> f32 {
		if self.tokens.is_empty() {
			0.0
		} else {
			self.in_vocabulary.len() as f32 / self.tokens.len() as f32
		}
	}
}

/// Mean of the embedding vectors of every in-vocabulary token of `text`
pub fn vectorize(text: &str, table: &EmbeddingTable, tokenizer: &Tokenizer) -> Result<Embedding> {
	let tokens = tokenizer.normalize(text);
	centroid(tokens.iter().map(String::as_str), table)
}

pub fn analyze(text: &str, table: &EmbeddingTable, tokenizer: &Tokenizer) -> Analysis {
	let tokens = tokenizer.normalize(text);
	let in_vocabulary: Vec<String> = tokens.iter().filter(|t| table.contains(t)).cloned().collect();
	let centroid = centroid(in_vocabulary.iter().map(String::as_str), table);

	Analysis {
		tokens,
		in_vocabulary,
		centroid,
	}
}

/// Repeated tokens count once per occurrence
pub fn centroid<'a, I>(tokens: I, table: &EmbeddingTable) -> Result<Embedding>
where
	I: IntoIterator<Item = &'a str>,
{
	let mut sum = Embedding::zeros(table.dim());
	let mut count = 0usize;

	for vector in tokens.into_iter().filter_map(|t| table.lookup(t)) {
		sum.accumulate(vector);
		count += 1;
	}

	if count == 0 {
		return Err(Error::EmptyVocabulary);
	}

	sum.scale_down(count as f32);
	Ok(sum)
}
