//! Pretrained word vectors in GloVe text format
//!
//! One entry per line: `word c1 c2 ... ck`, single-space separated.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::core::Embedding;
use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct EmbeddingTable {
	vectors: HashMap<String, Embedding>,
	dim: usize,
	mismatched: usize,
}

impl EmbeddingTable {
	/// Read a whole embedding file into memory
	pub fn load(path: &Path) -> Result<Self> {
		let file = File::open(path).map_err(|e| Error::resource(path, e))?;
		Self::from_reader(BufReader::new(file), path)
	}

	/// Parse from any buffered reader; `origin` is used in error messages
	pub fn from_reader<R: BufRead>(reader: R, origin: &Path) -> Result<Self> {
		let mut table = Self::default();

		for (index, line) in reader.lines().enumerate() {
			let line = line.map_err(|e| Error::resource(origin, e))?;
			let line = line.trim_end();
			if line.is_empty() {
				continue;
			}

			let (word, vector) = parse_line(line).map_err(|reason| Error::Malformed {
				path: PathBuf::from(origin),
				line: index + 1,
				reason,
			})?;
			table.insert(word, vector);
		}

		Ok(table)
	}

	/// Build from in-memory entries
	pub fn from_entries<I, S>(entries: I) -> Self
	where
		I: IntoIterator<Item = (S, Vec<f32>)>,
		S: Into<String>,
	{
		let mut table = Self::default();
		for (word, vector) in entries {
			table.insert(word.into(), Embedding::new(vector));
		}
		table
	}

	fn insert(&mut self, word: String, vector: Embedding) {
		if self.vectors.is_empty() {
			self.dim = vector.dim();
		} else if vector.dim() != self.dim {
			self.mismatched += 1;
		}
		self.vectors.insert(word, vector);
	}

	pub fn lookup(&self, word: &str) -> Option<&Embedding> {
		self.vectors.get(word)
	}

	pub fn contains(&self, word: &str) -> bool {
		self.vectors.contains_key(word)
	}

	/// Dimensionality of the first entry read
	pub fn dim(&self) -> usize {
		self.dim
	}

	/// Entries whose length differs from [`Self::dim`]
	pub fn mismatched(&self) -> usize {
		self.mismatched
	}

	pub fn len(&self) -> usize {
		self.vectors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.vectors.is_empty()
	}
}

fn parse_line(line: &str) -> std::result::Result<(String, Embedding), String> {
	let mut parts = line.split(' ');
	let word = parts.next().unwrap_or_default().to_string();

	let components = parts
		.map(|p| p.parse::<f32>().map_err(|_| format!("'{}' is not a number (word '{}')", p, word)))
		.collect::<std::result::Result<Vec<f32>, String>>()?;

	Ok((word, Embedding::new(components)))
}
