//! Article corpus loaded from a directory tree
//!
//! Every regular file under the root is one article: first line is the title,
//! the rest is the body. Files are decoded as Latin-1.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use super::EmbeddingTable;
use crate::core::{DocumentRecord, Listing};
use crate::error::{Error, Result};
use crate::processing::vectorize;
use crate::text::Tokenizer;
use crate::ui;

#[derive(Debug, Default)]
pub struct Corpus {
	records: Vec<DocumentRecord>,
	index: HashMap<String, usize>,
}

impl Corpus {
	/// Read and vectorize every file under `root`
	pub fn load(root: &Path, table: &EmbeddingTable, tokenizer: &Tokenizer) -> Result<Self> {
		let files = discover(root)?;
		ui::debug(&format!("Discovered {} files under {}", files.len(), root.display()));

		let records = files
			.par_iter()
			.map(|(path, id)| read_record(path, id.clone(), table, tokenizer))
			.collect::<Result<Vec<_>>>()?;

		Self::from_records(records)
	}

	/// Fails if two records share an identifier
	pub fn from_records(records: Vec<DocumentRecord>) -> Result<Self> {
		let mut index = HashMap::with_capacity(records.len());
		for (i, record) in records.iter().enumerate() {
			if index.insert(record.id().to_string(), i).is_some() {
				return Err(Error::DuplicateId { id: record.id().to_string() });
			}
		}
		Ok(Self { records, index })
	}

	pub fn get(&self, id: &str) -> Result<&DocumentRecord> {
		self.index
			.get(id)
			.map(|&i| &self.records[i])
			.ok_or_else(|| Error::NotFound { id: id.to_string() })
	}

	pub fn list(&self) -> Vec<Listing> {
		self.records.iter().map(DocumentRecord::listing).collect()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, DocumentRecord> {
		self.records.iter()
	}

	pub fn records(&self) -> &[DocumentRecord] {
		&self.records
	}

	/// Records without a centroid
	pub fn degenerate_count(&self) -> usize {
		self.records.iter().filter(|r| r.centroid().is_none()).count()
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl<'a> IntoIterator for &'a Corpus {
	type Item = &'a DocumentRecord;
	type IntoIter = std::slice::Iter<'a, DocumentRecord>;

	fn into_iter(self) -> Self::IntoIter {
		self.records.iter()
	}
}

/// All regular files under `root` with their identifiers, in file-name order
fn discover(root: &Path) -> Result<Vec<(PathBuf, String)>> {
	if !root.is_dir() {
		let source = std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory");
		return Err(Error::resource(root, source));
	}

	let mut files = Vec::new();
	for entry in WalkDir::new(root).sort_by_file_name() {
		let entry = entry.map_err(|e| {
			let path = e.path().unwrap_or(root).to_path_buf();
			Error::resource(path, e.into())
		})?;

		let path = entry.path();
		if !path.is_file() {
			continue;
		}
		let id = identifier(root, path);
		files.push((path.to_path_buf(), id));
	}

	Ok(files)
}

/// Path relative to the root, `/`-joined
fn identifier(root: &Path, path: &Path) -> String {
	let relative = path.strip_prefix(root).unwrap_or(path);
	relative
		.components()
		.map(|c| c.as_os_str().to_string_lossy())
		.collect::<Vec<_>>()
		.join("/")
}

fn read_record(path: &Path, id: String, table: &EmbeddingTable, tokenizer: &Tokenizer) -> Result<DocumentRecord> {
	let bytes = fs::read(path).map_err(|e| Error::resource(path, e))?;
	let text = decode_latin1(&bytes);
	let (title, body) = DocumentRecord::split_text(&text);

	let centroid = match vectorize(&text, table, tokenizer) {
		Ok(centroid) => Some(centroid),
		Err(Error::EmptyVocabulary) => {
			ui::debug(&format!("No known words in {}, ranked last", id));
			None
		}
		Err(e) => return Err(e),
	};

	Ok(DocumentRecord::new(id, title, body, centroid))
}

/// Each byte is the code point of the same value
pub fn decode_latin1(bytes: &[u8]) -> String {
	bytes.iter().map(|&b| b as char).collect()
}
