//! # Command Implementations
//!
//! Each submodule handles one CLI command. Commands that need the corpus get a
//! [`Session`] built once at startup and borrow from it.

pub mod inspect;
pub mod list;
pub mod recommend;
pub mod repl;
pub mod show;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::Settings;
use crate::storage::{Corpus, EmbeddingTable};
use crate::text::Tokenizer;
use crate::ui;

/// Everything loaded at startup, read-only afterwards
pub struct Session {
	pub table: EmbeddingTable,
	pub corpus: Corpus,
	pub tokenizer: Tokenizer,
	pub root: PathBuf,
}

impl Session {
	pub fn open(settings: &Settings) -> Result<Self> {
		let tokenizer = Tokenizer::english().with_lowercase(settings.lowercase);
		let table = load_table(&settings.embeddings)?;

		ui::info(&format!("Loading articles from {}", settings.corpus.display()));
		let start = Instant::now();
		let corpus = Corpus::load(&settings.corpus, &table, &tokenizer)
			.with_context(|| format!("Failed to load corpus {}", settings.corpus.display()))?;
		ui::success(&format!(
			"Loaded {} articles in {:.2}s",
			corpus.len(),
			start.elapsed().as_secs_f32()
		));

		let degenerate = corpus.degenerate_count();
		if degenerate > 0 {
			ui::warn(&format!(
				"{} articles have no words in the embedding vocabulary and rank last",
				degenerate
			));
		}

		Ok(Self {
			table,
			corpus,
			tokenizer,
			root: settings.corpus.clone(),
		})
	}

	/// Location of an article on disk
	pub fn path_of(&self, id: &str) -> PathBuf {
		id.split('/').fold(self.root.clone(), |path, part| path.join(part))
	}
}

pub fn load_table(path: &Path) -> Result<EmbeddingTable> {
	ui::info(&format!("Loading word vectors from {}", path.display()));
	let start = Instant::now();

	let table = EmbeddingTable::load(path)
		.with_context(|| format!("Failed to load embeddings {}", path.display()))?;

	ui::success(&format!(
		"Loaded {} embeddings ({}d) in {:.2}s",
		table.len(),
		table.dim(),
		start.elapsed().as_secs_f32()
	));

	if table.is_empty() {
		ui::warn("Embedding file has no entries; every article will rank last");
	}
	if table.mismatched() > 0 {
		ui::warn(&format!(
			"{} embeddings differ from {} dimensions; centroids use the first {} components",
			table.mismatched(),
			table.dim(),
			table.dim()
		));
	}

	Ok(table)
}
