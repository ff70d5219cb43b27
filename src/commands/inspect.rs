//! Inspect command - tokens, vocabulary coverage and centroid for a text

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use colored::*;

use crate::config::PREVIEW_COMPONENTS;
use crate::core::Embedding;
use crate::processing::analyze;
use crate::storage::corpus::decode_latin1;
use crate::storage::EmbeddingTable;
use crate::text::Tokenizer;
use crate::ui;

pub fn run(table: &EmbeddingTable, tokenizer: &Tokenizer, text: Option<&str>, file: Option<&Path>) -> Result<()> {
	let text = match (text, file) {
		(Some(text), _) => text.to_string(),
		(None, Some(path)) => {
			let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
			decode_latin1(&bytes)
		}
		(None, None) => return Err(anyhow!("Must provide text or --file")),
	};

	let analysis = analyze(&text, table, tokenizer);

	ui::header("Tokens");
	if analysis.tokens.is_empty() {
		println!("  {}", "(none)".dimmed());
	}
	for token in &analysis.tokens {
		if table.contains(token) {
			print!("{} ", token.bright_green());
		} else {
			print!("{} ", token.dimmed().strikethrough());
		}
	}
	println!();

	ui::header("Coverage");
	println!(
		"  {} of {} tokens in vocabulary ({:.0}%)",
		analysis.in_vocabulary.len(),
		analysis.tokens.len(),
		analysis.coverage() * 100.0
	);

	match &analysis.centroid {
		Ok(centroid) => {
			ui::header("Centroid");
			println!("  {}", preview(centroid));
			println!();
			ui::success(&format!("{} dimensions", centroid.dim()));
		}
		Err(e) => {
			println!();
			ui::warn(&format!("No centroid: {}", e));
		}
	}

	Ok(())
}

fn preview(centroid: &Embedding) -> String {
	let values = centroid.as_slice();
	let shown: Vec<String> = values.iter().take(PREVIEW_COMPONENTS).map(|v| format!("{:.4}", v)).collect();
	if values.len() > PREVIEW_COMPONENTS {
		format!("[{}, ... +{}]", shown.join(", "), values.len() - PREVIEW_COMPONENTS)
	} else {
		format!("[{}]", shown.join(", "))
	}
}
