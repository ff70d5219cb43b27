//! List command - every article with its title

use anyhow::Result;
use colored::*;

use super::Session;
use crate::config::TITLE_WIDTH;
use crate::ui;

pub fn run(session: &Session, json: bool) -> Result<()> {
	let listing = session.corpus.list();

	if json {
		println!("{}", serde_json::to_string_pretty(&listing)?);
		return Ok(());
	}

	if listing.is_empty() {
		ui::warn("Corpus is empty");
		return Ok(());
	}

	ui::header("Articles");
	let width = listing.iter().map(|l| l.id.chars().count()).max().unwrap_or(0);

	for item in &listing {
		println!(
			"  {}  {}",
			format!("{:<width$}", item.id, width = width).yellow(),
			ui::truncate(&item.title, TITLE_WIDTH).bright_white()
		);
	}

	println!();
	ui::success(&format!("{} articles", listing.len()));
	Ok(())
}
