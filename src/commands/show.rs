//! Show command - one article with its related articles

use anyhow::Result;
use colored::*;

use super::Session;
use crate::config::TITLE_WIDTH;
use crate::recommend::recommend;
use crate::ui;

pub fn run(session: &Session, id: &str, limit: usize) -> Result<()> {
	let article = session.corpus.get(id)?;

	let link = ui::path_link(&session.path_of(article.id()), article.id());
	println!();
	println!("{}", article.title().bright_white().bold());
	println!("{}", link.dimmed());
	println!();
	println!("{}", article.body().trim_end());

	let related = recommend(article, &session.corpus, limit);
	if related.is_empty() {
		println!();
		ui::info("No related articles");
		return Ok(());
	}

	ui::header("Related");
	for (i, record) in related.iter().enumerate() {
		println!(
			"{}. {} {}",
			format!("{:2}", i + 1).bright_blue().bold(),
			ui::truncate(record.title(), TITLE_WIDTH).bright_white(),
			record.id().dimmed()
		);
	}
	println!();

	Ok(())
}
