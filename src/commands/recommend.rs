//! Recommend command - ranked nearest articles with distances

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use colored::*;
use serde::Serialize;

use super::Session;
use crate::config::TITLE_WIDTH;
use crate::recommend::{rank, RankedEntry};
use crate::ui;

#[derive(Debug, Serialize)]
struct RecommendationExport {
	generated: String,
	target: String,
	title: String,
	corpus_size: usize,
	recommendations: Vec<RankedEntry>,
}

pub fn run(session: &Session, id: &str, limit: usize, export: Option<&Path>) -> Result<()> {
	let start = Instant::now();
	let target = session.corpus.get(id)?;

	if target.centroid().is_none() {
		ui::warn(&format!("{} has no words in the vocabulary; results follow corpus order", id));
	}

	let ranked = rank(target, &session.corpus, limit);
	let duration = start.elapsed();

	if let Some(export_path) = export {
		let export_data = RecommendationExport {
			generated: Local::now().to_rfc3339(),
			target: target.id().to_string(),
			title: target.title().to_string(),
			corpus_size: session.corpus.len(),
			recommendations: ranked.iter().map(RankedEntry::from).collect(),
		};

		let json = serde_json::to_string_pretty(&export_data)?;
		if export_path.to_str() == Some("-") || export_path.as_os_str().is_empty() {
			println!("{}", json);
		} else {
			std::fs::write(export_path, json)
				.with_context(|| format!("Failed to write {}", export_path.display()))?;
			ui::success(&format!("Exported to {}", export_path.display()));
		}
		return Ok(());
	}

	ui::info(&format!("Nearest to: {}", target.title().bright_blue()));

	if ranked.is_empty() {
		ui::warn("No other articles to compare against");
		return Ok(());
	}

	ui::header("Recommendations");
	for (i, entry) in ranked.iter().enumerate() {
		println!(
			"{}. {} {} {}",
			format!("{:2}", i + 1).bright_blue().bold(),
			ui::truncate(entry.record.title(), TITLE_WIDTH).bright_white(),
			entry.record.id().yellow(),
			ui::format_distance(entry.distance).dimmed()
		);
	}

	println!();
	ui::success(&format!(
		"Ranked {} of {} articles in {:.0}ms",
		ranked.len(),
		session.corpus.len().saturating_sub(1),
		duration.as_secs_f32() * 1000.0
	));

	Ok(())
}
