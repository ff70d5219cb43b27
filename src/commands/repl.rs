//! REPL mode - interactive recommendation session

use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use super::Session;
use crate::config::TITLE_WIDTH;
use crate::error::Error;
use crate::recommend::rank;
use crate::ui;

pub fn run(session: &Session, limit: usize) -> Result<()> {
	ui::info("Starting interactive mode");
	ui::info("Type an article id, 'list', or 'exit' to quit");
	println!();

	let stdin = io::stdin();
	let mut lines = stdin.lock().lines();

	loop {
		print!("{} ", "relate>".bright_blue().bold());
		io::stdout().flush()?;

		let Some(line) = lines.next() else {
			println!();
			break;
		};
		let line = line?;
		let query = line.trim();

		if query.is_empty() {
			continue;
		}

		match query {
			"exit" | "quit" | "q" => {
				ui::info("Goodbye!");
				break;
			}
			"help" => show_help(),
			"list" => {
				for item in session.corpus.list() {
					println!("  {} {}", item.id.yellow(), ui::truncate(&item.title, TITLE_WIDTH).dimmed());
				}
			}
			id => match recommend_once(session, id, limit) {
				Ok(0) => ui::warn("No other articles to compare against"),
				Ok(_) => {}
				Err(Error::NotFound { id }) => ui::warn(&format!("No article '{}' (try 'list')", id)),
				Err(e) => ui::error(&format!("Recommendation failed: {}", e)),
			},
		}

		println!();
	}

	Ok(())
}

fn recommend_once(session: &Session, id: &str, limit: usize) -> Result<usize, Error> {
	let start = std::time::Instant::now();
	let target = session.corpus.get(id)?;
	let ranked = rank(target, &session.corpus, limit);

	println!("{}", target.title().bright_white().bold());
	for (i, entry) in ranked.iter().enumerate() {
		println!(
			"{}. {} {} {}",
			format!("{:2}", i + 1).bright_blue().bold(),
			ui::truncate(entry.record.title(), TITLE_WIDTH).bright_white(),
			entry.record.id().yellow(),
			ui::format_distance(entry.distance).dimmed()
		);
	}

	if !ranked.is_empty() {
		println!(
			"\n{} {} in {}ms",
			"✓".bright_blue().bold(),
			format!("Found {} related", ranked.len()).bright_white(),
			start.elapsed().as_millis()
		);
	}

	Ok(ranked.len())
}

fn show_help() {
	println!("{}", "REPL Commands:".bright_blue().bold());
	println!("  {}    Recommend articles related to this one", "<id>".dimmed());
	println!("  {}    List article ids and titles", "list".dimmed());
	println!("  {}    Show this help message", "help".dimmed());
	println!("  {}    Exit REPL mode", "exit".dimmed());
}
