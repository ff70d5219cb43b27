use clap::builder::styling::{AnsiColor, Color, Style};
use clap::{builder::Styles, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::DEFAULT_LIMIT;

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.usage(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "relate",
	author,
	version,
	about = "Related-article recommendations from word-embedding centroids",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {relate} {list}       {list_args}   {list_desc}
  {relate} {show}       {show_args}   {show_desc}
  {relate} {recommend}  {rec_args}   {rec_desc}
  {relate} {inspect}    {inspect_args}   {inspect_desc}",
		title = "Examples:".bright_blue().bold(),
		relate = "relate".bright_blue(),
		list = "list".yellow(),
		list_args = "-e glove.6B.300d.txt -c bbc/     ",
		list_desc = "List every article".dimmed(),
		show = "show".yellow(),
		show_args = "business/223.txt                 ",
		show_desc = "Read an article with related ones".dimmed(),
		recommend = "recommend".yellow(),
		rec_args = "tech/001.txt -n 10 --export -",
		rec_desc = "Nearest articles as JSON".dimmed(),
		inspect = "inspect".yellow(),
		inspect_args = "\"Shares rose in London\"   ",
		inspect_desc = "Show tokens and vocabulary coverage".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Word vector file (GloVe text format) [env: RELATE_EMBEDDINGS]
	#[arg(short = 'e', long = "embeddings", global = true, value_name = "PATH")]
	pub embeddings: Option<PathBuf>,

	/// Article root directory [env: RELATE_CORPUS]
	#[arg(short = 'c', long = "corpus", global = true, value_name = "DIR")]
	pub corpus: Option<PathBuf>,

	/// Lowercase words before embedding lookup
	#[arg(long = "lowercase", global = true)]
	pub lowercase: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// List every article with its title
	List {
		/// Print JSON instead of a table
		#[arg(long = "json")]
		json: bool,
	},

	/// Show an article and the articles closest to it
	Show {
		/// Article identifier (path relative to the corpus root)
		#[arg(value_name = "ID")]
		id: String,

		/// Number of related articles
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_LIMIT)]
		limit: usize,
	},

	/// Rank the articles nearest to one article
	Recommend {
		/// Article identifier (path relative to the corpus root)
		#[arg(value_name = "ID")]
		id: String,

		/// Number of results
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_LIMIT)]
		limit: usize,

		/// Write results as JSON to a file, or '-' for stdout
		#[arg(long = "export", value_name = "PATH")]
		export: Option<PathBuf>,
	},

	/// Tokenize text and report vocabulary coverage and centroid
	Inspect {
		/// Text to analyze
		#[arg(value_name = "TEXT", required_unless_present = "file")]
		text: Option<String>,

		/// Read the text from a Latin-1 file instead
		#[arg(short = 'f', long = "file", value_name = "PATH", conflicts_with = "text")]
		file: Option<PathBuf>,
	},

	/// Interactive session: load once, query many articles
	Repl {
		/// Number of related articles per query
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_LIMIT)]
		limit: usize,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn definition_is_consistent() {
		Cli::command().debug_assert();
	}

	#[test]
	fn global_paths_after_subcommand() {
		let cli = Cli::try_parse_from(["relate", "show", "tech/001.txt", "-e", "g.txt", "-c", "bbc"]).unwrap();
		assert_eq!(cli.embeddings, Some(PathBuf::from("g.txt")));
		assert_eq!(cli.corpus, Some(PathBuf::from("bbc")));
		match cli.command {
			Command::Show { id, limit } => {
				assert_eq!(id, "tech/001.txt");
				assert_eq!(limit, DEFAULT_LIMIT);
			}
			other => panic!("unexpected command: {other:?}"),
		}
	}

	#[test]
	fn inspect_needs_text_or_file() {
		assert!(Cli::try_parse_from(["relate", "inspect"]).is_err());
		assert!(Cli::try_parse_from(["relate", "inspect", "-f", "a.txt"]).is_ok());
		assert!(Cli::try_parse_from(["relate", "inspect", "words", "-f", "a.txt"]).is_err());
	}
}
