//! Relate - related-article recommendations
//!
//! Loads pretrained word vectors and a directory of articles once, then lists
//! articles, shows them with their nearest neighbours, or ranks neighbours for
//! export.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use relate::cli::{Cli, Command};
use relate::commands::{self, Session};
use relate::config::{self, Settings};
use relate::text::Tokenizer;
use relate::ui;

fn main() {
	let cli = Cli::parse();
	ui::Log::set_verbose(cli.verbose);
	ui::Log::set_quiet(writes_json_to_stdout(&cli.command));

	if let Err(e) = run(cli) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn writes_json_to_stdout(command: &Command) -> bool {
	match command {
		Command::List { json } => *json,
		Command::Recommend { export: Some(path), .. } => path.as_os_str() == "-",
		_ => false,
	}
}

fn run(cli: Cli) -> Result<()> {
	let settings = || Settings::resolve(cli.embeddings.as_deref(), cli.corpus.as_deref(), cli.lowercase);

	match &cli.command {
		Command::List { json } => {
			let session = Session::open(&settings()?)?;
			commands::list::run(&session, *json)
		}
		Command::Show { id, limit } => {
			let session = Session::open(&settings()?)?;
			commands::show::run(&session, id, *limit)
		}
		Command::Recommend { id, limit, export } => {
			let session = Session::open(&settings()?)?;
			commands::recommend::run(&session, id, *limit, export.as_deref())
		}
		Command::Inspect { text, file } => {
			let path = config::embeddings_path(cli.embeddings.as_deref())?;
			let table = commands::load_table(&path)?;
			let tokenizer = Tokenizer::english().with_lowercase(cli.lowercase);
			commands::inspect::run(&table, &tokenizer, text.as_deref(), file.as_deref())
		}
		Command::Repl { limit } => {
			let session = Session::open(&settings()?)?;
			commands::repl::run(&session, *limit)
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(sub) {
					sub_cmd.print_help()?;
				} else {
					ui::warn(&format!("Unknown subcommand: {}", sub));
					cmd.print_help()?;
				}
			} else {
				cmd.print_help()?;
			}
			Ok(())
		}
	}
}
