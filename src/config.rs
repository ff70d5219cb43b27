//! Application configuration and constants

use std::path::{Path, PathBuf};

// === Environment ===
pub const EMBEDDINGS_ENV: &str = "RELATE_EMBEDDINGS";
pub const CORPUS_ENV: &str = "RELATE_CORPUS";

// === Text ===
pub const MIN_TOKEN_CHARS: usize = 3;

// === Recommendations ===
pub const DEFAULT_LIMIT: usize = 5;

// === Display ===
pub const PREVIEW_COMPONENTS: usize = 8;
pub const TITLE_WIDTH: usize = 70;

/// Resolved startup inputs
#[derive(Debug, Clone)]
pub struct Settings {
	pub embeddings: PathBuf,
	pub corpus: PathBuf,
	pub lowercase: bool,
}

impl Settings {
	/// Flags win over environment variables
	pub fn resolve(embeddings: Option<&Path>, corpus: Option<&Path>, lowercase: bool) -> anyhow::Result<Self> {
		Ok(Self {
			embeddings: embeddings_path(embeddings)?,
			corpus: corpus_path(corpus)?,
			lowercase,
		})
	}
}

pub fn embeddings_path(flag: Option<&Path>) -> anyhow::Result<PathBuf> {
	resolve_path(flag, EMBEDDINGS_ENV, "embeddings file", "--embeddings")
}

pub fn corpus_path(flag: Option<&Path>) -> anyhow::Result<PathBuf> {
	resolve_path(flag, CORPUS_ENV, "corpus directory", "--corpus")
}

fn resolve_path(flag: Option<&Path>, env: &str, what: &str, option: &str) -> anyhow::Result<PathBuf> {
	if let Some(path) = flag {
		return Ok(path.to_path_buf());
	}

	match std::env::var_os(env) {
		Some(value) if !value.is_empty() => {
			crate::ui::debug(&format!("Using {}: {}", env, Path::new(&value).display()));
			Ok(PathBuf::from(value))
		}
		_ => anyhow::bail!("No {} given. Pass {} or set {}", what, option, env),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn flag_takes_precedence() {
		let path = resolve_path(Some(Path::new("glove.txt")), "RELATE_TEST_UNSET_VAR", "embeddings file", "--embeddings").unwrap();
		assert_eq!(path, PathBuf::from("glove.txt"));
	}

	#[test]
	fn missing_everywhere_names_both_options() {
		let err = resolve_path(None, "RELATE_TEST_UNSET_VAR", "corpus directory", "--corpus").unwrap_err();
		let msg = err.to_string();
		assert!(msg.contains("--corpus") && msg.contains("RELATE_TEST_UNSET_VAR"), "{msg}");
	}
}
