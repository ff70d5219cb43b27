//! Raw text to candidate words
//!
//! Normalization runs in a fixed order:
//! 1. ASCII punctuation, ASCII digits, `\r`, `\t` and `\n` become spaces
//! 2. split on single spaces
//! 3. tokens shorter than [`MIN_TOKEN_CHARS`] are dropped
//! 4. tokens whose lowercase form is a stop word are dropped
//!
//! Surviving tokens keep their original case unless lowercasing is enabled.

use std::collections::HashSet;

use super::stopwords;
use crate::config::MIN_TOKEN_CHARS;

#[derive(Debug, Clone)]
pub struct Tokenizer {
	stop_words: &'static HashSet<&'static str>,
	lowercase: bool,
}

impl Default for Tokenizer {
	fn default() -> Self {
		Self::english()
	}
}

impl Tokenizer {
	/// English stop words, case preserved
	pub fn english() -> Self {
		Self {
			stop_words: stopwords::english(),
			lowercase: false,
		}
	}

	/// Emit tokens lowercased
	pub fn with_lowercase(mut self, lowercase: bool) -> Self {
		self.lowercase = lowercase;
		self
	}

	pub fn lowercases(&self) -> bool {
		self.lowercase
	}

	pub fn normalize(&self, text: &str) -> Vec<String> {
		let cleaned: String = text.chars().map(|c| if is_separator(c) { ' ' } else { c }).collect();

		cleaned
			.split(' ')
			.filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
			.filter_map(|token| {
				let lower = token.to_lowercase();
				if self.stop_words.contains(lower.as_str()) {
					None
				} else if self.lowercase {
					Some(lower)
				} else {
					Some(token.to_string())
				}
			})
			.collect()
	}
}

/// Shorthand for [`Tokenizer::english`] normalization
pub fn normalize(text: &str) -> Vec<String> {
	Tokenizer::english().normalize(text)
}

fn is_separator(c: char) -> bool {
	c.is_ascii_punctuation() || c.is_ascii_digit() || matches!(c, '\r' | '\t' | '\n')
}
