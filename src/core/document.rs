//! One article of the corpus

use serde::Serialize;

use super::Embedding;

#[derive(Debug, Clone)]
pub struct DocumentRecord {
	id: String,
	title: String,
	body: String,
	centroid: Option<Embedding>,
}

/// Identifier and title pair for listing views
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
	pub id: String,
	pub title: String,
}

impl DocumentRecord {
	pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>, centroid: Option<Embedding>) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			body: body.into(),
			centroid,
		}
	}

	/// Split raw text at the first newline into title and body.
	/// Text without a newline is all title with an empty body.
	pub fn split_text(text: &str) -> (&str, &str) {
		match text.split_once('\n') {
			Some((title, body)) => (title, body),
			None => (text, ""),
		}
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn body(&self) -> &str {
		&self.body
	}

	/// `None` when the document had no in-vocabulary words
	pub fn centroid(&self) -> Option<&Embedding> {
		self.centroid.as_ref()
	}

	pub fn listing(&self) -> Listing {
		Listing {
			id: self.id.clone(),
			title: self.title.clone(),
		}
	}
}
