//! Library error type
//!
//! Loading failures (`Resource`, `Malformed`) are fatal at startup. The rest are
//! per-request conditions the caller is expected to handle.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Embedding file or corpus entry missing or unreadable
	#[error("cannot read {}: {source}", path.display())]
	Resource {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// Embedding file line that does not parse
	#[error("{}:{line}: {reason}", path.display())]
	Malformed { path: PathBuf, line: usize, reason: String },

	/// Text has no word present in the embedding table
	#[error("no in-vocabulary words")]
	EmptyVocabulary,

	#[error("document not found: {id}")]
	NotFound { id: String },

	#[error("duplicate document identifier: {id}")]
	DuplicateId { id: String },
}

impl Error {
	pub(crate) fn resource(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Resource { path: path.into(), source }
	}

	/// True for the startup-fatal kinds
	pub fn is_resource(&self) -> bool {
		matches!(self, Self::Resource { .. } | Self::Malformed { .. })
	}
}
