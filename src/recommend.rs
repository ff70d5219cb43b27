//! Nearest-neighbour recommendations by centroid distance
//!
//! Records without a centroid sit at infinite distance from everything, so
//! they rank after every real candidate and a degenerate target gets the
//! corpus in its stored order.

use rayon::prelude::*;
use serde::Serialize;

use crate::core::DocumentRecord;
use crate::storage::Corpus;

/// Distance from the target to one candidate
#[derive(Debug, Clone, Copy)]
pub struct RankedRecommendation<'a> {
	pub distance: f32,
	pub record: &'a DocumentRecord,
}

/// Owned form for JSON export
#[derive(Debug, Serialize)]
pub struct RankedEntry {
	pub id: String,
	pub title: String,
	/// `None` for infinite distance
	pub distance: Option<f32>,
}

impl From<&RankedRecommendation<'_>> for RankedEntry {
	fn from(ranked: &RankedRecommendation<'_>) -> Self {
		Self {
			id: ranked.record.id().to_string(),
			title: ranked.record.title().to_string(),
			distance: ranked.distance.is_finite().then_some(ranked.distance),
		}
	}
}

/// Distance from `target` to every other record, in corpus order
pub fn distances_from<'a>(target: &DocumentRecord, corpus: &'a Corpus) -> Vec<RankedRecommendation<'a>> {
	corpus
		.records()
		.par_iter()
		.filter(|record| record.id() != target.id())
		.map(|record| RankedRecommendation {
			distance: distance(target, record),
			record,
		})
		.collect()
}

/// The `n` closest records with their distances, nearest first
pub fn rank<'a>(target: &DocumentRecord, corpus: &'a Corpus, n: usize) -> Vec<RankedRecommendation<'a>> {
	let mut ranked = distances_from(target, corpus);
	// Stable: equal distances keep corpus order
	ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
	ranked.truncate(n);
	ranked
}

/// The `n` closest records, nearest first
pub fn recommend<'a>(target: &DocumentRecord, corpus: &'a Corpus, n: usize) -> Vec<&'a DocumentRecord> {
	rank(target, corpus, n).into_iter().map(|r| r.record).collect()
}

fn distance(a: &DocumentRecord, b: &DocumentRecord) -> f32 {
	match (a.centroid(), b.centroid()) {
		(Some(x), Some(y)) => {
			let d = x.distance(y);
			if d.is_nan() {
				f32::INFINITY
			} else {
				d
			}
		}
		_ => f32::INFINITY,
	}
}
