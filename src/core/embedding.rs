//! Dense word and document vectors

#[derive(Debug, Clone, PartialEq)]
pub struct Embedding(Vec<f32>);

impl Embedding {
	pub fn new(data: Vec<f32>) -> Self {
		Self(data)
	}

	/// Zero vector of the given dimensionality
	pub fn zeros(dim: usize) -> Self {
		Self(vec![0.0; dim])
	}

	/// Get raw vector
	pub fn as_slice(&self) -> &[f32] {
		&self.0
	}

	pub fn dim(&self) -> usize {
		self.0.len()
	}

	/// Element-wise add. Components past the shorter length are ignored.
	pub fn accumulate(&mut self, other: &Self) {
		for (acc, v) in self.0.iter_mut().zip(other.0.iter()) {
			*acc += v;
		}
	}

	/// Divide every component by `divisor`
	pub fn scale_down(&mut self, divisor: f32) {
		for v in self.0.iter_mut() {
			*v /= divisor;
		}
	}

	/// Euclidean (L2) distance
	pub fn distance(&self, other: &Self) -> f32 {
		self.0
			.iter()
			.zip(other.0.iter())
			.map(|(a, b)| (a - b) * (a - b))
			.sum::<f32>()
			.sqrt()
	}
}

impl From<Vec<f32>> for Embedding {
	fn from(data: Vec<f32>) -> Self {
		Self(data)
	}
}
