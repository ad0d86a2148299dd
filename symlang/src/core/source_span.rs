use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Byte range of a declaration (or token) in the source text
///
/// `start <= end` always holds, also for spans read from a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSourceSpan")]
pub struct SourceSpan {
	start: usize,
	end: usize,
}

/// Unchecked span as it appears in serialized data
#[derive(Deserialize)]
struct RawSourceSpan {
	start: usize,
	end: usize,
}

impl TryFrom<RawSourceSpan> for SourceSpan {
	type Error = String;

	fn try_from(raw: RawSourceSpan) -> Result<Self, Self::Error> {
		if raw.start > raw.end {
			return Err(format!("span ends ({}) before it starts ({})", raw.end, raw.start));
		}
		Ok(SourceSpan::new_between(raw.start, raw.end))
	}
}

impl SourceSpan {
	/// Creates a span from offset and length
	pub fn new(offset: usize, len: usize) -> SourceSpan {
		SourceSpan {
			start: offset,
			end: offset + len,
		}
	}

	/// Creates a span from its bounds. Reversed bounds are swapped.
	pub fn new_between(start: usize, end: usize) -> SourceSpan {
		SourceSpan {
			start: start.min(end),
			end: start.max(end),
		}
	}

	/// Creates a span from a logos-style byte range
	pub fn new_from_range(range: &Range<usize>) -> SourceSpan {
		SourceSpan::new_between(range.start, range.end)
	}

	/// Smallest span covering both `self` and `other`
	pub fn merge(&self, other: &SourceSpan) -> SourceSpan {
		SourceSpan::new_between(self.start.min(other.start), self.end.max(other.end))
	}

	pub fn start(&self) -> usize {
		self.start
	}

	pub fn end(&self) -> usize {
		self.end
	}

	pub fn len(&self) -> usize {
		self.end - self.start
	}

	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}
}

impl From<SourceSpan> for miette::SourceSpan {
	fn from(span: SourceSpan) -> Self {
		(span.start, span.len()).into()
	}
}
