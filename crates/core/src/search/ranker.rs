use std::cmp::{Ordering as CmpOrdering, Reverse};
use std::collections::BinaryHeap;

/// A candidate chosen by a [`Ranker`], identified by its position in the
/// candidate slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedCandidate {
	pub index: usize,
	pub score: u16,
}

/// Scores candidates against a query and keeps the best `limit` of them.
///
/// Implementations return candidates best-first, breaking ties by candidate
/// order, and never return more than `limit` entries.
pub trait Ranker {
	fn rank(&self, query: &str, candidates: &[&str], limit: usize) -> Vec<RankedCandidate>;
}

impl<R: Ranker + ?Sized> Ranker for &R {
	fn rank(&self, query: &str, candidates: &[&str], limit: usize) -> Vec<RankedCandidate> {
		(**self).rank(query, candidates, limit)
	}
}

#[derive(Clone, Eq, PartialEq)]
struct RankedMatch(RankedCandidate);

impl Ord for RankedMatch {
	fn cmp(&self, other: &Self) -> CmpOrdering {
		self.0
			.score
			.cmp(&other.0.score)
			.then_with(|| other.0.index.cmp(&self.0.index))
	}
}

impl PartialOrd for RankedMatch {
	fn partial_cmp(&self, other: &Self) -> Option<CmpOrdering> {
		Some(self.cmp(other))
	}
}

/// Bounded min-heap holding the highest scoring candidates seen so far.
pub(crate) struct TopScores {
	limit: usize,
	heap: BinaryHeap<Reverse<RankedMatch>>,
}

impl TopScores {
	pub(crate) fn new(limit: usize) -> Self {
		Self {
			limit,
			heap: BinaryHeap::with_capacity(limit),
		}
	}

	pub(crate) fn push(&mut self, index: usize, score: u16) {
		if self.limit == 0 {
			return;
		}
		let entry = RankedMatch(RankedCandidate { index, score });
		if self.heap.len() < self.limit {
			self.heap.push(Reverse(entry));
		} else if let Some(mut current_min) = self.heap.peek_mut()
			&& entry > current_min.0
		{
			*current_min = Reverse(entry);
		}
	}

	/// Drain into a best-first list.
	pub(crate) fn into_sorted(self) -> Vec<RankedCandidate> {
		let mut entries: Vec<RankedCandidate> =
			self.heap.into_iter().map(|Reverse(entry)| entry.0).collect();
		entries.sort_unstable_by(|a, b| b.score.cmp(&a.score).then_with(|| a.index.cmp(&b.index)));
		entries
	}
}
