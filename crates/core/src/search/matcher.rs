use frizbee::{Config, match_list};
use tracing::trace;

use super::ranker::{RankedCandidate, Ranker, TopScores};

const MATCH_CHUNK_SIZE: usize = 512;

/// Default [`Ranker`] backed by the `frizbee` fuzzy matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrizbeeRanker;

impl Ranker for FrizbeeRanker {
	fn rank(&self, query: &str, candidates: &[&str], limit: usize) -> Vec<RankedCandidate> {
		let trimmed = query.trim();
		if trimmed.is_empty() || limit == 0 {
			return Vec::new();
		}

		let config = match_config();
		let mut top = TopScores::new(limit);
		let mut offset = 0;
		for chunk in candidates.chunks(MATCH_CHUNK_SIZE) {
			for entry in match_list(trimmed, chunk, &config) {
				if entry.score == 0 {
					continue;
				}
				top.push(offset + entry.index as usize, entry.score);
			}
			offset += chunk.len();
		}

		let ranked = top.into_sorted();
		trace!(query = trimmed, candidates = candidates.len(), hits = ranked.len(), "ranked");
		ranked
	}
}

/// Matching options for course search: every candidate is scored, with no
/// prefilter and no typo ceiling, whatever the pool size.
pub(crate) fn match_config() -> Config {
	Config {
		prefilter: false,
		max_typos: None,
		sort: false,
		..Config::default()
	}
}
