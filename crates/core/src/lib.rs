//! Domain layer for `coursefind`.
//!
//! Everything here is independent of how the page is served: loading the
//! course catalog, preparing category artwork, ranking free-text queries and
//! tracking which category a session is looking at.

pub mod catalog;
pub mod error;
pub mod images;
pub mod notice;
pub mod search;
pub mod session;

pub use catalog::{Catalog, CourseRecord, load_catalog, load_or_empty};
pub use error::CatalogError;
pub use notice::Notice;
pub use search::{
	DEFAULT_RESULT_LIMIT, FrizbeeRanker, RankedCandidate, Ranker, SearchResults, normalize_query,
	search_courses,
};
pub use session::{Event, Session, View};
