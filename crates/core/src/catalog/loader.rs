use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use super::{Catalog, CourseRecord};
use crate::{CatalogError, Notice};

/// Columns every course CSV must name in its header row.
const REQUIRED_COLUMNS: [&str; 4] = ["Category", "Course Name", "Link", "Description"];

/// Read the course CSV at `path`.
///
/// The header row is required and must name the `Category`, `Course Name`,
/// `Link` and `Description` columns; any further columns are ignored. Rows
/// that cannot be read are logged and skipped.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
	read_catalog(path).map(|(catalog, _)| catalog)
}

/// Parse the CSV, returning the catalog and the number of rows skipped.
fn read_catalog(path: &Path) -> Result<(Catalog, usize), CatalogError> {
	let file = File::open(path).map_err(|err| match err.kind() {
		io::ErrorKind::NotFound => CatalogError::DataNotFound {
			path: path.to_path_buf(),
		},
		_ => CatalogError::DataUnreadable {
			path: path.to_path_buf(),
			source: err,
		},
	})?;

	let mut reader = csv::ReaderBuilder::new()
		.has_headers(true)
		.flexible(true)
		.trim(csv::Trim::Headers)
		.from_reader(BufReader::new(file));

	let headers = reader
		.headers()
		.map_err(|source| CatalogError::MalformedData {
			path: path.to_path_buf(),
			source,
		})?;
	let missing: Vec<&'static str> = REQUIRED_COLUMNS
		.into_iter()
		.filter(|column| !headers.iter().any(|header| header == *column))
		.collect();
	if !missing.is_empty() {
		return Err(CatalogError::MissingColumns {
			path: path.to_path_buf(),
			columns: missing,
		});
	}

	let mut courses = Vec::new();
	let mut skipped = 0;
	for row in reader.deserialize::<CourseRecord>() {
		match row {
			Ok(course) => courses.push(course),
			Err(err) => {
				skipped += 1;
				warn!(
					path = %path.display(),
					line = err.position().map(|pos| pos.line()),
					error = %err,
					"skipping malformed course row"
				);
			}
		}
	}

	debug!(path = %path.display(), rows = courses.len(), skipped, "parsed course csv");
	Ok((Catalog::new(courses), skipped))
}

/// Load the catalog, degrading to an empty one when it cannot be read.
///
/// The returned notice is meant to be shown on every page so the user knows
/// why nothing (or not everything) is listed.
pub fn load_or_empty(path: &Path) -> (Catalog, Option<Notice>) {
	match read_catalog(path) {
		Ok((catalog, skipped)) => {
			info!(
				path = %path.display(),
				courses = catalog.len(),
				categories = catalog.categories().len(),
				"catalog loaded"
			);
			let notice = (skipped > 0).then(|| {
				Notice::report(&CatalogError::SkippedRows {
					path: path.to_path_buf(),
					count: skipped,
				})
			});
			(catalog, notice)
		}
		Err(err) => (Catalog::empty(), Some(Notice::report(&err))),
	}
}
