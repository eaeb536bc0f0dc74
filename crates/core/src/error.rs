use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while reading catalog data or preparing artwork.
///
/// None of these are fatal to a render: callers turn them into a
/// [`Notice`](crate::Notice) and carry on with whatever is still available.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The course CSV does not exist.
	#[error("CSV file not found at: {}", path.display())]
	DataNotFound { path: PathBuf },

	/// The course CSV exists but could not be opened.
	#[error("failed to read CSV file at {}: {source}", path.display())]
	DataUnreadable {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The CSV could not be parsed at all.
	#[error("malformed course data in {}: {source}", path.display())]
	MalformedData {
		path: PathBuf,
		#[source]
		source: csv::Error,
	},

	/// The header row lacks one or more required columns.
	#[error("CSV file at {} is missing columns: {}", path.display(), columns.join(", "))]
	MissingColumns {
		path: PathBuf,
		columns: Vec<&'static str>,
	},

	/// Some rows were dropped while loading; the rest of the catalog is usable.
	#[error("Skipped {count} malformed row(s) in {}.", path.display())]
	SkippedRows { path: PathBuf, count: usize },

	#[error("Image file not found at {}", path.display())]
	ImageNotFound { path: PathBuf },

	#[error("failed to decode image at {}: {source}", path.display())]
	ImageDecode {
		path: PathBuf,
		#[source]
		source: image::ImageError,
	},

	#[error("failed to encode image as JPEG: {source}")]
	ImageEncode {
		#[source]
		source: image::ImageError,
	},

	/// No thumbnail exists for a category.
	#[error("Image for {category} not found.")]
	CategoryImageMissing { category: String },
}

impl CatalogError {
	/// Map an I/O failure on an image path onto the right variant.
	pub(crate) fn from_image_io(path: PathBuf, err: std::io::Error) -> Self {
		if err.kind() == std::io::ErrorKind::NotFound {
			Self::ImageNotFound { path }
		} else {
			Self::ImageDecode {
				path,
				source: image::ImageError::IoError(err),
			}
		}
	}

	/// True for the variants that describe an absent file rather than a bad one.
	pub fn is_missing(&self) -> bool {
		matches!(
			self,
			Self::DataNotFound { .. } | Self::ImageNotFound { .. } | Self::CategoryImageMissing { .. }
		)
	}
}
