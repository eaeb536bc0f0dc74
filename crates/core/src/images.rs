//! Thumbnail and logo preparation for inline display.
//!
//! Every helper opens the file it is given, does its work and drops the
//! handle again; nothing is cached between renders.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use tracing::trace;

use crate::CatalogError;

/// Edge length of the square category thumbnails.
pub const THUMBNAIL_SIZE: u32 = 300;

const CATEGORY_IMAGE_EXTENSION: &str = "jpeg";

/// Location of the thumbnail for `category` inside `dir`.
///
/// The lookup is case-sensitive: `Python` resolves to `Python.jpeg`.
pub fn category_image_path(dir: &Path, category: &str) -> PathBuf {
	dir.join(format!("{category}.{CATEGORY_IMAGE_EXTENSION}"))
}

fn open(path: &Path) -> Result<DynamicImage, CatalogError> {
	let reader = ImageReader::open(path)
		.and_then(|reader| reader.with_guessed_format())
		.map_err(|err| CatalogError::from_image_io(path.to_path_buf(), err))?;
	reader.decode().map_err(|source| CatalogError::ImageDecode {
		path: path.to_path_buf(),
		source,
	})
}

/// Fit the image at `path` into a `size`x`size` square.
///
/// The image is scaled to cover the square and the overflow is cropped
/// evenly from both sides, using a Lanczos filter.
pub fn resize(path: &Path, size: u32) -> Result<DynamicImage, CatalogError> {
	let image = open(path)?;
	trace!(
		path = %path.display(),
		width = image.width(),
		height = image.height(),
		size,
		"resizing image"
	);
	Ok(image.resize_to_fill(size, size, FilterType::Lanczos3))
}

/// Serialize `image` as JPEG and return the bytes as standard base64.
pub fn encode_jpeg_base64(image: &DynamicImage) -> Result<String, CatalogError> {
	// JPEG has no alpha channel.
	let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
	let mut bytes = Vec::new();
	rgb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
		.map_err(|source| CatalogError::ImageEncode { source })?;
	Ok(STANDARD.encode(bytes))
}

/// Re-encode the image at `path` as JPEG base64 for a `data:` URI.
///
/// Callers treat an error the same as an empty string: there is no asset to
/// show.
pub fn encode_inline(path: &Path) -> Result<String, CatalogError> {
	encode_jpeg_base64(&open(path)?)
}

/// Resize then encode, yielding a complete `data:image/jpeg;base64,...` URI.
pub fn thumbnail_data_uri(path: &Path, size: u32) -> Result<String, CatalogError> {
	let encoded = encode_jpeg_base64(&resize(path, size)?)?;
	Ok(data_uri(&encoded))
}

pub fn data_uri(jpeg_base64: &str) -> String {
	format!("data:image/jpeg;base64,{jpeg_base64}")
}
