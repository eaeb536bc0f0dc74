use coursefind_core::images::{category_image_path, thumbnail_data_uri};
use coursefind_core::{Catalog, CatalogError, Notice, Session};

use super::PageSettings;

/// Image slot of a category tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
	/// `data:` URI of the resized image.
	Inline(String),
	/// Shown in place of the image.
	Missing(Notice),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTile {
	pub category: String,
	pub thumbnail: Thumbnail,
	/// False once the category has been clicked in this session.
	pub clickable: bool,
}

/// Two-column grid; tile `i` lives in column `i % 2`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGrid {
	pub columns: [Vec<CategoryTile>; 2],
}

impl CategoryGrid {
	/// Tiles in category order, interleaving the columns back together.
	pub fn tiles(&self) -> Vec<&CategoryTile> {
		let [left, right] = &self.columns;
		let mut tiles = Vec::with_capacity(left.len() + right.len());
		for index in 0..left.len().max(right.len()) {
			tiles.extend(left.get(index));
			tiles.extend(right.get(index));
		}
		tiles
	}

	pub fn len(&self) -> usize {
		self.columns[0].len() + self.columns[1].len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Build one tile per category.
///
/// A missing or unreadable thumbnail only affects its own tile.
pub fn build_grid(catalog: &Catalog, session: &Session, settings: &PageSettings) -> CategoryGrid {
	let mut grid = CategoryGrid::default();
	for (index, category) in catalog.categories().into_iter().enumerate() {
		let path = category_image_path(&settings.images_dir, category);
		let thumbnail = match thumbnail_data_uri(&path, settings.thumbnail_size) {
			Ok(uri) => Thumbnail::Inline(uri),
			Err(CatalogError::ImageNotFound { .. }) => {
				Thumbnail::Missing(Notice::report(&CatalogError::CategoryImageMissing {
					category: category.to_string(),
				}))
			}
			Err(err) => Thumbnail::Missing(Notice::report(&err)),
		};

		grid.columns[index % 2].push(CategoryTile {
			category: category.to_string(),
			thumbnail,
			clickable: !session.was_clicked(category),
		});
	}
	grid
}
