//! Page assembly and HTML rendering for `coursefind`.
//!
//! [`view::build_page`] gathers everything a page needs (catalog slices,
//! thumbnails, the logo, notices) into a [`PageView`]; [`html::render`] turns
//! that value into markup without touching the filesystem.

pub mod html;
pub mod theme;
pub mod view;

pub use html::{BACK_PATH, SEARCH_PARAM, SELECT_PATH, render};
pub use theme::Theme;
pub use view::{
	Body, CategoryGrid, CategoryTile, CourseEntry, DetailView, PageSettings, PageView, Thumbnail,
	build_page,
};
