use coursefind_core::Notice;

use super::*;
use crate::view::{CategoryGrid, CategoryTile, CourseEntry, DetailView, Thumbnail};

fn entry(name: &str, description: &str) -> CourseEntry {
	CourseEntry {
		name: name.into(),
		link: "https://courses.example.com/x".into(),
		description: description.into(),
		category: "Python".into(),
	}
}

fn tile(category: &str, clickable: bool) -> CategoryTile {
	CategoryTile {
		category: category.into(),
		thumbnail: Thumbnail::Inline("data:image/jpeg;base64,AAAA".into()),
		clickable,
	}
}

fn page(body: Body) -> PageView {
	PageView {
		title: "Free Courses".into(),
		logo: None,
		background: "#AA7CA7".into(),
		notices: Vec::new(),
		query: String::new(),
		search: None,
		body,
	}
}

#[test]
fn home_page_has_grid_and_search_box() {
	let grid = CategoryGrid {
		columns: [vec![tile("Python", true)], vec![tile("SQL", true)]],
	};
	let html = render(&page(Body::Home(grid)));

	assert!(html.contains("background-color: #AA7CA7"));
	assert!(html.contains("Search for a course:"));
	assert!(html.contains("<h2>All Courses</h2>"));
	assert!(html.contains(r#"<button type="submit">Python</button>"#));
	assert!(html.contains(r#"action="/select""#));
	assert!(!html.contains("Search Results"));
	assert!(!html.contains("class=\"logo\""));
}

#[test]
fn columns_render_in_order() {
	let grid = CategoryGrid {
		columns: [vec![tile("A", true), tile("C", true)], vec![tile("B", true)]],
	};
	let html = render(&page(Body::Home(grid)));

	let a = html.find(">A</button>").unwrap();
	let b = html.find(">B</button>").unwrap();
	let c = html.find(">C</button>").unwrap();
	// Column 0 (A, C) is emitted before column 1 (B).
	assert!(a < c && c < b);
}

#[test]
fn clicked_tile_renders_plain_label() {
	let grid = CategoryGrid {
		columns: [vec![tile("Python", false)], Vec::new()],
	};
	let html = render(&page(Body::Home(grid)));
	assert!(html.contains(r#"<span class="label">Python</span>"#));
	assert!(!html.contains(">Python</button>"));
}

#[test]
fn missing_thumbnail_shows_notice_in_place() {
	let mut missing = tile("SQL", true);
	missing.thumbnail = Thumbnail::Missing(Notice::new("Image for SQL not found."));
	let grid = CategoryGrid {
		columns: [vec![missing], Vec::new()],
	};
	let html = render(&page(Body::Home(grid)));
	assert!(html.contains("Image for SQL not found."));
	assert!(html.contains(">SQL</button>"));
}

#[test]
fn detail_page_has_back_control_and_entries() {
	let detail = DetailView {
		category: "Python".into(),
		courses: vec![entry("Intro", "Basics"), entry("Pandas", "Frames")],
	};
	let mut view = page(Body::CategoryDetail(detail));
	view.background = "#F28D8C".into();
	view.query = "intro".into();
	let html = render(&view);

	assert!(html.contains("background-color: #F28D8C"));
	assert!(html.contains("Back to All Courses"));
	assert!(html.contains(r#"action="/back""#));
	assert!(html.contains("<h2>Python Courses</h2>"));
	assert!(html.contains(r#"<a href="https://courses.example.com/x">Intro</a>"#));
	assert_eq!(html.matches("<hr>").count(), 2);
	assert!(html.find("Intro").unwrap() < html.find("Pandas").unwrap());
	assert!(html.contains(r#"<input type="hidden" name="q" value="intro">"#));
}

#[test]
fn search_section_precedes_body() {
	let mut view = page(Body::Home(CategoryGrid::default()));
	view.query = "py".into();
	view.search = Some(vec![entry("Intro", "Basics")]);
	let html = render(&view);

	let results = html.find("Search Results").unwrap();
	let grid = html.find("All Courses").unwrap();
	assert!(results < grid);
}

#[test]
fn user_text_is_escaped() {
	let mut view = page(Body::Home(CategoryGrid::default()));
	view.query = r#""><script>alert(1)</script>"#.into();
	view.notices.push(Notice::new("<b>CSV</b> missing"));
	let html = render(&view);

	assert!(!html.contains("<script>"));
	assert!(html.contains("&lt;b&gt;CSV&lt;/b&gt; missing"));
}

#[test]
fn logo_is_inlined_in_header() {
	let mut view = page(Body::Home(CategoryGrid::default()));
	view.logo = Some("data:image/jpeg;base64,QUJD".into());
	let html = render(&view);
	assert!(html.contains(r#"<img src="data:image/jpeg;base64,QUJD" class="logo" width="150""#));
}

#[test]
fn course_links_are_filtered_and_escaped() {
	let mut script = entry("Sneaky", "Nope");
	script.link = "javascript:alert(1)".into();
	let mut query = entry("Joins", "Tables");
	query.link = "https://courses.example.com/?a=1&b=2".into();
	let detail = DetailView {
		category: "SQL & <Friends>".into(),
		courses: vec![script, query],
	};
	let html = render(&page(Body::CategoryDetail(detail)));

	assert!(html.contains(r##"<a href="#">Sneaky</a>"##));
	assert!(!html.contains("javascript:"));
	assert!(html.contains(r#"<a href="https://courses.example.com/?a=1&amp;b=2">Joins</a>"#));
	assert!(html.contains("<h2>SQL &amp; &lt;Friends&gt; Courses</h2>"));
}
