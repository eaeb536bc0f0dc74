//! Markup for a [`PageView`].
//!
//! The page is a single askama template; every interpolated value is
//! HTML-escaped except the `data:` URIs built by the image helpers.

mod filters;

use askama::Template;
use tracing::error;

use crate::view::{Body, PageView, Thumbnail};

pub use filters::safe_href;

/// Form target that selects a category.
pub const SELECT_PATH: &str = "/select";
/// Form target that returns to the category grid.
pub const BACK_PATH: &str = "/back";
/// Query-string and form field carrying the search text.
pub const SEARCH_PARAM: &str = "q";

#[derive(Template)]
#[template(
	source = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ page.title }}</title>
<style>
body { background-color: {{ page.background }}; }
.masthead { display: flex; justify-content: space-between; align-items: center; }
.logo { float: right; margin-right: 30px; }
.grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.tile img { width: 100%; }
.notice { background: #fde2e1; color: #7d1a17; padding: 0.5rem 1rem; border-radius: 0.4rem; margin: 0.5rem 0; }
</style>
</head>
<body>
{%- macro course(entry) %}
<article class="course"><h3><a href="{{ entry.link|href }}">{{ entry.name }}</a></h3><p>{{ entry.description }}</p></article><hr>
{%- endmacro %}
<header class="masthead"><h1>{{ page.title }}</h1>
{%- if let Some(logo) = page.logo -%}
<img src="{{ logo|safe }}" class="logo" width="150" alt="logo">
{%- endif -%}
</header>
{% for notice in page.notices -%}
<div class="notice" role="alert">{{ notice.message }}</div>
{% endfor -%}
<form class="search" method="get" action="/"><label for="q">Search for a course:</label><input id="q" type="text" name="{{ search_param }}" value="{{ page.query }}"></form>
{% if let Some(results) = page.search -%}
<section class="results"><h2>Search Results</h2>
{%- for entry in results %}{% call course(entry) %}{% endfor %}
</section>
{% endif -%}
{% match page.body -%}
{% when Body::Home with (grid) -%}
<h2>All Courses</h2>
<div class="grid">
{% for column in grid.columns -%}
<div class="column">
{% for tile in column -%}
<div class="tile">
{%- match tile.thumbnail -%}
{%- when Thumbnail::Inline with (uri) -%}
<img src="{{ uri|safe }}" alt="{{ tile.category }}">
{%- when Thumbnail::Missing with (missing) -%}
<div class="notice" role="alert">{{ missing.message }}</div>
{%- endmatch -%}
{%- if tile.clickable -%}
<form method="post" action="{{ select_path }}"><input type="hidden" name="category" value="{{ tile.category }}"><input type="hidden" name="{{ search_param }}" value="{{ page.query }}"><button type="submit">{{ tile.category }}</button></form>
{%- else -%}
<span class="label">{{ tile.category }}</span>
{%- endif -%}
</div>
{% endfor -%}
</div>
{% endfor -%}
</div>
{% when Body::CategoryDetail with (detail) -%}
<form method="post" action="{{ back_path }}"><input type="hidden" name="{{ search_param }}" value="{{ page.query }}"><button type="submit">Back to All Courses</button></form>
<h2>{{ detail.category }} Courses</h2>
{%- for entry in detail.courses %}{% call course(entry) %}{% endfor %}
{% endmatch -%}
</body>
</html>
"#,
	ext = "html"
)]
struct PageTemplate<'a> {
	page: &'a PageView,
	search_param: &'static str,
	select_path: &'static str,
	back_path: &'static str,
}

impl<'a> PageTemplate<'a> {
	fn new(page: &'a PageView) -> Self {
		Self {
			page,
			search_param: SEARCH_PARAM,
			select_path: SELECT_PATH,
			back_path: BACK_PATH,
		}
	}
}

/// Render a full HTML document for `page`.
pub fn render(page: &PageView) -> String {
	PageTemplate::new(page).render().unwrap_or_else(|err| {
		error!(error = %err, "failed to render page");
		error_page()
	})
}

fn error_page() -> String {
	"<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Error</title></head>\n<body><p>The page could not be rendered.</p></body>\n</html>\n".to_string()
}

#[cfg(test)]
mod tests;
