use axum::extract::{Form, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use coursefind_core::{Event, Session, normalize_query};
use coursefind_web::{BACK_PATH, CourseEntry, SELECT_PATH};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use super::SharedState;
use super::session_cookie;

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
	#[serde(default)]
	q: String,
}

#[derive(Debug, Deserialize)]
struct SelectForm {
	category: String,
	#[serde(default)]
	q: String,
}

#[derive(Debug, Deserialize)]
struct BackForm {
	#[serde(default)]
	q: String,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
	query: Option<String>,
	results: Vec<CourseEntry>,
}

pub fn build_router(state: SharedState) -> Router {
	Router::new()
		.route("/", get(index))
		.route(SELECT_PATH, post(select))
		.route(BACK_PATH, post(back))
		.route("/api/search", get(api_search))
		.route("/health", get(health))
		.with_state(state)
}

async fn index(
	State(state): State<SharedState>,
	headers: HeaderMap,
	Query(params): Query<PageQuery>,
) -> Html<String> {
	let session = session_cookie::from_headers(&headers);
	debug!(selected = ?session.selected(), query = %params.q, "render");
	Html(state.render(&session, &params.q))
}

async fn select(
	State(state): State<SharedState>,
	headers: HeaderMap,
	Form(form): Form<SelectForm>,
) -> Response {
	let session = session_cookie::from_headers(&headers);
	let next = if state.catalog().has_category(&form.category) {
		session.apply(Event::Select(form.category))
	} else {
		warn!(category = %form.category, "ignoring selection of unknown category");
		session
	};
	commit(&next, &form.q)
}

async fn back(headers: HeaderMap, Form(form): Form<BackForm>) -> Response {
	let session = session_cookie::from_headers(&headers);
	commit(&session.apply(Event::Back), &form.q)
}

async fn api_search(
	State(state): State<SharedState>,
	Query(params): Query<PageQuery>,
) -> Json<SearchResponse> {
	Json(SearchResponse {
		query: normalize_query(&params.q),
		results: state.search(&params.q).unwrap_or_default(),
	})
}

async fn health() -> &'static str {
	"ok"
}

/// Store `session` in the cookie and send the browser back to the page.
fn commit(session: &Session, query: &str) -> Response {
	match session_cookie::set_cookie(session) {
		Ok(cookie) => (
			[(header::SET_COOKIE, cookie)],
			Redirect::to(&page_location(query)),
		)
			.into_response(),
		Err(err) => {
			error!(error = %err, "failed to encode session");
			StatusCode::INTERNAL_SERVER_ERROR.into_response()
		}
	}
}

/// `/`, carrying the search text along when there is one.
fn page_location(query: &str) -> String {
	if query.is_empty() {
		"/".to_string()
	} else {
		format!("/?q={}", utf8_percent_encode(query, NON_ALPHANUMERIC))
	}
}
