use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use coursefind::web::PageSettings;
use coursefind::{AppState, build_router};
use image::{Rgb, RgbImage};
use serde_json::Value;
use tempfile::{TempDir, tempdir};
use tower::ServiceExt;

const CSV: &str = "\
Category,Course Name,Link,Description
Python,Introduction to Python,https://courses.example.com/python,Learn the syntax
SQL,SQL Joins,https://courses.example.com/sql,Combine tables
Python,Pandas for Analysis,https://courses.example.com/pandas,Dataframes in practice
";

fn write_jpeg(path: &Path) {
	RgbImage::from_pixel(32, 24, Rgb([170, 124, 167]))
		.save(path)
		.unwrap();
}

fn fixture() -> (TempDir, Router) {
	let dir = tempdir().unwrap();
	let csv = dir.path().join("courses.csv");
	std::fs::write(&csv, CSV).unwrap();
	let logo = dir.path().join("logo.jpeg");
	write_jpeg(&logo);
	write_jpeg(&dir.path().join("Python.jpeg"));
	write_jpeg(&dir.path().join("SQL.jpeg"));

	let settings = PageSettings {
		images_dir: dir.path().to_path_buf(),
		logo,
		thumbnail_size: 16,
		..PageSettings::default()
	};
	let router = build_router(Arc::new(AppState::load(&csv, settings)));
	(dir, router)
}

async fn body_text(response: Response) -> String {
	let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
	String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
	let mut builder = Request::get(uri);
	if let Some(cookie) = cookie {
		builder = builder.header(header::COOKIE, cookie);
	}
	builder.body(Body::empty()).unwrap()
}

fn post(uri: &str, form: &str, cookie: Option<&str>) -> Request<Body> {
	let mut builder =
		Request::post(uri).header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
	if let Some(cookie) = cookie {
		builder = builder.header(header::COOKIE, cookie);
	}
	builder.body(Body::from(form.to_string())).unwrap()
}

/// The `name=value` part of the response's Set-Cookie header.
fn session_cookie(response: &Response) -> String {
	let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
	set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn home_page_lists_categories() {
	let (_dir, router) = fixture();

	let response = router.oneshot(get("/", None)).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let html = body_text(response).await;
	assert!(html.contains("background-color: #AA7CA7"));
	assert!(html.contains("All Courses"));
	assert!(html.contains("Search for a course:"));
	assert!(!html.contains("Search Results"));
	let python = html.find(">Python<").unwrap();
	let sql = html.find(">SQL<").unwrap();
	assert!(python < sql);
}

#[tokio::test]
async fn selecting_a_category_shows_its_courses() {
	let (_dir, router) = fixture();

	let response = router
		.clone()
		.oneshot(post("/select", "category=Python&q=", None))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	assert_eq!(response.headers()[header::LOCATION], "/");
	let cookie = session_cookie(&response);
	assert!(cookie.starts_with("coursefind_session="));

	let html = body_text(router.oneshot(get("/", Some(&cookie))).await.unwrap()).await;
	assert!(html.contains("background-color: #F28D8C"));
	assert!(html.contains("<h2>Python Courses</h2>"));
	assert!(html.contains("Introduction to Python"));
	assert!(html.contains("Pandas for Analysis"));
	assert!(!html.contains("SQL Joins"));
}

#[tokio::test]
async fn back_returns_home() {
	let (_dir, router) = fixture();

	let selected = router
		.clone()
		.oneshot(post("/select", "category=SQL", None))
		.await
		.unwrap();
	let cookie = session_cookie(&selected);

	let response = router
		.clone()
		.oneshot(post("/back", "q=pandas", Some(&cookie)))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	assert_eq!(response.headers()[header::LOCATION], "/?q=pandas");
	let cookie = session_cookie(&response);

	let html = body_text(router.oneshot(get("/?q=pandas", Some(&cookie))).await.unwrap()).await;
	assert!(html.contains("background-color: #AA7CA7"));
	assert!(html.contains("All Courses"));
	assert!(html.contains("Search Results"));
	assert!(html.contains("Pandas for Analysis"));
}

#[tokio::test]
async fn unknown_category_keeps_home() {
	let (_dir, router) = fixture();

	let response = router
		.clone()
		.oneshot(post("/select", "category=Cooking", None))
		.await
		.unwrap();
	let cookie = session_cookie(&response);

	let html = body_text(router.oneshot(get("/", Some(&cookie))).await.unwrap()).await;
	assert!(html.contains("background-color: #AA7CA7"));
	assert!(!html.contains("Cooking Courses"));
}

#[tokio::test]
async fn api_search_returns_json() {
	let (_dir, router) = fixture();

	let response = router
		.oneshot(get("/api/search?q=Introduction%20to%20Python", None))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let value: Value = serde_json::from_str(&body_text(response).await).unwrap();
	assert_eq!(value["query"], "introduction to python");
	assert_eq!(value["results"][0]["name"], "Introduction to Python");
	assert_eq!(value["results"][0]["category"], "Python");
}

#[tokio::test]
async fn blank_search_is_empty() {
	let (_dir, router) = fixture();

	let response = router.oneshot(get("/api/search?q=%20%20", None)).await.unwrap();
	let value: Value = serde_json::from_str(&body_text(response).await).unwrap();
	assert_eq!(value["query"], Value::Null);
	assert_eq!(value["results"], Value::Array(Vec::new()));
}

#[tokio::test]
async fn missing_csv_still_renders() {
	let dir = tempdir().unwrap();
	let settings = PageSettings {
		images_dir: dir.path().to_path_buf(),
		logo: dir.path().join("logo.jpeg"),
		..PageSettings::default()
	};
	let router = build_router(Arc::new(AppState::load(
		&dir.path().join("missing.csv"),
		settings,
	)));

	let response = router.oneshot(get("/?q=python", None)).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let html = body_text(response).await;
	assert!(html.contains("CSV file not found at:"));
	assert!(html.contains("All Courses"));
}

#[tokio::test]
async fn health_answers_ok() {
	let (_dir, router) = fixture();

	let response = router.oneshot(get("/health", None)).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_text(response).await, "ok");
}
