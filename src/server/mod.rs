//! HTTP front end.
//!
//! Every request is one synchronous render: the session arrives in a cookie,
//! an interaction (select / back) runs it through the reducer and redirects,
//! and `GET /` renders the page from whatever session the browser holds. The
//! catalog itself is shared read-only.

mod routes;
mod session_cookie;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use coursefind_core::{Catalog, FrizbeeRanker, Notice, Session, load_or_empty, search_courses};
use coursefind_web::{CourseEntry, PageSettings, PageView, build_page};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

pub use routes::build_router;
pub use session_cookie::{COOKIE_NAME, SessionCookieError};

pub type SharedState = Arc<AppState>;

/// Everything a render needs that outlives a single request.
#[derive(Debug)]
pub struct AppState {
	catalog: Catalog,
	load_notice: Option<Notice>,
	settings: PageSettings,
	ranker: FrizbeeRanker,
}

impl AppState {
	pub fn new(catalog: Catalog, load_notice: Option<Notice>, settings: PageSettings) -> Self {
		Self {
			catalog,
			load_notice,
			settings,
			ranker: FrizbeeRanker,
		}
	}

	/// Load the catalog at `data`, degrading to an empty one on failure.
	pub fn load(data: &Path, settings: PageSettings) -> Self {
		let (catalog, load_notice) = load_or_empty(data);
		Self::new(catalog, load_notice, settings)
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn load_notice(&self) -> Option<&Notice> {
		self.load_notice.as_ref()
	}

	pub fn settings(&self) -> &PageSettings {
		&self.settings
	}

	pub fn page(&self, session: &Session, query: &str) -> PageView {
		build_page(
			&self.catalog,
			self.load_notice.as_ref(),
			&self.settings,
			session,
			query,
			&self.ranker,
		)
	}

	pub fn render(&self, session: &Session, query: &str) -> String {
		coursefind_web::render(&self.page(session, query))
	}

	/// Search results without the rest of the page; `None` for a blank query.
	pub fn search(&self, query: &str) -> Option<Vec<CourseEntry>> {
		search_courses(&self.catalog, query, &self.ranker, self.settings.result_limit)
			.map(|results| results.courses.into_iter().map(CourseEntry::from).collect())
	}
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
	pub bind: SocketAddr,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			bind: SocketAddr::from(([127, 0, 0, 1], 8501)),
		}
	}
}

/// Serve the page until Ctrl-C.
pub async fn serve(config: ServerConfig, state: AppState) -> Result<()> {
	let router = build_router(Arc::new(state));
	let listener = TcpListener::bind(config.bind)
		.await
		.with_context(|| format!("failed to bind {}", config.bind))?;
	info!(addr = %config.bind, "listening");

	axum::serve(listener, router)
		.with_graceful_shutdown(shutdown_signal())
		.await
		.context("http server failed")?;
	info!("server stopped");
	Ok(())
}

async fn shutdown_signal() {
	if let Err(err) = signal::ctrl_c().await {
		tracing::error!(error = %err, "failed to install ctrl-c handler");
		std::future::pending::<()>().await;
	}
	info!("shutdown requested");
}
