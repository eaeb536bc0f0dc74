//! Library surface of the `coursefind` binary.
//!
//! The domain lives in `coursefind-core` and page rendering in
//! `coursefind-web`; this crate adds directory discovery, logging setup and
//! the HTTP front end that ties them together.

pub mod app_dirs;
pub mod logging;
pub mod server;

pub use coursefind_core as core;
pub use coursefind_web as web;
pub use server::{AppState, ServerConfig, build_router, serve};
