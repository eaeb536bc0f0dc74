//! Configuration loading and resolution.
//!
//! `load` is the entry point: it layers default config files, explicit
//! `--config` files, `COURSEFIND__*` environment variables and CLI flags, then
//! validates the result into a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
