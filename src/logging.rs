//! `tracing` subscriber setup.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map `-v` occurrences to a default level.
pub fn level_for(verbosity: u8) -> Level {
	match verbosity {
		0 => Level::INFO,
		1 => Level::DEBUG,
		_ => Level::TRACE,
	}
}

/// Install the global subscriber, writing to stderr so stdout stays free for
/// rendered output. `RUST_LOG` takes precedence over `verbosity`.
pub fn initialize(verbosity: u8) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(level_for(verbosity).as_str().to_ascii_lowercase()));

	// A subscriber may already be installed (tests, embedders); keep it.
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
