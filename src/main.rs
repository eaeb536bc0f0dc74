mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::parse_cli;
use coursefind::logging;
use workflow::{CourseWorkflow, Mode};

#[tokio::main]
async fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let mode = Mode::from_cli(&cli);
	CourseWorkflow::from_config(resolved).run(mode).await
}
