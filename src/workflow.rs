use anyhow::{Context, Result};
use coursefind::core::{Event, Session};
use coursefind::{AppState, ServerConfig};

use crate::cli::{CliArgs, OutputFormat, print_json, print_plain};
use crate::settings::ResolvedConfig;

/// What the binary does once configuration is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Mode {
	Serve,
	Render {
		category: Option<String>,
		query: String,
	},
	Search {
		query: String,
		format: OutputFormat,
	},
}

impl Mode {
	pub(crate) fn from_cli(cli: &CliArgs) -> Self {
		if cli.render {
			return Self::Render {
				category: cli.category.clone(),
				query: cli.search.clone().unwrap_or_default(),
			};
		}

		match &cli.search {
			Some(query) => Self::Search {
				query: query.clone(),
				format: cli.output,
			},
			None => Self::Serve,
		}
	}
}

/// Coordinates loading the catalog and running the chosen mode.
pub(crate) struct CourseWorkflow {
	state: AppState,
	server: ServerConfig,
}

impl CourseWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let ResolvedConfig { data, server, page } = config;
		let state = AppState::load(&data, page);
		Self { state, server }
	}

	pub(crate) async fn run(self, mode: Mode) -> Result<()> {
		match mode {
			Mode::Serve => coursefind::serve(self.server, self.state).await,
			Mode::Render { category, query } => {
				println!("{}", self.render_once(category, &query));
				Ok(())
			}
			Mode::Search { query, format } => self.search_once(&query, format),
		}
	}

	fn render_once(&self, category: Option<String>, query: &str) -> String {
		let session = match category {
			Some(category) => Session::new().apply(Event::Select(category)),
			None => Session::new(),
		};
		self.state.render(&session, query)
	}

	fn search_once(&self, query: &str, format: OutputFormat) -> Result<()> {
		let results = self.state.search(query).unwrap_or_default();
		match format {
			OutputFormat::Plain => print_plain(query, &results),
			OutputFormat::Json => print_json(query, &results).context("failed to print results")?,
		}
		Ok(())
	}
}
