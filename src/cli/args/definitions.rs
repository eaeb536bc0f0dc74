use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `coursefind` binary.
#[derive(Parser, Debug)]
#[command(
	name = "coursefind",
	version,
	long_version = long_version(),
	about = "Browse and fuzzy-search a catalog of free courses",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "COURSEFIND_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long = "data",
		value_name = "FILE",
		help = "Course CSV to load (default: free_courses_data.csv)"
	)]
	pub(crate) data: Option<PathBuf>,
	#[arg(
		short = 'i',
		long = "images",
		value_name = "DIR",
		help = "Directory holding <Category>.jpeg thumbnails (default: Images)"
	)]
	pub(crate) images: Option<PathBuf>,
	#[arg(
		long,
		value_name = "FILE",
		help = "Logo shown next to the title (default: Images/analytics_vidhya_logo.jpeg)"
	)]
	pub(crate) logo: Option<PathBuf>,
	#[arg(
		short = 'b',
		long,
		value_name = "ADDR",
		help = "Address to serve on (default: 127.0.0.1:8501)"
	)]
	pub(crate) bind: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Page title (default: Analytics Vidhya Free Courses)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "result-limit",
		value_name = "NUM",
		help = "Ranked candidates considered per search (default: 10)"
	)]
	pub(crate) result_limit: Option<usize>,
	#[arg(
		long = "thumbnail-size",
		value_name = "PX",
		help = "Edge length of category thumbnails (default: 300)"
	)]
	pub(crate) thumbnail_size: Option<u32>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 's',
		long = "search",
		value_name = "QUERY",
		help = "Print search results for QUERY and exit, or seed the page with --render"
	)]
	pub(crate) search: Option<String>,
	#[arg(
		long,
		help = "Print the page HTML to stdout and exit instead of serving (default: disabled)"
	)]
	pub(crate) render: bool,
	#[arg(
		long,
		value_name = "NAME",
		requires = "render",
		help = "Render the detail view of this category (requires --render)"
	)]
	pub(crate) category: Option<String>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print search results"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Increase log verbosity (-v debug, -vv trace)"
	)]
	pub(crate) verbose: u8,
}
