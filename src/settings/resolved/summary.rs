use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	let page = &config.page;
	println!("Effective configuration:");
	println!("  Course data: {}", config.data.display());
	println!("  Images: {}", page.images_dir.display());
	println!("  Logo: {}", page.logo.display());
	println!("  Bind: {}", config.server.bind);
	println!("  Title: {}", page.title);
	println!("  Home background: {}", page.theme.home_background);
	println!("  Detail background: {}", page.theme.detail_background);
	println!("  Thumbnail size: {}px", page.thumbnail_size);
	println!("  Search candidates: {}", page.result_limit);
}
