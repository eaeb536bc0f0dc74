use anyhow::Result;
use coursefind::web::CourseEntry;
use serde_json::json;

/// Print one course per block: name, link, description.
pub(crate) fn print_plain(query: &str, results: &[CourseEntry]) {
	if results.is_empty() {
		println!("No courses match '{query}'");
		return;
	}

	for course in results {
		println!("{}", course.name);
		println!("  {}", course.link);
		if !course.description.is_empty() {
			println!("  {}", course.description);
		}
	}
}

/// Format search results as a JSON string.
pub(crate) fn format_results_json(query: &str, results: &[CourseEntry]) -> Result<String> {
	let payload = json!({
		"query": query,
		"results": results,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search results.
pub(crate) fn print_json(query: &str, results: &[CourseEntry]) -> Result<()> {
	println!("{}", format_results_json(query, results)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_lists_results() {
		let results = vec![CourseEntry {
			name: "Introduction to Python".into(),
			link: "https://courses.example.com/python".into(),
			description: "Syntax".into(),
			category: "Python".into(),
		}];

		let json = format_results_json("python", &results).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["query"], "python");
		assert_eq!(value["results"][0]["name"], "Introduction to Python");
		assert_eq!(value["results"][0]["category"], "Python");
	}

	#[test]
	fn empty_results_serialize_as_empty_array() {
		let json = format_results_json("rust", &[]).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["results"], Value::Array(Vec::new()));
	}
}
