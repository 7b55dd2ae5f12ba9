use padrdf_core::{Outcome, OutputFormat, resolve, resolve_pad_submission};

fn lines(values: &[&str]) -> Vec<String> {
	values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_root_path_shows_welcome_form() {
	match resolve("/", &[], None) {
		Outcome::ShowForm { message, error } => {
			assert!(!error);
			assert!(message.contains("proxy"));
		}
		other => panic!("unexpected outcome: {:?}", other),
	}
}

#[test]
fn test_favicon_is_not_found() {
	assert_eq!(resolve("/anything/favicon.ico", &[], None), Outcome::NotFound);
}

#[test]
fn test_html_suffix_renders_table() {
	let outcome = resolve("/typewith.me/p/doc.html", &[], None);
	assert_eq!(
		outcome,
		Outcome::Render {
			format: OutputFormat::Html,
			doc_path: "/typewith.me/p/doc".to_string(),
		}
	);
}

#[test]
fn test_htm_suffix_renders_table_too() {
	let outcome = resolve("/typewith.me/p/doc.htm", &[], None);
	assert_eq!(
		outcome,
		Outcome::Render {
			format: OutputFormat::Html,
			doc_path: "/typewith.me/p/doc".to_string(),
		}
	);
}

#[test]
fn test_explicit_suffix_bypasses_negotiation() {
	// The Accept header names RDF/XML, but the suffix decides.
	let outcome = resolve("/typewith.me/p/doc.ttl", &lines(&["application/rdf+xml"]), None);
	assert_eq!(
		outcome,
		Outcome::Render {
			format: OutputFormat::Turtle,
			doc_path: "/typewith.me/p/doc".to_string(),
		}
	);
}

#[test]
fn test_each_rdf_suffix_resolves() {
	for (suffix, format) in [
		("ttl", OutputFormat::Turtle),
		("rdf", OutputFormat::RdfXml),
		("nt", OutputFormat::NTriples),
		("n3", OutputFormat::N3),
	] {
		let path = format!("/typewith.me/p/doc.{}", suffix);
		assert_eq!(
			resolve(&path, &[], None),
			Outcome::Render {
				format,
				doc_path: "/typewith.me/p/doc".to_string(),
			}
		);
	}
}

#[test]
fn test_unrecognized_suffix_is_not_found() {
	assert_eq!(resolve("/doc.xyz", &[], None), Outcome::NotFound);
}

#[test]
fn test_no_suffix_negotiates_redirect() {
	let outcome = resolve("/typewith.me/p/doc", &lines(&["text/turtle"]), None);
	assert_eq!(outcome, Outcome::Redirect { suffix: ".ttl" });
}

#[test]
fn test_implicit_quality_redirects_rdf() {
	let outcome = resolve("/typewith.me/p/doc", &lines(&["application/rdf+xml"]), None);
	assert_eq!(outcome, Outcome::Redirect { suffix: ".rdf" });
}

#[test]
fn test_text_plain_maps_to_ntriples_suffix() {
	let outcome = resolve("/typewith.me/p/doc", &lines(&["text/plain"]), None);
	assert_eq!(outcome, Outcome::Redirect { suffix: ".nt" });
}

#[test]
fn test_no_signals_default_to_html() {
	let outcome = resolve("/typewith.me/p/doc", &[], None);
	assert_eq!(outcome, Outcome::Redirect { suffix: ".html" });
}

#[test]
fn test_unknown_media_type_defaults_to_html() {
	let outcome = resolve("/typewith.me/p/doc", &lines(&["application/json"]), None);
	assert_eq!(outcome, Outcome::Redirect { suffix: ".html" });
}

#[test]
fn test_browser_style_header() {
	let outcome = resolve(
		"/typewith.me/p/doc",
		&lines(&["text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"]),
		None,
	);
	assert_eq!(outcome, Outcome::Redirect { suffix: ".html" });
}

#[test]
fn test_query_parameter_substitutes_for_header() {
	let outcome = resolve("/typewith.me/p/doc", &[], Some("text/n3"));
	assert_eq!(outcome, Outcome::Redirect { suffix: ".n3" });
}

#[test]
fn test_empty_query_parameter_is_ignored() {
	let outcome = resolve("/typewith.me/p/doc", &[], Some(""));
	assert_eq!(outcome, Outcome::Redirect { suffix: ".html" });
}

#[test]
fn test_redirect_round_trip_renders_requested_type() {
	// Negotiation picks the suffix; re-requesting the suffixed path must
	// resolve to the same serialization, whatever the headers then say.
	let first = resolve("/typewith.me/p/doc", &lines(&["text/n3"]), None);
	let suffix = match first {
		Outcome::Redirect { suffix } => suffix,
		other => panic!("expected redirect, got {:?}", other),
	};
	let followed = format!("/typewith.me/p/doc{}", suffix);
	match resolve(&followed, &lines(&["application/rdf+xml"]), None) {
		Outcome::Render { format, .. } => {
			assert_eq!(format, OutputFormat::N3);
			assert_eq!(format.content_type(), "text/n3; charset=UTF-8");
		}
		other => panic!("expected render, got {:?}", other),
	}
}

#[test]
fn test_pad_submission_builds_proxy_path() {
	assert_eq!(
		resolve_pad_submission(Some("http://typewith.me/p/lodum")).unwrap(),
		"/typewith.me/p/lodum"
	);
}

#[test]
fn test_pad_submission_rejects_missing_value() {
	assert!(resolve_pad_submission(None).is_err());
	assert!(resolve_pad_submission(Some("   ")).is_err());
}

#[test]
fn test_pad_submission_rejects_relative_and_non_http() {
	assert!(resolve_pad_submission(Some("typewith.me/p/lodum")).is_err());
	assert!(resolve_pad_submission(Some("https://typewith.me/p/lodum")).is_err());
	assert!(resolve_pad_submission(Some("ftp://typewith.me/p/lodum")).is_err());
}
