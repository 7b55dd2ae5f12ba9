//! HTML page rendering: the pad input form and the triple table.

use crate::rdf::{Graph, LiteralValue, Resource, Term};

/// The pad offered on the empty form as a starting point.
const SAMPLE_PAD: &str = "http://typewith.me/p/lodum";

/// Escape HTML special characters in text content.
fn escape_html(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// Escape text for use inside an HTML attribute value.
fn escape_html_attr(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
		.replace('\n', "&#10;")
		.replace('\r', "&#13;")
}

fn page_header(base_url: &str) -> String {
	format!(
		"<!DOCTYPE html>\n\
		<html lang=\"en\">\n\
		<head>\n\
		  <meta charset=\"utf-8\" />\n\
		  <link rel=\"stylesheet\" type=\"text/css\" href=\"{base}/files/style.css\" />\n\
		  <title>padrdf</title>\n\
		</head>\n\
		<body>\n\
		<h1><a href=\"{base}\">padrdf</a></h1>\n",
		base = escape_html_attr(base_url)
	)
}

fn page_footer() -> &'static str {
	"<hr />\n<p><small>padrdf is free and open source software.</small></p>\n</body>\n</html>\n"
}

/// The pad input form, doubling as the error page.
///
/// With `error` set the message is wrapped in an error paragraph naming the
/// pad that failed; otherwise it is shown as plain text. The form prefills
/// the pad belonging to `doc_path`, or a sample pad on the root page.
pub fn form_page(base_url: &str, doc_path: &str, message: &str, error: bool) -> String {
	let mut page = page_header(base_url);

	let pad_url = format!("http:/{}", doc_path);
	if error {
		page.push_str(&format!(
			"<p class=\"error\">Error while processing <a href=\"{href}\">{text}</a>:<br />{msg}</p>\n",
			href = escape_html_attr(&pad_url),
			text = escape_html(&pad_url),
			msg = escape_html(message),
		));
	} else {
		page.push_str(&format!("<p>{}</p>\n", escape_html(message)));
	}

	let prefill = if pad_url == "http://" || pad_url == "http:/" {
		page.push_str("<p>Try this one:</p>\n");
		SAMPLE_PAD.to_string()
	} else {
		pad_url
	};

	page.push_str(&format!(
		"<form action=\"{base}\" method=\"POST\">\
		<input type=\"text\" size=\"60\" name=\"pad\" value=\"{value}\" />\
		<input type=\"submit\" value=\"Get RDF\" /></form>\n",
		base = escape_html_attr(base_url),
		value = escape_html_attr(&prefill),
	));

	page.push_str(page_footer());
	page
}

/// The HTML view of a parsed pad: namespaces, the triple table grouped by
/// subject, and links to the other serializations.
pub fn table_page(graph: &Graph, base_url: &str, doc_path: &str) -> String {
	let mut page = page_header(base_url);
	let pad_url = format!("http:/{}", doc_path);

	page.push_str(&format!(
		"<p>based on <a href=\"{href}\">{text}</a></p>\n",
		href = escape_html_attr(&pad_url),
		text = escape_html(&pad_url),
	));

	page.push_str("<hr /><h2>Namespaces</h2>\n<p>");
	for (prefix, iri) in graph.prefixes() {
		page.push_str(&format!(
			"<a href=\"{href}\">{text}</a> ",
			href = escape_html_attr(iri),
			text = escape_html(prefix),
		));
	}
	page.push_str("</p>\n");

	page.push_str("<hr /><h2>Triples</h2>\n<table>\n");
	for subject in graph.subjects() {
		let mut printed_subject = false;
		for statement in graph.statements_with_subject(subject) {
			// Print each subject only once per group.
			if printed_subject {
				page.push_str("<tr><td></td>");
			} else {
				page.push_str(&format!("<tr><td>{}</td>", resource_html(graph, subject)));
				printed_subject = true;
			}
			page.push_str(&format!("<td>{}</td>", iri_html(graph, &statement.predicate)));
			page.push_str(&format!("<td>{}</td></tr>\n", term_html(graph, &statement.object)));
		}
	}
	page.push_str("</table>\n");

	page.push_str(&format!(
		"<hr /><p>View as <a href=\"{base}{doc}.rdf\">RDF/XML</a> | \
		<a href=\"{base}{doc}.nt\">N-Triples</a> | \
		<a href=\"{base}{doc}.ttl\">Turtle</a> | \
		<a href=\"{base}{doc}.n3\">N3</a></p>\n",
		base = escape_html_attr(base_url),
		doc = escape_html_attr(doc_path),
	));

	page.push_str(page_footer());
	page
}

/// An IRI as a link, abbreviated to a qualified name when its namespace is
/// declared.
fn iri_html(graph: &Graph, iri: &str) -> String {
	let label = graph.qname(iri).unwrap_or_else(|| iri.to_string());
	format!(
		"<a href=\"{href}\">{text}</a>",
		href = escape_html_attr(iri),
		text = escape_html(&label),
	)
}

fn resource_html(graph: &Graph, resource: &Resource) -> String {
	match resource {
		Resource::Iri(iri) => iri_html(graph, iri),
		Resource::Blank(id) => escape_html(&format!("_:{}", id)),
	}
}

fn term_html(graph: &Graph, term: &Term) -> String {
	match term {
		Term::Iri(iri) => iri_html(graph, iri),
		Term::Blank(id) => escape_html(&format!("_:{}", id)),
		Term::Literal(LiteralValue::Simple { value }) => escape_html(value),
		Term::Literal(LiteralValue::LanguageTagged { value, language }) => {
			escape_html(&format!("{}@{}", value, language))
		}
		Term::Literal(LiteralValue::Typed { value, datatype }) => {
			escape_html(&format!("{}^^{}", value, datatype))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rdf::Statement;

	fn sample_graph() -> Graph {
		let mut graph = Graph::new();
		graph.add_prefix("foaf", "http://xmlns.com/foaf/0.1/");
		graph.push(Statement {
			subject: Resource::Iri("http://example.org/me".to_string()),
			predicate: "http://xmlns.com/foaf/0.1/name".to_string(),
			object: Term::Literal(LiteralValue::Simple {
				value: "Alice".to_string(),
			}),
		});
		graph.push(Statement {
			subject: Resource::Iri("http://example.org/me".to_string()),
			predicate: "http://xmlns.com/foaf/0.1/knows".to_string(),
			object: Term::Iri("http://example.org/you".to_string()),
		});
		graph
	}

	#[test]
	fn test_form_page_plain() {
		let page = form_page("http://localhost:8080", "/typewith.me/p/doc", "welcome", false);
		assert!(page.contains("<p>welcome</p>"));
		assert!(page.contains("value=\"http://typewith.me/p/doc\""));
		assert!(!page.contains("class=\"error\""));
	}

	#[test]
	fn test_form_page_error_escapes_message() {
		let page = form_page(
			"http://localhost:8080",
			"/typewith.me/p/doc",
			"unexpected <eof>",
			true,
		);
		assert!(page.contains("class=\"error\""));
		assert!(page.contains("unexpected &lt;eof&gt;"));
		assert!(!page.contains("unexpected <eof>"));
	}

	#[test]
	fn test_form_page_root_offers_sample() {
		let page = form_page("http://localhost:8080", "/", "welcome", false);
		assert!(page.contains("Try this one:"));
		assert!(page.contains(SAMPLE_PAD));
	}

	#[test]
	fn test_table_page_groups_subjects() {
		let page = table_page(&sample_graph(), "http://localhost:8080", "/typewith.me/p/doc");
		// Two rows, the second with an empty subject cell.
		assert_eq!(page.matches("<tr><td></td>").count(), 1);
		assert!(page.contains("foaf:name"));
		assert!(page.contains("Alice"));
	}

	#[test]
	fn test_table_page_links_serializations() {
		let page = table_page(&sample_graph(), "http://localhost:8080", "/typewith.me/p/doc");
		for suffix in [".rdf", ".nt", ".ttl", ".n3"] {
			assert!(page.contains(&format!("/typewith.me/p/doc{}", suffix)));
		}
	}

	#[test]
	fn test_literal_with_language_is_rendered() {
		let mut graph = Graph::new();
		graph.push(Statement {
			subject: Resource::Iri("urn:s".to_string()),
			predicate: "urn:p".to_string(),
			object: Term::Literal(LiteralValue::LanguageTagged {
				value: "hallo".to_string(),
				language: "de".to_string(),
			}),
		});
		let page = table_page(&graph, "http://localhost:8080", "/doc");
		assert!(page.contains("hallo@de"));
	}
}
