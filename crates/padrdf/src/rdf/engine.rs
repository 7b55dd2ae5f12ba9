//! Parsing and serialization over the rio parser/formatter crates.

use oxiri::Iri;
use padrdf_core::{DocumentDialect, OutputFormat, guess_dialect};
use rio_api::formatter::TriplesFormatter;
use rio_api::model as rio;
use rio_api::parser::{QuadsParser, TriplesParser};
use rio_turtle::{NQuadsParser, NTriplesFormatter, TriGParser, TurtleFormatter, TurtleParser};
use rio_xml::RdfXmlFormatter;

use super::{Graph, LiteralValue, Resource, Statement, Term};
use crate::error::PadError;

/// Parse RDF text in a known dialect into a [`Graph`].
///
/// The pad export path always calls this with [`DocumentDialect::Turtle`];
/// the N3 dialect is read with the Turtle parser as well, which covers the
/// statement shapes the sniffer recognizes. The parser's own error is
/// propagated untouched so it can be shown to the user as-is.
pub fn parse(text: &str, base_iri: &str, dialect: DocumentDialect) -> Result<Graph, PadError> {
	let base = Iri::parse(base_iri.to_string()).ok();
	let mut graph = Graph::new();

	match dialect {
		DocumentDialect::Turtle | DocumentDialect::N3 => {
			scan_prefixes(text, &mut graph);
			TurtleParser::new(text.as_bytes(), base).parse_all(&mut |triple| {
				if let Some(statement) = statement_from_triple(&triple) {
					graph.push(statement);
				}
				Ok(()) as Result<(), PadError>
			})?;
		}
		DocumentDialect::TriG => {
			scan_prefixes(text, &mut graph);
			TriGParser::new(text.as_bytes(), base).parse_all(&mut |quad| {
				if let Some(statement) = statement_from_quad(&quad) {
					graph.push(statement);
				}
				Ok(()) as Result<(), PadError>
			})?;
		}
		DocumentDialect::NQuads => {
			NQuadsParser::new(text.as_bytes()).parse_all(&mut |quad| {
				if let Some(statement) = statement_from_quad(&quad) {
					graph.push(statement);
				}
				Ok(()) as Result<(), PadError>
			})?;
		}
	}

	Ok(graph)
}

/// Parse RDF text whose dialect is unknown, sniffing it first.
pub fn parse_sniffed(text: &str, base_iri: &str) -> Result<Graph, PadError> {
	parse(text, base_iri, guess_dialect(text))
}

/// Serialize a graph into one of the RDF output formats.
///
/// N3 output is Turtle text served under its own media type; the HTML
/// table is not a serialization and is rendered by the page layer instead.
pub fn serialize(graph: &Graph, format: OutputFormat) -> Result<String, PadError> {
	let bytes = match format {
		OutputFormat::Turtle | OutputFormat::N3 => {
			let mut formatter = TurtleFormatter::new(Vec::default());
			for statement in graph.statements() {
				formatter.format(&rio_triple(statement))?;
			}
			formatter.finish()?
		}
		OutputFormat::NTriples => {
			let mut formatter = NTriplesFormatter::new(Vec::default());
			for statement in graph.statements() {
				formatter.format(&rio_triple(statement))?;
			}
			formatter.finish()?
		}
		OutputFormat::RdfXml => {
			let mut formatter = RdfXmlFormatter::new(Vec::default())?;
			for statement in graph.statements() {
				formatter.format(&rio_triple(statement))?;
			}
			formatter.finish()?
		}
		OutputFormat::Html => {
			return Err(PadError::Serialize(
				"text/html is rendered as a page, not a serialization".to_string(),
			));
		}
	};

	String::from_utf8(bytes).map_err(|e| PadError::Serialize(e.to_string()))
}

/// Collect `@prefix` / `PREFIX` declarations for display purposes.
///
/// The parser resolves prefixed names itself; this scan only feeds the
/// namespace listing and qualified-name rendering of the HTML view.
fn scan_prefixes(text: &str, graph: &mut Graph) {
	for line in text.lines() {
		let line = line.trim();
		let rest = if let Some(rest) = line.strip_prefix("@prefix") {
			rest
		} else if let Some(rest) = line.strip_prefix("PREFIX").or_else(|| line.strip_prefix("prefix")) {
			rest
		} else {
			continue;
		};
		// Guard against words that merely start with "prefix".
		if !rest.starts_with([' ', '\t', ':']) {
			continue;
		}

		let Some(colon) = rest.find(':') else { continue };
		let name = rest[..colon].trim();
		let after = &rest[colon + 1..];
		let (Some(open), Some(close)) = (after.find('<'), after.find('>')) else {
			continue;
		};
		if open < close {
			graph.add_prefix(name, &after[open + 1..close]);
		}
	}
}

fn statement_from_triple(triple: &rio::Triple<'_>) -> Option<Statement> {
	Some(Statement {
		subject: resource_from(triple.subject)?,
		predicate: triple.predicate.iri.to_string(),
		object: term_from(triple.object)?,
	})
}

fn statement_from_quad(quad: &rio::Quad<'_>) -> Option<Statement> {
	// The context field is dropped: the proxy serves plain triples.
	Some(Statement {
		subject: resource_from(quad.subject)?,
		predicate: quad.predicate.iri.to_string(),
		object: term_from(quad.object)?,
	})
}

fn resource_from(subject: rio::Subject<'_>) -> Option<Resource> {
	match subject {
		rio::Subject::NamedNode(node) => Some(Resource::Iri(node.iri.to_string())),
		rio::Subject::BlankNode(node) => Some(Resource::Blank(node.id.to_string())),
		_ => None,
	}
}

fn term_from(object: rio::Term<'_>) -> Option<Term> {
	match object {
		rio::Term::NamedNode(node) => Some(Term::Iri(node.iri.to_string())),
		rio::Term::BlankNode(node) => Some(Term::Blank(node.id.to_string())),
		rio::Term::Literal(literal) => Some(Term::Literal(match literal {
			rio::Literal::Simple { value } => LiteralValue::Simple {
				value: value.to_string(),
			},
			rio::Literal::LanguageTaggedString { value, language } => {
				LiteralValue::LanguageTagged {
					value: value.to_string(),
					language: language.to_string(),
				}
			}
			rio::Literal::Typed { value, datatype } => LiteralValue::Typed {
				value: value.to_string(),
				datatype: datatype.iri.to_string(),
			},
		})),
		_ => None,
	}
}

fn rio_triple(statement: &Statement) -> rio::Triple<'_> {
	rio::Triple {
		subject: match &statement.subject {
			Resource::Iri(iri) => rio::NamedNode { iri }.into(),
			Resource::Blank(id) => rio::BlankNode { id }.into(),
		},
		predicate: rio::NamedNode {
			iri: &statement.predicate,
		},
		object: match &statement.object {
			Term::Iri(iri) => rio::NamedNode { iri }.into(),
			Term::Blank(id) => rio::BlankNode { id }.into(),
			Term::Literal(LiteralValue::Simple { value }) => {
				rio::Literal::Simple { value }.into()
			}
			Term::Literal(LiteralValue::LanguageTagged { value, language }) => {
				rio::Literal::LanguageTaggedString { value, language }.into()
			}
			Term::Literal(LiteralValue::Typed { value, datatype }) => rio::Literal::Typed {
				value,
				datatype: rio::NamedNode { iri: datatype },
			}
			.into(),
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const FOAF_DOC: &str = "@prefix foaf: <http://xmlns.com/foaf/0.1/> .\n\
		<http://example.org/me> foaf:name \"Alice\" ;\n\
		    foaf:knows <http://example.org/you> .\n";

	#[test]
	fn test_parse_turtle() {
		let graph = parse(FOAF_DOC, "http://example.org/doc", DocumentDialect::Turtle).unwrap();
		assert_eq!(graph.len(), 2);
		assert_eq!(
			graph.statements()[0].predicate,
			"http://xmlns.com/foaf/0.1/name"
		);
		assert_eq!(
			graph.statements()[0].object,
			Term::Literal(LiteralValue::Simple {
				value: "Alice".to_string()
			})
		);
	}

	#[test]
	fn test_parse_records_prefixes() {
		let graph = parse(FOAF_DOC, "http://example.org/doc", DocumentDialect::Turtle).unwrap();
		assert_eq!(
			graph.prefixes(),
			&[("foaf".to_string(), "http://xmlns.com/foaf/0.1/".to_string())]
		);
		assert_eq!(
			graph.qname("http://xmlns.com/foaf/0.1/knows").as_deref(),
			Some("foaf:knows")
		);
	}

	#[test]
	fn test_parse_resolves_relative_iris_against_base() {
		let graph = parse(
			"<> <http://purl.org/dc/terms/title> \"T\" .",
			"http://pads.example.org/export/doc",
			DocumentDialect::Turtle,
		)
		.unwrap();
		assert_eq!(
			graph.statements()[0].subject,
			Resource::Iri("http://pads.example.org/export/doc".to_string())
		);
	}

	#[test]
	fn test_parse_error_keeps_parser_message() {
		let err = parse(
			"<urn:s> <urn:p> ;; not turtle",
			"http://example.org/doc",
			DocumentDialect::Turtle,
		)
		.unwrap_err();
		assert!(matches!(err, PadError::Parse(_)));
		assert!(!err.to_string().is_empty());
	}

	#[test]
	fn test_parse_nquads_drops_context() {
		let graph = parse(
			"<urn:s> <urn:p> <urn:o> <urn:g> .\n",
			"http://example.org/doc",
			DocumentDialect::NQuads,
		)
		.unwrap();
		assert_eq!(graph.len(), 1);
		assert_eq!(graph.statements()[0].object, Term::Iri("urn:o".to_string()));
	}

	#[test]
	fn test_parse_trig_block() {
		let graph = parse(
			"<urn:g> {\n<urn:s> <urn:p> <urn:o> .\n}\n",
			"http://example.org/doc",
			DocumentDialect::TriG,
		)
		.unwrap();
		assert_eq!(graph.len(), 1);
	}

	#[test]
	fn test_parse_sniffed_picks_the_brace_dialect() {
		let graph = parse_sniffed(
			"\n<urn:g> {\n<urn:s> <urn:p> <urn:o> .\n}\n",
			"http://example.org/doc",
		)
		.unwrap();
		assert_eq!(graph.len(), 1);
	}

	#[test]
	fn test_serialize_ntriples() {
		let graph = parse(FOAF_DOC, "http://example.org/doc", DocumentDialect::Turtle).unwrap();
		let out = serialize(&graph, OutputFormat::NTriples).unwrap();
		assert!(out.contains("<http://example.org/me> <http://xmlns.com/foaf/0.1/name> \"Alice\""));
		assert_eq!(out.trim_end().lines().count(), 2);
	}

	#[test]
	fn test_serialize_turtle_reparses() {
		let graph = parse(FOAF_DOC, "http://example.org/doc", DocumentDialect::Turtle).unwrap();
		let out = serialize(&graph, OutputFormat::Turtle).unwrap();
		let reparsed = parse(&out, "http://example.org/doc", DocumentDialect::Turtle).unwrap();
		assert_eq!(reparsed.len(), graph.len());
	}

	#[test]
	fn test_serialize_rdfxml_has_envelope() {
		let graph = parse(FOAF_DOC, "http://example.org/doc", DocumentDialect::Turtle).unwrap();
		let out = serialize(&graph, OutputFormat::RdfXml).unwrap();
		assert!(out.contains("rdf:RDF"));
		assert!(out.contains("http://example.org/me"));
	}

	#[test]
	fn test_serialize_html_is_refused() {
		let graph = Graph::new();
		assert!(matches!(
			serialize(&graph, OutputFormat::Html),
			Err(PadError::Serialize(_))
		));
	}
}
