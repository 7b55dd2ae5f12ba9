//! Dialect sniffing for unlabeled RDF text.
//!
//! A cheap, pattern-based classifier: it looks at a bounded sample of the
//! document (one statement's worth of text) and matches it against the
//! structural shape of each dialect. It is deliberately not a grammar; the
//! full parser remains the authority and simply reports its own error when
//! the guess was wrong.

use regex::Regex;
use std::sync::OnceLock;

/// Input dialects the sniffer can distinguish.
///
/// This governs which *parser* is used for a fetched document and is
/// independent of the output serialization the client asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentDialect {
	/// Named-graph blocks bounded by braces.
	TriG,
	N3,
	NQuads,
	/// The default when nothing else matches.
	Turtle,
}

/// Characters discarded before sampling starts.
fn is_blank(c: char) -> bool {
	matches!(c, '\t' | '\n' | ' ' | '\r' | '\u{0008}' | '\u{000C}')
}

/// Upper bound on the sample, in characters.
const MAX_SAMPLE_CHARS: usize = 2048;

static N3_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

fn n3_patterns() -> &'static Vec<Regex> {
	N3_PATTERNS.get_or_init(|| {
		vec![
			// * URI URI .
			Regex::new(r"^\S+\s*<\S+>\s*<\S+>\s*\.").unwrap(),
			// * URI BNODE .
			Regex::new(r"^\S+\s*<\S+>\s*_:\S+\s*\.").unwrap(),
			// * URI LANG-LITERAL .
			Regex::new(r#"^\S+\s*<\S+>\s*".*"(@\S+)?\s*\."#).unwrap(),
			// * URI TYPED-LITERAL .
			Regex::new(r#"^\S+\s*<\S+>\s*".*"(\^\^\S+)?\s*\."#).unwrap(),
		]
	})
}

static NQUADS_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

fn nquads_patterns() -> &'static Vec<Regex> {
	NQUADS_PATTERNS.get_or_init(|| {
		vec![
			// * URI URI URI .
			Regex::new(r"^\S+\s*<\S+>\s*<\S+>\s*<\S+>\s*\.").unwrap(),
			// * URI BNODE URI .
			Regex::new(r"^\S+\s*<\S+>\s*_:\S+\s*<\S+>\s*\.").unwrap(),
			// * URI LANG-LITERAL URI .
			Regex::new(r#"^\S+\s*<\S+>\s*".*"(@\S+)?\s*<\S+>\s*\."#).unwrap(),
			// * URI TYPED-LITERAL URI .
			Regex::new(r#"^\S+\s*<\S+>\s*".*"(\^\^\S+)?\s*<\S+>\s*\."#).unwrap(),
		]
	})
}

static TRIG_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

fn trig_patterns() -> &'static Vec<Regex> {
	TRIG_PATTERNS.get_or_init(|| {
		vec![
			// URI {
			Regex::new(r".*<\S+>\s*\{").unwrap(),
			// BNODE or prefixed name {
			Regex::new(r".*_?:\S+\s*\{").unwrap(),
		]
	})
}

/// Extract the sample tested against one dialect's patterns.
///
/// Characters accumulate up to [`MAX_SAMPLE_CHARS`], tracking whether the
/// cursor sits inside a bracketed or quoted span (`<`…`>`, `"`…`"`); the
/// sample ends at the first `delimiter` seen *outside* such a span, so a
/// dot or brace inside a URI or literal never terminates it early. The
/// input is only sliced, never consumed.
fn data_sample(text: &str, delimiter: char) -> &str {
	let mut inside_span = false;
	for (count, (index, c)) in text.char_indices().enumerate() {
		if count >= MAX_SAMPLE_CHARS {
			return &text[..index];
		}
		match c {
			'<' => inside_span = true,
			'>' => inside_span = false,
			'"' => inside_span = !inside_span,
			_ => {}
		}
		if !inside_span && c == delimiter {
			return &text[..index + c.len_utf8()];
		}
	}
	text
}

fn matches_any(patterns: &[Regex], sample: &str) -> bool {
	patterns.iter().any(|pattern| pattern.is_match(sample))
}

/// Classify a document's dialect from its leading text.
///
/// Leading blank and control characters are skipped first, so patterns
/// anchored to the start of input survive incidental blank lines. The
/// testing order is fixed and significant: the brace-delimited graph
/// patterns go first (their `<…>` tokens would otherwise be claimed by the
/// triple shapes), then N3, then N-Quads; when nothing matches the dialect
/// is Turtle. First match wins; this is a cheap ordered heuristic, not a
/// best-match search.
///
/// # Examples
///
/// ```
/// use padrdf_core::{DocumentDialect, guess_dialect};
///
/// assert_eq!(guess_dialect("@prefix ex: <http://example.org/> ."), DocumentDialect::Turtle);
/// assert_eq!(guess_dialect("\n\n<urn:a> {\n<urn:s> <urn:p> <urn:o> .\n}"), DocumentDialect::TriG);
/// assert_eq!(
///     guess_dialect("<urn:s> <urn:p> \"v\"@en ."),
///     DocumentDialect::N3
/// );
/// ```
pub fn guess_dialect(text: &str) -> DocumentDialect {
	let text = text.trim_start_matches(is_blank);

	if matches_any(trig_patterns(), data_sample(text, '{')) {
		DocumentDialect::TriG
	} else if matches_any(n3_patterns(), data_sample(text, '.')) {
		DocumentDialect::N3
	} else if matches_any(nquads_patterns(), data_sample(text, '.')) {
		DocumentDialect::NQuads
	} else {
		DocumentDialect::Turtle
	}
}
