//! Request → outcome resolution.

use url::Url;

use crate::format::OutputFormat;
use crate::negotiation::AcceptHeader;

/// Message shown on the plain input form.
pub const WELCOME_MESSAGE: &str = "padrdf is a proxy for turtle contents from etherpads, \
	serving it in various RDF serializations.";

/// What a single request should turn into.
///
/// Exactly one outcome is produced per request, and the resolver itself
/// performs no I/O; fetching and parsing happen only after the decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	/// Render the pad input form, optionally flagged as an error page.
	ShowForm { message: String, error: bool },
	/// Answer 303 with the request URI plus this canonical suffix.
	Redirect { suffix: &'static str },
	/// Fetch `doc_path` and render it in `format` (the HTML triple table
	/// when `format` is [`OutputFormat::Html`]).
	Render {
		format: OutputFormat,
		doc_path: String,
	},
	/// Answer 404.
	NotFound,
}

/// Decide the outcome for a GET request.
///
/// The rules run in a strict order, first match wins:
///
/// 1. the root path shows the input form;
/// 2. favicon requests are 404;
/// 3. an `.html`/`.htm` suffix renders the triple table;
/// 4. any other dot in the last path segment is an explicit serialization
///    suffix, looked up in the [`OutputFormat`] table; unknown ones are 404;
/// 5. everything else is negotiated from the Accept lines (or the `accept`
///    query parameter when no header was usable) into a redirect suffix,
///    defaulting to HTML.
///
/// # Examples
///
/// ```
/// use padrdf_core::{resolve, Outcome, OutputFormat};
///
/// let outcome = resolve("/typewith.me/p/doc", &[], None);
/// assert_eq!(outcome, Outcome::Redirect { suffix: ".html" });
///
/// let outcome = resolve("/typewith.me/p/doc.ttl", &[], None);
/// assert_eq!(
///     outcome,
///     Outcome::Render {
///         format: OutputFormat::Turtle,
///         doc_path: "/typewith.me/p/doc".to_string(),
///     }
/// );
/// ```
pub fn resolve(path: &str, accept_lines: &[String], accept_param: Option<&str>) -> Outcome {
	if path.is_empty() || path == "/" {
		return Outcome::ShowForm {
			message: WELCOME_MESSAGE.to_string(),
			error: false,
		};
	}

	if path.ends_with("favicon.ico") {
		return Outcome::NotFound;
	}

	if let Some(doc_path) = path
		.strip_suffix(".html")
		.or_else(|| path.strip_suffix(".htm"))
	{
		return Outcome::Render {
			format: OutputFormat::Html,
			doc_path: doc_path.to_string(),
		};
	}

	let last_segment = path.rsplit('/').find(|s| !s.is_empty()).unwrap_or("");
	if last_segment.contains('.') {
		// The extension is whatever follows the final dot of the path; a
		// trailing slash therefore never matches the table and turns 404.
		let extension = path.rsplit('.').next().unwrap_or("");
		return match OutputFormat::from_suffix(extension) {
			Some(format) => Outcome::Render {
				format,
				doc_path: path[..path.len() - extension.len() - 1].to_string(),
			},
			None => Outcome::NotFound,
		};
	}

	// No suffix at all: negotiate a redirect target instead of an answer.
	let accept = AcceptHeader::parse_lines(accept_lines);
	let preferred = accept
		.preferred_type()
		.map(|t| t.to_string())
		.or_else(|| {
			accept_param
				.filter(|p| !p.is_empty())
				.map(|p| p.to_string())
		})
		.unwrap_or_else(|| "text/html".to_string());

	let suffix = OutputFormat::from_media_type(&preferred)
		.unwrap_or(OutputFormat::Html)
		.suffix();
	Outcome::Redirect { suffix }
}

/// Decide where a POSTed pad location leads.
///
/// The submitted value must be an absolute `http` URL; the result is the
/// pad's path under this server's own base URL (`/{host[:port]}{path}`).
/// Anything malformed comes back as the message for the error form.
///
/// # Examples
///
/// ```
/// use padrdf_core::resolve_pad_submission;
///
/// assert_eq!(
///     resolve_pad_submission(Some("http://typewith.me/p/lodum")).unwrap(),
///     "/typewith.me/p/lodum"
/// );
/// assert!(resolve_pad_submission(Some("ftp://example.org/pad")).is_err());
/// assert!(resolve_pad_submission(None).is_err());
/// ```
pub fn resolve_pad_submission(pad: Option<&str>) -> Result<String, String> {
	let pad = match pad.map(str::trim).filter(|p| !p.is_empty()) {
		Some(pad) => pad,
		None => return Err("no pad location was submitted".to_string()),
	};

	let url = Url::parse(pad).map_err(|e| e.to_string())?;
	if url.scheme() != "http" {
		return Err(format!(
			"only http pad locations are supported, not {}",
			url.scheme()
		));
	}
	let host = url
		.host_str()
		.ok_or_else(|| "the pad location has no host".to_string())?;

	Ok(match url.port() {
		Some(port) => format!("/{}:{}{}", host, port, url.path()),
		None => format!("/{}{}", host, url.path()),
	})
}
