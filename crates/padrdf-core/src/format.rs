//! The output serialization table.

/// Output serializations the proxy can answer with.
///
/// Each variant is bound to a canonical MIME type and a canonical URI
/// suffix. This table is the single source of truth for both content
/// negotiation and redirect-target construction; nothing else maps types to
/// suffixes.
///
/// # Examples
///
/// ```
/// use padrdf_core::OutputFormat;
///
/// assert_eq!(OutputFormat::Turtle.suffix(), ".ttl");
/// assert_eq!(OutputFormat::from_suffix("rdf"), Some(OutputFormat::RdfXml));
/// assert_eq!(
///     OutputFormat::from_media_type("TEXT/PLAIN"),
///     Some(OutputFormat::NTriples)
/// );
/// assert_eq!(OutputFormat::from_media_type("application/json"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
	Html,
	Turtle,
	RdfXml,
	NTriples,
	N3,
}

impl OutputFormat {
	/// Every format, in table order.
	pub const ALL: [OutputFormat; 5] = [
		OutputFormat::Html,
		OutputFormat::Turtle,
		OutputFormat::RdfXml,
		OutputFormat::NTriples,
		OutputFormat::N3,
	];

	/// Canonical MIME type clients use to request this format.
	pub fn media_type(self) -> &'static str {
		match self {
			OutputFormat::Html => "text/html",
			OutputFormat::Turtle => "text/turtle",
			OutputFormat::RdfXml => "application/rdf+xml",
			OutputFormat::NTriples => "text/plain",
			OutputFormat::N3 => "text/n3",
		}
	}

	/// Canonical URI suffix, dot included.
	pub fn suffix(self) -> &'static str {
		match self {
			OutputFormat::Html => ".html",
			OutputFormat::Turtle => ".ttl",
			OutputFormat::RdfXml => ".rdf",
			OutputFormat::NTriples => ".nt",
			OutputFormat::N3 => ".n3",
		}
	}

	/// `Content-Type` header value for responses in this format.
	pub fn content_type(self) -> &'static str {
		match self {
			OutputFormat::Html => "text/html; charset=UTF-8",
			OutputFormat::Turtle => "text/turtle; charset=UTF-8",
			OutputFormat::RdfXml => "application/rdf+xml; charset=UTF-8",
			OutputFormat::NTriples => "text/plain; charset=UTF-8",
			OutputFormat::N3 => "text/n3; charset=UTF-8",
		}
	}

	/// Look up a bare URI extension (no dot).
	pub fn from_suffix(extension: &str) -> Option<Self> {
		match extension {
			"html" | "htm" => Some(OutputFormat::Html),
			"ttl" => Some(OutputFormat::Turtle),
			"rdf" => Some(OutputFormat::RdfXml),
			"nt" => Some(OutputFormat::NTriples),
			"n3" => Some(OutputFormat::N3),
			_ => None,
		}
	}

	/// Look up a media type, case-insensitively.
	pub fn from_media_type(media_type: &str) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|format| format.media_type().eq_ignore_ascii_case(media_type))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_table_is_bidirectional() {
		for format in OutputFormat::ALL {
			assert_eq!(
				OutputFormat::from_suffix(&format.suffix()[1..]),
				Some(format)
			);
			assert_eq!(OutputFormat::from_media_type(format.media_type()), Some(format));
		}
	}

	#[test]
	fn test_htm_is_html_too() {
		assert_eq!(OutputFormat::from_suffix("htm"), Some(OutputFormat::Html));
	}

	#[test]
	fn test_unknown_suffix() {
		assert_eq!(OutputFormat::from_suffix("xyz"), None);
		assert_eq!(OutputFormat::from_suffix(""), None);
	}

	#[test]
	fn test_content_type_carries_charset() {
		assert_eq!(OutputFormat::N3.content_type(), "text/n3; charset=UTF-8");
	}
}
