//! Accept header parsing.

use super::media_type::MediaTypePreference;

/// The client's preference, distilled from its `Accept` header lines.
///
/// # Examples
///
/// ```
/// use padrdf_core::negotiation::AcceptHeader;
///
/// let accept = AcceptHeader::parse_lines(["text/turtle;q=0.5, text/plain;q=0.9"]);
/// assert_eq!(accept.preferred_type(), Some("text/plain"));
///
/// let empty = AcceptHeader::parse_lines::<[&str; 0], _>([]);
/// assert_eq!(empty.preferred_type(), None);
/// ```
#[derive(Debug, Clone)]
pub struct AcceptHeader {
	pub preferred: Option<MediaTypePreference>,
}

impl AcceptHeader {
	/// Reduce zero or more header lines to the single best preference.
	///
	/// Each line may carry several comma-separated entries. A later entry
	/// replaces the running leader only when its quality is strictly
	/// greater, so the first-listed entry wins among equal maxima. No lines
	/// (or no parsable entries) produce no preference at all; the caller
	/// decides what to fall back to.
	pub fn parse_lines<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut preferred: Option<MediaTypePreference> = None;
		for line in lines {
			for entry in line.as_ref().split(',') {
				if let Some(pref) = MediaTypePreference::parse(entry) {
					let leading = preferred.as_ref().map(|p| p.quality).unwrap_or(0.0);
					if pref.quality > leading {
						preferred = Some(pref);
					}
				}
			}
		}
		Self { preferred }
	}

	/// The preferred media type, if any entry was usable.
	pub fn preferred_type(&self) -> Option<&str> {
		self.preferred.as_ref().map(|p| p.media_type.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_single_entry() {
		let accept = AcceptHeader::parse_lines(["application/rdf+xml"]);
		assert_eq!(accept.preferred_type(), Some("application/rdf+xml"));
	}

	#[test]
	fn test_highest_quality_wins() {
		let accept =
			AcceptHeader::parse_lines(["text/html;q=0.3, text/turtle;q=0.9, text/n3;q=0.5"]);
		assert_eq!(accept.preferred_type(), Some("text/turtle"));
	}

	#[test]
	fn test_tie_keeps_first_listed() {
		let accept =
			AcceptHeader::parse_lines(["text/turtle;q=0.5, text/plain;q=0.9, text/n3;q=0.9"]);
		assert_eq!(accept.preferred_type(), Some("text/plain"));
	}

	#[test]
	fn test_entries_span_lines() {
		let accept = AcceptHeader::parse_lines(["text/html;q=0.2", "text/turtle;q=0.7"]);
		assert_eq!(accept.preferred_type(), Some("text/turtle"));
	}

	#[test]
	fn test_no_lines_no_preference() {
		let accept = AcceptHeader::parse_lines::<[&str; 0], _>([]);
		assert!(accept.preferred.is_none());
	}
}
