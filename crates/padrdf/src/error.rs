//! Error types for the proxy application.

use thiserror::Error;

/// Everything that can go wrong between accepting a request and writing
/// the response body.
///
/// Fetch and parse failures keep their underlying message intact; it is
/// shown verbatim on the error form, which is the only place these errors
/// ever surface.
#[derive(Debug, Error)]
pub enum PadError {
	/// The request does not name a usable pad.
	#[error("invalid pad location: {0}")]
	InvalidPadLocation(String),

	/// The outbound fetch failed (network error, missing pad, timeout).
	#[error("{0}")]
	Fetch(#[from] reqwest::Error),

	/// The fetched text is not valid RDF in the assumed dialect.
	#[error("{0}")]
	Parse(#[from] rio_turtle::TurtleError),

	/// A serialization could not be produced.
	#[error("{0}")]
	Serialize(String),

	/// I/O failure while writing a serialization.
	#[error("{0}")]
	Io(#[from] std::io::Error),
}
