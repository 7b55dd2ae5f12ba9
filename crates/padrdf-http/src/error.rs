//! Error type for the handler boundary.

use thiserror::Error;

/// Errors a handler may return to the server loop.
///
/// Handlers are expected to turn domain failures into ordinary responses
/// (error pages, 404s); what remains here are the faults that have no
/// meaningful page, which the server maps to a bare status code.
#[derive(Debug, Error)]
pub enum Error {
	/// The request could not be understood at the HTTP level.
	#[error("bad request: {0}")]
	BadRequest(String),

	/// A response could not be constructed.
	#[error("internal error: {0}")]
	Internal(String),
}

impl Error {
	/// HTTP status code the server answers with for this error.
	///
	/// # Examples
	///
	/// ```
	/// use padrdf_http::Error;
	///
	/// assert_eq!(Error::BadRequest("no body".into()).status_code(), 400);
	/// assert_eq!(Error::Internal("oops".into()).status_code(), 500);
	/// ```
	pub fn status_code(&self) -> u16 {
		match self {
			Error::BadRequest(_) => 400,
			Error::Internal(_) => 500,
		}
	}
}

/// Result alias used by handlers.
pub type Result<T> = std::result::Result<T, Error>;
