//! HTTP response representation.

use bytes::Bytes;
use hyper::{HeaderMap, StatusCode};

/// An owned HTTP response produced by handlers.
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new response with the given status code.
	///
	/// # Examples
	///
	/// ```
	/// use padrdf_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::new(StatusCode::OK);
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// HTTP 200 OK.
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// HTTP 404 Not Found.
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	/// HTTP 500 Internal Server Error.
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// HTTP 303 See Other.
	///
	/// Content negotiation answers with 303 so the client re-requests the
	/// suffixed URL with GET semantics.
	///
	/// # Examples
	///
	/// ```
	/// use padrdf_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::see_other("http://localhost:8080/doc.ttl");
	/// assert_eq!(response.status, StatusCode::SEE_OTHER);
	/// assert_eq!(
	///     response.headers.get("location").unwrap().to_str().unwrap(),
	///     "http://localhost:8080/doc.ttl"
	/// );
	/// ```
	pub fn see_other(location: impl AsRef<str>) -> Self {
		Self::new(StatusCode::SEE_OTHER).with_location(location.as_ref())
	}

	/// HTTP 302 Found (the classic form-submission redirect).
	pub fn found(location: impl AsRef<str>) -> Self {
		Self::new(StatusCode::FOUND).with_location(location.as_ref())
	}

	/// Set the response body.
	///
	/// # Examples
	///
	/// ```
	/// use padrdf_http::Response;
	/// use bytes::Bytes;
	///
	/// let response = Response::ok().with_body("Hello");
	/// assert_eq!(response.body, Bytes::from("Hello"));
	/// ```
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Add a header to the response.
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let (Ok(name), Ok(value)) = (
			hyper::header::HeaderName::from_bytes(name.as_bytes()),
			hyper::header::HeaderValue::from_str(value),
		) {
			self.headers.insert(name, value);
		}
		self
	}

	/// Set the `Content-Type` header.
	pub fn with_content_type(self, content_type: &str) -> Self {
		self.with_header("content-type", content_type)
	}

	/// Set the `Location` header.
	pub fn with_location(mut self, location: &str) -> Self {
		if let Ok(value) = hyper::header::HeaderValue::from_str(location) {
			self.headers.insert(hyper::header::LOCATION, value);
		}
		self
	}

	/// Convenience for an HTML page response.
	pub fn html(body: impl Into<Bytes>) -> Self {
		Self::ok()
			.with_content_type("text/html; charset=UTF-8")
			.with_body(body)
	}
}

impl From<crate::Error> for Response {
	fn from(error: crate::Error) -> Self {
		let status = StatusCode::from_u16(error.status_code())
			.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		Response::new(status).with_body(error.to_string())
	}
}
