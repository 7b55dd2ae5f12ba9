//! HTTP request representation.

use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};
use percent_encoding::percent_decode_str;
use std::collections::HashMap;
use std::net::SocketAddr;

use crate::error::{Error, Result};

/// An owned HTTP request as seen by handlers.
///
/// # Examples
///
/// ```
/// use padrdf_http::Request;
/// use hyper::Method;
///
/// let request = Request::builder()
///     .method(Method::GET)
///     .uri("/some/pad.ttl?accept=text%2Fturtle")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path(), "/some/pad.ttl");
/// assert_eq!(request.query_param("accept").as_deref(), Some("text/turtle"));
/// ```
#[derive(Debug)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	pub remote_addr: Option<SocketAddr>,
	query_params: HashMap<String, String>,
}

impl Request {
	/// Create a request from its parts.
	pub fn new(
		method: Method,
		uri: Uri,
		version: Version,
		headers: HeaderMap,
		body: Bytes,
	) -> Self {
		let query_params = Self::parse_query_params(&uri);
		Self {
			method,
			uri,
			version,
			headers,
			body,
			remote_addr: None,
			query_params,
		}
	}

	/// Start building a request (mostly useful in tests).
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}

	/// Parse query parameters from the URI.
	fn parse_query_params(uri: &Uri) -> HashMap<String, String> {
		uri.query()
			.map(|q| {
				q.split('&')
					.filter_map(|pair| {
						// Split on the first '=' only so '=' may appear in values.
						let mut parts = pair.splitn(2, '=');
						Some((
							parts.next()?.to_string(),
							parts.next().unwrap_or("").to_string(),
						))
					})
					.collect()
			})
			.unwrap_or_default()
	}

	/// The request path.
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Raw query parameters, exactly as sent.
	pub fn query_params(&self) -> &HashMap<String, String> {
		&self.query_params
	}

	/// A single query parameter, percent-decoded.
	pub fn query_param(&self, name: &str) -> Option<String> {
		self.query_params.get(name).map(|raw| {
			percent_decode_str(&raw.replace('+', " "))
				.decode_utf8_lossy()
				.into_owned()
		})
	}

	/// All values sent for a header, lossily decoded to text.
	///
	/// Lookup is case-insensitive, so every capitalization of the header
	/// name is covered by a single call.
	pub fn header_values(&self, name: &str) -> Vec<String> {
		self.headers
			.get_all(name)
			.iter()
			.filter_map(|v| v.to_str().ok())
			.map(|v| v.to_string())
			.collect()
	}

	/// The `Host` header value, if present.
	pub fn get_host(&self) -> Option<String> {
		self.headers
			.get(hyper::header::HOST)
			.and_then(|h| h.to_str().ok())
			.map(|h| h.to_string())
	}

	/// Base URL of the server this request arrived at.
	///
	/// # Examples
	///
	/// ```
	/// use padrdf_http::Request;
	/// use hyper::Method;
	///
	/// let mut headers = hyper::HeaderMap::new();
	/// headers.insert("host", "example.org:8080".parse().unwrap());
	/// let request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/doc")
	///     .headers(headers)
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(request.base_url(), "http://example.org:8080");
	/// ```
	pub fn base_url(&self) -> String {
		let host = self.get_host().unwrap_or_else(|| "localhost".to_string());
		format!("http://{}", host)
	}

	/// Build an absolute URL for `path` on this server.
	pub fn build_absolute_url(&self, path: &str) -> String {
		format!("{}{}", self.base_url(), path)
	}

	/// Decode an `application/x-www-form-urlencoded` body.
	pub fn form_params(&self) -> Result<Vec<(String, String)>> {
		serde_urlencoded::from_bytes(&self.body)
			.map_err(|e| Error::BadRequest(e.to_string()))
	}

	/// A single form field from the request body.
	pub fn form_param(&self, name: &str) -> Result<Option<String>> {
		Ok(self
			.form_params()?
			.into_iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value))
	}
}

/// Builder for [`Request`].
#[derive(Debug, Default)]
pub struct RequestBuilder {
	method: Option<Method>,
	uri: Option<String>,
	headers: Option<HeaderMap>,
	body: Option<Bytes>,
	remote_addr: Option<SocketAddr>,
}

impl RequestBuilder {
	pub fn method(mut self, method: Method) -> Self {
		self.method = Some(method);
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = Some(uri.into());
		self
	}

	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = Some(headers);
		self
	}

	pub fn header(mut self, name: &str, value: &str) -> Self {
		let headers = self.headers.get_or_insert_with(HeaderMap::new);
		if let (Ok(name), Ok(value)) = (
			hyper::header::HeaderName::from_bytes(name.as_bytes()),
			hyper::header::HeaderValue::from_str(value),
		) {
			headers.append(name, value);
		}
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = Some(body.into());
		self
	}

	pub fn remote_addr(mut self, addr: SocketAddr) -> Self {
		self.remote_addr = Some(addr);
		self
	}

	pub fn build(self) -> Result<Request> {
		let uri: Uri = self
			.uri
			.unwrap_or_else(|| "/".to_string())
			.parse()
			.map_err(|e: hyper::http::uri::InvalidUri| Error::BadRequest(e.to_string()))?;
		let mut request = Request::new(
			self.method.unwrap_or(Method::GET),
			uri,
			Version::HTTP_11,
			self.headers.unwrap_or_default(),
			self.body.unwrap_or_default(),
		);
		request.remote_addr = self.remote_addr;
		Ok(request)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_query_params_preserve_equals_in_values() {
		let request = Request::builder()
			.uri("/doc?token=a=b&plain=1")
			.build()
			.unwrap();
		assert_eq!(request.query_params().get("token").unwrap(), "a=b");
		assert_eq!(request.query_params().get("plain").unwrap(), "1");
	}

	#[test]
	fn test_header_values_ignore_case() {
		let request = Request::builder()
			.uri("/doc")
			.header("Accept", "text/turtle")
			.build()
			.unwrap();
		assert_eq!(request.header_values("accept"), vec!["text/turtle"]);
		assert_eq!(request.header_values("ACCEPT"), vec!["text/turtle"]);
	}

	#[test]
	fn test_form_param() {
		let request = Request::builder()
			.method(Method::POST)
			.uri("/")
			.body("pad=http%3A%2F%2Ftypewith.me%2Fp%2Flodum")
			.build()
			.unwrap();
		assert_eq!(
			request.form_param("pad").unwrap().as_deref(),
			Some("http://typewith.me/p/lodum")
		);
		assert_eq!(request.form_param("missing").unwrap(), None);
	}
}
