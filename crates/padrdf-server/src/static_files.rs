//! Static asset hosting under a reserved path prefix.

use padrdf_http::{Request, Response};
use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};

use crate::http::Handler;

/// Serves files from a directory under a fixed URL prefix.
///
/// Requests under the prefix never reach content negotiation; anything that
/// decodes to a parent-directory component, escapes the root, or does not
/// exist answers 404.
pub struct StaticFiles {
	prefix: String,
	root: PathBuf,
}

impl StaticFiles {
	/// Create a service for `prefix` (for example `/files`) rooted at `root`.
	pub fn new(prefix: impl Into<String>, root: impl Into<PathBuf>) -> Self {
		Self {
			prefix: prefix.into(),
			root: root.into(),
		}
	}

	/// Whether this request path belongs to the static prefix.
	pub fn matches(&self, path: &str) -> bool {
		path.starts_with(&self.prefix)
	}

	/// Resolve a URL path to a file below the root, or refuse it.
	fn resolve(&self, path: &str) -> Option<PathBuf> {
		let relative = path.strip_prefix(&self.prefix)?.trim_start_matches('/');
		if relative.is_empty() {
			return None;
		}

		let mut resolved = self.root.clone();
		for segment in relative.split('/') {
			let segment = percent_decode_str(segment).decode_utf8().ok()?;
			// Dot segments and absolute components would escape the root.
			if segment.is_empty()
				|| segment == "."
				|| segment == ".."
				|| segment.contains(['/', '\\'])
			{
				return None;
			}
			resolved.push(segment.as_ref());
		}
		Some(resolved)
	}

	/// Serve one request path.
	pub async fn serve(&self, path: &str) -> Response {
		let Some(file_path) = self.resolve(path) else {
			return Response::not_found();
		};

		match tokio::fs::read(&file_path).await {
			Ok(contents) => Response::ok()
				.with_content_type(content_type_for(&file_path))
				.with_body(contents),
			Err(err) => {
				tracing::debug!(path, error = %err, "static file miss");
				Response::not_found()
			}
		}
	}
}

#[async_trait::async_trait]
impl Handler for StaticFiles {
	async fn handle(&self, request: Request) -> padrdf_http::Result<Response> {
		Ok(self.serve(request.path()).await)
	}
}

/// MIME type by file extension.
fn content_type_for(path: &Path) -> &'static str {
	match path
		.extension()
		.and_then(|e| e.to_str())
		.unwrap_or("")
		.to_ascii_lowercase()
		.as_str()
	{
		"css" => "text/css",
		"html" | "htm" => "text/html; charset=UTF-8",
		"js" => "text/javascript",
		"png" => "image/png",
		"gif" => "image/gif",
		"jpg" | "jpeg" => "image/jpeg",
		"svg" => "image/svg+xml",
		"ico" => "image/x-icon",
		"txt" => "text/plain; charset=UTF-8",
		_ => "application/octet-stream",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hyper::StatusCode;

	#[tokio::test]
	async fn test_serves_existing_file_with_mime_type() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("style.css"), "body { color: black; }").unwrap();

		let statics = StaticFiles::new("/files", dir.path());
		let response = statics.serve("/files/style.css").await;
		assert_eq!(response.status, StatusCode::OK);
		assert_eq!(
			response.headers.get("content-type").unwrap().to_str().unwrap(),
			"text/css"
		);
	}

	#[tokio::test]
	async fn test_missing_file_is_not_found() {
		let dir = tempfile::tempdir().unwrap();
		let statics = StaticFiles::new("/files", dir.path());
		let response = statics.serve("/files/nope.png").await;
		assert_eq!(response.status, StatusCode::NOT_FOUND);
	}

	#[tokio::test]
	async fn test_traversal_is_refused() {
		let dir = tempfile::tempdir().unwrap();
		let statics = StaticFiles::new("/files", dir.path());
		for path in [
			"/files/../secret.txt",
			"/files/%2e%2e/secret.txt",
			"/files/",
		] {
			let response = statics.serve(path).await;
			assert_eq!(response.status, StatusCode::NOT_FOUND, "{}", path);
		}
	}

	#[test]
	fn test_prefix_matching() {
		let statics = StaticFiles::new("/files", "files");
		assert!(statics.matches("/files/logo.png"));
		assert!(!statics.matches("/pad/files"));
	}
}
