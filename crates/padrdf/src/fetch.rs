//! Fetching pad contents from the collaborative-editing host.

use std::time::Duration;
use url::Url;

use crate::error::PadError;

/// A fetched document plus the URL it actually came from.
///
/// The source URL doubles as the base IRI for parsing, so relative IRIs in
/// a pad resolve against its export location.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
	pub source_url: String,
	pub body: String,
}

/// Resolves a proxied document path to its raw text.
///
/// The router only knows this trait; tests drive it with a stub instead of
/// a live pad host.
#[async_trait::async_trait]
pub trait ContentFetcher: Send + Sync {
	async fn fetch(&self, doc_path: &str) -> Result<FetchedDocument, PadError>;
}

/// The real fetcher: reconstructs the pad URL from the proxied path and
/// retrieves the pad's plain-text export over HTTP.
pub struct PadFetcher {
	client: reqwest::Client,
}

impl PadFetcher {
	/// Build a fetcher whose requests all carry the given timeout.
	pub fn new(timeout: Duration) -> Result<Self, PadError> {
		let client = reqwest::Client::builder().timeout(timeout).build()?;
		Ok(Self { client })
	}

	/// Reconstruct the pad URL from a proxied document path.
	///
	/// The path mirrors the pad URL without its scheme: `/host[:port]/p/name`
	/// came from `http://host[:port]/p/name`.
	fn pad_url(doc_path: &str) -> Result<Url, PadError> {
		Url::parse(&format!("http:/{}", doc_path))
			.map_err(|e| PadError::InvalidPadLocation(e.to_string()))
	}

	/// Choose the export endpoint for a pad.
	///
	/// The older hosts expose `/ep/pad/export/<pad>/latest?format=txt`, the
	/// newer ones `/p/<pad>/export/txt`. The first variant is probed with a
	/// HEAD request; when it is unreachable or reports no content length,
	/// the second one is used. The export host never carries a port.
	async fn export_url(&self, pad_url: &Url) -> Result<String, PadError> {
		let host = pad_url
			.host_str()
			.ok_or_else(|| PadError::InvalidPadLocation("the pad location has no host".to_string()))?;
		let pad_name = pad_url
			.path_segments()
			.and_then(|segments| segments.filter(|s| !s.is_empty()).last())
			.ok_or_else(|| {
				PadError::InvalidPadLocation("the pad location has no pad name".to_string())
			})?;

		let primary = format!(
			"http://{}/ep/pad/export/{}/latest?format=txt",
			host, pad_name
		);
		match self.client.head(&primary).send().await {
			Ok(response) if response.status().is_success() && response.content_length().is_some() => {
				Ok(primary)
			}
			_ => Ok(format!("http://{}/p/{}/export/txt", host, pad_name)),
		}
	}
}

#[async_trait::async_trait]
impl ContentFetcher for PadFetcher {
	async fn fetch(&self, doc_path: &str) -> Result<FetchedDocument, PadError> {
		let pad_url = Self::pad_url(doc_path)?;
		let source_url = self.export_url(&pad_url).await?;
		tracing::debug!(%pad_url, source_url, "fetching pad export");

		let response = self
			.client
			.get(&source_url)
			.send()
			.await?
			.error_for_status()?;
		let body = response.text().await?;

		Ok(FetchedDocument { source_url, body })
	}
}
