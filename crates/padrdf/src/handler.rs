//! The request router: one request in, one outcome out.

use hyper::Method;
use padrdf_core::{DocumentDialect, Outcome, OutputFormat, resolve, resolve_pad_submission};
use padrdf_http::{Request, Response};
use padrdf_server::{Handler, StaticFiles};
use std::sync::Arc;

use crate::error::PadError;
use crate::fetch::ContentFetcher;
use crate::pages;
use crate::rdf::{Graph, engine};

/// The proxy handler.
///
/// Static-file requests are passed through to the asset service; POSTed pad
/// locations become redirects under this server's base URL; everything else
/// runs through the resolver and, for render outcomes, the
/// fetch, parse and serialize pipeline. All fetch and parse failures end on
/// the error form; none of them escape as handler errors.
pub struct PadProxy {
	fetcher: Arc<dyn ContentFetcher>,
	statics: StaticFiles,
}

impl PadProxy {
	pub fn new(fetcher: Arc<dyn ContentFetcher>, statics: StaticFiles) -> Self {
		Self { fetcher, statics }
	}

	/// The error-flagged form, built for the pad this request talks about.
	fn error_form(&self, request: &Request, message: &str) -> Response {
		let doc_path = request.path().split(".htm").next().unwrap_or("");
		Response::html(pages::form_page(
			&request.base_url(),
			doc_path,
			message,
			true,
		))
	}

	/// Forward a submitted pad location to its proxied URL.
	fn handle_submission(&self, request: &Request) -> Response {
		let pad = match request.form_param("pad") {
			Ok(pad) => pad,
			Err(err) => {
				return self.error_form(request, &err.to_string());
			}
		};
		match resolve_pad_submission(pad.as_deref()) {
			Ok(target) => Response::found(request.build_absolute_url(&target)),
			Err(message) => {
				tracing::warn!(message, "pad submission rejected");
				self.error_form(request, &message)
			}
		}
	}

	/// Fetch and parse the document behind a proxied path.
	///
	/// Pad exports are plain text read as Turtle; the dialect is passed
	/// explicitly, so the sniffer stays out of this path and the Turtle
	/// parser's own error reports any mismatch.
	async fn load_graph(&self, doc_path: &str) -> Result<Graph, PadError> {
		let document = self.fetcher.fetch(doc_path).await?;
		engine::parse(&document.body, &document.source_url, DocumentDialect::Turtle)
	}

	async fn render_table(&self, request: &Request, doc_path: &str) -> Response {
		match self.load_graph(doc_path).await {
			Ok(graph) => {
				Response::html(pages::table_page(&graph, &request.base_url(), doc_path))
			}
			Err(err) => {
				tracing::warn!(doc_path, error = %err, "table rendering failed");
				self.error_form(request, &err.to_string())
			}
		}
	}

	async fn render_serialization(
		&self,
		request: &Request,
		format: OutputFormat,
		doc_path: &str,
	) -> Response {
		let result = match self.load_graph(doc_path).await {
			Ok(graph) => engine::serialize(&graph, format),
			Err(err) => Err(err),
		};
		match result {
			Ok(body) => Response::ok()
				.with_content_type(format.content_type())
				.with_body(body),
			Err(err) => {
				tracing::warn!(doc_path, error = %err, "serialization failed");
				self.error_form(request, &err.to_string())
			}
		}
	}
}

#[async_trait::async_trait]
impl Handler for PadProxy {
	async fn handle(&self, request: Request) -> padrdf_http::Result<Response> {
		// Static assets never reach negotiation.
		if self.statics.matches(request.path()) {
			return self.statics.handle(request).await;
		}

		if request.method == Method::POST {
			return Ok(self.handle_submission(&request));
		}

		let accept_lines = request.header_values("accept");
		let accept_param = request.query_param("accept");
		let outcome = resolve(request.path(), &accept_lines, accept_param.as_deref());
		tracing::info!(method = %request.method, path = request.path(), outcome = outcome_name(&outcome), "request");

		Ok(match outcome {
			Outcome::ShowForm { message, error } => Response::html(pages::form_page(
				&request.base_url(),
				request.path(),
				&message,
				error,
			)),
			Outcome::NotFound => Response::not_found().with_body("404 Not Found"),
			Outcome::Redirect { suffix } => {
				let location = format!("{}{}", request.build_absolute_url(request.path()), suffix);
				Response::see_other(location)
			}
			Outcome::Render {
				format: OutputFormat::Html,
				doc_path,
			} => self.render_table(&request, &doc_path).await,
			Outcome::Render { format, doc_path } => {
				self.render_serialization(&request, format, &doc_path).await
			}
		})
	}
}

/// Stable label for logging an outcome without its payload.
fn outcome_name(outcome: &Outcome) -> &'static str {
	match outcome {
		Outcome::ShowForm { .. } => "show-form",
		Outcome::Redirect { .. } => "redirect",
		Outcome::Render { .. } => "render",
		Outcome::NotFound => "not-found",
	}
}
