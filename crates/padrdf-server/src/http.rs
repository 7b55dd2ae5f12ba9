//! The hyper http1 connection loop.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::Service;
use hyper_util::rt::TokioIo;
use padrdf_http::{Request, Response};
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};

/// A request handler.
///
/// The server collects each request body, hands the handler an owned
/// [`Request`], and writes the returned [`Response`] back out. Handler
/// errors become bare status responses; they never tear down the
/// connection loop.
#[async_trait::async_trait]
pub trait Handler: Send + Sync {
	async fn handle(&self, request: Request) -> padrdf_http::Result<Response>;
}

/// HTTP server around a single handler.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use std::net::SocketAddr;
/// use padrdf_server::{Handler, HttpServer};
/// use padrdf_http::{Request, Response};
///
/// struct Hello;
///
/// #[async_trait::async_trait]
/// impl Handler for Hello {
///     async fn handle(&self, _request: Request) -> padrdf_http::Result<Response> {
///         Ok(Response::ok().with_body("hello"))
///     }
/// }
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
/// let addr: SocketAddr = "127.0.0.1:8080".parse()?;
/// HttpServer::new(Arc::new(Hello)).listen(addr).await?;
/// # Ok(())
/// # }
/// ```
pub struct HttpServer {
	handler: Arc<dyn Handler>,
}

impl HttpServer {
	/// Create a server for the given handler.
	pub fn new(handler: Arc<dyn Handler>) -> Self {
		Self { handler }
	}

	/// Bind the address and accept connections until an accept error.
	///
	/// Each connection runs in its own tokio task; per-request state lives
	/// and dies inside that task.
	pub async fn listen(
		self,
		addr: SocketAddr,
	) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
		let listener = TcpListener::bind(addr).await?;
		tracing::info!(%addr, "listening");

		loop {
			let (stream, remote_addr) = listener.accept().await?;
			let handler = self.handler.clone();

			tokio::task::spawn(async move {
				if let Err(err) = handle_connection(stream, remote_addr, handler).await {
					tracing::error!(%remote_addr, error = %err, "connection failed");
				}
			});
		}
	}
}

/// Serve one TCP connection with hyper's http1 implementation.
async fn handle_connection(
	stream: TcpStream,
	remote_addr: SocketAddr,
	handler: Arc<dyn Handler>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let io = TokioIo::new(stream);
	let service = RequestService {
		handler,
		remote_addr,
	};

	http1::Builder::new().serve_connection(io, service).await?;

	Ok(())
}

/// Service adapter between hyper and the [`Handler`] trait.
struct RequestService {
	handler: Arc<dyn Handler>,
	remote_addr: SocketAddr,
}

impl Service<hyper::Request<Incoming>> for RequestService {
	type Response = hyper::Response<Full<Bytes>>;
	type Error = Box<dyn std::error::Error + Send + Sync>;
	type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

	fn call(&self, req: hyper::Request<Incoming>) -> Self::Future {
		let handler = self.handler.clone();
		let remote_addr = self.remote_addr;

		Box::pin(async move {
			let (parts, body) = req.into_parts();
			let body_bytes = body.collect().await?.to_bytes();

			let mut request = Request::new(
				parts.method,
				parts.uri,
				parts.version,
				parts.headers,
				body_bytes,
			);
			request.remote_addr = Some(remote_addr);

			let response = handler
				.handle(request)
				.await
				.unwrap_or_else(Response::from);

			let mut hyper_response = hyper::Response::builder().status(response.status);
			for (key, value) in response.headers.iter() {
				hyper_response = hyper_response.header(key, value);
			}

			Ok(hyper_response.body(Full::new(response.body))?)
		})
	}
}
