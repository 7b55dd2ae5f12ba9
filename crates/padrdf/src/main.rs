use padrdf::{PadFetcher, PadProxy, Settings};
use padrdf_server::{HttpServer, StaticFiles};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let mut settings = Settings::from_env()?;
	// The port may also be given as the single command line argument.
	if let Some(port) = std::env::args().nth(1) {
		settings.port = port.parse()?;
	}

	let fetcher = PadFetcher::new(settings.fetch_timeout)?;
	let statics = StaticFiles::new("/files", &settings.static_dir);
	let proxy = PadProxy::new(Arc::new(fetcher), statics);

	let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
	HttpServer::new(Arc::new(proxy)).listen(addr).await
}
