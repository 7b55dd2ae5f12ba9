//! Environment-based configuration.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Prefix for every environment variable this service reads.
const ENV_PREFIX: &str = "PADRDF_";

/// Runtime configuration.
///
/// Read once at startup from `PADRDF_`-prefixed environment variables;
/// every field has a default so the binary runs with no configuration at
/// all.
#[derive(Debug, Clone)]
pub struct Settings {
	/// Listen port (`PADRDF_PORT`, default 8080). A port given as the
	/// first command line argument wins over the environment.
	pub port: u16,
	/// Directory served under the `/files` prefix
	/// (`PADRDF_STATIC_DIR`, default `files`).
	pub static_dir: PathBuf,
	/// Timeout for the outbound pad fetch
	/// (`PADRDF_FETCH_TIMEOUT_SECS`, default 10).
	pub fetch_timeout: Duration,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			port: 8080,
			static_dir: PathBuf::from("files"),
			fetch_timeout: Duration::from_secs(10),
		}
	}
}

/// A setting that was present but unusable.
#[derive(Debug, Error)]
#[error("invalid value {value:?} for {key}")]
pub struct SettingsError {
	pub key: String,
	pub value: String,
}

fn env_var(key: &str) -> Option<String> {
	std::env::var(format!("{}{}", ENV_PREFIX, key)).ok()
}

fn parsed<T: std::str::FromStr>(key: &str, default: T) -> Result<T, SettingsError> {
	match env_var(key) {
		Some(value) => value.parse().map_err(|_| SettingsError {
			key: format!("{}{}", ENV_PREFIX, key),
			value,
		}),
		None => Ok(default),
	}
}

impl Settings {
	/// Load settings from the environment, falling back to defaults.
	pub fn from_env() -> Result<Self, SettingsError> {
		let defaults = Self::default();
		Ok(Self {
			port: parsed("PORT", defaults.port)?,
			static_dir: env_var("STATIC_DIR")
				.map(PathBuf::from)
				.unwrap_or(defaults.static_dir),
			fetch_timeout: Duration::from_secs(parsed(
				"FETCH_TIMEOUT_SECS",
				defaults.fetch_timeout.as_secs(),
			)?),
		})
	}
}
