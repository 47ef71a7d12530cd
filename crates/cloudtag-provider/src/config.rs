//! Provider configuration.
//!
//! Settings come from a TOML file, environment variables, or both (the
//! environment wins). Credentials are handed to the transport that implements
//! [`TagService`](cloudtag_tags::TagService); timeouts and retry bounds drive
//! [`RetryingTagService`](crate::RetryingTagService).

use std::env;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;

use crate::{ProviderError, Result};

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_RETRY_MAX: u32 = 4;
pub const DEFAULT_RETRY_WAIT_MIN_SECS: u64 = 1;
pub const DEFAULT_RETRY_WAIT_MAX_SECS: u64 = 30;

/// Retry bounds for transient service errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
	/// Additional attempts after the first one.
	pub max_retries: u32,
	pub wait_min: Duration,
	pub wait_max: Duration,
}

impl Default for RetryConfig {
	fn default() -> Self {
		Self {
			max_retries: DEFAULT_RETRY_MAX,
			wait_min: Duration::from_secs(DEFAULT_RETRY_WAIT_MIN_SECS),
			wait_max: Duration::from_secs(DEFAULT_RETRY_WAIT_MAX_SECS),
		}
	}
}

/// Provider settings.
#[derive(Debug)]
pub struct ProviderConfig {
	pub username: String,
	pub password: SecretString,
	/// Upper bound for a single service call.
	pub request_timeout: Duration,
	pub retry: RetryConfig,
}

/// File/environment shape before defaults and validation.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
	username: Option<String>,
	password: Option<String>,
	request_timeout_sec: Option<u64>,
	retry_max: Option<u32>,
	retry_wait_min_sec: Option<u64>,
	retry_wait_max_sec: Option<u64>,
}

impl ProviderConfig {
	/// Parse settings from TOML text, without consulting the environment.
	///
	/// # Examples
	///
	/// ```rust
	/// use cloudtag_provider::ProviderConfig;
	///
	/// let config = ProviderConfig::from_toml_str(r#"
	///     username = "automation"
	///     password = "hunter2"
	///     retry_max = 2
	/// "#).unwrap();
	///
	/// assert_eq!(config.retry.max_retries, 2);
	/// ```
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let raw: RawConfig = toml::from_str(content)?;
		raw.build()
	}

	/// Load settings from a TOML file, then apply environment overrides.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let content = std::fs::read_to_string(path)?;
		let mut raw: RawConfig = toml::from_str(&content)?;
		raw.apply_env()?;
		raw.build()
	}

	/// Load settings from environment variables only.
	///
	/// # Environment Variables
	///
	/// - `CLOUDTAG_USERNAME` (required)
	/// - `CLOUDTAG_PASSWORD` (required)
	/// - `CLOUDTAG_REQUEST_TIMEOUT_SEC`
	/// - `CLOUDTAG_RETRY_MAX`
	/// - `CLOUDTAG_RETRY_WAIT_MIN_SEC`
	/// - `CLOUDTAG_RETRY_WAIT_MAX_SEC`
	pub fn from_env() -> Result<Self> {
		let mut raw = RawConfig::default();
		raw.apply_env()?;
		raw.build()
	}
}

impl RawConfig {
	fn apply_env(&mut self) -> Result<()> {
		if let Some(username) = env_string("CLOUDTAG_USERNAME") {
			self.username = Some(username);
		}
		if let Some(password) = env_string("CLOUDTAG_PASSWORD") {
			self.password = Some(password);
		}
		if let Some(timeout) = env_number("CLOUDTAG_REQUEST_TIMEOUT_SEC")? {
			self.request_timeout_sec = Some(timeout);
		}
		if let Some(max) = env_number("CLOUDTAG_RETRY_MAX")? {
			self.retry_max = Some(max);
		}
		if let Some(min) = env_number("CLOUDTAG_RETRY_WAIT_MIN_SEC")? {
			self.retry_wait_min_sec = Some(min);
		}
		if let Some(max) = env_number("CLOUDTAG_RETRY_WAIT_MAX_SEC")? {
			self.retry_wait_max_sec = Some(max);
		}
		Ok(())
	}

	fn build(self) -> Result<ProviderConfig> {
		let username = self
			.username
			.filter(|u| !u.is_empty())
			.ok_or_else(|| ProviderError::Config("username must be set".to_string()))?;
		let password = self
			.password
			.filter(|p| !p.is_empty())
			.ok_or_else(|| ProviderError::Config("password must be set".to_string()))?;

		let timeout_secs = self
			.request_timeout_sec
			.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
		if timeout_secs == 0 {
			return Err(ProviderError::Config(
				"request_timeout_sec must be greater than zero".to_string(),
			));
		}

		let wait_min = self
			.retry_wait_min_sec
			.unwrap_or(DEFAULT_RETRY_WAIT_MIN_SECS);
		let wait_max = self
			.retry_wait_max_sec
			.unwrap_or(DEFAULT_RETRY_WAIT_MAX_SECS);
		if wait_min > wait_max {
			return Err(ProviderError::Config(format!(
				"retry_wait_min_sec ({wait_min}) exceeds retry_wait_max_sec ({wait_max})"
			)));
		}

		Ok(ProviderConfig {
			username,
			password: SecretString::from(password),
			request_timeout: Duration::from_secs(timeout_secs),
			retry: RetryConfig {
				max_retries: self.retry_max.unwrap_or(DEFAULT_RETRY_MAX),
				wait_min: Duration::from_secs(wait_min),
				wait_max: Duration::from_secs(wait_max),
			},
		})
	}
}

fn env_string(name: &str) -> Option<String> {
	env::var(name).ok().filter(|value| !value.is_empty())
}

fn env_number<T: FromStr>(name: &str) -> Result<Option<T>> {
	match env_string(name) {
		None => Ok(None),
		Some(value) => value.parse::<T>().map(Some).map_err(|_| {
			ProviderError::Config(format!("{name} must be a non-negative integer, got '{value}'"))
		}),
	}
}
