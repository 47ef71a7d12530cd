use thiserror::Error;

/// Errors raised while setting up the provider
#[derive(Debug, Error)]
pub enum ProviderError {
	/// Configuration is missing or invalid
	#[error("Configuration error: {0}")]
	Config(String),

	/// Configuration file could not be read
	#[error("Failed to read configuration file: {0}")]
	Io(#[from] std::io::Error),

	/// Configuration file is not valid TOML
	#[error("Failed to parse configuration: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Result type for provider setup
pub type Result<T> = std::result::Result<T, ProviderError>;
