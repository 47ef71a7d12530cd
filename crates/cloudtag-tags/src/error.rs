use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Remote call the engine was performing when a service error surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
	Create,
	List,
	Modify,
	Delete,
}

impl fmt::Display for Operation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Operation::Create => write!(f, "create"),
			Operation::List => write!(f, "list"),
			Operation::Modify => write!(f, "modify"),
			Operation::Delete => write!(f, "delete"),
		}
	}
}

/// Errors returned by a [`TagService`](crate::TagService) implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
	/// Could not reach the service
	#[error("connection failed: {0}")]
	Connection(String),

	/// The request did not complete in time
	#[error("request timed out after {0:?}")]
	Timeout(Duration),

	/// Credentials were rejected
	#[error("authentication failed: {0}")]
	Authentication(String),

	/// Credentials are valid but lack the required permission
	#[error("not authorized: {0}")]
	Forbidden(String),

	/// A tag with the same name already exists
	#[error("conflict: {0}")]
	Conflict(String),

	/// The addressed tag does not exist on the service
	#[error("tag not found on service: {0}")]
	NotFound(String),

	/// Server-side validation or other rejection
	#[error("rejected by service ({code}): {message}")]
	Rejected { code: String, message: String },

	/// The service is temporarily unable to answer
	#[error("service unavailable: {0}")]
	Unavailable(String),
}

impl ServiceError {
	/// Whether repeating the same request may succeed.
	///
	/// Only consulted by service-layer decorators; the reconciliation engine
	/// never retries.
	pub fn is_transient(&self) -> bool {
		matches!(
			self,
			ServiceError::Connection(_) | ServiceError::Timeout(_) | ServiceError::Unavailable(_)
		)
	}
}

/// A declared attribute violates its static constraints
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for '{attribute}': {message}")]
pub struct ValidationError {
	pub attribute: &'static str,
	pub message: String,
}

impl ValidationError {
	pub fn new(attribute: &'static str, message: impl Into<String>) -> Self {
		Self {
			attribute,
			message: message.into(),
		}
	}
}

/// Errors produced by the reconciliation engine
#[derive(Debug, Error)]
pub enum TagError {
	/// Declared state failed validation before any remote call
	#[error(transparent)]
	Validation(#[from] ValidationError),

	/// The remote service reported a failure
	#[error("failed to {operation} tag '{id}': {source}")]
	Remote {
		operation: Operation,
		id: String,
		#[source]
		source: ServiceError,
	},

	/// No tag with this identity exists in the remote listing
	#[error("Unable to locate tag named {0}")]
	NotFound(String),

	/// An immutable attribute was asked to change in place
	#[error("attribute '{attribute}' cannot be changed in place (from '{prior}' to '{requested}')")]
	ImmutableField {
		attribute: &'static str,
		prior: String,
		requested: String,
	},
}

impl TagError {
	pub(crate) fn remote(operation: Operation, id: impl Into<String>, source: ServiceError) -> Self {
		TagError::Remote {
			operation,
			id: id.into(),
			source,
		}
	}

	/// True when the tag is simply absent remotely, which callers treat as
	/// recoverable rather than fatal.
	pub fn is_not_found(&self) -> bool {
		matches!(self, TagError::NotFound(_))
	}

	/// Remote call that failed, if this came from the service
	pub fn operation(&self) -> Option<Operation> {
		match self {
			TagError::Remote { operation, .. } => Some(*operation),
			_ => None,
		}
	}

	/// Tag identity the failure refers to, when one was already known
	pub fn identity(&self) -> Option<&str> {
		match self {
			TagError::Remote { id, .. } | TagError::NotFound(id) => Some(id),
			_ => None,
		}
	}

	/// The underlying service error, if this came from a remote call
	pub fn service_error(&self) -> Option<&ServiceError> {
		match self {
			TagError::Remote { source, .. } => Some(source),
			_ => None,
		}
	}
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, TagError>;

/// Result type for [`TagService`](crate::TagService) calls
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
