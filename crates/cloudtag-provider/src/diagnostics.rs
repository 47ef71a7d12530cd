//! Diagnostics reported back to the configuration engine
//!
//! Every [`TagError`] is translated here without changing its meaning. For
//! remote failures the summary names the operation and tag and the detail
//! carries the service error, so the cause appears exactly once.

use std::fmt;

use cloudtag_tags::{TagError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	Error,
	Warning,
}

/// A single message for the configuration engine's diagnostic channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	pub severity: Severity,
	pub summary: String,
	pub detail: Option<String>,
	/// Attribute the message is about, if any
	pub attribute: Option<String>,
}

impl Diagnostic {
	pub fn error(summary: impl Into<String>) -> Self {
		Self {
			severity: Severity::Error,
			summary: summary.into(),
			detail: None,
			attribute: None,
		}
	}

	pub fn warning(summary: impl Into<String>) -> Self {
		Self {
			severity: Severity::Warning,
			..Self::error(summary)
		}
	}

	pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
		self.detail = Some(detail.into());
		self
	}

	pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
		self.attribute = Some(attribute.into());
		self
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let level = match self.severity {
			Severity::Error => "Error",
			Severity::Warning => "Warning",
		};
		write!(f, "{level}: {}", self.summary)?;
		if let Some(detail) = &self.detail {
			write!(f, ": {detail}")?;
		}
		Ok(())
	}
}

impl From<&ValidationError> for Diagnostic {
	fn from(error: &ValidationError) -> Self {
		Diagnostic::error(error.to_string()).with_attribute(error.attribute)
	}
}

impl From<&TagError> for Diagnostic {
	fn from(error: &TagError) -> Self {
		match error {
			TagError::Validation(validation) => Diagnostic::from(validation),
			TagError::ImmutableField { attribute, .. } => {
				Diagnostic::error(error.to_string()).with_attribute(*attribute)
			}
			TagError::Remote {
				operation,
				id,
				source,
			} => Diagnostic::error(format!("failed to {operation} tag '{id}'"))
				.with_detail(source.to_string()),
			TagError::NotFound(_) => Diagnostic::error(error.to_string()),
		}
	}
}

/// Ordered collection of diagnostics returned by each lifecycle hook.
///
/// An empty collection means success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, diagnostic: Diagnostic) {
		self.0.push(diagnostic);
	}

	pub fn has_error(&self) -> bool {
		self.0.iter().any(|d| d.severity == Severity::Error)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
		self.0.iter()
	}

	pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
		self.0.iter().filter(|d| d.severity == Severity::Error)
	}
}

impl From<Diagnostic> for Diagnostics {
	fn from(diagnostic: Diagnostic) -> Self {
		Self(vec![diagnostic])
	}
}

impl From<TagError> for Diagnostics {
	fn from(error: TagError) -> Self {
		Diagnostic::from(&error).into()
	}
}

impl From<ValidationError> for Diagnostics {
	fn from(error: ValidationError) -> Self {
		Diagnostic::from(&error).into()
	}
}

impl IntoIterator for Diagnostics {
	type Item = Diagnostic;
	type IntoIter = std::vec::IntoIter<Diagnostic>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}
