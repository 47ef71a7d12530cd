//! Static constraints on declared tag attributes
//!
//! Checked at the configuration boundary, before any remote call.

use std::sync::LazyLock;

use regex::Regex;

use crate::ValidationError;
use crate::models::Tag;

pub const NAME_MIN_LEN: usize = 1;
pub const NAME_MAX_LEN: usize = 32;
pub const DESCRIPTION_MAX_LEN: usize = 255;

/// Unanchored: a name needs at least one of these characters, not only these.
/// Separators such as `-` are accepted, as the platform itself accepts them.
static NAME_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[a-zA-Z0-9_]").expect("tag name pattern is valid"));

/// Validate a tag name: 1 to 32 characters, at least one of them from
/// `[a-zA-Z0-9_]`.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
	let len = name.chars().count();
	if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
		return Err(ValidationError::new(
			"name",
			format!("expected length between {NAME_MIN_LEN} and {NAME_MAX_LEN}, got {len}"),
		));
	}
	if !NAME_RE.is_match(name) {
		return Err(ValidationError::new(
			"name",
			format!("'{name}' must contain a letter, digit or underscore"),
		));
	}
	Ok(())
}

/// Validate a description: at most 255 characters.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
	let len = description.chars().count();
	if len > DESCRIPTION_MAX_LEN {
		return Err(ValidationError::new(
			"description",
			format!("expected length between 0 and {DESCRIPTION_MAX_LEN}, got {len}"),
		));
	}
	Ok(())
}

/// Validate every constrained attribute of a declared tag.
pub fn validate_tag(tag: &Tag) -> Result<(), ValidationError> {
	validate_name(&tag.name)?;
	validate_description(&tag.description)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("a")]
	#[case("env_prod")]
	#[case("Web01")]
	#[case("abcdefghijklmnopqrstuvwxyz012345")]
	#[case("env-prod")]
	#[case("team.web")]
	fn accepts_valid_names(#[case] name: &str) {
		// Act & Assert
		assert!(validate_name(name).is_ok());
	}

	#[rstest]
	#[case("")]
	#[case("abcdefghijklmnopqrstuvwxyz0123456")]
	#[case("---")]
	#[case("   ")]
	#[case("é.ü")]
	fn rejects_invalid_names(#[case] name: &str) {
		// Act
		let error = validate_name(name).unwrap_err();

		// Assert
		assert_eq!(error.attribute, "name");
	}

	#[rstest]
	fn description_length_boundary() {
		// Arrange
		let at_limit = "x".repeat(DESCRIPTION_MAX_LEN);
		let over_limit = "x".repeat(DESCRIPTION_MAX_LEN + 1);

		// Act & Assert
		assert!(validate_description("").is_ok());
		assert!(validate_description(&at_limit).is_ok());
		assert_eq!(
			validate_description(&over_limit).unwrap_err().attribute,
			"description"
		);
	}

	#[rstest]
	fn validate_tag_checks_name_first() {
		// Arrange
		let tag = Tag::new("--").with_description("x".repeat(300));

		// Act
		let error = validate_tag(&tag).unwrap_err();

		// Assert
		assert_eq!(error.attribute, "name");
	}
}
