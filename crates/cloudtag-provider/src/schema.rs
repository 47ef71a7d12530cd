//! Tag resource schema and the typed boundary over [`ResourceData`]
//!
//! Attribute values are pulled out of the untyped accessors exactly once, into
//! a [`Tag`], and validated there. Nothing past this module sees an
//! [`AttributeValue`].

use std::collections::BTreeSet;

use cloudtag_tags::validation::validate_tag;
use cloudtag_tags::{Tag, ValidationError};

use crate::resource_data::{AttributeValue, ResourceData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
	String,
	StringSet,
}

/// Declaration of one resource attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSchema {
	pub name: &'static str,
	pub kind: AttributeKind,
	pub required: bool,
	/// Changing the value requires destroying and recreating the resource.
	pub force_new: bool,
	pub description: &'static str,
}

pub const TAG_SCHEMA: &[AttributeSchema] = &[
	AttributeSchema {
		name: "name",
		kind: AttributeKind::String,
		required: true,
		force_new: true,
		description: "The value representing the tag",
	},
	AttributeSchema {
		name: "description",
		kind: AttributeKind::String,
		required: false,
		force_new: false,
		description: "Free form text representing the meaning of the tag",
	},
	AttributeSchema {
		name: "servers",
		kind: AttributeKind::StringSet,
		required: false,
		force_new: false,
		description: "A collection of servers that have been assigned the tag",
	},
];

/// First force-new attribute whose planned value differs from the prior one.
pub fn requires_replacement<D: ResourceData + ?Sized>(data: &D) -> Option<&'static str> {
	TAG_SCHEMA
		.iter()
		.filter(|attribute| attribute.force_new)
		.find(|attribute| data.has_change(attribute.name))
		.map(|attribute| attribute.name)
}

/// Typed, validated tag from the planned attribute values.
pub fn planned_tag<D: ResourceData + ?Sized>(data: &D) -> Result<Tag, ValidationError> {
	let tag = tag_from(|key| data.get(key))?;
	validate_tag(&tag)?;
	Ok(tag)
}

/// Typed tag from the prior attribute values.
///
/// Prior values were written from remote state and are not re-validated.
pub fn prior_tag<D: ResourceData + ?Sized>(data: &D) -> Result<Tag, ValidationError> {
	tag_from(|key| data.get_change(key).0)
}

/// Record a stored tag as the resource's state, the baseline for the next
/// diff.
pub fn write_tag<D: ResourceData + ?Sized>(data: &mut D, tag: &Tag) {
	data.set("name", AttributeValue::String(tag.name.clone()));
	data.set("description", AttributeValue::String(tag.description.clone()));
	data.set("servers", AttributeValue::StringSet(tag.servers.clone()));
}

fn tag_from<'a, F>(lookup: F) -> Result<Tag, ValidationError>
where
	F: Fn(&str) -> Option<&'a AttributeValue>,
{
	let name = string_attribute(lookup("name"), "name")?
		.ok_or_else(|| ValidationError::new("name", "attribute is required"))?;
	let description = string_attribute(lookup("description"), "description")?.unwrap_or_default();
	let servers = set_attribute(lookup("servers"), "servers")?.unwrap_or_default();

	Ok(Tag {
		name,
		description,
		servers,
	})
}

fn string_attribute(
	value: Option<&AttributeValue>,
	attribute: &'static str,
) -> Result<Option<String>, ValidationError> {
	match value {
		None => Ok(None),
		Some(AttributeValue::String(value)) => Ok(Some(value.clone())),
		Some(other) => Err(type_mismatch(attribute, "string", other)),
	}
}

fn set_attribute(
	value: Option<&AttributeValue>,
	attribute: &'static str,
) -> Result<Option<BTreeSet<String>>, ValidationError> {
	match value {
		None => Ok(None),
		Some(AttributeValue::StringSet(values)) => Ok(Some(values.clone())),
		Some(other) => Err(type_mismatch(attribute, "set of string", other)),
	}
}

fn type_mismatch(attribute: &'static str, expected: &str, got: &AttributeValue) -> ValidationError {
	ValidationError::new(
		attribute,
		format!("expected {expected}, got {}", got.kind_name()),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::resource_data::ResourceState;
	use rstest::rstest;

	#[rstest]
	fn schema_marks_only_name_as_force_new() {
		// Arrange & Act
		let force_new: Vec<_> = TAG_SCHEMA
			.iter()
			.filter(|a| a.force_new)
			.map(|a| a.name)
			.collect();

		// Assert
		assert_eq!(force_new, vec!["name"]);
	}

	#[rstest]
	fn planned_tag_extracts_typed_values() {
		// Arrange
		let state = ResourceState::planned([
			("name", AttributeValue::from("web")),
			("description", AttributeValue::from("Frontends")),
			("servers", AttributeValue::from(["srv-2", "srv-1"])),
		]);

		// Act
		let tag = planned_tag(&state).unwrap();

		// Assert
		assert_eq!(
			tag,
			Tag::new("web")
				.with_description("Frontends")
				.with_servers(["srv-1", "srv-2"])
		);
	}

	#[rstest]
	fn optional_attributes_default_to_empty() {
		// Arrange
		let state = ResourceState::planned([("name", AttributeValue::from("web"))]);

		// Act
		let tag = planned_tag(&state).unwrap();

		// Assert
		assert!(tag.description.is_empty());
		assert!(tag.servers.is_empty());
	}

	#[rstest]
	fn missing_name_is_a_validation_error() {
		// Arrange
		let state = ResourceState::planned([("description", AttributeValue::from("orphan"))]);

		// Act
		let error = planned_tag(&state).unwrap_err();

		// Assert
		assert_eq!(error.attribute, "name");
	}

	#[rstest]
	fn wrong_attribute_type_is_a_validation_error() {
		// Arrange
		let state = ResourceState::planned([
			("name", AttributeValue::from("web")),
			("servers", AttributeValue::from("srv-1")),
		]);

		// Act
		let error = planned_tag(&state).unwrap_err();

		// Assert
		assert_eq!(error.attribute, "servers");
		assert_eq!(error.message, "expected set of string, got string");
	}

	#[rstest]
	#[case("")]
	#[case("-.-")]
	#[case("abcdefghijklmnopqrstuvwxyz0123456")]
	fn constraint_violations_are_rejected(#[case] name: &str) {
		// Arrange
		let state = ResourceState::planned([("name", AttributeValue::from(name))]);

		// Act & Assert
		assert!(planned_tag(&state).is_err());
	}

	#[rstest]
	fn rename_requires_replacement() {
		// Arrange
		let mut state = ResourceState::planned([("name", AttributeValue::from("web"))]);
		state.commit();

		// Act
		state.plan("name", "api");

		// Assert
		assert_eq!(requires_replacement(&state), Some("name"));
	}

	#[rstest]
	fn description_change_is_in_place() {
		// Arrange
		let mut state = ResourceState::planned([("name", AttributeValue::from("web"))]);
		state.commit();

		// Act
		state.plan("description", "new");

		// Assert
		assert_eq!(requires_replacement(&state), None);
	}

	#[rstest]
	fn write_tag_records_state_only() {
		// Arrange
		let mut state = ResourceState::new();
		let tag = Tag::new("web").with_servers(["srv-1"]);

		// Act
		write_tag(&mut state, &tag);

		// Assert
		assert_eq!(prior_tag(&state).unwrap(), tag);
		assert!(planned_tag(&state).is_err());
	}
}
