//! Attribute accessors exposed by the configuration engine
//!
//! [`ResourceData`] mirrors what a declarative engine offers a resource
//! implementation: the identity, the prior (state) and planned (configuration)
//! attribute values, and a way to record state. Recorded values land on the
//! state side only, so they become the baseline for the next diff while the
//! declared configuration stays untouched. [`ResourceState`] is an in-memory implementation used
//! by hosts that keep state themselves and by tests.

use std::collections::{BTreeMap, BTreeSet};

/// Untyped attribute value as held by the configuration engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
	String(String),
	StringSet(BTreeSet<String>),
}

impl AttributeValue {
	/// Empty string or empty set.
	pub fn is_zero(&self) -> bool {
		match self {
			AttributeValue::String(value) => value.is_empty(),
			AttributeValue::StringSet(values) => values.is_empty(),
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			AttributeValue::String(value) => Some(value),
			AttributeValue::StringSet(_) => None,
		}
	}

	pub fn as_set(&self) -> Option<&BTreeSet<String>> {
		match self {
			AttributeValue::StringSet(values) => Some(values),
			AttributeValue::String(_) => None,
		}
	}

	pub fn kind_name(&self) -> &'static str {
		match self {
			AttributeValue::String(_) => "string",
			AttributeValue::StringSet(_) => "set of string",
		}
	}
}

impl From<&str> for AttributeValue {
	fn from(value: &str) -> Self {
		AttributeValue::String(value.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		AttributeValue::String(value)
	}
}

impl From<BTreeSet<String>> for AttributeValue {
	fn from(values: BTreeSet<String>) -> Self {
		AttributeValue::StringSet(values)
	}
}

impl<const N: usize> From<[&str; N]> for AttributeValue {
	fn from(values: [&str; N]) -> Self {
		AttributeValue::StringSet(values.iter().map(|v| v.to_string()).collect())
	}
}

/// Accessors a configuration engine provides to a resource implementation.
///
/// `get` returns the planned (configured) value; `get_change` returns the
/// prior (state) and planned values; `set` writes the state side. Absent and zero values are treated as equal when deciding
/// whether an attribute changed.
pub trait ResourceData {
	/// Current identity; empty when the resource does not exist.
	fn id(&self) -> &str;

	fn set_id(&mut self, id: String);

	/// Planned value of an attribute.
	fn get(&self, key: &str) -> Option<&AttributeValue>;

	/// Prior and planned values of an attribute.
	fn get_change(&self, key: &str) -> (Option<&AttributeValue>, Option<&AttributeValue>);

	/// Record a value read from the remote service into state. The planned
	/// value is left as configured.
	fn set(&mut self, key: &str, value: AttributeValue);

	/// Planned value, ignoring zero values.
	fn get_ok(&self, key: &str) -> Option<&AttributeValue> {
		self.get(key).filter(|value| !value.is_zero())
	}

	fn has_change(&self, key: &str) -> bool {
		let (prior, planned) = self.get_change(key);
		let prior = prior.filter(|value| !value.is_zero());
		let planned = planned.filter(|value| !value.is_zero());
		prior != planned
	}

	fn clear_id(&mut self) {
		self.set_id(String::new());
	}
}

/// In-memory resource state: identity plus prior and planned attributes.
///
/// # Examples
///
/// ```rust
/// use cloudtag_provider::{AttributeValue, ResourceData, ResourceState};
///
/// let mut state = ResourceState::planned([("name", AttributeValue::from("web"))]);
/// assert!(state.has_change("name"));
///
/// state.commit();
/// assert!(!state.has_change("name"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceState {
	id: String,
	prior: BTreeMap<String, AttributeValue>,
	planned: BTreeMap<String, AttributeValue>,
}

impl ResourceState {
	pub fn new() -> Self {
		Self::default()
	}

	/// State for a resource that only exists in configuration so far.
	pub fn planned<'a, I>(attributes: I) -> Self
	where
		I: IntoIterator<Item = (&'a str, AttributeValue)>,
	{
		Self {
			planned: attributes
				.into_iter()
				.map(|(key, value)| (key.to_string(), value))
				.collect(),
			..Self::default()
		}
	}

	/// State for a resource known only by identity, as when importing.
	pub fn with_id(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			..Self::default()
		}
	}

	/// Set the planned value for an attribute, as a configuration change would.
	pub fn plan(&mut self, key: &str, value: impl Into<AttributeValue>) {
		self.planned.insert(key.to_string(), value.into());
	}

	/// Drop the planned value for an attribute.
	pub fn unplan(&mut self, key: &str) {
		self.planned.remove(key);
	}

	/// Accept the planned values as the new prior state.
	pub fn commit(&mut self) {
		self.prior = self.planned.clone();
	}

	/// Take the recorded state as the configuration, as when adopting a
	/// resource that has no configuration yet.
	pub fn adopt_state(&mut self) {
		self.planned = self.prior.clone();
	}

	/// Prior value of an attribute.
	pub fn prior(&self, key: &str) -> Option<&AttributeValue> {
		self.prior.get(key)
	}
}

impl ResourceData for ResourceState {
	fn id(&self) -> &str {
		&self.id
	}

	fn set_id(&mut self, id: String) {
		self.id = id;
	}

	fn get(&self, key: &str) -> Option<&AttributeValue> {
		self.planned.get(key)
	}

	fn get_change(&self, key: &str) -> (Option<&AttributeValue>, Option<&AttributeValue>) {
		(self.prior.get(key), self.planned.get(key))
	}

	fn set(&mut self, key: &str, value: AttributeValue) {
		self.prior.insert(key.to_string(), value);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(AttributeValue::from(""), true)]
	#[case(AttributeValue::from("x"), false)]
	#[case(AttributeValue::StringSet(BTreeSet::new()), true)]
	#[case(AttributeValue::from(["srv-1"]), false)]
	fn zero_values(#[case] value: AttributeValue, #[case] zero: bool) {
		// Act & Assert
		assert_eq!(value.is_zero(), zero);
	}

	#[rstest]
	fn get_ok_skips_zero_values() {
		// Arrange
		let state = ResourceState::planned([
			("description", AttributeValue::from("")),
			("name", AttributeValue::from("web")),
		]);

		// Act & Assert
		assert!(state.get_ok("description").is_none());
		assert!(state.get_ok("servers").is_none());
		assert_eq!(state.get_ok("name").and_then(AttributeValue::as_str), Some("web"));
	}

	#[rstest]
	fn absent_and_empty_are_not_a_change() {
		// Arrange
		let mut state = ResourceState::planned([("name", AttributeValue::from("web"))]);
		state.commit();

		// Act
		state.plan("servers", AttributeValue::StringSet(BTreeSet::new()));
		state.plan("description", "");

		// Assert
		assert!(!state.has_change("servers"));
		assert!(!state.has_change("description"));
	}

	#[rstest]
	fn set_order_is_not_a_change() {
		// Arrange
		let mut state = ResourceState::planned([("servers", AttributeValue::from(["b", "a"]))]);
		state.commit();

		// Act
		state.plan("servers", ["a", "b", "a"]);

		// Assert
		assert!(!state.has_change("servers"));
	}

	#[rstest]
	fn get_change_returns_prior_and_planned() {
		// Arrange
		let mut state = ResourceState::planned([("description", AttributeValue::from("old"))]);
		state.commit();

		// Act
		state.plan("description", "new");

		// Assert
		let (prior, planned) = state.get_change("description");
		assert_eq!(prior.and_then(AttributeValue::as_str), Some("old"));
		assert_eq!(planned.and_then(AttributeValue::as_str), Some("new"));
		assert!(state.has_change("description"));
	}

	#[rstest]
	fn set_records_state_and_keeps_configuration() {
		// Arrange
		let mut state = ResourceState::planned([("description", AttributeValue::from("declared"))]);
		state.commit();

		// Act
		state.set("description", AttributeValue::from("remote"));

		// Assert
		assert_eq!(state.prior("description"), Some(&AttributeValue::from("remote")));
		assert_eq!(state.get("description"), Some(&AttributeValue::from("declared")));
		assert!(state.has_change("description"));
	}

	#[rstest]
	fn adopt_state_copies_state_into_configuration() {
		// Arrange
		let mut state = ResourceState::with_id("web");
		state.set("name", AttributeValue::from("web"));

		// Act
		state.adopt_state();

		// Assert
		assert_eq!(state.get("name"), Some(&AttributeValue::from("web")));
		assert!(!state.has_change("name"));
	}

	#[rstest]
	fn clear_id_empties_identity() {
		// Arrange
		let mut state = ResourceState::with_id("web");

		// Act
		state.clear_id();

		// Assert
		assert_eq!(state.id(), "");
	}
}
