//! Set reconciler
//!
//! Converts between the declared, unordered server set and the sequence the
//! remote service transports. Materialization is sorted so the same set always
//! yields the same sequence.

use std::collections::BTreeSet;

/// Materialize a declared server set as a transport sequence (sorted).
pub fn to_transport_set(servers: &BTreeSet<String>) -> Vec<String> {
	servers.iter().cloned().collect()
}

/// Collapse a transported sequence back into a declared set.
pub fn from_transport_set<I, S>(servers: I) -> BTreeSet<String>
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	servers.into_iter().map(Into::into).collect()
}

/// Same membership, ignoring order and duplicates.
pub fn sets_equal(a: &BTreeSet<String>, b: &BTreeSet<String>) -> bool {
	a.len() == b.len() && a.iter().all(|server| b.contains(server))
}

/// Members added and removed between two server sets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetDiff {
	pub added: BTreeSet<String>,
	pub removed: BTreeSet<String>,
}

impl SetDiff {
	pub fn between(prior: &BTreeSet<String>, new: &BTreeSet<String>) -> Self {
		Self {
			added: new.difference(prior).cloned().collect(),
			removed: prior.difference(new).cloned().collect(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.added.is_empty() && self.removed.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn set(items: &[&str]) -> BTreeSet<String> {
		from_transport_set(items.iter().copied())
	}

	#[rstest]
	#[case(&[])]
	#[case(&["srv-1"])]
	#[case(&["srv-3", "srv-1", "srv-2"])]
	fn transport_round_trip_preserves_membership(#[case] items: &[&str]) {
		// Arrange
		let declared = set(items);

		// Act
		let restored = from_transport_set(to_transport_set(&declared));

		// Assert
		assert!(sets_equal(&restored, &declared));
	}

	#[rstest]
	fn materialization_is_deterministic() {
		// Arrange
		let a = set(&["srv-b", "srv-a", "srv-c"]);
		let b = set(&["srv-c", "srv-b", "srv-a"]);

		// Act
		let first = to_transport_set(&a);
		let second = to_transport_set(&b);

		// Assert
		assert_eq!(first, second);
		assert_eq!(first, vec!["srv-a", "srv-b", "srv-c"]);
	}

	#[rstest]
	fn duplicates_collapse() {
		// Arrange & Act
		let servers = from_transport_set(["srv-1", "srv-1", "srv-2"]);

		// Assert
		assert_eq!(servers.len(), 2);
	}

	#[rstest]
	#[case(&["a", "b"], &["b", "a"], true)]
	#[case(&["a", "b"], &["a"], false)]
	#[case(&["a"], &["b"], false)]
	#[case(&[], &[], true)]
	fn sets_equal_ignores_order(#[case] a: &[&str], #[case] b: &[&str], #[case] expected: bool) {
		// Act & Assert
		assert_eq!(sets_equal(&set(a), &set(b)), expected);
	}

	#[rstest]
	fn diff_reports_added_and_removed() {
		// Arrange
		let prior = set(&["a", "b", "c"]);
		let new = set(&["b", "c", "d"]);

		// Act
		let diff = SetDiff::between(&prior, &new);

		// Assert
		assert_eq!(diff.added, set(&["d"]));
		assert_eq!(diff.removed, set(&["a"]));
		assert!(!diff.is_empty());
	}

	#[rstest]
	fn diff_of_equal_sets_is_empty() {
		// Arrange
		let servers = set(&["a", "b"]);

		// Act
		let diff = SetDiff::between(&servers, &servers.clone());

		// Assert
		assert!(diff.is_empty());
	}
}
