//! Tag model

use std::collections::BTreeSet;

use crate::set::from_transport_set;

/// Declared and stored state of a tag.
///
/// `name` doubles as the identity used by the configuration engine and the
/// key used by the remote service. `servers` is a set: order and duplicates
/// are never significant.
///
/// # Examples
///
/// ```rust
/// use cloudtag_tags::Tag;
///
/// let tag = Tag::new("env_prod")
///     .with_description("Production")
///     .with_servers(["srv-2", "srv-1", "srv-1"]);
///
/// assert_eq!(tag.servers.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
	pub name: String,
	/// Empty string means unset.
	pub description: String,
	pub servers: BTreeSet<String>,
}

impl Tag {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Default::default()
		}
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	pub fn with_servers<I, S>(mut self, servers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.servers = from_transport_set(servers);
		self
	}
}

/// Tag as returned by the remote service.
///
/// Servers arrive as a transported sequence and may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteTag {
	pub name: String,
	pub description: String,
	pub servers: Vec<String>,
}

impl From<RemoteTag> for Tag {
	fn from(remote: RemoteTag) -> Self {
		Self {
			name: remote.name,
			description: remote.description,
			servers: from_transport_set(remote.servers),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn remote_tag_servers_collapse_into_set() {
		// Arrange
		let remote = RemoteTag {
			name: "env_prod".into(),
			description: "Production".into(),
			servers: vec!["srv-2".into(), "srv-1".into(), "srv-2".into()],
		};

		// Act
		let tag = Tag::from(remote);

		// Assert
		assert_eq!(tag.name, "env_prod");
		assert_eq!(tag.description, "Production");
		assert_eq!(tag.servers, BTreeSet::from(["srv-1".to_string(), "srv-2".to_string()]));
	}

	#[rstest]
	fn builder_ignores_server_order() {
		// Arrange & Act
		let a = Tag::new("web").with_servers(["b", "a"]);
		let b = Tag::new("web").with_servers(["a", "b", "a"]);

		// Assert
		assert_eq!(a, b);
	}

	#[rstest]
	fn new_tag_has_empty_optional_fields() {
		// Arrange & Act
		let tag = Tag::new("web");

		// Assert
		assert!(tag.description.is_empty());
		assert!(tag.servers.is_empty());
	}
}
