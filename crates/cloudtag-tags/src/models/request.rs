//! Request types sent to the remote service

/// Create a tag. Fields left `None` are not supplied to the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTagRequest {
	pub name: String,
	pub description: Option<String>,
	pub servers: Option<Vec<String>>,
}

/// Partial update of an existing tag.
///
/// `None` leaves the attribute unchanged on the service. `Some` replaces it,
/// so `servers: Some(vec![])` detaches every server and
/// `description: Some(String::new())` clears the description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyTagRequest {
	pub name: String,
	pub description: Option<String>,
	pub servers: Option<Vec<String>>,
}

impl ModifyTagRequest {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Default::default()
		}
	}

	/// Whether any mutable attribute is populated.
	pub fn has_changes(&self) -> bool {
		self.description.is_some() || self.servers.is_some()
	}
}

/// Delete a tag by identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTagRequest {
	pub name: String,
}

impl DeleteTagRequest {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}
