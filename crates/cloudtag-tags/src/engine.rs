//! Tag reconciliation engine
//!
//! Translates declared [`Tag`] state into [`TagService`] requests and maps the
//! service's answers back. Every mutating operation finishes with a fresh
//! [`TagReconciler::read`], so the returned value always reflects what the
//! service actually stored.

use std::sync::Arc;

use crate::error::{Operation, Result, ServiceError, TagError};
use crate::models::{CreateTagRequest, DeleteTagRequest, ModifyTagRequest, RemoteTag, Tag};
use crate::service::TagService;
use crate::set::{SetDiff, sets_equal, to_transport_set};

/// Reconciles declared tags against a [`TagService`].
///
/// Holds nothing but the service handle, so one reconciler can serve any
/// number of tags concurrently.
#[derive(Clone)]
pub struct TagReconciler {
	service: Arc<dyn TagService>,
}

impl TagReconciler {
	pub fn new(service: Arc<dyn TagService>) -> Self {
		Self { service }
	}

	/// Create the declared tag and return the state read back from the service.
	///
	/// Description and servers are only sent when non-empty. The identity is
	/// taken from the name the service returns.
	///
	/// # Errors
	///
	/// Returns [`TagError::Remote`] if the create call fails, in which case no
	/// read is attempted.
	pub async fn create(&self, declared: &Tag) -> Result<Tag> {
		let request = build_create_request(declared);

		tracing::debug!(tag = %declared.name, servers = declared.servers.len(), "creating tag");
		let created = self
			.service
			.create_tag(request)
			.await
			.map_err(|e| TagError::remote(Operation::Create, &declared.name, e))?;

		tracing::info!(tag = %created.name, "created tag");
		self.read(&created.name).await
	}

	/// Read the current state of the tag identified by `id`.
	///
	/// # Errors
	///
	/// Returns [`TagError::NotFound`] if the listing has no tag named `id`, and
	/// [`TagError::Remote`] if the listing itself could not be fetched.
	pub async fn read(&self, id: &str) -> Result<Tag> {
		let tags = self
			.service
			.list_tags()
			.await
			.map_err(|e| TagError::remote(Operation::List, id, e))?;

		tracing::debug!(tag = %id, listed = tags.len(), "scanning tag listing");
		find_by_name(tags, id)
			.map(Tag::from)
			.ok_or_else(|| TagError::NotFound(id.to_string()))
	}

	/// Apply the difference between `prior` and `new` to the tag `id`.
	///
	/// When nothing mutable changed the modify call is skipped and only the
	/// read is performed.
	///
	/// # Errors
	///
	/// Returns [`TagError::ImmutableField`] before any remote call if the name
	/// changed, or [`TagError::Remote`] if the modify call fails.
	pub async fn update(&self, id: &str, prior: &Tag, new: &Tag) -> Result<Tag> {
		let request = plan_update(id, prior, new)?;

		if request.has_changes() {
			let diff = SetDiff::between(&prior.servers, &new.servers);
			tracing::debug!(
				tag = %id,
				description_changed = request.description.is_some(),
				servers_added = diff.added.len(),
				servers_removed = diff.removed.len(),
				"modifying tag"
			);
			self.service
				.modify_tag(request)
				.await
				.map_err(|e| TagError::remote(Operation::Modify, id, e))?;
		} else {
			tracing::debug!(tag = %id, "no attribute changes, skipping modify");
		}

		self.read(id).await
	}

	/// Delete the tag `id`. No existence check is made first, and a tag the
	/// service no longer knows counts as deleted.
	///
	/// # Errors
	///
	/// Returns [`TagError::Remote`] if the service rejects the delete for any
	/// other reason.
	pub async fn delete(&self, id: &str) -> Result<()> {
		match self.service.delete_tag(DeleteTagRequest::new(id)).await {
			Ok(()) => {
				tracing::info!(tag = %id, "deleted tag");
				Ok(())
			}
			Err(ServiceError::NotFound(_)) => {
				tracing::debug!(tag = %id, "tag already absent, treating delete as done");
				Ok(())
			}
			Err(e) => Err(TagError::remote(Operation::Delete, id, e)),
		}
	}

	/// Adopt an existing tag by name.
	pub async fn import(&self, id: &str) -> Result<Tag> {
		tracing::debug!(tag = %id, "importing tag");
		self.read(id).await
	}
}

fn build_create_request(declared: &Tag) -> CreateTagRequest {
	CreateTagRequest {
		name: declared.name.clone(),
		description: (!declared.description.is_empty()).then(|| declared.description.clone()),
		servers: (!declared.servers.is_empty()).then(|| to_transport_set(&declared.servers)),
	}
}

/// Compute the partial modify request that turns `prior` into `new`.
///
/// Only changed attributes are populated. A server set that changed to empty
/// is sent as an explicit empty list so the service detaches everything.
///
/// # Errors
///
/// Returns [`TagError::ImmutableField`] if `new` renames the tag.
pub fn plan_update(id: &str, prior: &Tag, new: &Tag) -> Result<ModifyTagRequest> {
	if new.name != prior.name || new.name != id {
		return Err(TagError::ImmutableField {
			attribute: "name",
			prior: id.to_string(),
			requested: new.name.clone(),
		});
	}

	let mut request = ModifyTagRequest::new(id);
	if prior.description != new.description {
		request.description = Some(new.description.clone());
	}
	if !sets_equal(&prior.servers, &new.servers) {
		request.servers = Some(to_transport_set(&new.servers));
	}
	Ok(request)
}

fn find_by_name(mut tags: Vec<RemoteTag>, name: &str) -> Option<RemoteTag> {
	let index = tags.iter().position(|tag| tag.name == name)?;
	Some(tags.swap_remove(index))
}
