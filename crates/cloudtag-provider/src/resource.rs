//! Tag resource lifecycle hooks.
//!
//! Each hook pulls typed values out of [`ResourceData`], calls the matching
//! [`TagReconciler`] operation and records the result as state. The declared
//! configuration is never overwritten, so a refresh that picks up remote drift
//! leaves a difference for the next update to apply. Decisions about
//! what to send to the service live in the reconciler, not here.

use std::sync::Arc;

use cloudtag_tags::{Operation, TagError, TagReconciler, TagService};

use crate::config::ProviderConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::resource_data::{AttributeValue, ResourceData, ResourceState};
use crate::retry::RetryingTagService;
use crate::schema::{self, AttributeSchema, TAG_SCHEMA};

/// The tag resource as seen by the configuration engine.
#[derive(Clone)]
pub struct TagResource {
	reconciler: TagReconciler,
}

impl TagResource {
	pub fn new(service: Arc<dyn TagService>) -> Self {
		Self {
			reconciler: TagReconciler::new(service),
		}
	}

	/// Wrap `service` with the configured timeout and retry policy.
	pub fn from_config<S: TagService + 'static>(config: &ProviderConfig, service: S) -> Self {
		let service = RetryingTagService::new(service, config.request_timeout, config.retry.clone());
		Self::new(Arc::new(service))
	}

	pub fn schema() -> &'static [AttributeSchema] {
		TAG_SCHEMA
	}

	/// Create hook.
	///
	/// On success the identity is the stored tag's name. If the create call
	/// itself fails no identity is recorded; if only the follow-up read fails,
	/// the identity is recorded anyway since the tag now exists remotely.
	pub async fn create<D: ResourceData + ?Sized>(&self, data: &mut D) -> Diagnostics {
		let declared = match schema::planned_tag(data) {
			Ok(tag) => tag,
			Err(error) => return error.into(),
		};

		match self.reconciler.create(&declared).await {
			Ok(stored) => {
				data.set_id(stored.name.clone());
				schema::write_tag(data, &stored);
				Diagnostics::new()
			}
			Err(error) => {
				if error.operation() != Some(Operation::Create) {
					if let Some(id) = error.identity() {
						data.set_id(id.to_string());
					}
				}
				error.into()
			}
		}
	}

	/// Read hook. A tag missing remotely clears the identity instead of
	/// failing, so the engine plans a fresh create.
	pub async fn read<D: ResourceData + ?Sized>(&self, data: &mut D) -> Diagnostics {
		let id = data.id().to_string();
		match self.reconciler.read(&id).await {
			Ok(stored) => {
				schema::write_tag(data, &stored);
				Diagnostics::new()
			}
			Err(TagError::NotFound(_)) => {
				tracing::warn!(tag = %id, "tag no longer exists remotely, clearing identity");
				data.clear_id();
				Diagnostics::new()
			}
			Err(error) => error.into(),
		}
	}

	/// Update hook. A changed force-new attribute is rejected before any
	/// remote call.
	pub async fn update<D: ResourceData + ?Sized>(&self, data: &mut D) -> Diagnostics {
		let id = data.id().to_string();

		if let Some(attribute) = schema::requires_replacement(data) {
			let (prior, planned) = data.get_change(attribute);
			let render = |value: Option<&AttributeValue>| {
				value
					.and_then(|v| v.as_str())
					.unwrap_or_default()
					.to_string()
			};
			return TagError::ImmutableField {
				attribute,
				prior: render(prior),
				requested: render(planned),
			}
			.into();
		}

		let prior = match schema::prior_tag(data) {
			Ok(tag) => tag,
			Err(error) => return error.into(),
		};
		let planned = match schema::planned_tag(data) {
			Ok(tag) => tag,
			Err(error) => return error.into(),
		};

		match self.reconciler.update(&id, &prior, &planned).await {
			Ok(stored) => {
				schema::write_tag(data, &stored);
				Diagnostics::new()
			}
			Err(error) => error.into(),
		}
	}

	/// Delete hook. Clears the identity once the service accepted the delete,
	/// or when the tag was already gone.
	pub async fn delete<D: ResourceData + ?Sized>(&self, data: &mut D) -> Diagnostics {
		let id = data.id().to_string();
		match self.reconciler.delete(&id).await {
			Ok(()) => {
				data.clear_id();
				Diagnostics::new()
			}
			Err(error) => error.into(),
		}
	}

	/// Import by identity: the name alone is enough to read the full state.
	///
	/// # Errors
	///
	/// Returns diagnostics if the read fails or no tag has this name.
	pub async fn import(&self, id: &str) -> Result<ResourceState, Diagnostics> {
		let mut state = ResourceState::with_id(id);
		let diagnostics = self.read(&mut state).await;
		if diagnostics.has_error() {
			return Err(diagnostics);
		}
		if state.id().is_empty() {
			return Err(Diagnostic::error(format!(
				"Cannot import non-existent remote object: no tag named {id}"
			))
			.into());
		}
		state.adopt_state();
		Ok(state)
	}
}
