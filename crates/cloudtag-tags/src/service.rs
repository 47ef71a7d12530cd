//! Remote tag service trait definition.

use std::sync::Arc;

use async_trait::async_trait;

use crate::ServiceResult;
use crate::models::{CreateTagRequest, DeleteTagRequest, ModifyTagRequest, RemoteTag};

/// Remote capability that owns the live tag objects.
///
/// Connection setup, authentication, retries and rate limiting belong to the
/// implementation. The engine awaits one call at a time and propagates
/// whatever error comes back.
///
/// # Examples
///
/// ```rust,no_run
/// use cloudtag_tags::{ServiceResult, TagService};
///
/// async fn names(service: &dyn TagService) -> ServiceResult<Vec<String>> {
///     let tags = service.list_tags().await?;
///     Ok(tags.into_iter().map(|tag| tag.name).collect())
/// }
/// ```
#[async_trait]
pub trait TagService: Send + Sync {
	/// Create a tag.
	///
	/// # Errors
	///
	/// Returns `` `ServiceError::Conflict` `` if the name is already taken.
	async fn create_tag(&self, request: CreateTagRequest) -> ServiceResult<RemoteTag>;

	/// List every tag known to the service.
	async fn list_tags(&self) -> ServiceResult<Vec<RemoteTag>>;

	/// Apply a partial update. Attributes left `None` are unchanged.
	///
	/// # Errors
	///
	/// Returns `` `ServiceError::NotFound` `` if no tag has the given name.
	async fn modify_tag(&self, request: ModifyTagRequest) -> ServiceResult<RemoteTag>;

	/// Delete a tag by name.
	async fn delete_tag(&self, request: DeleteTagRequest) -> ServiceResult<()>;
}

#[async_trait]
impl<T: TagService + ?Sized> TagService for Arc<T> {
	async fn create_tag(&self, request: CreateTagRequest) -> ServiceResult<RemoteTag> {
		(**self).create_tag(request).await
	}

	async fn list_tags(&self) -> ServiceResult<Vec<RemoteTag>> {
		(**self).list_tags().await
	}

	async fn modify_tag(&self, request: ModifyTagRequest) -> ServiceResult<RemoteTag> {
		(**self).modify_tag(request).await
	}

	async fn delete_tag(&self, request: DeleteTagRequest) -> ServiceResult<()> {
		(**self).delete_tag(request).await
	}
}
