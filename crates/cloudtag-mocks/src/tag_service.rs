//! In-memory tag service for testing the TagService trait.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use cloudtag_tags::{
	CreateTagRequest, DeleteTagRequest, ModifyTagRequest, RemoteTag, ServiceError, ServiceResult,
	TagService,
};
use tokio::sync::RwLock;

/// A call received by [`InMemoryTagService`], recorded in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
	Create(CreateTagRequest),
	List,
	Modify(ModifyTagRequest),
	Delete(DeleteTagRequest),
}

/// In-memory tag service.
///
/// Stores tags keyed by name and records every call. Failures can be queued
/// with [`fail_next`](Self::fail_next); each queued error is returned by the
/// next call, whatever it is. Two kinds of server-side normalization can be
/// switched on to check that callers re-read what the service stored:
/// description trimming and dropping server ids it does not know.
#[derive(Clone, Default)]
pub struct InMemoryTagService {
	tags: Arc<RwLock<BTreeMap<String, RemoteTag>>>,
	calls: Arc<RwLock<Vec<ServiceCall>>>,
	failures: Arc<RwLock<VecDeque<ServiceError>>>,
	known_servers: Arc<RwLock<Option<BTreeSet<String>>>>,
	trim_descriptions: bool,
}

impl InMemoryTagService {
	pub fn new() -> Self {
		Self::default()
	}

	/// Trim whitespace from stored descriptions, like a normalizing service.
	pub fn with_trimmed_descriptions(mut self) -> Self {
		self.trim_descriptions = true;
		self
	}

	/// Restrict attachable servers; unknown ids are silently dropped.
	pub async fn set_known_servers<I, S>(&self, servers: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		*self.known_servers.write().await = Some(servers.into_iter().map(Into::into).collect());
	}

	/// Store a tag directly, bypassing call recording.
	pub async fn seed(&self, tag: RemoteTag) {
		self.tags.write().await.insert(tag.name.clone(), tag);
	}

	/// Queue an error for the next call.
	pub async fn fail_next(&self, error: ServiceError) {
		self.failures.write().await.push_back(error);
	}

	/// Stored tag by name.
	pub async fn get(&self, name: &str) -> Option<RemoteTag> {
		self.tags.read().await.get(name).cloned()
	}

	pub async fn tag_count(&self) -> usize {
		self.tags.read().await.len()
	}

	/// All calls received so far.
	pub async fn calls(&self) -> Vec<ServiceCall> {
		self.calls.read().await.clone()
	}

	/// Number of mutating calls (create, modify, delete) received so far.
	pub async fn mutation_count(&self) -> usize {
		self.calls
			.read()
			.await
			.iter()
			.filter(|call| !matches!(call, ServiceCall::List))
			.count()
	}

	pub async fn clear_calls(&self) {
		self.calls.write().await.clear();
	}

	async fn record(&self, call: ServiceCall) -> ServiceResult<()> {
		self.calls.write().await.push(call);
		match self.failures.write().await.pop_front() {
			Some(error) => Err(error),
			None => Ok(()),
		}
	}

	fn normalize_description(&self, description: String) -> String {
		if self.trim_descriptions {
			description.trim().to_string()
		} else {
			description
		}
	}

	async fn normalize_servers(&self, servers: Vec<String>) -> Vec<String> {
		let known = self.known_servers.read().await;
		let mut kept = Vec::with_capacity(servers.len());
		for server in servers {
			let allowed = known.as_ref().is_none_or(|known| known.contains(&server));
			if allowed && !kept.contains(&server) {
				kept.push(server);
			}
		}
		kept
	}
}

#[async_trait]
impl TagService for InMemoryTagService {
	async fn create_tag(&self, request: CreateTagRequest) -> ServiceResult<RemoteTag> {
		self.record(ServiceCall::Create(request.clone())).await?;

		if self.tags.read().await.contains_key(&request.name) {
			return Err(ServiceError::Conflict(format!(
				"tag '{}' already exists",
				request.name
			)));
		}

		let tag = RemoteTag {
			name: request.name,
			description: self.normalize_description(request.description.unwrap_or_default()),
			servers: self
				.normalize_servers(request.servers.unwrap_or_default())
				.await,
		};
		self.tags
			.write()
			.await
			.insert(tag.name.clone(), tag.clone());
		Ok(tag)
	}

	async fn list_tags(&self) -> ServiceResult<Vec<RemoteTag>> {
		self.record(ServiceCall::List).await?;
		Ok(self.tags.read().await.values().cloned().collect())
	}

	async fn modify_tag(&self, request: ModifyTagRequest) -> ServiceResult<RemoteTag> {
		self.record(ServiceCall::Modify(request.clone())).await?;

		let servers = match request.servers {
			Some(servers) => Some(self.normalize_servers(servers).await),
			None => None,
		};

		let mut tags = self.tags.write().await;
		let tag = tags
			.get_mut(&request.name)
			.ok_or_else(|| ServiceError::NotFound(request.name.clone()))?;
		if let Some(description) = request.description {
			tag.description = self.normalize_description(description);
		}
		if let Some(servers) = servers {
			tag.servers = servers;
		}
		Ok(tag.clone())
	}

	async fn delete_tag(&self, request: DeleteTagRequest) -> ServiceResult<()> {
		self.record(ServiceCall::Delete(request.clone())).await?;

		self.tags
			.write()
			.await
			.remove(&request.name)
			.map(|_| ())
			.ok_or(ServiceError::NotFound(request.name))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn service() -> InMemoryTagService {
		InMemoryTagService::new()
	}

	fn create_request(name: &str, servers: &[&str]) -> CreateTagRequest {
		CreateTagRequest {
			name: name.into(),
			description: None,
			servers: Some(servers.iter().map(|s| s.to_string()).collect()),
		}
	}

	#[rstest]
	#[tokio::test]
	async fn create_then_list(service: InMemoryTagService) {
		// Arrange
		service
			.create_tag(create_request("web", &["srv-1"]))
			.await
			.unwrap();

		// Act
		let tags = service.list_tags().await.unwrap();

		// Assert
		assert_eq!(tags.len(), 1);
		assert_eq!(tags[0].servers, vec!["srv-1"]);
	}

	#[rstest]
	#[tokio::test]
	async fn duplicate_create_conflicts(service: InMemoryTagService) {
		// Arrange
		service.create_tag(create_request("web", &[])).await.unwrap();

		// Act
		let result = service.create_tag(create_request("web", &[])).await;

		// Assert
		assert!(matches!(result, Err(ServiceError::Conflict(_))));
		assert_eq!(service.tag_count().await, 1);
	}

	#[rstest]
	#[tokio::test]
	async fn queued_failure_applies_to_next_call_only(service: InMemoryTagService) {
		// Arrange
		service
			.fail_next(ServiceError::Unavailable("maintenance".into()))
			.await;

		// Act
		let first = service.list_tags().await;
		let second = service.list_tags().await;

		// Assert
		assert!(first.is_err());
		assert!(second.is_ok());
		assert_eq!(service.calls().await, vec![ServiceCall::List, ServiceCall::List]);
	}

	#[rstest]
	#[tokio::test]
	async fn modify_leaves_omitted_fields(service: InMemoryTagService) {
		// Arrange
		service
			.seed(RemoteTag {
				name: "web".into(),
				description: "Frontends".into(),
				servers: vec!["srv-1".into()],
			})
			.await;

		// Act
		let mut request = ModifyTagRequest::new("web");
		request.servers = Some(Vec::new());
		let tag = service.modify_tag(request).await.unwrap();

		// Assert
		assert_eq!(tag.description, "Frontends");
		assert!(tag.servers.is_empty());
	}

	#[rstest]
	#[tokio::test]
	async fn unknown_servers_are_dropped(service: InMemoryTagService) {
		// Arrange
		service.set_known_servers(["srv-1"]).await;

		// Act
		let tag = service
			.create_tag(create_request("web", &["srv-1", "srv-9"]))
			.await
			.unwrap();

		// Assert
		assert_eq!(tag.servers, vec!["srv-1"]);
	}

	#[rstest]
	#[tokio::test]
	async fn delete_missing_tag_is_not_found(service: InMemoryTagService) {
		// Act
		let result = service.delete_tag(DeleteTagRequest::new("ghost")).await;

		// Assert
		assert_eq!(result, Err(ServiceError::NotFound("ghost".into())));
		assert_eq!(service.mutation_count().await, 1);
	}
}
