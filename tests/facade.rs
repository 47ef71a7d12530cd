//! End-to-end use of the facade crate: configure, create, update, import.

#![cfg(feature = "provider")]

use std::sync::Arc;

use cloudtag::prelude::*;
use cloudtag_mocks::InMemoryTagService;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn tag_lifecycle_through_facade() {
	// Arrange
	let service = InMemoryTagService::new();
	let resource = TagResource::new(Arc::new(service.clone()));
	let mut state = ResourceState::planned([
		("name", AttributeValue::from("env_prod")),
		("description", AttributeValue::from("Production")),
		("servers", AttributeValue::from(["srv-1", "srv-2"])),
	]);

	// Act
	let created = resource.create(&mut state).await;
	state.plan("servers", ["srv-2", "srv-3"]);
	let updated = resource.update(&mut state).await;
	let imported = resource.import("env_prod").await.unwrap();

	// Assert
	assert!(created.is_empty());
	assert!(updated.is_empty());
	assert_eq!(imported.id(), "env_prod");
	assert_eq!(
		imported.prior("servers"),
		Some(&AttributeValue::from(["srv-2", "srv-3"]))
	);
}

#[rstest]
#[tokio::test]
async fn reconciler_is_usable_without_adapter() {
	// Arrange
	let reconciler = TagReconciler::new(Arc::new(InMemoryTagService::new()));

	// Act
	let stored = reconciler
		.create(&Tag::new("web").with_servers(["srv-1"]))
		.await
		.unwrap();
	let missing = reconciler.read("api").await.unwrap_err();

	// Assert
	assert_eq!(stored, Tag::new("web").with_servers(["srv-1"]));
	assert!(missing.is_not_found());
}
