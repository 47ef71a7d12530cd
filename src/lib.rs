//! # cloudtag
//!
//! Reconcile named cloud platform tags, and the set of servers each tag is
//! attached to, against a remote tag service.
//!
//! This crate is a facade over the workspace members:
//!
//! - [`tags`]: the reconciliation engine, the [`TagService`] seam and the
//!   server-set helpers
//! - [`provider`]: the lifecycle adapter a declarative configuration engine
//!   drives, plus configuration and the retrying service decorator
//! - `mocks`: an in-memory [`TagService`] for tests (behind the `mocks` feature)
//!
//! ## Feature Flags
//!
//! - `provider` (default) - Lifecycle adapter, configuration and retries
//! - `mocks` - In-memory tag service
//! - `full` - Everything
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cloudtag::prelude::*;
//!
//! let reconciler = TagReconciler::new(Arc::new(service));
//! let stored = reconciler
//!     .create(&Tag::new("env_prod").with_servers(["srv-1"]))
//!     .await?;
//! ```

pub mod tags;

#[cfg(feature = "provider")]
pub mod provider;

#[cfg(feature = "mocks")]
pub mod mocks;

pub use cloudtag_tags::{Tag, TagError, TagReconciler, TagService};

#[cfg(feature = "provider")]
pub use cloudtag_provider::{Diagnostics, ProviderConfig, TagResource};

/// Prelude module for convenient imports
pub mod prelude {
	pub use cloudtag_tags::prelude::*;

	#[cfg(feature = "provider")]
	pub use cloudtag_provider::{
		AttributeValue, Diagnostics, ProviderConfig, ResourceData, ResourceState, TagResource,
	};

	#[cfg(feature = "mocks")]
	pub use cloudtag_mocks::InMemoryTagService;
}
