//! # cloudtag-tags
//!
//! Reconciliation engine for named cloud platform tags and their server
//! attachments.
//!
//! ## Components
//!
//! - [`Tag`]: declared/stored representation of a tag
//! - [`set`]: conversions between declared server sets and the sequences the
//!   remote service transports
//! - [`TagService`]: the remote capability the engine talks to
//! - [`TagReconciler`]: create / read / update / delete / import against a
//!   [`TagService`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cloudtag_tags::{Tag, TagReconciler};
//!
//! let reconciler = TagReconciler::new(Arc::new(service));
//!
//! let declared = Tag::new("env_prod")
//!     .with_description("Production")
//!     .with_servers(["srv-1"]);
//! let stored = reconciler.create(&declared).await?;
//! assert_eq!(stored.name, "env_prod");
//! ```

pub mod engine;
pub mod error;
pub mod models;
pub mod service;
pub mod set;
pub mod validation;

pub use engine::TagReconciler;
pub use error::{Operation, Result, ServiceError, ServiceResult, TagError, ValidationError};
pub use models::{CreateTagRequest, DeleteTagRequest, ModifyTagRequest, RemoteTag, Tag};
pub use service::TagService;
pub use set::{SetDiff, from_transport_set, sets_equal, to_transport_set};

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::engine::TagReconciler;
	pub use crate::error::{Result, ServiceError, TagError, ValidationError};
	pub use crate::models::{RemoteTag, Tag};
	pub use crate::service::TagService;
}
