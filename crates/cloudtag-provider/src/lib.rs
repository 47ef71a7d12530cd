//! # cloudtag-provider
//!
//! Lifecycle adapter between a declarative configuration engine and the tag
//! reconciler in `cloudtag-tags`.
//!
//! The configuration engine hands over untyped attribute accessors through
//! [`ResourceData`]. [`TagResource`] turns them into a typed
//! [`Tag`](cloudtag_tags::Tag) once, runs the matching reconciler operation and
//! records the authoritative result as state. Failures come back as
//! [`Diagnostics`], never as panics or silently dropped errors.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cloudtag_provider::{AttributeValue, ProviderConfig, ResourceState, TagResource};
//! # use cloudtag_tags::TagService;
//!
//! # async fn run(service: impl TagService + 'static) -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProviderConfig::from_env()?;
//! let resource = TagResource::from_config(&config, service);
//!
//! let mut state = ResourceState::planned([
//!     ("name", AttributeValue::from("env_prod")),
//!     ("description", AttributeValue::from("Production")),
//! ]);
//! let diagnostics = resource.create(&mut state).await;
//! assert!(!diagnostics.has_error());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod resource;
pub mod resource_data;
pub mod retry;
pub mod schema;

pub use config::{ProviderConfig, RetryConfig};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{ProviderError, Result};
pub use resource::TagResource;
pub use resource_data::{AttributeValue, ResourceData, ResourceState};
pub use retry::RetryingTagService;
pub use schema::{AttributeKind, AttributeSchema, TAG_SCHEMA};
