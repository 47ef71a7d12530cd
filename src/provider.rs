//! Lifecycle adapter for declarative configuration engines.
//!
//! Requires the `provider` feature (enabled by default).
//!
//! # Examples
//!
//! ```rust,no_run
//! use cloudtag::provider::{ProviderConfig, ResourceState, TagResource};
//! ```

#[cfg(feature = "provider")]
pub use cloudtag_provider::*;
