//! Tag reconciliation engine.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cloudtag::tags::{Tag, TagReconciler, TagService};
//! ```

pub use cloudtag_tags::*;
