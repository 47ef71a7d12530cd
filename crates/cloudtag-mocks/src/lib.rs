//! # cloudtag-mocks
//!
//! In-memory [`TagService`](cloudtag_tags::TagService) for exercising the
//! reconciliation engine and the lifecycle adapter without a remote service.

mod tag_service;

pub use tag_service::{InMemoryTagService, ServiceCall};
