//! In-memory test doubles.

#[cfg(feature = "mocks")]
pub use cloudtag_mocks::*;
