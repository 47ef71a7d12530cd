//! Model definitions for the tag engine
//!
//! - `Tag`: declared and stored representation, servers held as a set
//! - `RemoteTag`: what the remote service returns
//! - request types passed to [`TagService`](crate::TagService)

pub mod request;
pub mod tag;

pub use request::{CreateTagRequest, DeleteTagRequest, ModifyTagRequest};
pub use tag::{RemoteTag, Tag};
