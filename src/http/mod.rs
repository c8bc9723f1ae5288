//! HTTP protocol layer module
//!
//! The minimal slice of HTTP the responder speaks: a request-line prefix
//! check and a fixed response header.

pub mod request;
pub mod response;

pub use request::{is_root_get, RequestBuffer};
pub use response::build_header;
