//! Request handler module
//!
//! Loads the one static resource the responder serves.

pub mod static_files;

pub use static_files::load_capped;
