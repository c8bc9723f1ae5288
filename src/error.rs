//! Fatal setup errors
//!
//! Everything that can go wrong before the listener is accepting ends the
//! process with a nonzero exit status. Failures after that point are folded
//! into [`crate::server::Outcome`] instead.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("logger initialization failed: {0}")]
    Logger(#[source] io::Error),

    #[error("network runtime initialization failed: {0}")]
    Runtime(#[source] io::Error),

    #[error("{0}")]
    Address(String),

    #[error("socket() failed: {}", describe(.0))]
    Socket(#[source] io::Error),

    #[error("bind() failed: {}", describe(.0))]
    Bind(#[source] io::Error),

    #[error("listen() failed: {}", describe(.0))]
    Listen(#[source] io::Error),
}

/// Render an I/O error as `<code> (<message>)`, or just the message when no
/// OS code is attached
pub fn describe(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(code) => format!("{code} ({err})"),
        None => err.to_string(),
    }
}
