// Exchange module
// Runs the one request/response exchange on an accepted stream

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::Config;
use crate::handler;
use crate::http::{self, RequestBuffer};
use crate::logger;

/// How the run ended
///
/// Only `Served` puts bytes on the wire; every other variant closes the
/// connection silently. All of them exit the process with status 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The request matched and a response was attempted
    Served {
        body_bytes: usize,
        truncated: bool,
        header_sent: bool,
        body_sent: bool,
    },
    /// Bytes arrived but did not start with `GET / `
    NoMatch,
    /// The client closed without sending anything
    EmptyRead,
    /// The read itself failed
    ReadFailed,
    /// The request matched but the file could not be loaded
    FileUnavailable,
    /// No connection was accepted
    AcceptFailed,
}

impl Outcome {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Served { .. } => "served",
            Self::NoMatch => "no-match",
            Self::EmptyRead => "empty-read",
            Self::ReadFailed => "read-failed",
            Self::FileUnavailable => "file-unavailable",
            Self::AcceptFailed => "accept-failed",
        }
    }

    pub const fn body_bytes(self) -> usize {
        match self {
            Self::Served { body_bytes, .. } => body_bytes,
            _ => 0,
        }
    }
}

/// Result of [`handle_exchange`]: the outcome and whatever was read
#[derive(Debug)]
pub struct Exchange {
    pub outcome: Outcome,
    pub request: RequestBuffer,
}

/// Read once, match, and answer if the request is `GET /`.
///
/// The stream is not closed here; the caller owns it.
pub async fn handle_exchange<S>(stream: &mut S, config: &Config) -> Exchange
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut request = RequestBuffer::with_size(config.request.buffer_size);

    match stream.read(request.unfilled_mut()).await {
        Ok(n) => {
            logger::log_debug(&format!("Read {n} of at most {} bytes", request.capacity()));
            request.advance(n);
        }
        Err(e) => {
            logger::log_warning(&format!("recv() failed: {}", crate::error::describe(&e)));
            return Exchange {
                outcome: Outcome::ReadFailed,
                request,
            };
        }
    }

    let outcome = if request.is_empty() {
        Outcome::EmptyRead
    } else if http::is_root_get(request.filled()) {
        serve_index(stream, config).await
    } else {
        Outcome::NoMatch
    };

    Exchange { outcome, request }
}

async fn serve_index<S>(stream: &mut S, config: &Config) -> Outcome
where
    S: AsyncWrite + Unpin,
{
    let content = &config.content;
    let payload = match handler::load_capped(&content.index_file, content.max_body_size).await {
        Ok(payload) => payload,
        Err(e) => {
            logger::log_warning(&format!("Cannot serve '{}': {e}", content.index_file));
            return Outcome::FileUnavailable;
        }
    };

    if payload.is_empty() {
        logger::log_warning(&format!("'{}' is empty, sending no body", content.index_file));
    } else if payload.truncated {
        logger::log_warning(&format!(
            "'{}' exceeds {} bytes, body truncated",
            content.index_file, content.max_body_size
        ));
    }

    let header = http::build_header(&content.content_type, payload.len());

    // A failed header write does not stop the body write
    let header_sent = match stream.write_all(&header).await {
        Ok(()) => true,
        Err(e) => {
            logger::log_warning(&format!("send() of header failed: {e}"));
            false
        }
    };
    let body_sent = match stream.write_all(&payload.body).await {
        Ok(()) => true,
        Err(e) => {
            logger::log_warning(&format!("send() of body failed: {e}"));
            false
        }
    };

    logger::log_debug(&format!(
        "Sent {} header bytes and {} body bytes",
        header.len(),
        payload.len()
    ));

    Outcome::Served {
        body_bytes: payload.len(),
        truncated: payload.truncated,
        header_sent,
        body_sent,
    }
}
