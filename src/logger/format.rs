//! Exchange record format module
//!
//! One line per run, in the spirit of the Common Log Format:
//! `$peer - - [$time_local] "$request_line" $outcome $body_bytes`

use chrono::Local;

/// Longest request line echoed into a record
const MAX_REQUEST_LINE: usize = 200;

/// Summary of the single request/response exchange
#[derive(Debug, Clone)]
pub struct ExchangeRecord {
    /// Client address, if a connection was accepted
    pub peer: Option<String>,
    /// Time the record was created
    pub time: chrono::DateTime<Local>,
    /// First line of whatever the client sent, lossily decoded
    pub request_line: Option<String>,
    /// Outcome label, e.g. `served` or `no-match`
    pub outcome: &'static str,
    /// Body bytes handed to the socket
    pub body_bytes: usize,
}

impl ExchangeRecord {
    /// Create a new record with current timestamp
    pub fn new(peer: Option<String>, outcome: &'static str) -> Self {
        Self {
            peer,
            time: Local::now(),
            request_line: None,
            outcome,
            body_bytes: 0,
        }
    }

    /// Attach the request line found in the first bytes read
    #[must_use]
    pub fn with_request(mut self, raw: &[u8]) -> Self {
        self.request_line = first_line(raw);
        self
    }

    #[must_use]
    pub const fn with_body_bytes(mut self, body_bytes: usize) -> Self {
        self.body_bytes = body_bytes;
        self
    }

    pub fn format(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.peer.as_deref().unwrap_or("-"),
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line.as_deref().unwrap_or("-"),
            self.outcome,
            self.body_bytes,
        )
    }
}

/// Extract the first line (up to CR or LF) of the request bytes
fn first_line(raw: &[u8]) -> Option<String> {
    let end = raw
        .iter()
        .position(|&b| b == b'\r' || b == b'\n')
        .unwrap_or(raw.len())
        .min(MAX_REQUEST_LINE);
    if end == 0 {
        return None;
    }
    let line = String::from_utf8_lossy(&raw[..end]);
    // Quotes would break the record's field layout
    Some(line.replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_served() {
        let record = ExchangeRecord::new(Some("127.0.0.1:50000".to_string()), "served")
            .with_request(b"GET / HTTP/1.1\r\nHost: x\r\n\r\n")
            .with_body_bytes(11);
        let log = record.format();
        assert!(log.starts_with("127.0.0.1:50000 - - ["));
        assert!(log.contains("\"GET / HTTP/1.1\""));
        assert!(log.ends_with("served 11"));
    }

    #[test]
    fn test_format_without_connection() {
        let log = ExchangeRecord::new(None, "accept-failed").format();
        assert!(log.starts_with("- - - ["));
        assert!(log.ends_with("\"-\" accept-failed 0"));
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line(b""), None);
        assert_eq!(first_line(b"\r\n"), None);
        assert_eq!(first_line(b"GET /x"), Some("GET /x".to_string()));
        assert_eq!(first_line(b"say \"hi\"\n"), Some("say \\\"hi\\\"".to_string()));
        assert_eq!(first_line(&[b'a'; 500]).map(|l| l.len()), Some(MAX_REQUEST_LINE));
    }
}
