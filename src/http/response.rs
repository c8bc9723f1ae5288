//! HTTP response building module
//!
//! Only one response shape exists: `200 OK` with a fixed header set.

/// Build the header block sent ahead of the body
///
/// Headers appear in a fixed order (Content-Type, Content-Length,
/// Connection) with CRLF endings and a blank line terminator.
pub fn build_header(content_type: &str, content_length: usize) -> Vec<u8> {
    format!(
        "HTTP/1.1 200 OK\r\n\
         Content-Type: {content_type}\r\n\
         Content-Length: {content_length}\r\n\
         Connection: close\r\n\
         \r\n"
    )
    .into_bytes()
}
