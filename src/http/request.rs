//! Request inspection module
//!
//! The responder never parses a request. It performs one bounded read and
//! compares the first bytes against a fixed request-line prefix.

/// Request-line prefix of a `GET` for the root path
pub const ROOT_GET_PREFIX: &[u8; 6] = b"GET / ";

/// Fixed-capacity buffer for the first bytes of a request
///
/// One byte of the configured size is held back, so a buffer of size 1024
/// accepts at most 1023 bytes. Anything the client sends past that is left
/// unread on the socket; the buffer truncates, it never rejects.
#[derive(Debug)]
pub struct RequestBuffer {
    data: Vec<u8>,
    filled: usize,
}

impl RequestBuffer {
    pub fn with_size(size: usize) -> Self {
        Self {
            data: vec![0; size.saturating_sub(1)],
            filled: 0,
        }
    }

    /// Number of bytes a single read may fill
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Writable window for the one read call
    pub fn unfilled_mut(&mut self) -> &mut [u8] {
        &mut self.data[self.filled..]
    }

    /// Record how many bytes the read produced, capped at capacity
    pub fn advance(&mut self, n: usize) {
        self.filled = (self.filled + n).min(self.data.len());
    }

    pub fn filled(&self) -> &[u8] {
        &self.data[..self.filled]
    }

    pub const fn is_empty(&self) -> bool {
        self.filled == 0
    }
}

/// True iff the bytes start with exactly `GET / `
///
/// Fewer than six bytes never match, nor does any other method, path or
/// casing.
pub fn is_root_get(bytes: &[u8]) -> bool {
    bytes.starts_with(ROOT_GET_PREFIX)
}
