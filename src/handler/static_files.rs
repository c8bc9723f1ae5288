//! Static file loading module
//!
//! Loads the served file into memory, capped at a fixed size.

use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Bytes of the served file, as read
#[derive(Debug)]
pub struct ResponsePayload {
    pub body: Vec<u8>,
    /// Set when the file had more bytes than the cap allowed
    pub truncated: bool,
}

impl ResponsePayload {
    /// Exact number of bytes read, used as Content-Length
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Read at most `cap` bytes of the file at `path`
///
/// Files larger than `cap` are truncated rather than rejected. The returned
/// length is what was read, not the size on disk.
pub async fn load_capped(path: impl AsRef<Path>, cap: u64) -> io::Result<ResponsePayload> {
    let file = File::open(path.as_ref()).await?;
    let mut body = Vec::new();
    // One extra byte tells a file of exactly `cap` bytes from a longer one
    file.take(cap.saturating_add(1)).read_to_end(&mut body).await?;

    let limit = usize::try_from(cap).unwrap_or(usize::MAX);
    let truncated = body.len() > limit;
    body.truncate(limit);

    Ok(ResponsePayload { body, truncated })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir()
            .join(format!("oneshot-static-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_small_file() {
        let path = temp_file("small.html", b"<h1>Hi</h1>");
        let payload = load_capped(&path, 4096).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(payload.body, b"<h1>Hi</h1>");
        assert_eq!(payload.len(), 11);
        assert!(!payload.truncated);
    }

    #[tokio::test]
    async fn test_load_truncates_at_cap() {
        let path = temp_file("large.html", &[b'x'; 5000]);
        let payload = load_capped(&path, 4096).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(payload.len(), 4096);
        assert!(payload.truncated);
    }

    #[tokio::test]
    async fn test_load_exactly_cap() {
        let path = temp_file("exact.html", &[b'y'; 16]);
        let payload = load_capped(&path, 16).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(payload.len(), 16);
        assert!(!payload.truncated);
    }

    #[tokio::test]
    async fn test_load_empty_file() {
        let path = temp_file("empty.html", b"");
        let payload = load_capped(&path, 4096).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(payload.is_empty());
        assert!(!payload.truncated);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let path = std::env::temp_dir().join("oneshot-static-definitely-missing.html");
        let err = load_capped(&path, 4096).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
