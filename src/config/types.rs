// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub request: RequestConfig,
    pub content: ContentConfig,
    pub logging: LoggingConfig,
}

/// Listening endpoint configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Pending connections the OS may queue before `accept`
    pub backlog: i32,
}

/// Request buffer configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RequestConfig {
    /// Total buffer size; one byte stays reserved, so a single read
    /// consumes at most `buffer_size - 1` bytes
    pub buffer_size: usize,
}

/// Served resource configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    /// File served for `GET /`, relative to the working directory
    pub index_file: String,
    pub content_type: String,
    /// Body read cap in bytes; larger files are truncated, not rejected
    pub max_body_size: u64,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Info log file path (optional, stdout if not set)
    #[serde(default)]
    pub info_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}
