// Configuration module entry point
// Loads the responder's settings from defaults, an optional file and the environment

mod types;

use std::net::SocketAddr;

pub use types::{Config, LogLevel};
#[cfg(test)]
pub use types::{ContentConfig, LoggingConfig, RequestConfig, ServerConfig};

/// Environment variable naming an alternate config file (without extension)
pub const CONFIG_PATH_ENV: &str = "ONESHOT_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from `$ONESHOT_CONFIG`, falling back to "config.toml"
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional. Environment variables such as
    /// `ONESHOT_SERVER__PORT` override both the file and the defaults.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = Self::defaults()?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("ONESHOT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    fn defaults(
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.backlog", 5)?
            .set_default("request.buffer_size", 1024)?
            .set_default("content.index_file", "index.html")?
            .set_default("content.content_type", "text/html; charset=UTF-8")?
            .set_default("content.max_body_size", 4096)?
            .set_default("logging.level", "info")
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_responder() {
        let cfg = Config::load_from("this-config-file-does-not-exist").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.backlog, 5);
        assert_eq!(cfg.request.buffer_size, 1024);
        assert_eq!(cfg.content.index_file, "index.html");
        assert_eq!(cfg.content.content_type, "text/html; charset=UTF-8");
        assert_eq!(cfg.content.max_body_size, 4096);
        assert_eq!(cfg.logging.level, LogLevel::Info);
        assert!(cfg.logging.info_log_file.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = std::env::temp_dir()
            .join(format!("oneshot-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[server]\nport = 8081\n\n[content]\nindex_file = \"home.html\"\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let stem = path.with_extension("");
        let cfg = Config::load_from(stem.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(cfg.server.port, 8081);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.content.index_file, "home.html");
        assert_eq!(cfg.content.max_body_size, 4096);
        assert_eq!(cfg.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = Config::load_from("this-config-file-does-not-exist").unwrap();
        assert_eq!(cfg.get_socket_addr().unwrap(), "0.0.0.0:3000".parse().unwrap());

        cfg.server.host = "not an address".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug > LogLevel::Info);
        assert!(LogLevel::Warn > LogLevel::Error);
    }
}
