//! Server Configuration
//!
//! Defaults are fixed; every value can be overridden from the environment
//! (or a `.env` file).

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};
use tracing::warn;

/// Default listening port
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,

    /// Log level filter (e.g. "info", "debug")
    pub log_level: String,

    /// Directory containing widget HTML assets
    pub assets_dir: PathBuf,

    /// Directory served under `/static`, if any
    pub static_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            assets_dir: locate_assets_directory(&current_dir),
            static_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognised: `MCP_HOST`, `MCP_PORT`, `MCP_LOG_LEVEL`, `LOTTE_ASSETS_DIR`,
    /// `LOTTE_STATIC_DIR`. Unparseable values keep the default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(host) = std::env::var("MCP_HOST") {
            match host.parse() {
                Ok(host) => config.host = host,
                Err(_) => warn!("Ignoring invalid MCP_HOST {:?}", host),
            }
        }

        if let Ok(port) = std::env::var("MCP_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("Ignoring invalid MCP_PORT {:?}", port),
            }
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.log_level = level;
        }

        if let Ok(dir) = std::env::var("LOTTE_ASSETS_DIR") {
            config.assets_dir = PathBuf::from(dir);
        }

        if let Ok(dir) = std::env::var("LOTTE_STATIC_DIR") {
            config.static_dir = Some(PathBuf::from(dir));
        }

        config
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Attempts to locate the assets directory using a multi-step strategy
fn locate_assets_directory(current_dir: &Path) -> PathBuf {
    // 1. ./assets
    // 2. ../assets (if running from a subdir)
    // 3. Fallback to "assets" relative path

    if current_dir.join("assets").exists() {
        return current_dir.join("assets");
    }

    if let Some(parent) = current_dir.parent() {
        if parent.join("assets").exists() {
            return parent.join("assets");
        }
    }

    PathBuf::from("assets")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn defaults_listen_on_port_8000() {
        let config = Config::default();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn env_overrides_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        std::env::set_var("MCP_PORT", "9100");
        std::env::set_var("LOTTE_ASSETS_DIR", "/tmp/widgets");
        std::env::set_var("LOTTE_STATIC_DIR", "/tmp/images");

        let config = Config::from_env();
        assert_eq!(config.port, 9100);
        assert_eq!(config.assets_dir, PathBuf::from("/tmp/widgets"));
        assert_eq!(config.static_dir, Some(PathBuf::from("/tmp/images")));

        std::env::remove_var("MCP_PORT");
        std::env::remove_var("LOTTE_ASSETS_DIR");
        std::env::remove_var("LOTTE_STATIC_DIR");
    }

    #[test]
    fn invalid_port_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        std::env::set_var("MCP_PORT", "not-a-port");

        let config = Config::from_env();
        assert_eq!(config.port, DEFAULT_PORT);

        std::env::remove_var("MCP_PORT");
    }

    #[test]
    fn locates_assets_next_to_working_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        let nested = dir.path().join("server");
        std::fs::create_dir(&nested).unwrap();

        assert_eq!(locate_assets_directory(dir.path()), dir.path().join("assets"));
        assert_eq!(locate_assets_directory(&nested), dir.path().join("assets"));
    }
}
