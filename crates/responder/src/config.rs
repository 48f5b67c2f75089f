//! Application configuration loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_APP_VERSION: &str = "1.0.0";
pub const DEFAULT_ENVIRONMENT: &str = "production";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Process-wide configuration, resolved once at startup.
///
/// Reads from environment variables:
/// - `PORT` — listen port (default: `3000`, also used when unparseable)
/// - `APP_VERSION` — `version` field of the greeting (default: `"1.0.0"`)
/// - `NODE_ENV` — `environment` field of the greeting (default: `"production"`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `json` for JSON log lines, anything else for text
///
/// The bind host is always the IPv4 wildcard address. Empty variables count
/// as unset.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub app_version: String,
    pub environment: String,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: var("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            app_version: var("APP_VERSION").unwrap_or_else(|| DEFAULT_APP_VERSION.to_string()),
            environment: var("NODE_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            log_filter: var("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            log_format: var("LOG_FORMAT")
                .map(|f| LogFormat::parse(&f))
                .unwrap_or_default(),
        }
    }

    /// Returns the socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
