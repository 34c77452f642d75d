//! Configuration resolution and constants.
//!
//! The only runtime setting is the listening port, read from the `PORT`
//! environment variable (or `--port`). Everything else about the response is
//! fixed at compile time. `AppConfig` is the resolved configuration handed to
//! the server at startup.

use std::ffi::OsStr;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

// =============================================================================
// Response
// =============================================================================

/// Body returned for every request
pub const GREETING: &str = "Hello from ECS CI/CD demo deployed by Jenkins!\n";

/// Content-Type of every response
pub const CONTENT_TYPE_TEXT_PLAIN: &str = "text/plain";

/// Probe responses must never be served from a cache
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

/// Response header carrying the generated request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Listener
// =============================================================================

/// Environment variable holding the listening port
pub const PORT_ENV: &str = "PORT";

/// Port used when `PORT` is unset, empty, or not a number
pub const DEFAULT_PORT: u16 = 3000;

/// Dual-stack wildcard, accepting both IPv6 and IPv4-mapped clients
pub const DEFAULT_HOST: IpAddr = IpAddr::V6(Ipv6Addr::UNSPECIFIED);

/// Wildcard used when the host has no IPv6 support
pub const FALLBACK_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Upper bound on connection draining after SIGTERM/SIGINT
pub const SHUTDOWN_GRACE_PERIOD_SECS: u64 = 10;

// =============================================================================
// Logging
// =============================================================================

/// Environment variable selecting the log format
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "ecs_demo_responder=info";

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

// =============================================================================
// Resolved configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub http: HttpServerConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl HttpServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl AppConfig {
    /// Build the configuration from the raw `PORT` value.
    ///
    /// A value that is not valid UTF-8 cannot be numeric and resolves to
    /// [`DEFAULT_PORT`].
    pub fn resolve(raw_port: Option<&OsStr>) -> Result<Self, ConfigError> {
        Ok(Self {
            http: HttpServerConfig {
                host: DEFAULT_HOST,
                port: resolve_port(raw_port.and_then(OsStr::to_str))?,
            },
        })
    }
}

/// Resolve the listening port from the raw environment value.
///
/// Unset, blank, and non-numeric values fall back to [`DEFAULT_PORT`]. A value
/// that is numeric but outside `1..=65535` is rejected so that the process
/// exits instead of silently listening somewhere unexpected.
pub fn resolve_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };

    let unsigned = value.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(value);
    if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_ascii_digit()) {
        return Ok(DEFAULT_PORT);
    }

    match value.parse::<i64>() {
        Ok(port @ 1..=65535) => Ok(port as u16),
        _ => Err(ConfigError::PortOutOfRange(value.to_string())),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be between 1 and 65535, got {0:?}")]
    PortOutOfRange(String),
}
