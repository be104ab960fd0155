//! Environment-driven configuration. Everything comes from process env vars
//! (`.env` files are honored via dotenvy); there is no config file. The
//! surface is small on purpose: a bind address and a log level.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_HOST: &str = "127.0.0.1";
// the port the questionnaire frontend is wired to
const DEFAULT_PORT: &str = "5000";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Deployment stage, read from `APP_ENV`. Unrecognized values fall back to
/// development so a bare checkout runs without any setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppEnvironment {
    #[default]
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Runtime settings for the funnel service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Assemble configuration from the environment, falling back to
    /// development defaults for anything unset.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = env::var("APP_ENV")
            .map(|value| AppEnvironment::parse(&value))
            .unwrap_or_default();

        let server = ServerConfig {
            host: env_or("APP_HOST", DEFAULT_HOST),
            port: parse_port(&env_or("APP_PORT", DEFAULT_PORT))?,
        };

        let telemetry = TelemetryConfig {
            log_level: env_or("APP_LOG_LEVEL", DEFAULT_LOG_LEVEL),
        };

        Ok(Self {
            environment,
            server,
            telemetry,
        })
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::Port {
            raw: raw.to_string(),
        })
}

/// Listening address for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Resolve the bind address. `localhost` is accepted as an alias for the
    /// loopback interface; anything else must be a literal IP.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host.parse().map_err(|source| ConfigError::Host {
                raw: self.host.clone(),
                source,
            })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filter settings handed to telemetry setup.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Rejected environment values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT '{raw}' is not a valid port number")]
    Port { raw: String },
    #[error("APP_HOST '{raw}' is neither 'localhost' nor an IP address")]
    Host {
        raw: String,
        #[source]
        source: std::net::AddrParseError,
    },
}
