use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

const ENV_KEY: &str = "ONBOARDING_ENV";
const HOST_KEY: &str = "ONBOARDING_HOST";
const PORT_KEY: &str = "ONBOARDING_PORT";
const LOG_LEVEL_KEY: &str = "ONBOARDING_LOG_LEVEL";
const SEED_PATH_KEY: &str = "ONBOARDING_SEED_PATH";

/// Deployment flavour; production turns off ANSI log colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
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

/// Everything the onboarding service reads from the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Loads `.env` (if any) and then reads `ONBOARDING_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&var_or(ENV_KEY, "development"));

        let host = var_or(HOST_KEY, "127.0.0.1");
        let port = var_or(PORT_KEY, "3000")
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let telemetry = TelemetryConfig {
            log_level: var_or(LOG_LEVEL_KEY, "info"),
            ansi: environment == AppEnvironment::Development,
        };

        let applications_path = match env::var(SEED_PATH_KEY) {
            Ok(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptySeedPath),
            Ok(raw) => Some(PathBuf::from(raw.trim())),
            Err(_) => None,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry,
            seed: SeedConfig { applications_path },
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

/// Application snapshots preloaded into the in-memory store at startup.
#[derive(Debug, Clone, Default)]
pub struct SeedConfig {
    pub applications_path: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    EmptySeedPath,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "{PORT_KEY} must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "{HOST_KEY} must parse to an IPv4 or IPv6 address")
            }
            ConfigError::EmptySeedPath => write!(f, "{SEED_PATH_KEY} is set but empty"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort | ConfigError::EmptySeedPath => None,
        }
    }
}
