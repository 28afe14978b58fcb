use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use crate::draws::DrawSettings;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub pathways: PathwayConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            pathways: PathwayConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
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

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Engine defaults: recommendation target, draw analysis tunables and the optional
/// draw history loaded at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct PathwayConfig {
    pub target_score: u32,
    pub draws: DrawSettings,
    pub draws_csv: Option<PathBuf>,
}

impl Default for PathwayConfig {
    fn default() -> Self {
        Self {
            target_score: 480,
            draws: DrawSettings::default(),
            draws_csv: None,
        }
    }
}

impl PathwayConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let draws = DrawSettings {
            window: parse_var("PATHWAY_DRAW_WINDOW", defaults.draws.window)?,
            band_min: parse_var("PATHWAY_CUTOFF_BAND_MIN", defaults.draws.band_min)?,
            band_max: parse_var("PATHWAY_CUTOFF_BAND_MAX", defaults.draws.band_max)?,
            cadence_days: parse_var("PATHWAY_DRAW_CADENCE_DAYS", defaults.draws.cadence_days)?,
        };

        if draws.window == 0 {
            return Err(ConfigError::InvalidValue {
                name: "PATHWAY_DRAW_WINDOW",
                value: "0".to_string(),
            });
        }
        if !DRAW_CADENCE_DAYS.contains(&draws.cadence_days) {
            return Err(ConfigError::InvalidValue {
                name: "PATHWAY_DRAW_CADENCE_DAYS",
                value: draws.cadence_days.to_string(),
            });
        }
        if draws.band_min > draws.band_max {
            return Err(ConfigError::InvalidCutoffBand {
                min: draws.band_min,
                max: draws.band_max,
            });
        }

        let draws_csv = env::var("PATHWAY_DRAWS_CSV")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            target_score: parse_var("PATHWAY_TARGET_SCORE", defaults.target_score)?,
            draws,
            draws_csv,
        })
    }
}

/// Accepted spacing between draws, in days.
const DRAW_CADENCE_DAYS: std::ops::RangeInclusive<i64> = 1..=365;

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidValue { name: &'static str, value: String },
    InvalidCutoffBand { min: u32, max: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidValue { name, value } => {
                write!(f, "{} has an invalid value '{}'", name, value)
            }
            ConfigError::InvalidCutoffBand { min, max } => write!(
                f,
                "PATHWAY_CUTOFF_BAND_MIN ({}) must not exceed PATHWAY_CUTOFF_BAND_MAX ({})",
                min, max
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidValue { .. }
            | ConfigError::InvalidCutoffBand { .. } => None,
        }
    }
}
