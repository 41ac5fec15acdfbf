use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

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
    pub vetting: VettingSettings,
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
        let format = match env::var("APP_LOG_FORMAT") {
            Ok(raw) if raw.trim().eq_ignore_ascii_case("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };

        let vetting = VettingSettings::from_env()?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level, format },
            vetting,
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

/// Operator dials for the risk engine. Weights and blacklist tables keep their built-in
/// defaults; only the decision boundaries and the opt-in fallback are exposed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VettingSettings {
    pub high_risk_max: u8,
    pub medium_max: u8,
    pub reputation_floor: u8,
    pub optin_default_compliant: bool,
    pub optin_default_captcha: bool,
}

impl Default for VettingSettings {
    fn default() -> Self {
        Self {
            high_risk_max: 40,
            medium_max: 70,
            reputation_floor: 40,
            optin_default_compliant: false,
            optin_default_captcha: false,
        }
    }
}

impl VettingSettings {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let high_risk_max = env_number("VET_HIGH_RISK_MAX", defaults.high_risk_max)?;
        let medium_max = env_number("VET_MEDIUM_MAX", defaults.medium_max)?;
        let reputation_floor = env_number("VET_REPUTATION_FLOOR", defaults.reputation_floor)?;

        if high_risk_max >= medium_max || medium_max > 100 {
            return Err(ConfigError::InvalidThresholds {
                high_risk_max,
                medium_max,
            });
        }
        if reputation_floor > 100 {
            return Err(ConfigError::InvalidNumber {
                key: "VET_REPUTATION_FLOOR",
                value: reputation_floor.to_string(),
            });
        }

        Ok(Self {
            high_risk_max,
            medium_max,
            reputation_floor,
            optin_default_compliant: env_flag(
                "VET_OPTIN_DEFAULT_COMPLIANT",
                defaults.optin_default_compliant,
            )?,
            optin_default_captcha: env_flag(
                "VET_OPTIN_DEFAULT_CAPTCHA",
                defaults.optin_default_captcha,
            )?,
        })
    }
}

fn env_number<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}

fn env_flag(key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidFlag { key, value: raw }),
        },
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str, value: String },
    InvalidFlag { key: &'static str, value: String },
    InvalidThresholds { high_risk_max: u8, medium_max: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be an integer between 0 and 100 (got '{value}')")
            }
            ConfigError::InvalidFlag { key, value } => {
                write!(f, "{key} must be true or false (got '{value}')")
            }
            ConfigError::InvalidThresholds {
                high_risk_max,
                medium_max,
            } => write!(
                f,
                "VET_HIGH_RISK_MAX ({high_risk_max}) must be below VET_MEDIUM_MAX ({medium_max}), which must not exceed 100"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::InvalidFlag { .. }
            | ConfigError::InvalidThresholds { .. } => None,
        }
    }
}
