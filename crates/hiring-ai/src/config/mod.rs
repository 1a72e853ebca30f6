use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_TEAM_SIZE: usize = 5;
const DEFAULT_CANDIDATES_PATH: &str = "form-submissions.json";

/// Deployment stage, read from `APP_ENV`.
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

/// Settings shared by the dashboard server and the CLI, sourced from `.env` and `APP_*` variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub hiring: HiringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            environment: env::var("APP_ENV")
                .map(|value| AppEnvironment::parse(&value))
                .unwrap_or(AppEnvironment::Development),
            server: ServerConfig::from_env()?,
            telemetry: TelemetryConfig {
                log_level: env::var("APP_LOG_LEVEL")
                    .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            },
            hiring: HiringConfig::from_env()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("APP_PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort)?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// Resolves the bind address; `localhost` is accepted as loopback.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::from([127, 0, 0, 1])
        } else {
            self.host
                .parse()
                .map_err(|source| ConfigError::InvalidHost { source })?
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

/// How many seats the team has and where applicant submissions are read from.
#[derive(Debug, Clone)]
pub struct HiringConfig {
    pub team_size: usize,
    pub candidates_path: PathBuf,
}

impl HiringConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let team_size = match env::var("APP_TEAM_SIZE") {
            Ok(raw) => parse_team_size(&raw)?,
            Err(_) => DEFAULT_TEAM_SIZE,
        };
        let candidates_path = env::var_os("APP_CANDIDATES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CANDIDATES_PATH));

        Ok(Self {
            team_size,
            candidates_path,
        })
    }
}

fn parse_team_size(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidTeamSize {
            value: raw.to_string(),
        }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTeamSize { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTeamSize { value } => {
                write!(f, "APP_TEAM_SIZE must be a positive integer (found '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort | ConfigError::InvalidTeamSize { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    const VARS: [&str; 6] = [
        "APP_ENV",
        "APP_HOST",
        "APP_PORT",
        "APP_LOG_LEVEL",
        "APP_TEAM_SIZE",
        "APP_CANDIDATES_PATH",
    ];

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        let guard = GUARD
            .get_or_init(|| Mutex::new(()))
            .lock()
            .expect("env mutex poisoned");
        for var in VARS {
            env::remove_var(var);
        }
        guard
    }

    #[test]
    fn defaults_apply_without_environment() {
        let _lock = env_lock();
        let config = AppConfig::load().expect("config loads with defaults");

        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.hiring.team_size, 5);
        assert_eq!(
            config.hiring.candidates_path,
            PathBuf::from("form-submissions.json")
        );
    }

    #[test]
    fn localhost_binds_loopback() {
        let _lock = env_lock();
        env::set_var("APP_HOST", "localhost");
        env::set_var("APP_PORT", "8080");

        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 8080));
    }

    #[test]
    fn hiring_overrides_are_applied() {
        let _lock = env_lock();
        env::set_var("APP_TEAM_SIZE", " 8 ");
        env::set_var("APP_CANDIDATES_PATH", "/data/submissions.json");
        env::set_var("APP_ENV", "production");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.hiring.team_size, 8);
        assert_eq!(
            config.hiring.candidates_path,
            PathBuf::from("/data/submissions.json")
        );
        assert_eq!(config.environment, AppEnvironment::Production);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let _lock = env_lock();
        env::set_var("APP_TEAM_SIZE", "0");
        let err = AppConfig::load().expect_err("zero seats rejected");
        assert!(matches!(err, ConfigError::InvalidTeamSize { ref value } if value == "0"));

        env::set_var("APP_TEAM_SIZE", "5");
        env::set_var("APP_PORT", "99999");
        assert!(matches!(AppConfig::load(), Err(ConfigError::InvalidPort)));

        env::set_var("APP_PORT", "3000");
        env::set_var("APP_HOST", "not-an-ip");
        let config = AppConfig::load().expect("host is only checked on bind");
        assert!(matches!(
            config.server.socket_addr(),
            Err(ConfigError::InvalidHost { .. })
        ));
    }
}
