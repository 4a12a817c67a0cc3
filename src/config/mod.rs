//! Configuration handling for the service.
//!
//! Everything is read from environment variables once at startup. A `.env`
//! file in the working directory is loaded first when present, so local
//! development only needs `GEMINI_API_KEY=...` in that file.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Public so tests and deployment tooling can
/// refer to them.
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const ENV_GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_SUMMARY_LANGUAGE: &str = "SUMMARY_LANGUAGE";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro-latest";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_SUMMARY_LANGUAGE: &str = "Japanese";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Application runtime configuration. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    gemini_api_key: String,
    gemini_model: String,
    gemini_base_url: String,
    summary_language: String,
    host: String,
    port: u16,
}

impl Config {
    /// Create a config with an explicit API key and defaults for everything else.
    pub fn new(gemini_api_key: impl Into<String>) -> Self {
        Self {
            gemini_api_key: gemini_api_key.into(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            summary_language: DEFAULT_SUMMARY_LANGUAGE.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }

    /// Load from the environment (after an optional `.env` file).
    ///
    /// Fails when `GEMINI_API_KEY` is absent or blank, or when `PORT` is not
    /// a valid port number. The service must not start serving in either case.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenv::dotenv();
        Self::from_process_env()
    }

    fn from_process_env() -> Result<Self, ConfigError> {
        let gemini_api_key = env::var(ENV_GEMINI_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_GEMINI_API_KEY))?;

        let port = match env::var(ENV_PORT) {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                field: ENV_PORT,
                reason: format!("{raw:?} is not a port number: {e}"),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            gemini_api_key,
            gemini_model: env_or(ENV_GEMINI_MODEL, DEFAULT_GEMINI_MODEL),
            gemini_base_url: env_or(ENV_GEMINI_BASE_URL, DEFAULT_GEMINI_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            summary_language: env_or(ENV_SUMMARY_LANGUAGE, DEFAULT_SUMMARY_LANGUAGE),
            host: env_or(ENV_HOST, DEFAULT_HOST),
            port,
        })
    }

    /// Point the Gemini client at a different API root (used by tests).
    pub fn with_gemini_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.gemini_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Credential for the generative-language API.
    pub fn gemini_api_key(&self) -> &str {
        &self.gemini_api_key
    }
    /// Model name used in the `generateContent` call.
    pub fn gemini_model(&self) -> &str {
        &self.gemini_model
    }
    /// API root without a trailing slash.
    pub fn gemini_base_url(&self) -> &str {
        &self.gemini_base_url
    }
    /// Natural language the summary is written in.
    pub fn summary_language(&self) -> &str {
        &self.summary_language
    }
    pub fn port(&self) -> u16 {
        self.port
    }
    /// TCP bind address (host:port) for the standalone server.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Hand-written so the API key never ends up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("summary_language", &self.summary_language)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Errors that can occur while building a configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    Missing(&'static str),
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(field) => write!(f, "{} is not set", field),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Ensure environment-variable manipulating tests run serially.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            ENV_GEMINI_API_KEY,
            ENV_GEMINI_MODEL,
            ENV_GEMINI_BASE_URL,
            ENV_SUMMARY_LANGUAGE,
            ENV_HOST,
            ENV_PORT,
        ] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let err = Config::from_process_env().unwrap_err();
        assert_eq!(err, ConfigError::Missing(ENV_GEMINI_API_KEY));
        assert_eq!(err.to_string(), "GEMINI_API_KEY is not set");
    }

    #[test]
    fn blank_api_key_is_fatal() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_GEMINI_API_KEY, "   ");
        }
        assert!(Config::from_process_env().is_err());
    }

    #[test]
    fn defaults_when_only_key_present() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_GEMINI_API_KEY, "test-key");
        }
        let cfg = Config::from_process_env().unwrap();
        assert_eq!(cfg.gemini_api_key(), "test-key");
        assert_eq!(cfg.gemini_model(), DEFAULT_GEMINI_MODEL);
        assert_eq!(cfg.gemini_base_url(), DEFAULT_GEMINI_BASE_URL);
        assert_eq!(cfg.summary_language(), DEFAULT_SUMMARY_LANGUAGE);
        assert_eq!(cfg.port(), 3000);
        assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn overrides_when_env_present() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_GEMINI_API_KEY, "test-key");
            env::set_var(ENV_GEMINI_MODEL, "gemini-2.0-flash");
            env::set_var(ENV_GEMINI_BASE_URL, "http://localhost:9999/v1beta/");
            env::set_var(ENV_SUMMARY_LANGUAGE, "English");
            env::set_var(ENV_HOST, "127.0.0.1");
            env::set_var(ENV_PORT, "8081");
        }
        let cfg = Config::from_process_env().unwrap();
        assert_eq!(cfg.gemini_model(), "gemini-2.0-flash");
        assert_eq!(cfg.gemini_base_url(), "http://localhost:9999/v1beta");
        assert_eq!(cfg.summary_language(), "English");
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8081");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_GEMINI_API_KEY, "test-key");
            env::set_var(ENV_PORT, "not-a-port");
        }
        match Config::from_process_env() {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, ENV_PORT),
            other => panic!("expected invalid PORT, got {:?}", other),
        }
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let cfg = Config::new("super-secret");
        let rendered = format!("{:?}", cfg);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
