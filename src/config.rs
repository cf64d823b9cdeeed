use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL: &str = "https://bas-backend.onrender.com";
const DEFAULT_REDIRECT_DELAY_MS: u32 = 2000;
const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub redirect_delay_ms: u32,
    pub token_storage_key: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from variables captured at compile time
    /// (see `build.rs`), falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("REDIRECT_DELAY_MS"),
            option_env!("TOKEN_STORAGE_KEY"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_values(
        backend_url: Option<&str>,
        redirect_delay_ms: Option<&str>,
        token_storage_key: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.backend_url),
            redirect_delay_ms: redirect_delay_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.redirect_delay_ms),
            token_storage_key: token_storage_key
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.token_storage_key),
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Effective log level; logging disabled means errors only.
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        match self.log_level.as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn backend_url_loses_trailing_slash() {
        let config = AppConfig::from_values(Some("http://localhost:5000/"), None, None, None, None);
        assert_eq!(config.backend_url(), "http://localhost:5000");
    }

    #[test]
    fn unparsable_numbers_keep_default_delay() {
        let config = AppConfig::from_values(None, Some("soon"), None, None, None);
        assert_eq!(config.redirect_delay_ms, DEFAULT_REDIRECT_DELAY_MS);
    }

    #[test]
    fn disabled_logging_only_reports_errors() {
        let config = AppConfig::from_values(None, None, None, Some("false"), Some("debug"));
        assert_eq!(config.log_level(), log::Level::Error);

        let config = AppConfig::from_values(None, None, None, Some("true"), Some("WARN"));
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
