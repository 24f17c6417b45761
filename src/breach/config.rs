use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com";

pub const API_URL_ENV: &str = "PWD_BREACH_API_URL";
pub const TIMEOUT_ENV: &str = "PWD_BREACH_TIMEOUT_SECS";
pub const MAX_ATTEMPTS_ENV: &str = "PWD_BREACH_MAX_ATTEMPTS";

#[derive(Error, Debug)]
pub enum BreachConfigError {
    #[error("Invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Settings for [`BreachChecker`](super::BreachChecker).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachConfig {
    /// Base URL; requests go to `{api_url}/range/{prefix}`.
    pub api_url: String,
    /// Per-attempt request timeout.
    pub timeout: Duration,
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Backoff before attempt `n + 1` is `base_backoff * n`.
    pub base_backoff: Duration,
    /// Extra wait after a 429 response.
    pub rate_limit_cooldown: Duration,
    pub user_agent: String,
}

impl Default for BreachConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            max_attempts: 3,
            base_backoff: Duration::from_secs(1),
            rate_limit_cooldown: Duration::from_secs(5),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl BreachConfig {
    /// Defaults overlaid with `PWD_BREACH_API_URL`, `PWD_BREACH_TIMEOUT_SECS`
    /// and `PWD_BREACH_MAX_ATTEMPTS` when set.
    ///
    /// # Errors
    ///
    /// Returns [`BreachConfigError::InvalidValue`] if a numeric variable does
    /// not parse, or the attempt count is zero.
    pub fn from_env() -> Result<Self, BreachConfigError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.api_url = url;
        }
        if let Ok(value) = std::env::var(TIMEOUT_ENV) {
            let secs = parse_var::<u64>(TIMEOUT_ENV, &value)?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Ok(value) = std::env::var(MAX_ATTEMPTS_ENV) {
            let attempts = parse_var::<u32>(MAX_ATTEMPTS_ENV, &value)?;
            if attempts == 0 {
                return Err(BreachConfigError::InvalidValue {
                    var: MAX_ATTEMPTS_ENV,
                    value,
                });
            }
            config.max_attempts = attempts;
        }

        Ok(config)
    }

    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configure the total number of attempts (initial try + retries).
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    pub fn rate_limit_cooldown(mut self, cooldown: Duration) -> Self {
        self.rate_limit_cooldown = cooldown;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub(crate) fn range_url(&self, prefix: &str) -> String {
        format!("{}/range/{}", self.api_url.trim_end_matches('/'), prefix)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, BreachConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| BreachConfigError::InvalidValue {
            var,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key); }
    }

    fn clear_env() {
        for var in [API_URL_ENV, TIMEOUT_ENV, MAX_ATTEMPTS_ENV] {
            remove_env(var);
        }
    }

    #[test]
    fn test_defaults() {
        let config = BreachConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.base_backoff, Duration::from_secs(1));
        assert_eq!(config.rate_limit_cooldown, Duration::from_secs(5));
    }

    #[test]
    fn test_range_url() {
        let config = BreachConfig::default().api_url("http://127.0.0.1:9000/");
        assert_eq!(config.range_url("5BAA6"), "http://127.0.0.1:9000/range/5BAA6");
    }

    #[test]
    fn test_max_attempts_never_zero() {
        assert_eq!(BreachConfig::default().max_attempts(0).max_attempts, 1);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        assert_eq!(BreachConfig::from_env().unwrap(), BreachConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_env(API_URL_ENV, "http://localhost:8080");
        set_env(TIMEOUT_ENV, "15");
        set_env(MAX_ATTEMPTS_ENV, "5");

        let config = BreachConfig::from_env().unwrap();
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.max_attempts, 5);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout() {
        clear_env();
        set_env(TIMEOUT_ENV, "soon");
        assert!(matches!(
            BreachConfig::from_env(),
            Err(BreachConfigError::InvalidValue { var: TIMEOUT_ENV, .. })
        ));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_zero_attempts() {
        clear_env();
        set_env(MAX_ATTEMPTS_ENV, "0");
        assert!(BreachConfig::from_env().is_err());
        clear_env();
    }
}
