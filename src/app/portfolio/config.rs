use std::time::Duration;

use reqwest::Url;

pub const BACKEND_URL_VAR: &str = "PORTFOLIO_BACKEND_URL";
pub const TIMEOUT_VAR: &str = "PORTFOLIO_API_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum ConfigErr {
    #[error("`{0}` is not set")]
    Missing(&'static str),
    #[error("`{var}` is not a valid url: {reason}")]
    InvalidUrl { var: &'static str, reason: String },
    #[error("`{var}` must be an http(s) url, got `{value}`")]
    UnsupportedScheme { var: &'static str, value: String },
    #[error("`{var}` must be a positive number of seconds, got `{value}`")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Where the backend lives and how long a single call may take.
///
/// Built once at startup and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    api_base: String,
    timeout: Duration,
}

impl ApiConfig {
    /// `backend_url` is the server root; endpoints are resolved under `/api`.
    pub fn new(backend_url: &str, timeout: Duration) -> Self {
        Self {
            api_base: format!("{}/api", backend_url.trim_end_matches('/')),
            timeout,
        }
    }

    pub fn from_env() -> Result<Self, ConfigErr> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigErr>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = lookup(BACKEND_URL_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigErr::Missing(BACKEND_URL_VAR))?;

        let parsed = Url::parse(&backend_url).map_err(|err| ConfigErr::InvalidUrl {
            var: BACKEND_URL_VAR,
            reason: err.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigErr::UnsupportedScheme {
                var: BACKEND_URL_VAR,
                value: backend_url,
            });
        }

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigErr::InvalidTimeout {
                        var: TIMEOUT_VAR,
                        value,
                    })
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self::new(&backend_url, timeout))
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
