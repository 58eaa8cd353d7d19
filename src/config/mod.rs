use std::env;
use thiserror::Error;
use url::Url;

pub const DEFAULT_EMPLOYEE_API_URL: &str = "http://localhost:8112/api/v1/employee";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("EMPLOYEE_API_URL is not a valid http(s) URL: {0}")]
    InvalidApiUrl(String),
    #[error("SERVER_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub employee_api_url: Url,
}

impl Config {
    /// Reads settings from the process environment. `.env` is loaded by `main`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("SERVER_HOST").ok(),
            env::var("SERVER_PORT").ok(),
            env::var("EMPLOYEE_API_URL").ok(),
        )
    }

    fn from_vars(
        host: Option<String>,
        port: Option<String>,
        api_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_url = api_url.unwrap_or_else(|| DEFAULT_EMPLOYEE_API_URL.to_string());
        let parsed = Url::parse(api_url.trim_end_matches('/'))
            .map_err(|_| ConfigError::InvalidApiUrl(api_url.clone()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidApiUrl(api_url));
        }

        Ok(Config {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            employee_api_url: parsed,
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_vars(None, None, None).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.employee_api_url.as_str(), DEFAULT_EMPLOYEE_API_URL);
    }

    #[test]
    fn trims_trailing_slash() {
        let config =
            Config::from_vars(None, Some("9000".into()), Some("http://upstream:8112/api/v1/employee/".into()))
                .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.employee_api_url.as_str(), "http://upstream:8112/api/v1/employee");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_vars(None, Some("eighty".into()), None),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            Config::from_vars(None, None, Some("ftp://upstream/employee".into())),
            Err(ConfigError::InvalidApiUrl(_))
        ));
        assert!(matches!(
            Config::from_vars(None, None, Some("not a url".into())),
            Err(ConfigError::InvalidApiUrl(_))
        ));
    }
}
