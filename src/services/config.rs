use std::fmt;
use std::time::Duration;

use thiserror::Error;

pub const STORE_ID_VAR: &str = "MONERIS_STORE_ID";
pub const API_TOKEN_VAR: &str = "MONERIS_API_TOKEN";
pub const GATEWAY_URL_VAR: &str = "MONERIS_GATEWAY_URL";
pub const TIMEOUT_VAR: &str = "MONERIS_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT_SECS: u64 = 35;
pub const PROCESSING_COUNTRY_CODE: &str = "CA";

const PRODUCTION_HOST: &str = "https://www3.moneris.com";
const TESTING_HOST: &str = "https://esqa.moneris.com";
const MPG_REQUEST_PATH: &str = "/gateway2/servlet/MpgRequest";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVariable(&'static str),

    #[error("Environment variable {0} is set but empty")]
    EmptyVariable(&'static str),

    #[error("Argument <{0}> must not be empty")]
    EmptyArgument(&'static str),

    #[error("Request timeout must be at least one second")]
    InvalidTimeout,
}

/// Store credentials, read once per run.
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayCredentials {
    store_id: String,
    api_token: String,
}

impl GatewayCredentials {
    pub fn new(store_id: &str, api_token: &str) -> Result<Self, ConfigError> {
        if store_id.trim().is_empty() {
            return Err(ConfigError::EmptyVariable(STORE_ID_VAR));
        }
        if api_token.trim().is_empty() {
            return Err(ConfigError::EmptyVariable(API_TOKEN_VAR));
        }
        Ok(Self {
            store_id: store_id.to_string(),
            api_token: api_token.to_string(),
        })
    }

    /// Reads `MONERIS_STORE_ID` and `MONERIS_API_TOKEN` through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_id = lookup(STORE_ID_VAR).ok_or(ConfigError::MissingVariable(STORE_ID_VAR))?;
        let api_token =
            lookup(API_TOKEN_VAR).ok_or(ConfigError::MissingVariable(API_TOKEN_VAR))?;
        Self::new(&store_id, &api_token)
    }

    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }
}

impl fmt::Debug for GatewayCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayCredentials")
            .field("store_id", &self.store_id)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Testing,
}

impl Environment {
    fn host(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_HOST,
            Environment::Testing => TESTING_HOST,
        }
    }
}

/// Everything the purchase client needs, fixed at construction.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    credentials: GatewayCredentials,
    environment: Environment,
    status_check: bool,
    timeout: Duration,
    endpoint_override: Option<String>,
}

impl GatewayConfig {
    /// Production endpoint, no status check, default timeout.
    pub fn new(credentials: GatewayCredentials) -> Self {
        Self {
            credentials,
            environment: Environment::Production,
            status_check: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            endpoint_override: None,
        }
    }

    /// Credentials plus the optional `MONERIS_GATEWAY_URL` override.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(GatewayCredentials::from_lookup(&lookup)?);
        if let Some(url) = lookup(GATEWAY_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config = config.with_endpoint(url);
        }
        Ok(config)
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout < Duration::from_secs(1) {
            return Err(ConfigError::InvalidTimeout);
        }
        self.timeout = timeout;
        Ok(self)
    }

    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint_override = Some(url.into());
        self
    }

    pub fn credentials(&self) -> &GatewayCredentials {
        &self.credentials
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn processing_country_code(&self) -> &'static str {
        PROCESSING_COUNTRY_CODE
    }

    pub fn status_check(&self) -> bool {
        self.status_check
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn endpoint(&self) -> String {
        match &self.endpoint_override {
            Some(url) => url.clone(),
            None => format!("{}{}", self.environment.host(), MPG_REQUEST_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_credentials_from_env() {
        let creds = GatewayCredentials::from_lookup(lookup_from(&[
            ("MONERIS_STORE_ID", "store1"),
            ("MONERIS_API_TOKEN", "tok1"),
        ]))
        .unwrap();

        assert_eq!(creds.store_id(), "store1");
        assert_eq!(creds.api_token(), "tok1");
    }

    #[test]
    fn test_missing_store_id() {
        let err = GatewayCredentials::from_lookup(lookup_from(&[("MONERIS_API_TOKEN", "tok1")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingVariable("MONERIS_STORE_ID"));
    }

    #[test]
    fn test_missing_api_token() {
        let err = GatewayCredentials::from_lookup(lookup_from(&[("MONERIS_STORE_ID", "store1")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingVariable("MONERIS_API_TOKEN"));
    }

    #[test]
    fn test_empty_api_token() {
        let err = GatewayCredentials::new("store1", "").unwrap_err();
        assert_eq!(err, ConfigError::EmptyVariable("MONERIS_API_TOKEN"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let creds = GatewayCredentials::new("store1", "super-secret").unwrap();
        let printed = format!("{:?}", creds);
        assert!(printed.contains("store1"));
        assert!(!printed.contains("super-secret"));
    }

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::new(GatewayCredentials::new("store1", "tok1").unwrap());

        assert_eq!(config.environment(), Environment::Production);
        assert_eq!(config.processing_country_code(), "CA");
        assert!(!config.status_check());
        assert_eq!(config.timeout(), Duration::from_secs(35));
        assert_eq!(
            config.endpoint(),
            "https://www3.moneris.com/gateway2/servlet/MpgRequest"
        );
    }

    #[test]
    fn test_testing_environment_endpoint() {
        let config = GatewayConfig::new(GatewayCredentials::new("store1", "tok1").unwrap())
            .with_environment(Environment::Testing);
        assert_eq!(
            config.endpoint(),
            "https://esqa.moneris.com/gateway2/servlet/MpgRequest"
        );
    }

    #[test]
    fn test_endpoint_override_from_env() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            ("MONERIS_STORE_ID", "store1"),
            ("MONERIS_API_TOKEN", "tok1"),
            ("MONERIS_GATEWAY_URL", "http://127.0.0.1:9000/mpg"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint(), "http://127.0.0.1:9000/mpg");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = GatewayConfig::new(GatewayCredentials::new("store1", "tok1").unwrap());
        let err = config.with_timeout(Duration::from_secs(0)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeout);
    }
}
