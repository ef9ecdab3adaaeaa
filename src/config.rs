// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    platform_scheme: String,
    platform_host: String,
    api_base_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_platform_scheme() -> String {
    "https".into()
}

fn default_platform_host() -> String {
    "localhost:3000".into()
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api".into()
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible
    /// defaults for local development and validates what is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let platform_scheme =
            env::var("PLATFORM_SCHEME").unwrap_or_else(|_| default_platform_scheme());
        if platform_scheme != "http" && platform_scheme != "https" {
            return Err(ConfigError::Invalid(format!(
                "PLATFORM_SCHEME must be http or https, got '{platform_scheme}'"
            )));
        }

        let platform_host = env::var("PLATFORM_HOST").unwrap_or_else(|_| default_platform_host());
        if platform_host.trim().is_empty() {
            return Err(ConfigError::Invalid("PLATFORM_HOST cannot be empty".into()));
        }

        let api_base_url = env::var("API_BASE_URL").unwrap_or_else(|_| default_api_base_url());
        if api_base_url.trim().is_empty() {
            return Err(ConfigError::Missing("API_BASE_URL"));
        }

        Ok(Self::new(platform_scheme, platform_host, api_base_url))
    }

    pub fn new(
        platform_scheme: impl Into<String>,
        platform_host: impl Into<String>,
        api_base_url: impl Into<String>,
    ) -> Self {
        let api_base_url = api_base_url.into();
        // Trailing slash would double up when paths are appended.
        let api_base_url = api_base_url
            .strip_suffix('/')
            .unwrap_or(&api_base_url)
            .to_owned();
        Self {
            platform_scheme: platform_scheme.into(),
            platform_host: platform_host.into(),
            api_base_url,
        }
    }

    pub fn platform_scheme(&self) -> &str {
        &self.platform_scheme
    }

    /// Host (and optional port) the platform is served from; subs hang
    /// off it as subdomains.
    pub fn platform_host(&self) -> &str {
        &self.platform_host
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Local development runs without subdomain routing.
    pub fn is_localhost(&self) -> bool {
        self.platform_host == "localhost" || self.platform_host.starts_with("localhost:")
    }
}
