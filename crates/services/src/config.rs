use std::env;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const BASE_URL_ENV: &str = "QUIZ_CMS_BASE_URL";

/// Where the backend lives. Every endpoint, statistics included, is resolved against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if `raw` is not an absolute http(s) URL.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        let base_url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
            raw: raw.to_owned(),
            source,
        })?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(ConfigError::UnsupportedScheme(raw.to_owned()));
        }
        Ok(Self { base_url })
    }

    /// Read `QUIZ_CMS_BASE_URL`, falling back to `http://localhost:3000`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the variable is set to an unusable URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(BASE_URL_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::new(&raw),
            _ => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL should parse"),
        }
    }
}
