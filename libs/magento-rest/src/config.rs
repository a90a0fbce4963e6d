//! Magento connection configuration.

use serde::Deserialize;
use thiserror::Error;

use crate::secret::SecretString;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Connection settings for one Magento instance.
///
/// The access token is held as a [`SecretString`] so it is redacted from
/// `Debug` output and never logged.
#[derive(Clone, Debug, Deserialize)]
pub struct MagentoConfig {
    /// Absolute base URL of the Magento installation, e.g.
    /// `https://shop.example.com`.
    pub base_url: String,

    /// Integration access token.
    pub access_token: SecretString,

    /// Store view code inserted into the REST path. `None` addresses the
    /// default store view (`/rest/V1/...`).
    #[serde(default)]
    pub store_code: Option<String>,

    /// Per-request timeout, consumed by the transport implementation.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl MagentoConfig {
    /// Validate the base URL: it must parse as an absolute URI with scheme
    /// and host.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidBaseUrl`] on a malformed or relative URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let uri: http::Uri =
            self.base_url
                .parse()
                .map_err(|e: http::uri::InvalidUri| ConfigError::InvalidBaseUrl {
                    url: self.base_url.clone(),
                    reason: e.to_string(),
                })?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: "base URL must be absolute with scheme and host".to_owned(),
            });
        }
        Ok(())
    }

    /// Absolute URL of a REST resource, e.g. `products` →
    /// `https://shop.example.com/rest/default/V1/products`.
    #[must_use]
    pub fn endpoint(&self, resource: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        match &self.store_code {
            Some(store) => format!("{base}/rest/{store}/V1/{resource}"),
            None => format!("{base}/rest/V1/{resource}"),
        }
    }
}
