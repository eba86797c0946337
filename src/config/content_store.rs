//! Content-store (Sanity) configuration

use secrecy::SecretString;
use serde::Deserialize;

use super::error::ValidationError;

/// Connection settings for the headless content store.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentStoreConfig {
    /// Project identifier, part of the API hostname
    pub project_id: String,

    /// Dataset the result documents are written to
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// API version date tag
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Write token; must carry create permission for `testResult`
    pub token: SecretString,

    /// Outbound request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl ContentStoreConfig {
    /// Mutate endpoint URL for the configured project and dataset.
    pub fn mutate_url(&self) -> String {
        format!(
            "https://{}.api.sanity.io/v{}/data/mutate/{}",
            self.project_id, self.api_version, self.dataset
        )
    }

    /// Validate content-store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.project_id.trim().is_empty() {
            return Err(ValidationError::MissingContentStoreField("project_id"));
        }
        if self.dataset.trim().is_empty() {
            return Err(ValidationError::MissingContentStoreField("dataset"));
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_dataset() -> String {
    "production".to_string()
}

fn default_api_version() -> String {
    "2024-01-01".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
