#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::validation::ValidationPolicy;
use crate::core::ConfigProvider;
use crate::domain::model::{FormControl, FormData};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_required_field, validate_url, Validate,
};

pub const DEFAULT_ENDPOINT: &str =
    "https://sender.blockspring.com/api_v2/blocks/b359d003a75ccae54632ee2ad77896b5";

/// Fully resolved settings for one run, after merging the TOML file and the
/// command line.
#[derive(Debug, Clone, PartialEq)]
pub struct SenderSettings {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub validation: ValidationPolicy,
    /// Field values pre-filled into the form before the user's own input.
    pub defaults: FormData,
}

impl Default for SenderSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout_seconds: None,
            validation: ValidationPolicy::default(),
            defaults: FormData::new(),
        }
    }
}

impl SenderSettings {
    pub fn default_controls(&self) -> Vec<FormControl> {
        self.defaults
            .iter()
            .map(|(name, value)| FormControl::named(name.clone(), value.clone()))
            .collect()
    }
}

impl ConfigProvider for SenderSettings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for SenderSettings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        let api_key = validate_required_field("api_key", &self.api_key)?;
        validate_non_empty_string("api_key", api_key)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, 600)?;
        }
        Ok(())
    }
}
