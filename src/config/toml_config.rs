use crate::config::SenderSettings;
use crate::core::validation::ValidationPolicy;
use crate::domain::model::FormData;
use crate::utils::error::{Result, SenderError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub sender: SenderSection,
    pub defaults: Option<FormData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SenderSection {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub validation: Option<ValidationPolicy>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SenderError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${UZO_API_KEY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SenderError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Settings described by this file alone, with built-in defaults for
    /// anything it leaves out.
    pub fn into_settings(self) -> SenderSettings {
        let base = SenderSettings::default();
        SenderSettings {
            endpoint: self.sender.endpoint.unwrap_or(base.endpoint),
            api_key: self.sender.api_key.or(base.api_key),
            timeout_seconds: self.sender.timeout_seconds,
            validation: self.sender.validation.unwrap_or(base.validation),
            defaults: self.defaults.unwrap_or_default(),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.sender.endpoint {
            crate::utils::validation::validate_url("sender.endpoint", endpoint)?;
        }
        if let Some(timeout) = self.sender.timeout_seconds {
            crate::utils::validation::validate_range("sender.timeout_seconds", timeout, 1, 600)?;
        }
        Ok(())
    }
}
