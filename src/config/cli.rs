use crate::config::toml_config::TomlConfig;
use crate::config::SenderSettings;
use crate::domain::model::{
    FormControl, DESTINATION_FIELD, MESSAGE_FIELD, PASSWORD_FIELD, USERNAME_FIELD,
};
use crate::utils::error::{Result, SenderError};
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "uzo-send")]
#[command(about = "Send a text message through the uzo message service")]
pub struct CliConfig {
    /// TOML file with [sender] settings and [defaults] field values
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long, env = "UZO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Require a valid username, destination, password and message")]
    pub strict: bool,

    /// Sender number (nine digits)
    #[arg(long)]
    pub username: Option<String>,

    /// Destination as "912345678" or "912345678 - Name"
    #[arg(long)]
    pub destination: Option<String>,

    #[arg(long, env = "UZO_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[arg(long)]
    pub msg: Option<String>,

    /// Extra form field, repeatable
    #[arg(long = "field", value_name = "KEY=VALUE")]
    pub fields: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Merges the optional TOML file with the flags; flags win.
    pub fn resolve(&self) -> Result<SenderSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                let file_config = TomlConfig::from_file(path)?;
                file_config.validate()?;
                file_config.into_settings()
            }
            None => SenderSettings::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(api_key) = &self.api_key {
            settings.api_key = Some(api_key.clone());
        }
        if self.timeout_seconds.is_some() {
            settings.timeout_seconds = self.timeout_seconds;
        }
        if self.strict {
            settings.validation = crate::core::validation::ValidationPolicy::Strict;
        }

        Ok(settings)
    }

    /// Form controls in submission order: file defaults first, then the
    /// named flags, then `--field` entries.
    pub fn form_controls(&self, settings: &SenderSettings) -> Result<Vec<FormControl>> {
        let mut controls = settings.default_controls();

        let named = [
            (USERNAME_FIELD, &self.username),
            (DESTINATION_FIELD, &self.destination),
            (PASSWORD_FIELD, &self.password),
            (MESSAGE_FIELD, &self.msg),
        ];
        for (name, value) in named {
            if let Some(value) = value {
                controls.push(FormControl::named(name, value.clone()));
            }
        }

        for field in &self.fields {
            let (key, value) = field.split_once('=').ok_or_else(|| SenderError::InvalidConfigValue {
                field: "field".to_string(),
                value: field.clone(),
                reason: "Expected KEY=VALUE".to_string(),
            })?;
            controls.push(FormControl::named(key.trim(), value));
        }

        Ok(controls)
    }
}
