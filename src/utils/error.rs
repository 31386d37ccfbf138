use thiserror::Error;

#[derive(Error, Debug)]
pub enum SenderError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Remote endpoint answered with status {status}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Remote,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SenderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SenderError::Transport(_) => ErrorCategory::Network,
            SenderError::HttpStatus { .. } | SenderError::MalformedResponse { .. } => {
                ErrorCategory::Remote
            }
            SenderError::ConfigError { .. }
            | SenderError::InvalidConfigValue { .. }
            | SenderError::MissingConfig { .. } => ErrorCategory::Configuration,
            SenderError::ValidationError { .. } | SenderError::Serialization(_) => {
                ErrorCategory::Input
            }
            SenderError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Remote => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SenderError::Transport(_) => "Could not reach the message service".to_string(),
            SenderError::HttpStatus { status, .. } => {
                format!("The message service refused the request (HTTP {})", status)
            }
            SenderError::MalformedResponse { .. } => {
                "The message service sent an unreadable answer".to_string()
            }
            SenderError::InvalidConfigValue { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            SenderError::MissingConfig { field } => format!("Setting '{}' is required", field),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and try again",
            ErrorCategory::Remote => "Check the endpoint URL and API key, then try again later",
            ErrorCategory::Configuration => "Fix the command-line flags or the TOML config file",
            ErrorCategory::Input => "Check the form values you entered",
            ErrorCategory::System => "Check file permissions and paths",
        }
    }
}

pub type Result<T> = std::result::Result<T, SenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let err = SenderError::MalformedResponse {
            message: "no JSON line".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Remote);
        assert_eq!(err.severity(), ErrorSeverity::Medium);

        let err = SenderError::MissingConfig {
            field: "endpoint".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.user_friendly_message(), "Setting 'endpoint' is required");
    }
}
