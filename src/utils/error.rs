use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteOpsError {
    #[error("{tool} command not found")]
    ToolNotFound { tool: String },

    #[error("{tool} exited with status {}: {stderr}", status_label(.code))]
    ToolFailed {
        tool: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("{tool} did not finish within {seconds} seconds")]
    ToolTimeout { tool: String, seconds: u64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

fn status_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "unknown".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    ExternalTool,
    FileSystem,
    Serialization,
    Configuration,
}

impl SiteOpsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ToolNotFound { .. } | Self::ToolFailed { .. } | Self::ToolTimeout { .. } => {
                ErrorCategory::ExternalTool
            }
            Self::IoError(_) => ErrorCategory::FileSystem,
            Self::SerializationError(_) => ErrorCategory::Serialization,
            Self::TomlError(_)
            | Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Short message meant for the console, without the debug detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ToolNotFound { tool } => format!("{} command not found", tool),
            Self::ToolFailed { tool, .. } => format!("{} reported a failure", tool),
            Self::ToolTimeout { tool, seconds } => {
                format!("{} timed out after {} seconds", tool, seconds)
            }
            Self::IoError(e) => format!("File operation failed: {}", e),
            Self::SerializationError(e) => format!("Could not encode the configuration: {}", e),
            Self::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
            Self::ConfigError { message } => message.clone(),
            Self::ConfigValidationError { field, message } => format!("{}: {}", field, message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ToolNotFound { tool } => format!(
                "Install the Google Cloud SDK so that '{}' is on PATH, then run 'gcloud auth login'",
                tool
            ),
            Self::ToolFailed { .. } => {
                "Check that you are authenticated and have access to the bucket".to_string()
            }
            Self::ToolTimeout { .. } => {
                "Check your network connection or raise tool.timeout_seconds".to_string()
            }
            Self::IoError(_) => "Check that the path exists and is writable".to_string(),
            Self::SerializationError(_) => "Check the CORS rules for invalid values".to_string(),
            Self::TomlError(_)
            | Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteOpsError>;
