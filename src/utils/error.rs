use thiserror::Error;

#[derive(Error, Debug)]
pub enum MathApiError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required config field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("factorial({value}) does not fit in a 64-bit integer")]
    Overflow { value: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Computation,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MathApiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MathApiError::TomlError(_)
            | MathApiError::ConfigError { .. }
            | MathApiError::InvalidConfigValueError { .. }
            | MathApiError::MissingConfigError { .. } => ErrorCategory::Configuration,
            MathApiError::InvalidArgument { .. } => ErrorCategory::Validation,
            MathApiError::Overflow { .. } => ErrorCategory::Computation,
            MathApiError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 請求層級錯誤，不影響伺服器本身
            MathApiError::InvalidArgument { .. } | MathApiError::Overflow { .. } => {
                ErrorSeverity::Low
            }
            MathApiError::TomlError(_)
            | MathApiError::ConfigError { .. }
            | MathApiError::InvalidConfigValueError { .. }
            | MathApiError::MissingConfigError { .. } => ErrorSeverity::High,
            MathApiError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MathApiError::IoError(_) => {
                "Check that the address is free and you are allowed to bind it".to_string()
            }
            MathApiError::TomlError(_) => {
                "Make sure the file exists and is valid TOML format".to_string()
            }
            MathApiError::ConfigError { .. } => {
                "Check the configuration file syntax and values".to_string()
            }
            MathApiError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and restart", field)
            }
            MathApiError::MissingConfigError { field } => {
                format!("Provide '{}' via a CLI flag or the config file", field)
            }
            MathApiError::InvalidArgument { .. } => {
                "Use a non-negative integer input".to_string()
            }
            MathApiError::Overflow { .. } => {
                "Use an input of 20 or less; 20! is the largest factorial that fits in 64 bits"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MathApiError::IoError(e) => format!("I/O failure: {}", e),
            MathApiError::TomlError(e) => format!("Could not parse config file: {}", e),
            MathApiError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            MathApiError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid {}: {}", value, field, reason),
            MathApiError::MissingConfigError { field } => {
                format!("The required setting '{}' was not provided", field)
            }
            MathApiError::InvalidArgument { message } => format!("Invalid input: {}", message),
            MathApiError::Overflow { value } => {
                format!("factorial({}) does not fit in a 64-bit integer", value)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MathApiError>;
