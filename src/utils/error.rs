use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrinterError {
    #[error("print_number requires a positive argument, but got {value}")]
    InvalidArgument { value: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Io,
    Configuration,
}

impl PrinterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PrinterError::InvalidArgument { .. } => ErrorCategory::Argument,
            PrinterError::Io(_) => ErrorCategory::Io,
            PrinterError::ConfigError { .. } | PrinterError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Argument => "Pass a non-negative integer",
            ErrorCategory::Io => "Check that standard output is writable",
            ErrorCategory::Configuration => "Check the config file path and its [logging] section",
        }
    }

    /// The argument error is already written for end users, so it is passed
    /// through untouched.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PrinterError::InvalidArgument { .. } => self.to_string(),
            PrinterError::Io(e) => format!("Could not write output: {}", e),
            PrinterError::ConfigError { message } => format!("Could not load configuration: {}", message),
            PrinterError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PrinterError>;
