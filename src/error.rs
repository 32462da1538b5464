//! Error handling for pattern-email-gen


use thiserror::Error;

/// Main error type for pattern-email-gen
#[derive(Error, Debug, Clone)]
pub enum PatternEmailError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid pattern count: {count} (expected 1 to {max})")]
    Arity { count: usize, max: usize },

    #[error("Range too large: {projected} addresses projected, limit is {limit}")]
    RangeTooLarge { projected: u128, limit: u128 },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Prompt error: {message}")]
    Prompt { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl PatternEmailError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an arity error for a pattern set of the wrong size
    pub fn arity(count: usize, max: usize) -> Self {
        Self::Arity { count, max }
    }

    /// Create a range ceiling error
    pub fn range_too_large(projected: u128, limit: u128) -> Self {
        Self::RangeTooLarge { projected, limit }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Whether the user cancelled an interactive prompt
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Prompt { message } if message == CANCELLED)
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!(
                    "❌ Configuration problem: {}\n💡 Check your .env file or configuration",
                    message
                )
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Arity { count, max } => {
                format!("❌ {} patterns given\n💡 Provide between 1 and {} patterns", count, max)
            }
            Self::RangeTooLarge { projected, limit } => {
                format!(
                    "❌ Refusing to generate {} addresses (limit {})\n💡 Narrow the ranges or raise the limit with --limit",
                    projected, limit
                )
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}\n💡 Check the configuration file syntax", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!(
                    "❌ File error{}: {}\n💡 Check file permissions and paths",
                    path_info, message
                )
            }
            Self::Prompt { message } => {
                format!("❌ Prompt error: {}", message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

const CANCELLED: &str = "cancelled by user";

/// Convert from common error types
impl From<serde_json::Error> for PatternEmailError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for PatternEmailError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<inquire::InquireError> for PatternEmailError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => Self::prompt(CANCELLED),
            other => Self::prompt(other.to_string()),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PatternEmailError>;



/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::PatternEmailError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::PatternEmailError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::PatternEmailError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::PatternEmailError::validation(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! cli_error {
    ($msg:expr) => {
        $crate::error::PatternEmailError::cli($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::PatternEmailError::cli(format!($fmt, $($arg)*))
    };
}
