//! Error handling for domain-sweep

use thiserror::Error;

/// Machine-checkable reason code for a rejected configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigReason {
    UnknownCharset,
    UnknownHyphenMode,
    MinLengthZero,
    LengthRangeInverted,
    LabelTooLong,
    EmptyTld,
}

impl std::fmt::Display for ConfigReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigReason::UnknownCharset => write!(f, "unknown-charset"),
            ConfigReason::UnknownHyphenMode => write!(f, "unknown-hyphen-mode"),
            ConfigReason::MinLengthZero => write!(f, "min-length-zero"),
            ConfigReason::LengthRangeInverted => write!(f, "length-range-inverted"),
            ConfigReason::LabelTooLong => write!(f, "label-too-long"),
            ConfigReason::EmptyTld => write!(f, "empty-tld"),
        }
    }
}

/// Main error type for domain-sweep
#[derive(Error, Debug, Clone)]
pub enum DomainSweepError {
    #[error("Configuration error ({reason}): {message}")]
    Config {
        reason: ConfigReason,
        message: String,
    },

    #[error("Output error: {message}")]
    Output {
        message: String,
        path: Option<String>,
    },
}

impl DomainSweepError {
    /// Create a configuration error
    pub fn config(reason: ConfigReason, message: impl Into<String>) -> Self {
        Self::Config {
            reason,
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Output {
            message: message.into(),
            path,
        }
    }

    /// Attach a destination path to an output error that lacks one
    pub fn with_path(self, path: impl Into<String>) -> Self {
        match self {
            Self::Output { message, path: None } => Self::Output {
                message,
                path: Some(path.into()),
            },
            other => other,
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, .. } => {
                format!("❌ Invalid configuration: {}\n💡 Check the generation flags and try again", message)
            }
            Self::Output { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ Output error{}: {}\n💡 Check file permissions and free disk space", path_info, message)
            }
        }
    }
}

impl From<std::io::Error> for DomainSweepError {
    fn from(err: std::io::Error) -> Self {
        Self::output(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DomainSweepError>;
