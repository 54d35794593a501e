use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};

/// Failures that reach a caller of the service or the CLI. Upstream model
/// failures never appear here except for rate limiting; everything else is
/// folded into a fallback report before it leaves the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CodeQualityError {
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Rejected before any model call
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    RateLimited {
        provider: String,
        retry_after_secs: u64,
        reason: String,
    },

    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    SystemError {
        operation: String,
        reason: String,
    },
}

impl CodeQualityError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(str::to_string),
            suggestion: suggestion.map(str::to_string),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(str::to_string),
        }
    }

    pub fn rate_limited(provider: &str, retry_after_secs: u64, reason: &str) -> Self {
        Self::RateLimited {
            provider: provider.to_string(),
            retry_after_secs,
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether repeating the same call later can succeed without changes.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } | Self::ConfigurationError { .. } => ErrorSeverity::High,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::RateLimited { .. } | Self::ValidationError { .. } => ErrorSeverity::Low,
        }
    }

    /// HTTP status the API layer answers with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ValidationError { .. } => 400,
            Self::RateLimited { .. } => 429,
            _ => 500,
        }
    }

    /// Tag placed in the `error` field of API replies.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigurationError { .. } | Self::ConfigurationFileError { .. } => "configuration_error",
            Self::ValidationError { .. } => "invalid_request",
            Self::RateLimited { .. } => "rate_limit_exceeded",
            Self::ParseError { .. } => "parse_error",
            Self::SystemError { .. } => "internal_error",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Invalid configuration: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" [{}]", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Cannot use configuration file '{}': {}", path, reason)
            }
            Self::ValidationError { field, constraint, suggestion, .. } => {
                let mut msg = format!("Request field '{}' {}", field, constraint);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 {}", suggestion));
                }
                msg
            }
            Self::RateLimited { provider, retry_after_secs, .. } => {
                format!("{} rate limit reached. Retry in {} seconds.", provider, retry_after_secs)
            }
            Self::ParseError { content_type, line_number, reason } => match line_number {
                Some(line) => format!("Could not parse {} at line {}: {}", content_type, line, reason),
                None => format!("Could not parse {}: {}", content_type, reason),
            },
            Self::SystemError { operation, reason } => {
                format!("Failed to {}: {}", operation, reason)
            }
        }
    }
}

impl fmt::Display for CodeQualityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for CodeQualityError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }
}

pub type CodeQualityResult<T> = Result<T, CodeQualityError>;

/// Reports a fatal CLI error on stderr and in the log.
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &CodeQualityError) {
        let severity = error.severity();

        log::error!("{:?} failure: {:?}", severity, error);
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_retryable() {
            eprintln!("🔄 Try the same command again shortly");
        }
    }
}

impl From<std::io::Error> for CodeQualityError {
    fn from(error: std::io::Error) -> Self {
        Self::system_error("perform file I/O", &error.to_string())
    }
}

impl From<serde_json::Error> for CodeQualityError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}
