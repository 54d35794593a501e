use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AiProviderError {
    #[error("Groq API Error: {0}")]
    ApiError(String),
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Server Error (HTTP {status}): {body}")]
    ServerError { status: u16, body: String },
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
    #[error("Rate limit exceeded, retry after {retry_after_secs}s: {message}")]
    RateLimited { retry_after_secs: u64, message: String },
    #[error("Request timed out after {0}s")]
    Timeout(u64),
}

impl AiProviderError {
    /// Failures worth another attempt after a short pause.
    pub fn is_transient(&self) -> bool {
        matches!(self, AiProviderError::NetworkError(_) | AiProviderError::ServerError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_network_and_server_errors_are_transient() {
        assert!(AiProviderError::NetworkError("reset".into()).is_transient());
        assert!(AiProviderError::ServerError { status: 503, body: String::new() }.is_transient());
        assert!(!AiProviderError::RateLimited { retry_after_secs: 5, message: String::new() }.is_transient());
        assert!(!AiProviderError::Timeout(30).is_transient());
        assert!(!AiProviderError::AuthenticationError("bad key".into()).is_transient());
    }
}
