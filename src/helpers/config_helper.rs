use crate::config::constants::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_MAX_RETRIES, DEFAULT_MODEL, DEFAULT_REQUESTS_PER_MINUTE,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_RETRY_BACKOFF_MS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    GROQ_API_KEY_ENV, GROQ_BASE_URL, GROQ_PROVIDER,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_provider() -> String {
        GROQ_PROVIDER.to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_base_url() -> String {
        GROQ_BASE_URL.to_string()
    }

    pub fn default_api_key_env() -> String {
        GROQ_API_KEY_ENV.to_string()
    }

    pub fn default_max_tokens() -> u32 {
        4096
    }

    pub fn default_temperature() -> f32 {
        0.3
    }

    pub fn default_request_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    pub fn default_max_retries() -> u32 {
        DEFAULT_MAX_RETRIES
    }

    pub fn default_retry_backoff_ms() -> u64 {
        DEFAULT_RETRY_BACKOFF_MS
    }

    pub fn default_requests_per_minute() -> u32 {
        DEFAULT_REQUESTS_PER_MINUTE
    }

    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_cache_enabled() -> bool {
        true
    }

    pub fn default_cache_capacity() -> usize {
        DEFAULT_CACHE_CAPACITY
    }
}
