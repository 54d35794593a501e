use std::path::{Path, PathBuf};
use std::fs;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, GROQ_PROVIDER};
use crate::errors::{CodeQualityError, CodeQualityResult};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Codequal Configuration

# LLM provider settings
[ai]
provider = "groq"
model = "llama-3.3-70b-versatile"
base_url = "https://api.groq.com/openai/v1"

# Name of the environment variable holding the API key
api_key_env = "GROQ_API_KEY"

temperature = 0.3
max_tokens = 4096

# Per-call timeout, distinct from any platform timeout
request_timeout_secs = 30

# Transient failures (network, HTTP 5xx) are retried with a fixed delay
max_retries = 2
retry_backoff_ms = 1000

# Client-side throttle
requests_per_minute = 30

# HTTP API
[server]
host = "127.0.0.1"
port = 8787

# In-memory response cache, lost on restart
[cache]
enabled = true
capacity = 50
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    pub fn load(path: Option<&Path>) -> CodeQualityResult<Config> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if !config_path.exists() {
            if path.is_some() {
                return Err(CodeQualityError::ConfigurationFileError {
                    path: config_path.display().to_string(),
                    reason: "file does not exist".to_string(),
                });
            }
            log::info!("📋 No config file at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", config_path.display());
        let content = fs::read_to_string(&config_path).map_err(|e| CodeQualityError::ConfigurationFileError {
            path: config_path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| CodeQualityError::ConfigurationFileError {
            path: config_path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    pub fn create_sample_config(path: Option<&Path>) -> CodeQualityResult<PathBuf> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if config_path.exists() {
            return Err(CodeQualityError::ConfigurationFileError {
                path: config_path.display().to_string(),
                reason: "file already exists".to_string(),
            });
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", config_path.display());

        Ok(config_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.ai.provider != GROQ_PROVIDER {
            errors.push(format!("Unknown AI provider '{}', only '{}' is supported", config.ai.provider, GROQ_PROVIDER));
        }

        if config.ai.model.trim().is_empty() {
            errors.push("AI model must not be empty".to_string());
        }

        if !(0.0..=2.0).contains(&config.ai.temperature) {
            errors.push(format!("Temperature {} is outside 0.0..=2.0", config.ai.temperature));
        }

        if config.ai.max_tokens == 0 {
            errors.push("max_tokens must be greater than zero".to_string());
        }

        if config.ai.request_timeout_secs == 0 {
            errors.push("request_timeout_secs must be greater than zero".to_string());
        }

        if config.ai.requests_per_minute == 0 {
            errors.push("requests_per_minute must be greater than zero".to_string());
        }

        if config.cache.enabled && config.cache.capacity == 0 {
            errors.push("Cache capacity must be greater than zero when the cache is enabled".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Reads the provider key from the environment, failing when absent.
    pub fn api_key(ai_config: &AiConfig) -> CodeQualityResult<String> {
        match std::env::var(&ai_config.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(CodeQualityError::config_error(
                &format!("environment variable {} is not set", ai_config.api_key_env),
                Some("ai.api_key_env"),
                Some("Export your Groq API key before starting the server"),
            )),
        }
    }
}
