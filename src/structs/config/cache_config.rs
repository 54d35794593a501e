use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CacheConfig {
    #[serde(default = "ConfigHelper::default_cache_enabled")]
    pub enabled: bool,

    #[serde(default = "ConfigHelper::default_cache_capacity")]
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: ConfigHelper::default_cache_enabled(),
            capacity: ConfigHelper::default_cache_capacity(),
        }
    }
}
