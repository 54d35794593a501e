use serde::{Deserialize, Serialize};

/// Per-request tunables sent by the client under `config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(default)]
    pub temperature: Option<f32>,

    #[serde(default, alias = "max_tokens")]
    pub max_tokens: Option<u32>,

    #[serde(default, alias = "system_prompt")]
    pub system_prompt: Option<String>,
}
