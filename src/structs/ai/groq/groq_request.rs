use serde::{Deserialize, Serialize};
use crate::structs::ai::groq::groq_message::GroqMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqRequest {
    pub model: String,

    pub messages: Vec<GroqMessage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    pub stream: bool,
}
