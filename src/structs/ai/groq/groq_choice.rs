use serde::{Deserialize, Serialize};
use crate::structs::ai::groq::groq_message::GroqMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqChoice {
    #[serde(default)]
    pub index: i32,
    pub message: GroqMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}
