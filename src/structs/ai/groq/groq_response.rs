use serde::{Deserialize, Serialize};
use crate::structs::ai::groq::groq_choice::GroqChoice;
use crate::structs::ai::groq::groq_usage::GroqUsage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub model: String,
    pub choices: Vec<GroqChoice>,
    #[serde(default)]
    pub usage: Option<GroqUsage>,
}
