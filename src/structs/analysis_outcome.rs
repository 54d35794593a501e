use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::structs::analysis::structured_analysis::StructuredAnalysis;
use crate::structs::token_usage::TokenUsage;

/// Success envelope shared by every endpoint and the CLI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub analysis: StructuredAnalysis,
    pub fallback: bool,
    pub cached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}
