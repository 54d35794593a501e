use serde_json::Value;
use crate::enums::extraction_stage::ExtractionStage;

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    Parsed {
        value: Value,
        stage: ExtractionStage,
    },
    Unparseable {
        raw_text: String,
        stage: ExtractionStage,
        reason: String,
    },
}

impl ExtractionResult {
    pub fn into_value(self) -> Option<Value> {
        match self {
            ExtractionResult::Parsed { value, .. } => Some(value),
            ExtractionResult::Unparseable { .. } => None,
        }
    }
}
