use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::enums::severity::Severity;
use crate::helpers::json_value::{string_field, string_or, u32_field};

/// A code smell or security issue reported by the comprehensive analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl Finding {
    pub fn from_value(value: &Value) -> Option<Self> {
        if let Value::String(text) = value {
            let text = text.trim();
            return (!text.is_empty()).then(|| Self {
                title: text.to_string(),
                description: String::new(),
                severity: Severity::default(),
                line: None,
                recommendation: None,
            });
        }

        if !value.is_object() {
            return None;
        }

        let title = string_or(value, &["title", "type", "name", "issue"], "");
        let description = string_or(value, &["description", "message", "details"], "");
        if title.is_empty() && description.is_empty() {
            return None;
        }

        Some(Self {
            title,
            description,
            severity: Severity::from_label(&string_or(value, &["severity", "level", "priority"], "")),
            line: u32_field(value, &["line", "lineNumber", "line_number"]),
            recommendation: string_field(value, &["recommendation", "fix", "suggestion"]).filter(|s| !s.is_empty()),
        })
    }
}
