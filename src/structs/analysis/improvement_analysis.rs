use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::enums::severity::Severity;
use crate::helpers::json_value::{array_field, string_or};
use crate::structs::diagnostic::Diagnostic;
use crate::traits::analysis_schema::AnalysisSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvement {
    pub title: String,
    pub description: String,
    pub priority: Severity,
    pub before: String,
    pub after: String,
}

impl Improvement {
    fn from_value(value: &Value) -> Option<Self> {
        if let Value::String(text) = value {
            return (!text.trim().is_empty()).then(|| Self {
                title: text.trim().to_string(),
                description: String::new(),
                priority: Severity::default(),
                before: String::new(),
                after: String::new(),
            });
        }

        let title = string_or(value, &["title", "name", "category"], "");
        let description = string_or(value, &["description", "reason", "explanation"], "");
        if title.is_empty() && description.is_empty() {
            return None;
        }

        Some(Self {
            title,
            description,
            priority: Severity::from_label(&string_or(value, &["priority", "severity", "impact"], "")),
            before: string_or(value, &["before", "original", "originalCode"], ""),
            after: string_or(value, &["after", "improved", "improvedCode"], ""),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementAnalysis {
    pub summary: String,
    pub improvements: Vec<Improvement>,
    pub refactored_code: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisSchema for ImprovementAnalysis {
    fn from_value(value: &Value) -> Self {
        Self {
            summary: string_or(value, &["summary", "overview"], ""),
            improvements: array_field(value, &["improvements", "suggestions"])
                .iter()
                .filter_map(Improvement::from_value)
                .collect(),
            refactored_code: string_or(value, &["refactoredCode", "refactored_code", "improvedCode"], ""),
            diagnostics: Vec::new(),
        }
    }

    fn diagnostics_mut(&mut self) -> &mut Vec<Diagnostic> {
        &mut self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_priorities_and_code_snippets() {
        let value = json!({
            "improvements": [
                {"title": "Use a set", "priority": "critical", "before": "list", "after": "set"},
                {}
            ],
            "refactored_code": "fn main() {}"
        });

        let analysis = ImprovementAnalysis::from_value(&value);

        assert_eq!(analysis.improvements.len(), 1);
        assert_eq!(analysis.improvements[0].priority, Severity::Critical);
        assert_eq!(analysis.improvements[0].after, "set");
        assert_eq!(analysis.refactored_code, "fn main() {}");
    }
}
