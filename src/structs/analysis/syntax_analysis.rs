use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::enums::severity::Severity;
use crate::helpers::json_value::{array_field, string_list, string_or, u32_field};
use crate::structs::diagnostic::Diagnostic;
use crate::traits::analysis_schema::AnalysisSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntaxIssue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    pub message: String,
    pub severity: Severity,
}

impl SyntaxIssue {
    fn from_value(value: &Value, default_severity: Severity) -> Option<Self> {
        if let Value::String(text) = value {
            return (!text.trim().is_empty()).then(|| Self {
                line: None,
                column: None,
                message: text.trim().to_string(),
                severity: default_severity,
            });
        }

        let message = string_or(value, &["message", "description", "error", "text"], "");
        if message.is_empty() {
            return None;
        }

        let severity = match string_or(value, &["severity", "level"], "").as_str() {
            "" => default_severity,
            label => Severity::from_label(label),
        };

        Some(Self {
            line: u32_field(value, &["line", "lineNumber", "line_number"]),
            column: u32_field(value, &["column", "col"]),
            message,
            severity,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntaxAnalysis {
    pub errors: Vec<SyntaxIssue>,
    pub warnings: Vec<SyntaxIssue>,
    pub suggestions: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

fn issues(value: &Value, key: &str, default_severity: Severity) -> Vec<SyntaxIssue> {
    array_field(value, &[key])
        .iter()
        .filter_map(|item| SyntaxIssue::from_value(item, default_severity))
        .collect()
}

impl AnalysisSchema for SyntaxAnalysis {
    fn from_value(value: &Value) -> Self {
        Self {
            errors: issues(value, "errors", Severity::High),
            warnings: issues(value, "warnings", Severity::Medium),
            suggestions: string_list(value, &["suggestions", "recommendations"]),
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
    fn errors_default_to_high_and_warnings_to_medium() {
        let value = json!({
            "errors": [{"line": 1, "message": "x"}],
            "warnings": ["unused variable"],
            "suggestions": []
        });

        let analysis = SyntaxAnalysis::from_value(&value);

        assert_eq!(analysis.errors[0].line, Some(1));
        assert_eq!(analysis.errors[0].severity, Severity::High);
        assert_eq!(analysis.warnings[0].message, "unused variable");
        assert_eq!(analysis.warnings[0].severity, Severity::Medium);
        assert!(analysis.suggestions.is_empty());
    }

    #[test]
    fn issues_without_message_are_dropped() {
        let analysis = SyntaxAnalysis::from_value(&json!({"errors": [{"line": 3}, null]}));
        assert!(analysis.errors.is_empty());
    }
}
