use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::helpers::json_value::{array_field, object_field, string_or, u32_field};
use crate::structs::diagnostic::Diagnostic;
use crate::traits::analysis_schema::AnalysisSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStep {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    pub description: String,
    pub variables: Map<String, Value>,
}

impl ExecutionStep {
    fn from_value(value: &Value) -> Option<Self> {
        if let Value::String(text) = value {
            return (!text.trim().is_empty()).then(|| Self {
                line: None,
                description: text.trim().to_string(),
                variables: Map::new(),
            });
        }

        if !value.is_object() {
            return None;
        }

        Some(Self {
            line: u32_field(value, &["line", "lineNumber", "line_number"]),
            description: string_or(value, &["description", "action", "explanation"], ""),
            variables: object_field(value, &["variables", "state", "vars"]),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSimulation {
    pub steps: Vec<ExecutionStep>,
    pub output: String,
    pub final_state: Map<String, Value>,
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisSchema for ExecutionSimulation {
    fn from_value(value: &Value) -> Self {
        Self {
            steps: array_field(value, &["steps", "trace", "executionSteps"])
                .iter()
                .filter_map(ExecutionStep::from_value)
                .collect(),
            output: string_or(value, &["output", "stdout", "consoleOutput"], ""),
            final_state: object_field(value, &["finalState", "final_state", "variables"]),
            diagnostics: Vec::new(),
        }
    }

    fn diagnostics_mut(&mut self) -> &mut Vec<Diagnostic> {
        &mut self.diagnostics
    }
}
