use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::helpers::json_value::{array_field, string_list, string_or, text_of};
use crate::structs::diagnostic::Diagnostic;
use crate::traits::analysis_schema::AnalysisSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub name: String,
    pub description: String,
    pub input: String,
    pub expected_output: String,
    pub category: String,
}

/// Inputs and outputs may come back as JSON literals; keep them as text.
fn literal(value: &Value, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| value.get(*key))
        .find(|v| !v.is_null())
        .map(|v| text_of(v).unwrap_or_else(|| v.to_string()))
        .unwrap_or_default()
}

impl TestCase {
    fn from_value(value: &Value, index: usize) -> Option<Self> {
        if !value.is_object() {
            return None;
        }

        Some(Self {
            name: string_or(value, &["name", "title"], &format!("test_case_{}", index + 1)),
            description: string_or(value, &["description", "purpose"], ""),
            input: literal(value, &["input", "inputs", "arguments"]),
            expected_output: literal(value, &["expectedOutput", "expected_output", "expected", "output"]),
            category: string_or(value, &["category", "type", "kind"], "normal"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGeneration {
    pub framework: String,
    pub test_cases: Vec<TestCase>,
    pub notes: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisSchema for TestGeneration {
    fn from_value(value: &Value) -> Self {
        let cases = match value {
            Value::Array(items) => items.as_slice(),
            _ => array_field(value, &["testCases", "test_cases", "tests"]),
        };

        Self {
            framework: string_or(value, &["framework", "testFramework"], ""),
            test_cases: cases
                .iter()
                .enumerate()
                .filter_map(|(index, case)| TestCase::from_value(case, index))
                .collect(),
            notes: string_list(value, &["notes", "coverageNotes", "coverage_notes"]),
            diagnostics: Vec::new(),
        }
    }

    fn diagnostics_mut(&mut self) -> &mut Vec<Diagnostic> {
        &mut self.diagnostics
    }
}
