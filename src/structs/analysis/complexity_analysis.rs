use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::helpers::json_value::{string_list, string_or, u32_field};
use crate::structs::analysis::comprehensive_analysis::UNKNOWN_COMPLEXITY;
use crate::structs::diagnostic::Diagnostic;
use crate::traits::analysis_schema::AnalysisSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityAnalysis {
    pub time_complexity: String,
    pub space_complexity: String,
    pub cyclomatic_complexity: u32,
    pub explanation: String,
    pub hotspots: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for ComplexityAnalysis {
    fn default() -> Self {
        Self {
            time_complexity: UNKNOWN_COMPLEXITY.to_string(),
            space_complexity: UNKNOWN_COMPLEXITY.to_string(),
            cyclomatic_complexity: 1,
            explanation: String::new(),
            hotspots: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}

impl AnalysisSchema for ComplexityAnalysis {
    fn from_value(value: &Value) -> Self {
        Self {
            time_complexity: string_or(value, &["timeComplexity", "time_complexity", "time"], UNKNOWN_COMPLEXITY),
            space_complexity: string_or(value, &["spaceComplexity", "space_complexity", "space"], UNKNOWN_COMPLEXITY),
            cyclomatic_complexity: u32_field(value, &["cyclomaticComplexity", "cyclomatic_complexity", "cyclomatic"])
                .unwrap_or(1)
                .max(1),
            explanation: string_or(value, &["explanation", "summary"], ""),
            hotspots: string_list(value, &["hotspots", "bottlenecks"]),
            diagnostics: Vec::new(),
        }
    }

    fn diagnostics_mut(&mut self) -> &mut Vec<Diagnostic> {
        &mut self.diagnostics
    }
}
