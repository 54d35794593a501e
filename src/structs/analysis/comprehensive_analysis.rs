use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::helpers::json_value::{array_field, f64_field, string_list, string_or, u32_field};
use crate::structs::analysis::finding::Finding;
use crate::structs::diagnostic::Diagnostic;
use crate::traits::analysis_schema::AnalysisSchema;

pub const NEUTRAL_QUALITY_SCORE: f64 = 50.0;
pub const UNKNOWN_COMPLEXITY: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityMetrics {
    pub time: String,
    pub space: String,
    pub cyclomatic: u32,
}

impl Default for ComplexityMetrics {
    fn default() -> Self {
        Self {
            time: UNKNOWN_COMPLEXITY.to_string(),
            space: UNKNOWN_COMPLEXITY.to_string(),
            cyclomatic: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveAnalysis {
    pub summary: String,
    pub quality_score: f64,
    pub complexity: ComplexityMetrics,
    pub code_smells: Vec<Finding>,
    pub security: Vec<Finding>,
    pub recommendations: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for ComprehensiveAnalysis {
    fn default() -> Self {
        Self {
            summary: String::new(),
            quality_score: NEUTRAL_QUALITY_SCORE,
            complexity: ComplexityMetrics::default(),
            code_smells: Vec::new(),
            security: Vec::new(),
            recommendations: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}

fn findings(value: &Value, keys: &[&str]) -> Vec<Finding> {
    array_field(value, keys).iter().filter_map(Finding::from_value).collect()
}

impl AnalysisSchema for ComprehensiveAnalysis {
    fn from_value(value: &Value) -> Self {
        let complexity_value = value.get("complexity").unwrap_or(&Value::Null);
        let complexity = ComplexityMetrics {
            time: string_or(complexity_value, &["time", "timeComplexity", "time_complexity"], UNKNOWN_COMPLEXITY),
            space: string_or(complexity_value, &["space", "spaceComplexity", "space_complexity"], UNKNOWN_COMPLEXITY),
            cyclomatic: u32_field(complexity_value, &["cyclomatic", "cyclomaticComplexity", "cyclomatic_complexity"])
                .unwrap_or(1)
                .max(1),
        };

        Self {
            summary: string_or(value, &["summary", "overview"], ""),
            quality_score: f64_field(value, &["qualityScore", "quality_score", "score"])
                .filter(|s| s.is_finite())
                .map_or(NEUTRAL_QUALITY_SCORE, |s| s.clamp(0.0, 100.0)),
            complexity,
            code_smells: findings(value, &["codeSmells", "code_smells", "smells"]),
            security: findings(value, &["security", "securityIssues", "security_issues", "vulnerabilities"]),
            recommendations: string_list(value, &["recommendations", "suggestions"]),
            diagnostics: Vec::new(),
        }
    }

    fn diagnostics_mut(&mut self) -> &mut Vec<Diagnostic> {
        &mut self.diagnostics
    }
}
