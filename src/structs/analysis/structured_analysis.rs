use serde::Serialize;
use serde_json::Value;
use crate::enums::analysis_kind::AnalysisKind;
use crate::enums::diagnostic_kind::DiagnosticKind;
use crate::structs::analysis::complexity_analysis::ComplexityAnalysis;
use crate::structs::analysis::comprehensive_analysis::ComprehensiveAnalysis;
use crate::structs::analysis::execution_simulation::ExecutionSimulation;
use crate::structs::analysis::improvement_analysis::ImprovementAnalysis;
use crate::structs::analysis::syntax_analysis::SyntaxAnalysis;
use crate::structs::analysis::test_generation::TestGeneration;
use crate::structs::diagnostic::Diagnostic;
use crate::traits::analysis_schema::AnalysisSchema;

const UNAVAILABLE_SUMMARY: &str = "Analysis unavailable. A neutral fallback result was returned.";

/// The always-complete report returned to callers, one variant per kind.
/// Serialised without a tag; the endpoint already names the kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StructuredAnalysis {
    Comprehensive(ComprehensiveAnalysis),
    Syntax(SyntaxAnalysis),
    Complexity(ComplexityAnalysis),
    Testgen(TestGeneration),
    Improvement(ImprovementAnalysis),
    ExecutionSimulation(ExecutionSimulation),
}

impl StructuredAnalysis {
    pub fn normalize(kind: AnalysisKind, value: &Value) -> Self {
        match kind {
            AnalysisKind::Comprehensive => Self::Comprehensive(ComprehensiveAnalysis::from_value(value)),
            AnalysisKind::Syntax => Self::Syntax(SyntaxAnalysis::from_value(value)),
            AnalysisKind::Complexity => Self::Complexity(ComplexityAnalysis::from_value(value)),
            AnalysisKind::Testgen => Self::Testgen(TestGeneration::from_value(value)),
            AnalysisKind::Improvement => Self::Improvement(ImprovementAnalysis::from_value(value)),
            AnalysisKind::ExecutionSimulation => Self::ExecutionSimulation(ExecutionSimulation::from_value(value)),
        }
    }

    pub fn with_diagnostic(kind: AnalysisKind, diagnostic: Diagnostic) -> Self {
        match kind {
            AnalysisKind::Comprehensive => Self::Comprehensive(ComprehensiveAnalysis::with_diagnostic(diagnostic)),
            AnalysisKind::Syntax => Self::Syntax(SyntaxAnalysis::with_diagnostic(diagnostic)),
            AnalysisKind::Complexity => Self::Complexity(ComplexityAnalysis::with_diagnostic(diagnostic)),
            AnalysisKind::Testgen => Self::Testgen(TestGeneration::with_diagnostic(diagnostic)),
            AnalysisKind::Improvement => Self::Improvement(ImprovementAnalysis::with_diagnostic(diagnostic)),
            AnalysisKind::ExecutionSimulation => Self::ExecutionSimulation(ExecutionSimulation::with_diagnostic(diagnostic)),
        }
    }

    /// Last-resort result when the provider could not be reached at all.
    /// Scores stay at their neutral defaults.
    pub fn unavailable(kind: AnalysisKind, reason: &str) -> Self {
        let diagnostic = Diagnostic::new(
            DiagnosticKind::UpstreamUnavailable,
            format!("Analysis service unavailable: {}", reason),
        );

        let mut analysis = Self::with_diagnostic(kind, diagnostic);
        match &mut analysis {
            Self::Comprehensive(report) => report.summary = UNAVAILABLE_SUMMARY.to_string(),
            Self::Complexity(report) => report.explanation = UNAVAILABLE_SUMMARY.to_string(),
            Self::Improvement(report) => report.summary = UNAVAILABLE_SUMMARY.to_string(),
            _ => {}
        }
        analysis
    }

    pub fn kind(&self) -> AnalysisKind {
        match self {
            Self::Comprehensive(_) => AnalysisKind::Comprehensive,
            Self::Syntax(_) => AnalysisKind::Syntax,
            Self::Complexity(_) => AnalysisKind::Complexity,
            Self::Testgen(_) => AnalysisKind::Testgen,
            Self::Improvement(_) => AnalysisKind::Improvement,
            Self::ExecutionSimulation(_) => AnalysisKind::ExecutionSimulation,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Comprehensive(report) => &report.diagnostics,
            Self::Syntax(report) => &report.diagnostics,
            Self::Complexity(report) => &report.diagnostics,
            Self::Testgen(report) => &report.diagnostics,
            Self::Improvement(report) => &report.diagnostics,
            Self::ExecutionSimulation(report) => &report.diagnostics,
        }
    }
}
