use serde_json::Value;
use crate::structs::diagnostic::Diagnostic;

/// A report shape the model is asked to produce. `Default` holds the
/// documented neutral values used whenever the model omits a field.
pub trait AnalysisSchema: Default + Sized {
    /// Total mapping from arbitrary JSON into the typed report.
    fn from_value(value: &Value) -> Self;

    fn diagnostics_mut(&mut self) -> &mut Vec<Diagnostic>;

    /// Neutral report carrying a single diagnostic.
    fn with_diagnostic(diagnostic: Diagnostic) -> Self {
        let mut report = Self::default();
        report.diagnostics_mut().push(diagnostic);
        report
    }
}
