use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Severity {
    #[serde(rename = "low")]
    Low,
    #[default]
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "critical")]
    Critical,
}

impl Severity {
    /// Lenient mapping of whatever label the model chose.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "low" | "info" | "minor" | "hint" => Severity::Low,
            "high" | "major" | "error" => Severity::High,
            "critical" | "blocker" | "severe" => Severity::Critical,
            _ => Severity::Medium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_labels_default_to_medium() {
        assert_eq!(Severity::from_label("HIGH"), Severity::High);
        assert_eq!(Severity::from_label(" critical "), Severity::Critical);
        assert_eq!(Severity::from_label("warning"), Severity::Medium);
        assert_eq!(Severity::from_label(""), Severity::Medium);
        assert_eq!(Severity::default(), Severity::Medium);
    }
}
