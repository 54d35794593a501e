use serde_json::json;
use codequal::enums::ai_provider_error::AiProviderError;
use codequal::enums::analysis_kind::AnalysisKind;
use codequal::enums::diagnostic_kind::DiagnosticKind;
use codequal::structs::analysis::structured_analysis::StructuredAnalysis;
use codequal::structs::analysis_request::AnalysisRequest;
use crate::support::{service_with, CountingProvider};

fn hello_request(kind: AnalysisKind) -> AnalysisRequest {
    AnalysisRequest::new("print('hi')", "python", kind)
}

#[tokio::test]
async fn fenced_reply_with_prose_is_extracted() {
    let provider = CountingProvider::replying("Sure! ```json\n{\"errors\":[],\"warnings\":[],\"suggestions\":[]}\n```");
    let service = service_with(provider, None);

    let outcome = service.analyze(&hello_request(AnalysisKind::Syntax)).await.unwrap();

    assert!(!outcome.fallback);
    assert_eq!(
        serde_json::to_value(&outcome.analysis).unwrap(),
        json!({"errors": [], "warnings": [], "suggestions": [], "diagnostics": []})
    );
}

#[tokio::test]
async fn trailing_comma_reply_is_repaired() {
    let provider = CountingProvider::replying(r#"{"errors": [{"line":1,"message":"x"}],}"#);
    let service = service_with(provider, None);

    let outcome = service.analyze(&hello_request(AnalysisKind::Syntax)).await.unwrap();

    assert!(!outcome.fallback);
    let StructuredAnalysis::Syntax(report) = outcome.analysis else {
        panic!("expected a syntax report");
    };
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].line, Some(1));
    assert_eq!(report.errors[0].message, "x");
    assert!(report.diagnostics.is_empty());
}

#[tokio::test]
async fn truncated_reply_yields_fallback_with_one_diagnostic() {
    let provider = CountingProvider::replying(r#"{"errors": ["#);
    let service = service_with(provider, None);

    let outcome = service.analyze(&hello_request(AnalysisKind::Syntax)).await.unwrap();

    assert!(outcome.fallback);
    let diagnostics = outcome.analysis.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::ParseError);
}

#[tokio::test]
async fn reply_cut_off_mid_list_is_a_fallback_and_not_cached() {
    let provider = CountingProvider::replying(r#"{"errors": [{"line": 1, "message": "a"}, {"line": 4, "message": "b"#);
    let service = service_with(provider.clone(), Some(50));

    let first = service.analyze(&hello_request(AnalysisKind::Syntax)).await.unwrap();
    let second = service.analyze(&hello_request(AnalysisKind::Syntax)).await.unwrap();

    assert!(first.fallback);
    assert_eq!(first.analysis.diagnostics()[0].kind, DiagnosticKind::ParseError);
    assert!(!second.cached);
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn second_identical_request_is_served_from_cache() {
    let provider = CountingProvider::replying(r#"{"errors": [], "warnings": [], "suggestions": []}"#);
    let service = service_with(provider.clone(), Some(50));

    let first = service.analyze(&hello_request(AnalysisKind::Syntax)).await.unwrap();
    let second = service.analyze(&hello_request(AnalysisKind::Syntax)).await.unwrap();

    assert_eq!(provider.calls(), 1);
    assert!(!first.cached);
    assert!(second.cached);
    assert_eq!(first.analysis, second.analysis);
}

#[tokio::test]
async fn cache_keys_separate_kinds_and_code() {
    let provider = CountingProvider::replying(r#"{"summary": "fine"}"#);
    let service = service_with(provider.clone(), Some(50));

    service.analyze(&hello_request(AnalysisKind::Syntax)).await.unwrap();
    service.analyze(&hello_request(AnalysisKind::Complexity)).await.unwrap();
    service.analyze(&AnalysisRequest::new("print('bye')", "python", AnalysisKind::Syntax)).await.unwrap();

    assert_eq!(provider.calls(), 3);
}

#[tokio::test]
async fn plain_prose_reply_quotes_a_bounded_excerpt() {
    let prose = format!("hello world {}", "z".repeat(2_000));
    let provider = CountingProvider::replying(&prose);
    let service = service_with(provider, None);

    let outcome = service.analyze(&hello_request(AnalysisKind::Comprehensive)).await.unwrap();

    let StructuredAnalysis::Comprehensive(report) = &outcome.analysis else {
        panic!("expected a comprehensive report");
    };
    assert!(outcome.fallback);
    assert_eq!(report.quality_score, 50.0);
    assert!(report.diagnostics[0].message.contains("hello world"));
    assert!(report.diagnostics[0].message.len() < 1_000);
}

#[tokio::test]
async fn bare_array_is_accepted_for_test_generation() {
    let provider = CountingProvider::replying(r#"[{"name": "adds", "input": "1, 2", "expectedOutput": "3"}]"#);
    let service = service_with(provider, None);

    let outcome = service.analyze(&hello_request(AnalysisKind::Testgen)).await.unwrap();

    let StructuredAnalysis::Testgen(report) = outcome.analysis else {
        panic!("expected a test generation report");
    };
    assert_eq!(report.test_cases.len(), 1);
    assert_eq!(report.test_cases[0].expected_output, "3");
}

#[tokio::test]
async fn unreachable_provider_degrades_to_static_fallback_after_retries() {
    let provider = CountingProvider::failing(AiProviderError::NetworkError("connection refused".into()));
    let service = service_with(provider.clone(), Some(50));

    let outcome = service.analyze(&hello_request(AnalysisKind::Complexity)).await.unwrap();

    assert_eq!(provider.calls(), 2);
    assert!(outcome.fallback);
    assert_eq!(outcome.analysis.diagnostics()[0].kind, DiagnosticKind::UpstreamUnavailable);
}
