use crate::enums::analysis_kind::AnalysisKind;

pub const COMPREHENSIVE_SCHEMA: &str = r#"Perform a comprehensive quality review covering complexity, code smells, security and maintainability.

REQUIRED JSON SCHEMA:
{
  "summary": "<two or three sentence overview>",
  "qualityScore": <number 0-100>,
  "complexity": {
    "time": "<Big-O time complexity>",
    "space": "<Big-O space complexity>",
    "cyclomatic": <integer >= 1>
  },
  "codeSmells": [
    {"title": "<name>", "description": "<details>", "severity": "<low|medium|high|critical>", "line": <integer or null>}
  ],
  "security": [
    {"title": "<vulnerability>", "description": "<details>", "severity": "<low|medium|high|critical>", "line": <integer or null>, "recommendation": "<fix>"}
  ],
  "recommendations": ["<actionable recommendation>"]
}"#;

pub const SYNTAX_SCHEMA: &str = r#"Check the code for syntax errors, likely runtime errors and suspicious constructs.

REQUIRED JSON SCHEMA:
{
  "errors": [{"line": <integer>, "column": <integer or null>, "message": "<what is wrong>", "severity": "<high|critical>"}],
  "warnings": [{"line": <integer>, "column": <integer or null>, "message": "<what is suspicious>", "severity": "<low|medium>"}],
  "suggestions": ["<short suggestion>"]
}"#;

pub const COMPLEXITY_SCHEMA: &str = r#"Determine the algorithmic complexity of the code and explain where the cost comes from.

REQUIRED JSON SCHEMA:
{
  "timeComplexity": "<Big-O>",
  "spaceComplexity": "<Big-O>",
  "cyclomaticComplexity": <integer >= 1>,
  "explanation": "<reasoning>",
  "hotspots": ["<loop, recursion or call that dominates the cost>"]
}"#;

pub const TESTGEN_SCHEMA: &str = r#"Generate unit test cases covering normal behaviour, edge cases and error handling.

REQUIRED JSON SCHEMA:
{
  "framework": "<idiomatic test framework for the language>",
  "testCases": [
    {"name": "<test name>", "description": "<what it verifies>", "input": "<input>", "expectedOutput": "<expected result>", "category": "<normal|edge|error>"}
  ],
  "notes": ["<coverage note>"]
}"#;

pub const IMPROVEMENT_SCHEMA: &str = r#"Suggest concrete improvements for readability, performance and maintainability.

REQUIRED JSON SCHEMA:
{
  "summary": "<overview>",
  "improvements": [
    {"title": "<name>", "description": "<why>", "priority": "<low|medium|high|critical>", "before": "<original snippet>", "after": "<improved snippet>"}
  ],
  "refactoredCode": "<complete improved version of the code>"
}"#;

pub const EXECUTION_SCHEMA: &str = r#"Simulate executing the code step by step, tracking variable values.

REQUIRED JSON SCHEMA:
{
  "steps": [
    {"line": <integer>, "description": "<what happens>", "variables": {"<name>": <value>}}
  ],
  "output": "<everything the program prints>",
  "finalState": {"<name>": <value>}
}"#;

pub fn schema_for(kind: AnalysisKind) -> &'static str {
    match kind {
        AnalysisKind::Comprehensive => COMPREHENSIVE_SCHEMA,
        AnalysisKind::Syntax => SYNTAX_SCHEMA,
        AnalysisKind::Complexity => COMPLEXITY_SCHEMA,
        AnalysisKind::Testgen => TESTGEN_SCHEMA,
        AnalysisKind::Improvement => IMPROVEMENT_SCHEMA,
        AnalysisKind::ExecutionSimulation => EXECUTION_SCHEMA,
    }
}
