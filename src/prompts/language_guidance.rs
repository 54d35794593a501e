use std::collections::HashMap;
use once_cell::sync::Lazy;

pub const GENERIC_GUIDANCE: &str = "Apply general best practices: clear naming, small functions, input validation, error handling and avoiding duplicated logic.";

static LANGUAGE_GUIDANCE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("python", "Follow PEP 8. Watch for mutable default arguments, bare except clauses, eval/exec, SQL built with string formatting and missing type hints."),
        ("javascript", "Watch for == instead of ===, unhandled promise rejections, eval, innerHTML injection, prototype pollution and var hoisting surprises."),
        ("typescript", "Watch for any, non-null assertions hiding bugs, unchecked casts, unhandled promises and missing exhaustive switch checks."),
        ("java", "Watch for unclosed resources (prefer try-with-resources), NullPointerException risks, raw types, SQL concatenation and swallowed exceptions."),
        ("rust", "Watch for unwrap/expect on fallible paths, needless clones, unsafe blocks, blocking calls in async code and integer overflow in release builds."),
        ("go", "Watch for ignored error returns, goroutine leaks, data races on shared maps, deferred calls in loops and nil pointer dereferences."),
        ("c", "Watch for buffer overflows, unchecked malloc results, use-after-free, format string vulnerabilities and integer overflow."),
        ("cpp", "Watch for raw owning pointers (prefer RAII and smart pointers), iterator invalidation, undefined behaviour and missing virtual destructors."),
        ("csharp", "Watch for undisposed IDisposable objects, async void methods, null reference risks and SQL built from strings."),
        ("ruby", "Watch for mass assignment, unsafe send/eval, N+1 queries and methods that mutate arguments unexpectedly."),
        ("php", "Watch for SQL injection, unescaped output (XSS), loose comparisons, include of user-controlled paths and error suppression with @."),
        ("kotlin", "Watch for !! operators, platform types from Java, blocking calls inside coroutines and mutable shared state."),
        ("swift", "Watch for force unwraps, retain cycles in closures (use weak/unowned), and main-thread violations in UI code."),
        ("sql", "Watch for missing indexes on join/filter columns, SELECT *, non-sargable predicates and implicit type conversions."),
    ])
});

/// Language-specific review hints; unknown languages get the generic block.
pub fn guidance_for(language: &str) -> &'static str {
    let normalized = language.trim().to_lowercase();
    let key = match normalized.as_str() {
        "py" | "python3" => "python",
        "js" | "node" | "nodejs" => "javascript",
        "ts" => "typescript",
        "c++" => "cpp",
        "c#" | "cs" => "csharp",
        "golang" => "go",
        "rs" => "rust",
        other => other,
    };

    LANGUAGE_GUIDANCE.get(key).copied().unwrap_or(GENERIC_GUIDANCE)
}
