use std::time::Duration;

pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const GROQ_PROVIDER: &str = "groq";

pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8787;
pub const DEFAULT_CACHE_CAPACITY: usize = 50;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 1000;
pub const DEFAULT_REQUESTS_PER_MINUTE: u32 = 30;
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

pub const BURST_REQUESTS_PER_SECOND: u32 = 5;

/// Upper bound on the raw model text quoted back inside a parse diagnostic.
pub const DIAGNOSTIC_EXCERPT_CHARS: usize = 500;

pub const CONFIG_DIR_NAME: &str = "codequal";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const SUPPORTED_FILE_EXTENSIONS: &[(&str, &str)] = &[
    ("rs", "rust"),
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("mjs", "javascript"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("py", "python"),
    ("java", "java"),
    ("kt", "kotlin"),
    ("cpp", "cpp"),
    ("cc", "cpp"),
    ("cxx", "cpp"),
    ("hpp", "cpp"),
    ("c", "c"),
    ("h", "c"),
    ("cs", "csharp"),
    ("go", "go"),
    ("php", "php"),
    ("rb", "ruby"),
    ("swift", "swift"),
    ("sql", "sql"),
    ("sh", "bash"),
];

pub const DEFAULT_LANGUAGE: &str = "text";

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
