//! Environment flags read outside of clap.

/// Select the tracing-subscriber log backend instead of env_logger.
pub const TRACING_ENV: &str = "FACTORIAL_TRACING";

/// Parse a boolean environment variable (accepts "1" or "true").
pub fn parse_bool_env(name: &str) -> bool {
    std::env::var(name)
        .ok()
        .map(|v| is_truthy(&v))
        .unwrap_or(false)
}

fn is_truthy(v: &str) -> bool {
    let v = v.trim();
    v == "1" || v.eq_ignore_ascii_case("true")
}
