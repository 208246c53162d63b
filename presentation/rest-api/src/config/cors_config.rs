use poem::middleware::Cors;

use super::{lookup, process_env};

const DEFAULT_ORIGINS: &str = "http://localhost:8080,http://127.0.0.1:8080";

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:8080,http://127.0.0.1:8080")
///
/// Configuration:
/// - Methods: GET, POST, OPTIONS
/// - Headers: content-type, x-access-password
///
pub fn init_cors() -> Cors {
    let origins = allowed_origins(process_env);

    Cors::new()
        .allow_origins(origins)
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type", "x-access-password"])
}

fn allowed_origins(vars: impl Fn(&str) -> Option<String>) -> Vec<String> {
    lookup(&vars, "CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|| DEFAULT_ORIGINS.to_string())
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
