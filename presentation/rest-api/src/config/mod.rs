pub mod access_config;
pub mod app_config;
pub mod classifier_config;
pub mod cors_config;
pub mod imaging_config;
pub mod server_config;

/// Reads one variable, treating blank values as unset.
pub(crate) fn lookup(vars: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    vars(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

pub(crate) fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
