use anyhow::anyhow;
use business::domain::access::model::AccessPassword;

use super::{lookup, process_env};

/// Shared password that unlocks the form.
#[derive(Clone)]
pub struct AccessConfig {
    pub password: AccessPassword,
}

impl AccessConfig {
    /// Environment variables:
    /// - APP_PASSWORD: password required in the `X-Access-Password` header (required)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(process_env)
    }

    pub fn from_vars(vars: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let secret =
            lookup(&vars, "APP_PASSWORD").ok_or_else(|| anyhow!("APP_PASSWORD must be set"))?;
        Ok(Self {
            password: AccessPassword::new(&secret),
        })
    }
}
