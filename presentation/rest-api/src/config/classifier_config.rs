use std::time::Duration;

use anyhow::{Context, anyhow};
use business::domain::receipt::value_objects::ServiceEndpoint;
use business::domain::shared::value_objects::SubmitterId;

use super::{lookup, process_env};

pub const DEFAULT_SERVICE_URL: &str =
    "https://moneda-ai-backend-dev-727974179685.us-central1.run.app";

/// Configuration for the receipt classification service.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub endpoint: ServiceEndpoint,
    pub submitter: SubmitterId,
    pub timeout: Option<Duration>,
}

impl ClassifierConfig {
    /// Environment variables:
    /// - RECEIPT_SERVICE_URL: base URL of the service (default: the dev deployment)
    /// - RECEIPT_SUBMITTER_ID: numeric `user_id` sent with each receipt (default: 1)
    /// - RECEIPT_SERVICE_TIMEOUT_SECS: request timeout (default: none)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(process_env)
    }

    pub fn from_vars(vars: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw_url =
            lookup(&vars, "RECEIPT_SERVICE_URL").unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        let endpoint = ServiceEndpoint::parse(&raw_url).map_err(|e| anyhow!(e))?;

        let submitter = match lookup(&vars, "RECEIPT_SUBMITTER_ID") {
            Some(raw) => raw.parse::<SubmitterId>().map_err(|e| anyhow!(e))?,
            None => SubmitterId::default(),
        };

        let timeout = lookup(&vars, "RECEIPT_SERVICE_TIMEOUT_SECS")
            .map(|raw| {
                raw.parse::<u64>()
                    .map(Duration::from_secs)
                    .with_context(|| format!("Invalid RECEIPT_SERVICE_TIMEOUT_SECS: {}", raw))
            })
            .transpose()?;

        Ok(Self {
            endpoint,
            submitter,
            timeout,
        })
    }
}
