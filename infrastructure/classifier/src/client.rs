use std::time::Duration;

use business::domain::receipt::value_objects::ServiceEndpoint;
use reqwest::Client;

/// Shared HTTP client configuration for the classification service.
pub struct ClassifierClient {
    pub client: Client,
    pub endpoint: ServiceEndpoint,
}

impl ClassifierClient {
    /// Without a timeout the request waits as long as reqwest's defaults allow.
    pub fn new(endpoint: ServiceEndpoint, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_default();

        Self { client, endpoint }
    }

    /// Returns the receipt processing endpoint URL.
    pub fn process_receipt_url(&self) -> String {
        self.endpoint.process_receipt_url()
    }
}
