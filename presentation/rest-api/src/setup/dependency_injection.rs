use std::sync::Arc;

use logger::TracingLogger;

use classifier::client::ClassifierClient;
use classifier::receipt_classifier::ReceiptClassifierHttp;
use imaging::decoder::RustImageDecoder;
use imaging::encoder::JpegImageEncoder;

use business::application::access::authenticate::AuthenticateUseCaseImpl;
use business::application::receipt::process::ProcessReceiptUseCaseImpl;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub form_api: crate::api::form::routes::FormApi,
    pub receipt_api: crate::api::receipt::routes::ReceiptApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();
        let form_api = crate::api::form::routes::FormApi::new();

        // Infrastructure adapters
        let decoder = Arc::new(RustImageDecoder::new(
            config.imaging.clone(),
            logger.clone(),
        ));
        let encoder = Arc::new(JpegImageEncoder::new(config.imaging.jpeg_quality));
        let classifier_client = ClassifierClient::new(
            config.classifier.endpoint.clone(),
            config.classifier.timeout,
        );
        let receipt_classifier = Arc::new(ReceiptClassifierHttp::new(
            classifier_client,
            config.classifier.submitter,
            logger.clone(),
        ));

        // Use cases
        let process_use_case = Arc::new(ProcessReceiptUseCaseImpl {
            decoder,
            encoder,
            classifier: receipt_classifier,
            logger: logger.clone(),
        });
        let authenticate_use_case = Arc::new(AuthenticateUseCaseImpl {
            password: config.access.password.clone(),
            logger,
        });

        let receipt_api =
            crate::api::receipt::routes::ReceiptApi::new(process_use_case, authenticate_use_case);

        Self {
            health_api,
            form_api,
            receipt_api,
        }
    }
}
