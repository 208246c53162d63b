use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use business::domain::logger::Logger;
use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::model::EncodedPayload;
use business::domain::receipt::services::ReceiptClassifierService;
use business::domain::receipt::submission::SubmissionResult;
use business::domain::shared::value_objects::SubmitterId;

use crate::client::ClassifierClient;
use crate::response::{generic_status, parse_success, parse_unprocessable};

#[derive(Debug, Serialize)]
struct ProcessReceiptRequest {
    base64_image: String,
    user_id: SubmitterId,
}

pub struct ReceiptClassifierHttp {
    client: ClassifierClient,
    submitter: SubmitterId,
    logger: Arc<dyn Logger>,
}

impl ReceiptClassifierHttp {
    pub fn new(client: ClassifierClient, submitter: SubmitterId, logger: Arc<dyn Logger>) -> Self {
        Self {
            client,
            submitter,
            logger,
        }
    }
}

fn transport_error(error: reqwest::Error) -> ReceiptError {
    ReceiptError::Transport(error.to_string())
}

#[async_trait]
impl ReceiptClassifierService for ReceiptClassifierHttp {
    async fn submit(&self, payload: &EncodedPayload) -> Result<SubmissionResult, ReceiptError> {
        let url = self.client.process_receipt_url();
        self.logger.info(&format!("Submitting receipt to {}", url));

        let body = ProcessReceiptRequest {
            base64_image: payload.to_base64(),
            user_id: self.submitter,
        };

        let response = self
            .client
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        self.logger
            .debug(&format!("Receipt service answered with status {}", status));

        let result = match status {
            200 => parse_success(&response.bytes().await.map_err(transport_error)?),
            422 => parse_unprocessable(&response.bytes().await.map_err(transport_error)?),
            other => generic_status(other),
        };

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::receipt::submission::ReceiptData;
    use business::domain::receipt::value_objects::ServiceEndpoint;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    struct SilentLogger;

    impl Logger for SilentLogger {
        fn info(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
        fn debug(&self, _message: &str) {}
    }

    fn payload() -> EncodedPayload {
        EncodedPayload {
            jpeg: vec![0xFF, 0xD8, 0xFF, 0xE0],
            width: 1,
            height: 1,
        }
    }

    fn classifier(base_url: &str) -> ReceiptClassifierHttp {
        let endpoint = ServiceEndpoint::parse(base_url).unwrap();
        ReceiptClassifierHttp::new(
            ClassifierClient::new(endpoint, None),
            SubmitterId::default(),
            Arc::new(SilentLogger),
        )
    }

    fn header_end(buffer: &[u8]) -> Option<usize> {
        buffer.windows(4).position(|w| w == b"\r\n\r\n")
    }

    /// Accepts one connection, answers with `status` and `body`, and returns
    /// the raw request it received.
    async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let read = socket.read(&mut chunk).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..read]);
                if let Some(end) = header_end(&request) {
                    let head = String::from_utf8_lossy(&request[..end]).to_lowercase();
                    let length = head
                        .lines()
                        .find_map(|l| l.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if request.len() >= end + 4 + length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).to_string()
        });

        (format!("http://{}/", addr), handle)
    }

    fn request_json(request: &str) -> serde_json::Value {
        let (_, body) = request.split_once("\r\n\r\n").unwrap();
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn should_serialize_request_body() {
        let body = ProcessReceiptRequest {
            base64_image: payload().to_base64(),
            user_id: SubmitterId::default(),
        };

        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"base64_image": "/9j/4A==", "user_id": 1})
        );
    }

    #[tokio::test]
    async fn should_post_json_to_process_receipt_endpoint() {
        let (base_url, server) = serve_once(
            200,
            r#"{"response_data": {"vendor_name": "ACME", "transaction_id": "T1", "date_time": "2024-01-01T00:00Z", "currency": "USD", "total_amount": 12.5}}"#,
        )
        .await;

        let result = classifier(&base_url).submit(&payload()).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("POST /agent/process-receipt/ HTTP/1.1"));
        assert!(request.to_lowercase().contains("content-type: application/json"));
        assert_eq!(
            request_json(&request),
            serde_json::json!({"base64_image": "/9j/4A==", "user_id": 1})
        );
        assert_eq!(
            result,
            SubmissionResult::Success(ReceiptData {
                vendor_name: Some("ACME".to_string()),
                transaction_id: Some("T1".to_string()),
                date_time: Some("2024-01-01T00:00Z".to_string()),
                currency: Some("USD".to_string()),
                total_amount: Some("12.5".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn should_map_unprocessable_response() {
        let (base_url, server) = serve_once(
            422,
            r#"{"detail": "Invalid vendor. Valid vendors: ['A','B','C']"}"#,
        )
        .await;

        let result = classifier(&base_url).submit(&payload()).await.unwrap();
        server.await.unwrap();

        let SubmissionResult::ValidationError { valid_vendors, .. } = result else {
            panic!("expected validation error");
        };
        assert_eq!(valid_vendors, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn should_ignore_body_of_other_status_codes() {
        let (base_url, server) = serve_once(500, "{not json").await;

        let result = classifier(&base_url).submit(&payload()).await.unwrap();
        server.await.unwrap();

        assert!(matches!(
            result,
            SubmissionResult::GenericError {
                status_code: 500,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn should_return_transport_error_when_service_is_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = classifier(&format!("http://{}", addr))
            .submit(&payload())
            .await;

        assert!(matches!(result, Err(ReceiptError::Transport(_))));
    }
}
