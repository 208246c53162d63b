//! Turns pipeline outcomes into HTTP responses for the upload form.

use poem_openapi::payload::Json;

use business::domain::access::errors::AccessError;
use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::submission::ProcessedReceipt;

use crate::api::error::IntoErrorResponse;
use crate::api::receipt::dto::{ReceiptResultResponse, SubmissionErrorResponse};
use crate::api::receipt::routes::ProcessReceiptResponse;

pub struct ResultPresenter;

impl ResultPresenter {
    pub fn present(processed: ProcessedReceipt) -> ProcessReceiptResponse {
        let ProcessedReceipt {
            result,
            width,
            height,
        } = processed;

        match SubmissionErrorResponse::from_result(result) {
            Ok(data) => ProcessReceiptResponse::Ok(Json(ReceiptResultResponse::from_data(
                data, width, height,
            ))),
            Err(rejection) => ProcessReceiptResponse::Rejected(Json(rejection)),
        }
    }

    pub fn present_error(error: ReceiptError) -> ProcessReceiptResponse {
        let (status, json) = error.into_error_response();
        match status.as_u16() {
            400 => ProcessReceiptResponse::BadRequest(json),
            502 => ProcessReceiptResponse::BadGateway(json),
            _ => ProcessReceiptResponse::InternalError(json),
        }
    }

    pub fn present_access_error(error: AccessError) -> ProcessReceiptResponse {
        let (_status, json) = error.into_error_response();
        ProcessReceiptResponse::Unauthorized(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::receipt::submission::{ReceiptData, SubmissionResult};

    fn processed(result: SubmissionResult) -> ProcessedReceipt {
        ProcessedReceipt {
            result,
            width: 640,
            height: 480,
        }
    }

    #[test]
    fn should_present_success_with_image_dimensions() {
        let response = ResultPresenter::present(processed(SubmissionResult::Success(
            ReceiptData {
                vendor_name: Some("ACME".to_string()),
                ..ReceiptData::default()
            },
        )));

        let ProcessReceiptResponse::Ok(Json(body)) = response else {
            panic!("expected ok response");
        };
        assert_eq!(body.vendor_name, "ACME");
        assert_eq!((body.image_width, body.image_height), (640, 480));
    }

    #[test]
    fn should_present_unauthorized_vendor_as_rejection() {
        let response = ResultPresenter::present(processed(
            SubmissionResult::UnauthorizedVendorError {
                message: "does not contain a receipt from an authorized vendor".to_string(),
            },
        ));

        let ProcessReceiptResponse::Rejected(Json(body)) = response else {
            panic!("expected rejected response");
        };
        assert_eq!(body.message, "receipt.unauthorized_vendor");
    }

    #[test]
    fn should_present_decode_errors_as_bad_request() {
        let response =
            ResultPresenter::present_error(ReceiptError::UnsupportedFormat("heic".to_string()));

        assert!(matches!(response, ProcessReceiptResponse::BadRequest(_)));
    }

    #[test]
    fn should_present_transport_errors_as_bad_gateway() {
        let response = ResultPresenter::present_error(ReceiptError::Transport("reset".to_string()));

        assert!(matches!(response, ProcessReceiptResponse::BadGateway(_)));
    }

    #[test]
    fn should_present_aborted_processing_as_internal_error() {
        let response = ResultPresenter::present_error(ReceiptError::ProcessingAborted);

        assert!(matches!(response, ProcessReceiptResponse::InternalError(_)));
    }

    #[test]
    fn should_present_access_errors_as_unauthorized() {
        let response = ResultPresenter::present_access_error(AccessError::PasswordMissing);

        assert!(matches!(response, ProcessReceiptResponse::Unauthorized(_)));
    }
}
