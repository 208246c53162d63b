use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::access::errors::AccessError;
use business::domain::receipt::errors::ReceiptError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ReceiptError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let code = self.code();
        let (status, name, detail) = match self {
            ReceiptError::UnsupportedFormat(detail) => {
                (StatusCode::BAD_REQUEST, "UnsupportedFormatError", Some(detail))
            }
            ReceiptError::CorruptImage(detail) => {
                (StatusCode::BAD_REQUEST, "CorruptImageError", Some(detail))
            }
            ReceiptError::Encode(detail) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "EncodeError", Some(detail))
            }
            ReceiptError::Transport(detail) => {
                (StatusCode::BAD_GATEWAY, "TransportError", Some(detail))
            }
            ReceiptError::ProcessingAborted => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError", None)
            }
        };

        (status, ErrorResponse::new(name, code, detail))
    }
}

impl IntoErrorResponse for AccessError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match self {
            AccessError::PasswordMissing => "access.password_missing",
            AccessError::PasswordIncorrect => "access.password_incorrect",
        };

        (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new("AccessError", message, None),
        )
    }
}
