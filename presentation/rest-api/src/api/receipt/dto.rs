use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::receipt::submission::{ReceiptData, SubmissionResult};

pub const MISSING_FIELD: &str = "N/A";

/// Structured data extracted from an accepted receipt
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ReceiptResultResponse {
    /// Vendor name, `N/A` when the service did not report it
    pub vendor_name: String,
    /// Transaction identifier
    pub transaction_id: String,
    /// Transaction date and time as reported by the service
    pub date_time: String,
    /// Currency code
    pub currency: String,
    /// Total amount
    pub total_amount: String,
    /// Amount prefixed with its currency, e.g. `USD 12.5`
    pub total_display: String,
    /// Width of the image that was submitted
    pub image_width: u32,
    /// Height of the image that was submitted
    pub image_height: u32,
}

impl ReceiptResultResponse {
    pub fn from_data(data: ReceiptData, width: u32, height: u32) -> Self {
        let total_display = format!(
            "{} {}",
            data.currency.as_deref().unwrap_or_default(),
            data.total_amount.as_deref().unwrap_or(MISSING_FIELD)
        );

        Self {
            vendor_name: or_missing(data.vendor_name),
            transaction_id: or_missing(data.transaction_id),
            date_time: or_missing(data.date_time),
            currency: or_missing(data.currency),
            total_amount: or_missing(data.total_amount),
            total_display,
            image_width: width,
            image_height: height,
        }
    }
}

fn or_missing(value: Option<String>) -> String {
    value.unwrap_or_else(|| MISSING_FIELD.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum SubmissionErrorKindDto {
    #[oai(rename = "invalid_vendor")]
    InvalidVendor,
    #[oai(rename = "unauthorized_vendor")]
    UnauthorizedVendor,
    #[oai(rename = "service_error")]
    ServiceError,
}

/// A receipt the classification service did not accept
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SubmissionErrorResponse {
    /// Kind of rejection
    pub kind: SubmissionErrorKindDto,
    /// Code-style message identifier, e.g. `receipt.invalid_vendor`
    pub message: String,
    /// Text reported by the service
    pub detail: String,
    /// Vendors the service accepts. Only filled for `invalid_vendor`.
    pub valid_vendors: Vec<String>,
    /// Status code returned by the service
    pub status_code: u16,
}

impl SubmissionErrorResponse {
    /// Splits a result into the extracted data or the rejection to report.
    pub fn from_result(result: SubmissionResult) -> Result<ReceiptData, Self> {
        let response = match result {
            SubmissionResult::Success(data) => return Ok(data),
            SubmissionResult::ValidationError {
                message,
                valid_vendors,
            } => Self {
                kind: SubmissionErrorKindDto::InvalidVendor,
                message: "receipt.invalid_vendor".to_string(),
                detail: message,
                valid_vendors,
                status_code: 422,
            },
            SubmissionResult::UnauthorizedVendorError { message } => Self {
                kind: SubmissionErrorKindDto::UnauthorizedVendor,
                message: "receipt.unauthorized_vendor".to_string(),
                detail: message,
                valid_vendors: Vec::new(),
                status_code: 422,
            },
            SubmissionResult::GenericError {
                status_code,
                message,
            } => Self {
                kind: SubmissionErrorKindDto::ServiceError,
                message: "receipt.service_error".to_string(),
                detail: message,
                valid_vendors: Vec::new(),
                status_code,
            },
        };

        Err(response)
    }
}
