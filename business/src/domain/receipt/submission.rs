/// Receipt fields extracted by the classification service.
/// Any field the service leaves out is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptData {
    pub vendor_name: Option<String>,
    pub transaction_id: Option<String>,
    pub date_time: Option<String>,
    pub currency: Option<String>,
    pub total_amount: Option<String>,
}

/// Outcome of a submission for which the service produced a response.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    Success(ReceiptData),
    ValidationError {
        message: String,
        valid_vendors: Vec<String>,
    },
    UnauthorizedVendorError {
        message: String,
    },
    GenericError {
        status_code: u16,
        message: String,
    },
}

impl SubmissionResult {
    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionResult::Success(_) => "success",
            SubmissionResult::ValidationError { .. } => "invalid_vendor",
            SubmissionResult::UnauthorizedVendorError { .. } => "unauthorized_vendor",
            SubmissionResult::GenericError { .. } => "service_error",
        }
    }
}

/// A submission result together with the size of the image that was sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedReceipt {
    pub result: SubmissionResult,
    pub width: u32,
    pub height: u32,
}
