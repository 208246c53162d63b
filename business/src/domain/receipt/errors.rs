use std::path::PathBuf;

/// Failures that abort a receipt submission.
/// Messages start with a code-style identifier for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error("receipt.unsupported_format: {0}")]
    UnsupportedFormat(String),
    #[error("receipt.corrupt_image: {0}")]
    CorruptImage(String),
    #[error("receipt.encode_failed: {0}")]
    Encode(String),
    #[error("receipt.transport_failed: {0}")]
    Transport(String),
    #[error("receipt.processing_aborted")]
    ProcessingAborted,
}

impl ReceiptError {
    pub fn code(&self) -> &'static str {
        match self {
            ReceiptError::UnsupportedFormat(_) => "receipt.unsupported_format",
            ReceiptError::CorruptImage(_) => "receipt.corrupt_image",
            ReceiptError::Encode(_) => "receipt.encode_failed",
            ReceiptError::Transport(_) => "receipt.transport_failed",
            ReceiptError::ProcessingAborted => "receipt.processing_aborted",
        }
    }
}

/// A temporary artifact that could not be removed. Never aborts a submission.
#[derive(Debug, thiserror::Error)]
#[error("receipt.temp_file_cleanup_failed: {path}: {reason}")]
pub struct TempFileError {
    pub path: PathBuf,
    pub reason: String,
}
