use async_trait::async_trait;

use super::errors::ReceiptError;
use super::model::{CanonicalImage, DecodedImage, EncodedPayload, UploadedImage};
use super::submission::SubmissionResult;

/// Port for turning uploaded bytes into pixels.
///
/// Implementations may need the filesystem for formats without an in-memory
/// decoder, and must clean up whatever they create before returning.
pub trait ImageDecoderService: Send + Sync {
    fn decode(&self, upload: &UploadedImage) -> Result<DecodedImage, ReceiptError>;
}

/// Port for serializing a canonical image to JPEG.
pub trait ImageEncoderService: Send + Sync {
    fn encode(&self, image: &CanonicalImage) -> Result<EncodedPayload, ReceiptError>;
}

/// Port for the remote receipt classification service.
///
/// Issues exactly one request. `Err` is reserved for failures where no
/// response was received; any received response maps to a `SubmissionResult`.
#[async_trait]
pub trait ReceiptClassifierService: Send + Sync {
    async fn submit(&self, payload: &EncodedPayload) -> Result<SubmissionResult, ReceiptError>;
}
