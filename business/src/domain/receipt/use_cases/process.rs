use async_trait::async_trait;

use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::UploadedImage;
use crate::domain::receipt::submission::ProcessedReceipt;

pub struct ProcessReceiptParams {
    pub upload: UploadedImage,
}

#[async_trait]
pub trait ProcessReceiptUseCase: Send + Sync {
    async fn execute(&self, params: ProcessReceiptParams) -> Result<ProcessedReceipt, ReceiptError>;
}
