use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::{EncodedPayload, UploadedImage};
use crate::domain::receipt::normalizer::normalize;
use crate::domain::receipt::services::{
    ImageDecoderService, ImageEncoderService, ReceiptClassifierService,
};
use crate::domain::receipt::submission::ProcessedReceipt;
use crate::domain::receipt::use_cases::process::{ProcessReceiptParams, ProcessReceiptUseCase};

pub struct ProcessReceiptUseCaseImpl {
    pub decoder: Arc<dyn ImageDecoderService>,
    pub encoder: Arc<dyn ImageEncoderService>,
    pub classifier: Arc<dyn ReceiptClassifierService>,
    pub logger: Arc<dyn Logger>,
}

impl ProcessReceiptUseCaseImpl {
    /// Decode, normalize and encode on the blocking pool.
    async fn prepare(&self, upload: UploadedImage) -> Result<EncodedPayload, ReceiptError> {
        let decoder = self.decoder.clone();
        let encoder = self.encoder.clone();

        tokio::task::spawn_blocking(move || {
            let decoded = decoder.decode(&upload)?;
            let canonical = normalize(decoded);
            encoder.encode(&canonical)
        })
        .await
        .map_err(|_| ReceiptError::ProcessingAborted)?
    }
}

#[async_trait]
impl ProcessReceiptUseCase for ProcessReceiptUseCaseImpl {
    async fn execute(
        &self,
        params: ProcessReceiptParams,
    ) -> Result<ProcessedReceipt, ReceiptError> {
        let upload = params.upload;
        self.logger.info(&format!(
            "Processing receipt {} ({}, {} bytes)",
            upload.filename,
            upload.format_hint,
            upload.bytes.len()
        ));

        let payload = match self.prepare(upload).await {
            Ok(payload) => payload,
            Err(err) => {
                self.logger
                    .error(&format!("Receipt image preparation failed: {}", err));
                return Err(err);
            }
        };

        self.logger.debug(&format!(
            "Receipt normalized to {}x{} JPEG, {} bytes",
            payload.width,
            payload.height,
            payload.jpeg.len()
        ));

        let result = match self.classifier.submit(&payload).await {
            Ok(result) => result,
            Err(err) => {
                self.logger
                    .error(&format!("Receipt submission failed: {}", err));
                return Err(err);
            }
        };

        self.logger
            .info(&format!("Receipt submission finished: {}", result.kind()));

        Ok(ProcessedReceipt {
            result,
            width: payload.width,
            height: payload.height,
        })
    }
}
