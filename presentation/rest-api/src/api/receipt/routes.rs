use std::sync::Arc;

use poem_openapi::{
    Multipart, OpenApi, param::Header, payload::Json, types::multipart::Upload,
};

use business::domain::access::use_cases::authenticate::{AuthenticateParams, AuthenticateUseCase};
use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::model::UploadedImage;
use business::domain::receipt::use_cases::process::{ProcessReceiptParams, ProcessReceiptUseCase};

use crate::api::error::ErrorResponse;
use crate::api::receipt::dto::{ReceiptResultResponse, SubmissionErrorResponse};
use crate::api::receipt::presenter::ResultPresenter;
use crate::api::tags::ApiTags;

const FALLBACK_FILENAME: &str = "upload";

/// Multipart body posted by the upload form
#[derive(Multipart)]
pub struct ProcessReceiptForm {
    /// Receipt image: JPG, PNG or HEIC
    file: Upload,
}

pub struct ReceiptApi {
    process_use_case: Arc<dyn ProcessReceiptUseCase>,
    authenticate_use_case: Arc<dyn AuthenticateUseCase>,
}

impl ReceiptApi {
    pub fn new(
        process_use_case: Arc<dyn ProcessReceiptUseCase>,
        authenticate_use_case: Arc<dyn AuthenticateUseCase>,
    ) -> Self {
        Self {
            process_use_case,
            authenticate_use_case,
        }
    }
}

/// Receipt processing API
#[OpenApi]
impl ReceiptApi {
    /// Process a receipt image
    ///
    /// Normalizes the uploaded image to JPEG, submits it to the receipt
    /// classification service and returns the extracted data or the reason
    /// the receipt was rejected.
    #[oai(path = "/receipts/process", method = "post", tag = "ApiTags::Receipts")]
    async fn process_receipt(
        &self,
        #[oai(name = "X-Access-Password")] password: Header<Option<String>>,
        form: ProcessReceiptForm,
    ) -> ProcessReceiptResponse {
        let params = AuthenticateParams {
            password: password.0,
        };
        if let Err(err) = self.authenticate_use_case.execute(params) {
            return ResultPresenter::present_access_error(err);
        }

        let upload = form.file;
        let filename = upload
            .file_name()
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_FILENAME)
            .to_string();
        let content_type = upload.content_type().map(str::to_string);

        let bytes = match upload.into_vec().await {
            Ok(bytes) => bytes,
            Err(err) => {
                return ResultPresenter::present_error(ReceiptError::CorruptImage(format!(
                    "upload could not be read: {}",
                    err
                )));
            }
        };

        let params = ProcessReceiptParams {
            upload: UploadedImage::new(bytes, content_type.as_deref(), filename),
        };

        match self.process_use_case.execute(params).await {
            Ok(processed) => ResultPresenter::present(processed),
            Err(err) => ResultPresenter::present_error(err),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProcessReceiptResponse {
    #[oai(status = 200)]
    Ok(Json<ReceiptResultResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 422)]
    Rejected(Json<SubmissionErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
