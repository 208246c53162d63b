use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error category
    pub name: String,
    /// Code-style message identifier, e.g. `receipt.corrupt_image`
    pub message: String,
    /// Human readable detail, when available
    #[oai(skip_serializing_if_is_none)]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str, detail: Option<String>) -> Json<Self> {
        Json(Self {
            name: name.to_string(),
            message: message.to_string(),
            detail,
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
