use poem_openapi::{OpenApi, payload::Html};

use crate::api::tags::ApiTags;

const FORM_PAGE: &str = include_str!("index.html");

/// Serves the upload form
pub struct FormApi;

impl FormApi {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl FormApi {
    /// Upload form
    ///
    /// Single page that uploads a receipt image to `/receipts/process` and
    /// renders the result.
    #[oai(path = "/", method = "get", tag = "ApiTags::Form")]
    async fn index(&self) -> Html<String> {
        Html(FORM_PAGE.to_string())
    }
}
