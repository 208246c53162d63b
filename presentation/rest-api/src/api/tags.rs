use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Form,
    Health,
    Receipts,
}
