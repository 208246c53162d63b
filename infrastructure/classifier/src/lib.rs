pub mod client;
pub mod receipt_classifier;
pub mod response;
