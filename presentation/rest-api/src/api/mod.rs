pub mod error;
pub mod form;
pub mod health;
pub mod receipt;
pub mod tags;
