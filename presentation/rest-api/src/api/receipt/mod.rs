pub mod dto;
pub mod error_mapper;
pub mod presenter;
pub mod routes;
