pub mod config;
pub mod decoder;
pub mod encoder;
pub mod heic;
pub mod temp_files;

#[cfg(test)]
pub(crate) mod test_helpers;
