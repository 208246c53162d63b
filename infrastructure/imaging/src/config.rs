use std::path::PathBuf;

/// Placeholder replaced by the HEIC source path in converter arguments.
pub const INPUT_PLACEHOLDER: &str = "{input}";
/// Placeholder replaced by the JPEG destination path in converter arguments.
pub const OUTPUT_PLACEHOLDER: &str = "{output}";

/// Quality the `image` crate uses when none is given.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// External program used to turn HEIC files into JPEG.
#[derive(Debug, Clone, PartialEq)]
pub struct HeicConverterConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for HeicConverterConfig {
    fn default() -> Self {
        Self {
            program: "heif-convert".to_string(),
            args: vec![INPUT_PLACEHOLDER.to_string(), OUTPUT_PLACEHOLDER.to_string()],
        }
    }
}

/// Settings for the decode and encode adapters.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagingConfig {
    pub temp_dir: PathBuf,
    pub heic_converter: HeicConverterConfig,
    pub jpeg_quality: u8,
}

impl Default for ImagingConfig {
    fn default() -> Self {
        Self {
            temp_dir: std::env::temp_dir(),
            heic_converter: HeicConverterConfig::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}
