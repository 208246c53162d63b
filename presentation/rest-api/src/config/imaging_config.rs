use std::path::PathBuf;

use anyhow::Context;
use imaging::config::{HeicConverterConfig, ImagingConfig};

use super::{lookup, process_env};

/// Environment variables:
/// - IMAGING_TEMP_DIR: directory for HEIC temp files (default: OS temp dir)
/// - HEIC_CONVERTER: converter program (default: "heif-convert")
/// - HEIC_CONVERTER_ARGS: whitespace separated arguments with `{input}` and
///   `{output}` placeholders (default: "{input} {output}")
/// - JPEG_QUALITY: 1-100 (default: 75)
pub fn imaging_config_from_env() -> anyhow::Result<ImagingConfig> {
    imaging_config_from_vars(process_env)
}

pub fn imaging_config_from_vars(
    vars: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ImagingConfig> {
    let defaults = ImagingConfig::default();

    let temp_dir = lookup(&vars, "IMAGING_TEMP_DIR")
        .map(PathBuf::from)
        .unwrap_or(defaults.temp_dir);

    let mut heic_converter = HeicConverterConfig::default();
    if let Some(program) = lookup(&vars, "HEIC_CONVERTER") {
        heic_converter.program = program;
    }
    if let Some(args) = lookup(&vars, "HEIC_CONVERTER_ARGS") {
        heic_converter.args = args.split_whitespace().map(str::to_string).collect();
    }

    let jpeg_quality = lookup(&vars, "JPEG_QUALITY")
        .map(|raw| {
            raw.parse::<u8>()
                .ok()
                .filter(|q| (1..=100).contains(q))
                .with_context(|| format!("JPEG_QUALITY must be between 1 and 100, got {}", raw))
        })
        .transpose()?
        .unwrap_or(defaults.jpeg_quality);

    Ok(ImagingConfig {
        temp_dir,
        heic_converter,
        jpeg_quality,
    })
}
