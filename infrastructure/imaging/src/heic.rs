use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use business::domain::receipt::errors::ReceiptError;

use crate::config::{HeicConverterConfig, INPUT_PLACEHOLDER, OUTPUT_PLACEHOLDER};

/// Runs the configured external program to convert a HEIC file into JPEG.
pub struct HeicConverter {
    config: HeicConverterConfig,
}

impl HeicConverter {
    pub fn new(config: HeicConverterConfig) -> Self {
        Self { config }
    }

    fn arguments(&self, input: &Path, output: &Path) -> Vec<String> {
        let input = input.to_string_lossy();
        let output = output.to_string_lossy();
        self.config
            .args
            .iter()
            .map(|arg| {
                arg.replace(INPUT_PLACEHOLDER, &input)
                    .replace(OUTPUT_PLACEHOLDER, &output)
            })
            .collect()
    }

    /// A converter that cannot be launched means HEIC is unsupported here;
    /// one that runs and fails means the input is not a readable HEIC.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<(), ReceiptError> {
        let result = Command::new(&self.config.program)
            .args(self.arguments(input, output))
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ReceiptError::UnsupportedFormat(format!(
                    "HEIC converter '{}' is not installed",
                    self.config.program
                )),
                _ => ReceiptError::UnsupportedFormat(format!(
                    "HEIC converter '{}' could not start: {}",
                    self.config.program, e
                )),
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ReceiptError::CorruptImage(format!(
                "HEIC conversion failed ({}): {}",
                result.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
