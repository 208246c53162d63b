//! Scoped temporary artifacts.
//!
//! Every path registered with a [`TempFileScope`] is deleted when the scope
//! is cleaned up explicitly or dropped, whichever comes first. A path that
//! is already gone counts as cleaned. Any other removal failure is reported
//! as a [`TempFileError`] warning and never turns into a hard error.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use business::domain::logger::Logger;
use business::domain::receipt::errors::TempFileError;
use uuid::Uuid;

/// A registered path and whether its removal has been attempted.
#[derive(Debug)]
struct TempArtifact {
    path: PathBuf,
    cleaned: bool,
}

pub struct TempFileScope {
    artifacts: Vec<TempArtifact>,
    logger: Arc<dyn Logger>,
}

impl TempFileScope {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            artifacts: Vec::new(),
            logger,
        }
    }

    /// Tracks `path` for deletion and hands it back.
    pub fn register(&mut self, path: PathBuf) -> PathBuf {
        self.artifacts.push(TempArtifact {
            path: path.clone(),
            cleaned: false,
        });
        path
    }

    /// Removes every registered path now and returns the failures.
    pub fn cleanup(mut self) -> Vec<TempFileError> {
        self.remove_all()
    }

    fn remove_all(&mut self) -> Vec<TempFileError> {
        let mut warnings = Vec::new();

        for artifact in self.artifacts.iter_mut().filter(|a| !a.cleaned) {
            artifact.cleaned = true;
            match std::fs::remove_file(&artifact.path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    let warning = TempFileError {
                        path: artifact.path.clone(),
                        reason: e.to_string(),
                    };
                    self.logger.warn(&warning.to_string());
                    warnings.push(warning);
                }
            }
        }

        warnings
    }
}

impl Drop for TempFileScope {
    fn drop(&mut self) {
        self.remove_all();
    }
}

/// Builds `<dir>/<stem>_<uuid>.<extension>` from the uploaded filename.
///
/// The stem keeps only ASCII alphanumerics, `-` and `_`; the UUIDv4 suffix
/// keeps concurrent uploads of the same file apart.
pub fn unique_path(dir: &Path, original_filename: &str, extension: &str) -> PathBuf {
    let stem: String = Path::new(original_filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = if stem.is_empty() { "upload" } else { &stem };

    dir.join(format!(
        "{}_{}.{}",
        stem,
        Uuid::new_v4().simple(),
        extension
    ))
}
