//! Persistence sinks for generated programs.

use figtk_core::ExportError;
use std::path::{Path, PathBuf};

/// Writes generated source text to a caller-chosen destination.
pub trait PersistenceSink {
    /// Write `contents` and return where they ended up.
    fn save(&self, path: &Path, contents: &str) -> Result<PathBuf, ExportError>;
}

/// Writes to the local filesystem.
///
/// A destination without an extension gets the default one appended.
/// Parent directories must already exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsSink {
    default_extension: String,
}

impl Default for FsSink {
    fn default() -> Self {
        Self::new("py")
    }
}

impl FsSink {
    pub fn new(default_extension: impl Into<String>) -> Self {
        Self {
            default_extension: default_extension.into(),
        }
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.extension().is_some() || self.default_extension.is_empty() {
            path.to_path_buf()
        } else {
            path.with_extension(&self.default_extension)
        }
    }
}

impl PersistenceSink for FsSink {
    fn save(&self, path: &Path, contents: &str) -> Result<PathBuf, ExportError> {
        let target = self.resolve(path);
        std::fs::write(&target, contents).map_err(|source| ExportError::Io {
            path: target.clone(),
            source,
        })?;
        log::info!("wrote {} bytes to {}", contents.len(), target.display());
        Ok(target)
    }
}
