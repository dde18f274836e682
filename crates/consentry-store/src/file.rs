//! JSON-file backend.

use std::path::{Path, PathBuf};

use consentry_core::ConsentRecord;
use tracing::warn;

use crate::port::{decode, ConsentStore, CONSENT_KEY};

/// Persists the consent record as one JSON file — the single
/// well-known storage entry, mapped to a path.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under a directory, using the well-known key as file name.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{}.json", CONSENT_KEY)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConsentStore for FileStore {
    fn load(&self) -> Option<ConsentRecord> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        decode(&raw)
    }

    fn save(&self, record: &ConsentRecord) {
        let data = match serde_json::to_string_pretty(record) {
            Ok(data) => data,
            Err(e) => {
                warn!("Failed to serialize consent record: {}", e);
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("Failed to create consent store directory: {}", e);
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, data) {
            warn!("Failed to save consent record: {}", e);
        }
    }
}
