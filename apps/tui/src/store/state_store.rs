use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::store::AssessmentDocument;

/// Fixed storage key for the persisted assessment blob.
pub const STORAGE_KEY: &str = "coroptima_mobility_v1";

/// Default blob location: the storage key as a JSON file in the working
/// directory.
pub fn default_store_path() -> PathBuf {
    PathBuf::from(format!("./{STORAGE_KEY}.json"))
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write assessment blob: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize assessment: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Owns the persisted assessment blob. Reads never fail the caller: a
/// missing or malformed blob yields an empty document. Writes are
/// best-effort; local persistence is not safety-critical for this tool.
#[derive(Debug, Clone)]
pub struct FormStateStore {
    path: PathBuf,
}

impl FormStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rehydrates the persisted document. Missing or malformed data is
    /// replaced by an empty document.
    pub fn load(&self) -> AssessmentDocument {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return AssessmentDocument::default();
        };

        match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(e) => {
                eprintln!(
                    "Warning: ignoring malformed assessment blob at {}: {e}",
                    self.path.display()
                );
                AssessmentDocument::default()
            }
        }
    }

    /// Writes the full document as a pretty JSON blob. Failures are logged
    /// and swallowed.
    pub fn persist(&self, document: &AssessmentDocument) {
        if let Err(e) = self.try_persist(document) {
            eprintln!(
                "Warning: failed to persist assessment to {}: {e}",
                self.path.display()
            );
        }
    }

    fn try_persist(&self, document: &AssessmentDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let blob = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, blob)?;
        Ok(())
    }

    /// Deletes the persisted blob. The caller resets in-memory state
    /// afterward; a subsequent `load` returns first-run state.
    pub fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                eprintln!(
                    "Warning: failed to clear assessment blob at {}: {e}",
                    self.path.display()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MobilityTest, RowField};

    #[test]
    fn load_missing_blob_returns_empty_document() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let store = FormStateStore::new(dir.path().join("missing.json"));
        assert_eq!(store.load(), AssessmentDocument::default());
        Ok(())
    }

    #[test]
    fn load_malformed_blob_returns_empty_document() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json at all")?;

        let store = FormStateStore::new(&path);
        assert_eq!(store.load(), AssessmentDocument::default());
        Ok(())
    }

    #[test]
    fn persist_then_load_round_trips() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let store = FormStateStore::new(dir.path().join("assessment.json"));

        let doc = AssessmentDocument::default()
            .with_field(MobilityTest::SupineHipFlexion, RowField::Left, "95")
            .with_core(|core| core.lumbo_pelvic_checked = true);

        store.persist(&doc);
        assert_eq!(store.load(), doc);
        Ok(())
    }

    #[test]
    fn clear_resets_to_first_run_state() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let store = FormStateStore::new(dir.path().join("assessment.json"));

        let doc = AssessmentDocument::default().with_field(
            MobilityTest::SeatedNeckRotation,
            RowField::Bilat,
            "70",
        );
        store.persist(&doc);
        assert_ne!(store.load(), AssessmentDocument::default());

        store.clear();
        assert_eq!(store.load(), AssessmentDocument::default());

        // Clearing an already-missing blob is a no-op
        store.clear();
        Ok(())
    }

    #[test]
    fn persist_creates_missing_parent_directories() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let store = FormStateStore::new(dir.path().join("nested/deep/assessment.json"));

        store.persist(&AssessmentDocument::default());
        assert!(store.path().exists());
        Ok(())
    }
}
