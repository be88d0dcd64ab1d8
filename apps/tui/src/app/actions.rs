use crate::config::{debug_enabled, get_export_dir, init_app_config};
use crate::export::{self, ExportError};
use crate::store::{AssessmentDocument, FormStateStore};
use std::path::PathBuf;

/// Side-effecting collaborators of the controller: the blob store, the
/// export directory and the export paths. UI handlers never touch the
/// filesystem directly.
#[derive(Debug)]
pub struct AppActions {
    pub export_dir: PathBuf,
    pub store: Option<FormStateStore>,
    pub practitioner: String,
}

impl AppActions {
    pub fn new() -> Self {
        Self {
            export_dir: PathBuf::from("./exports"),
            store: None,
            practitioner: String::new(),
        }
    }

    pub fn initialize(&mut self) -> color_eyre::Result<()> {
        let (store_path, practitioner) = init_app_config()?;
        self.practitioner = practitioner;
        self.export_dir = get_export_dir();
        self.store = Some(FormStateStore::new(store_path));
        Ok(())
    }

    /// Rehydrates the persisted document; empty when nothing was saved yet.
    pub fn load(&self) -> AssessmentDocument {
        self.store
            .as_ref()
            .map_or_else(AssessmentDocument::default, FormStateStore::load)
    }

    /// Best-effort persistence; a no-op before initialization.
    pub fn persist(&self, document: &AssessmentDocument) {
        if let Some(store) = &self.store {
            if debug_enabled() {
                eprintln!(
                    "[DEBUG] persisting {} rows to {}",
                    document.rows_with_data(),
                    store.path().display()
                );
            }
            store.persist(document);
        }
    }

    pub fn clear(&self) {
        if let Some(store) = &self.store {
            store.clear();
        }
    }

    pub fn export_csv(&self, document: &AssessmentDocument) -> Result<PathBuf, ExportError> {
        export::export_csv(document, &self.export_dir)
    }

    pub async fn export_pdf(&self, document: &AssessmentDocument) -> Result<PathBuf, ExportError> {
        export::export_pdf(document, &self.export_dir).await
    }

    /// Builds the mail draft URI and hands it to the OS mail client.
    /// Returns the URI so the UI can show it either way.
    pub fn open_mail_draft(&self, recipient: &str) -> Result<String, ExportError> {
        let uri = export::build_mailto(recipient, export::MAIL_SUBJECT)?;
        export::open_mail_draft(&uri);
        Ok(uri)
    }
}

impl Default for AppActions {
    fn default() -> Self {
        Self::new()
    }
}
