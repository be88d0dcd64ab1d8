// Store module for coroptima_mobility-tui
// Holds the assessment document model and its local persistence

pub mod document;
pub mod state_store;

pub use document::{AssessmentDocument, CoreRecord, LungeRecord, SidePair, StickRecord, TestRow};
pub use state_store::{default_store_path, FormStateStore, StoreError, STORAGE_KEY};
