pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod event;
pub mod export;
pub mod store;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use cli::CliArgs;
pub use store::{AssessmentDocument, FormStateStore};
