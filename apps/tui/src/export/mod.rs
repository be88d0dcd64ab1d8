// Export module for coroptima_mobility-tui
// Derives CSV and PDF artifacts and the e-mail draft from a document snapshot

pub mod csv;
pub mod mail;
pub mod pdf;

use std::io;

pub use csv::{export_csv, render_csv, CSV_FILENAME, CSV_HEADERS};
pub use mail::{build_mailto, mail_body, open_mail_draft, MAIL_SUBJECT};
pub use pdf::{export_pdf, pdf_filename, rendered_view, select_renderer, PageRenderer};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write export file: {0}")]
    Io(#[from] io::Error),
    #[error("pdf engine error: {0}")]
    Pdf(String),
    #[error("no recipient address provided")]
    MissingRecipient,
}
