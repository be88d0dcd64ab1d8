use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::domain::{LungeSegment, MobilityTest, RowField, StickSegment};
use crate::export::ExportError;
use crate::store::AssessmentDocument;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;

const BODY_FONT_PT: f32 = 9.0;
const LINE_HEIGHT_MM: f32 = 4.2;

// Courier metrics: every glyph advances 0.6 em
const GLYPH_ADVANCE_EM: f32 = 0.6;
const PT_TO_MM: f32 = 0.352_778;

/// The visible document flattened to pre-formatted text lines, the unit the
/// page renderers consume.
#[derive(Debug, Clone)]
pub struct RenderedView {
    pub title: String,
    pub lines: Vec<String>,
}

/// A strategy for turning the rendered view into a PDF file. The preferred
/// implementation lays text out across pages; the fallback scales the whole
/// block onto a single page.
pub trait PageRenderer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Capability probe: can this renderer place the view on the page?
    fn supports(&self, view: &RenderedView) -> bool;

    fn render(&self, view: &RenderedView, path: &Path) -> Result<(), ExportError>;
}

fn char_width_mm(font_pt: f32) -> f32 {
    font_pt * GLYPH_ADVANCE_EM * PT_TO_MM
}

const fn printable_width_mm() -> f32 {
    PAGE_WIDTH_MM - 2.0 * MARGIN_MM
}

const fn printable_height_mm() -> f32 {
    PAGE_HEIGHT_MM - 2.0 * MARGIN_MM
}

fn longest_line(view: &RenderedView) -> usize {
    view.lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}

/// Scales a block of `natural_width x natural_height` to `target_width`,
/// computing the height so the aspect ratio is preserved.
pub fn fit_to_width(natural_width: f32, natural_height: f32, target_width: f32) -> (f32, f32) {
    if natural_width <= target_width || natural_width <= 0.0 {
        return (natural_width, natural_height);
    }
    let scale = target_width / natural_width;
    (target_width, natural_height * scale)
}

/// Preferred path: flowing text layout, paginated across A4 pages with
/// fixed margins.
pub struct FlowRenderer;

impl PageRenderer for FlowRenderer {
    fn name(&self) -> &'static str {
        "flow"
    }

    fn supports(&self, view: &RenderedView) -> bool {
        let max_chars = (printable_width_mm() / char_width_mm(BODY_FONT_PT)) as usize;
        longest_line(view) <= max_chars
    }

    fn render(&self, view: &RenderedView, path: &Path) -> Result<(), ExportError> {
        let lines_per_page = (printable_height_mm() / LINE_HEIGHT_MM) as usize;
        let (doc, first_page, first_layer) = PdfDocument::new(
            &view.title,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Page 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Courier)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        for (index, chunk) in view.lines.chunks(lines_per_page.max(1)).enumerate() {
            if index > 0 {
                let (page, layer_index) = doc.add_page(
                    Mm(PAGE_WIDTH_MM),
                    Mm(PAGE_HEIGHT_MM),
                    format!("Page {}", index + 1),
                );
                layer = doc.get_page(page).get_layer(layer_index);
            }

            for (line_no, line) in chunk.iter().enumerate() {
                let y = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM * (line_no as f32 + 1.0);
                layer.use_text(line.clone(), BODY_FONT_PT, Mm(MARGIN_MM), Mm(y), &font);
            }
        }

        let file = File::create(path)?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        Ok(())
    }
}

/// Fallback path: the whole view as one scaled block on a single page,
/// shrunk to the printable width with the height following the aspect ratio.
pub struct SnapshotRenderer;

impl PageRenderer for SnapshotRenderer {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn supports(&self, _view: &RenderedView) -> bool {
        true
    }

    fn render(&self, view: &RenderedView, path: &Path) -> Result<(), ExportError> {
        let natural_width = longest_line(view) as f32 * char_width_mm(BODY_FONT_PT);
        let natural_height = view.lines.len() as f32 * LINE_HEIGHT_MM;
        let (fitted_width, _fitted_height) =
            fit_to_width(natural_width, natural_height, printable_width_mm());

        let scale = if natural_width > 0.0 {
            fitted_width / natural_width
        } else {
            1.0
        };
        let font_pt = BODY_FONT_PT * scale;
        let line_height = LINE_HEIGHT_MM * scale;

        let (doc, page, layer_index) = PdfDocument::new(
            &view.title,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Snapshot",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Courier)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;

        let layer = doc.get_page(page).get_layer(layer_index);
        for (line_no, line) in view.lines.iter().enumerate() {
            let y = PAGE_HEIGHT_MM - MARGIN_MM - line_height * (line_no as f32 + 1.0);
            layer.use_text(line.clone(), font_pt, Mm(MARGIN_MM), Mm(y), &font);
        }

        let file = File::create(path)?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        Ok(())
    }
}

/// Probes the preferred renderer first and falls back to the snapshot path.
pub fn select_renderer(view: &RenderedView) -> Box<dyn PageRenderer> {
    if FlowRenderer.supports(view) {
        Box::new(FlowRenderer)
    } else {
        Box::new(SnapshotRenderer)
    }
}

/// Flattens the full visible document (table plus core section) into text
/// lines for the page renderers.
pub fn rendered_view(document: &AssessmentDocument) -> RenderedView {
    let date = chrono::Local::now().format("%Y-%m-%d");
    let mut lines = Vec::new();

    lines.push(format!("Cor Optima — Mobilitet & Core        {date}"));
    lines.push(String::new());
    lines.push("1. Mobilitet/Bevegelse".to_string());
    lines.push(format!(
        "{:<44} {:>6} {:>6} {:>6}  {:<12} {:<12} Notater",
        "Test", "Left", "Right", "Bilat", "ADL Normal", "Spec Sport"
    ));

    for test in MobilityTest::ALL {
        lines.push(format!(
            "{:<44} {:>6} {:>6} {:>6}  {:<12} {:<12} {}",
            test.label(),
            document.field(test, RowField::Left),
            document.field(test, RowField::Right),
            document.field(test, RowField::Bilat),
            document.field(test, RowField::AdlNormal),
            document.field(test, RowField::SpecSport),
            document.field(test, RowField::Notater).replace('\n', " "),
        ));
    }

    let core = &document.core;
    lines.push(String::new());
    lines.push("3. Core Requirement & Strength Level".to_string());
    lines.push(format!(
        "Breathing pattern & control: {}",
        core.breathing.map_or("", |b| b.label())
    ));
    lines.push(format!(
        "1st & 2nd sequence requirement: {}",
        core.sequence.map_or("", |s| s.label())
    ));
    lines.push(format!(
        "Supine Lumbo-Pelvic Strength Level: {}  (OK/Godkjent: {})",
        core.lumbo_pelvic_level.map_or("", |l| l.label()),
        if core.lumbo_pelvic_checked { "Ja" } else { "Nei" }
    ));
    lines.push(format!("Antall reps: {}", core.lumbo_pelvic_reps));
    lines.push(format!(
        "Notater: {}",
        core.lumbo_pelvic_notes.replace('\n', " ")
    ));
    lines.push(format!(
        "Seated Head-Neck Strength Level: {}",
        core.neck_level.map_or("", |l| l.label())
    ));
    lines.push(format!("Notater: {}", core.neck_notes.replace('\n', " ")));

    lines.push(String::new());
    lines.push("Standing \"Lunge Test\"".to_string());
    for segment in LungeSegment::ALL {
        let pair = core.lunge.pair(segment);
        lines.push(format!(
            "  {:<12} L: {:<16} R: {}",
            segment.label(),
            pair.left,
            pair.right
        ));
    }
    lines.push(format!("  Notater: {}", core.lunge.notes.replace('\n', " ")));

    lines.push(String::new());
    lines.push("Standing \"Stick Test\"".to_string());
    for segment in StickSegment::ALL {
        let pair = core.stick.pair(segment);
        lines.push(format!(
            "  {:<12} L: {:<16} R: {}",
            segment.label(),
            pair.left,
            pair.right
        ));
    }
    lines.push(format!("  Notater: {}", core.stick.notes.replace('\n', " ")));

    RenderedView {
        title: "Cor Optima — Mobilitet & Core".to_string(),
        lines,
    }
}

/// Artifact name carries the current date: `coroptima_mobility_<YYYY-MM-DD>.pdf`.
pub fn pdf_filename() -> String {
    format!(
        "coroptima_mobility_{}.pdf",
        chrono::Local::now().format("%Y-%m-%d")
    )
}

/// Renders the document snapshot to a PDF in `export_dir`. The caller
/// suspends until the rendering collaborator finishes; there is no retry,
/// cancellation or timeout.
pub async fn export_pdf(
    document: &AssessmentDocument,
    export_dir: &Path,
) -> Result<PathBuf, ExportError> {
    if !export_dir.exists() {
        std::fs::create_dir_all(export_dir)?;
    }

    let view = rendered_view(document);
    let path = export_dir.join(pdf_filename());
    let target = path.clone();

    tokio::task::spawn_blocking(move || {
        let renderer = select_renderer(&view);
        renderer.render(&view, &target)
    })
    .await
    .map_err(|e| ExportError::Pdf(e.to_string()))??;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_to_width_preserves_aspect_ratio() {
        let (w, h) = fit_to_width(380.0, 100.0, 190.0);
        assert!((w - 190.0).abs() < f32::EPSILON);
        assert!((h - 50.0).abs() < f32::EPSILON);

        // Narrow blocks are left at their natural size
        let (w, h) = fit_to_width(100.0, 40.0, 190.0);
        assert!((w - 100.0).abs() < f32::EPSILON);
        assert!((h - 40.0).abs() < f32::EPSILON);
    }

    #[test]
    fn flow_renderer_is_preferred_for_narrow_views() {
        let view = RenderedView {
            title: "t".to_string(),
            lines: vec!["short line".to_string(); 10],
        };
        assert!(FlowRenderer.supports(&view));
        assert_eq!(select_renderer(&view).name(), "flow");
    }

    #[test]
    fn snapshot_renderer_catches_wide_views() {
        let view = RenderedView {
            title: "t".to_string(),
            lines: vec!["x".repeat(400)],
        };
        assert!(!FlowRenderer.supports(&view));
        assert!(SnapshotRenderer.supports(&view));
        assert_eq!(select_renderer(&view).name(), "snapshot");
    }

    #[test]
    fn rendered_view_covers_table_and_core_section() {
        let view = rendered_view(&AssessmentDocument::default());
        let text = view.lines.join("\n");

        for test in MobilityTest::ALL {
            assert!(text.contains(test.label()));
        }
        assert!(text.contains("Core Requirement & Strength Level"));
        assert!(text.contains("Standing \"Lunge Test\""));
        assert!(text.contains("Standing \"Stick Test\""));
    }

    #[test]
    fn pdf_filename_carries_iso_date() {
        let name = pdf_filename();
        assert!(name.starts_with("coroptima_mobility_"));
        assert!(name.ends_with(".pdf"));
        // coroptima_mobility_ + YYYY-MM-DD + .pdf
        assert_eq!(name.len(), "coroptima_mobility_".len() + 10 + 4);
    }

    #[tokio::test]
    async fn export_writes_a_pdf_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = export_pdf(&AssessmentDocument::default(), dir.path()).await?;

        assert!(path.exists());
        let bytes = std::fs::read(&path)?;
        assert!(bytes.starts_with(b"%PDF"));
        Ok(())
    }
}
