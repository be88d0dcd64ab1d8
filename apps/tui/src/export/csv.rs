use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::MobilityTest;
use crate::export::ExportError;
use crate::store::AssessmentDocument;

/// Fixed name of the CSV artifact.
pub const CSV_FILENAME: &str = "coroptima_mobility.csv";

/// Header tokens contain no commas or quotes, so the header row is emitted
/// unquoted.
pub const CSV_HEADERS: [&str; 7] = [
    "Test",
    "Left",
    "Right",
    "Bilat",
    "ADL Normal",
    "Spec Sport",
    "Notater",
];

const SECTION_LABEL: &str = "Core Requirement & Strength Level";

/// Wraps a value in CSV quotes, doubling any internal quote characters.
fn quote_csv(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Renders the full document as a CSV string: header, one row per test in
/// canonical order, a blank line, then the core summary. Rows are joined
/// with `\n`, not CRLF.
pub fn render_csv(document: &AssessmentDocument) -> String {
    let mut lines = Vec::with_capacity(MobilityTest::ALL.len() + 7);
    lines.push(CSV_HEADERS.join(","));

    let empty = crate::store::TestRow::default();
    for test in MobilityTest::ALL {
        let row = document.rows.get(&test).unwrap_or(&empty);
        lines.push(
            [
                quote_csv(test.label()),
                row.left.clone(),
                row.right.clone(),
                row.bilat.clone(),
                row.adl_normal.clone(),
                row.spec_sport.clone(),
                quote_csv(&row.notater),
            ]
            .join(","),
        );
    }

    let core = &document.core;
    lines.push(String::new());
    lines.push(SECTION_LABEL.to_string());
    lines.push(format!(
        "Supine Lumbo-Pelvic Strength: {}",
        core.lumbo_pelvic_level.map_or("", |level| level.label())
    ));
    lines.push(format!(
        "Supine Lumbo-Pelvic Notater: {}",
        core.lumbo_pelvic_notes
    ));
    lines.push(format!(
        "Supine Lumbo-Pelvic Reps: {}",
        core.lumbo_pelvic_reps
    ));
    lines.push(format!(
        "Supine Lumbo-Pelvic OK: {}",
        if core.lumbo_pelvic_checked { "Ja" } else { "Nei" }
    ));

    lines.join("\n")
}

/// Writes the CSV artifact into `export_dir` under its fixed name.
pub fn export_csv(
    document: &AssessmentDocument,
    export_dir: &Path,
) -> Result<PathBuf, ExportError> {
    if !export_dir.exists() {
        fs::create_dir_all(export_dir)?;
    }

    let path = export_dir.join(CSV_FILENAME);
    fs::write(&path, render_csv(document))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LumboPelvicLevel, RowField};

    #[test]
    fn quote_csv_doubles_internal_quotes() {
        assert_eq!(quote_csv("plain"), "\"plain\"");
        assert_eq!(
            quote_csv("He said, \"ouch\""),
            "\"He said, \"\"ouch\"\"\""
        );
    }

    #[test]
    fn empty_document_still_emits_every_row() {
        let csv = render_csv(&AssessmentDocument::default());
        let lines: Vec<&str> = csv.split('\n').collect();

        // header + 17 rows + blank + section label + 4 summary lines
        assert_eq!(lines.len(), 1 + 17 + 1 + 1 + 4);
        assert_eq!(lines[0], CSV_HEADERS.join(","));
        assert_eq!(
            lines[1],
            "\"Supine Straight Leg Raise (SLR)\",,,,,,\"\""
        );
        assert_eq!(lines[18], "");
        assert_eq!(lines[19], "Core Requirement & Strength Level");
        assert_eq!(lines[20], "Supine Lumbo-Pelvic Strength: ");
        assert_eq!(lines[21], "Supine Lumbo-Pelvic Notater: ");
        assert_eq!(lines[22], "Supine Lumbo-Pelvic Reps: ");
        assert_eq!(lines[23], "Supine Lumbo-Pelvic OK: Nei");
    }

    #[test]
    fn rows_join_and_resplit_losslessly() {
        let doc = AssessmentDocument::default()
            .with_field(MobilityTest::SupineHipFlexion, RowField::Left, "95")
            .with_field(MobilityTest::SeatedNeckRotation, RowField::SpecSport, "golf");

        let csv = render_csv(&doc);
        let count = csv.split('\n').count();
        assert_eq!(csv.split('\n').collect::<Vec<_>>().join("\n"), csv);
        assert_eq!(count, 24);
        assert!(!csv.contains('\r'));
    }

    #[test]
    fn notater_with_quote_and_comma_is_escaped() {
        let doc = AssessmentDocument::default().with_field(
            MobilityTest::SupineStraightLegRaise,
            RowField::Notater,
            "He said, \"ouch\"",
        );

        let csv = render_csv(&doc);
        assert!(csv.contains("\"He said, \"\"ouch\"\"\""));
    }

    #[test]
    fn checked_flag_renders_as_ja() {
        let doc = AssessmentDocument::default().with_core(|core| {
            core.lumbo_pelvic_checked = true;
            core.lumbo_pelvic_level = Some(LumboPelvicLevel::L51To75);
            core.lumbo_pelvic_reps = "12".to_string();
        });

        let csv = render_csv(&doc);
        assert!(csv.contains("Supine Lumbo-Pelvic OK: Ja"));
        assert!(csv.contains("Supine Lumbo-Pelvic Strength: 51–75°"));
        assert!(csv.contains("Supine Lumbo-Pelvic Reps: 12"));
    }

    #[test]
    fn export_writes_the_fixed_filename() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let target = dir.path().join("exports");

        let path = export_csv(&AssessmentDocument::default(), &target)?;
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(CSV_FILENAME));
        assert!(path.exists());
        Ok(())
    }
}
