use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{
    sanitize_degrees, Breathing, LumboPelvicLevel, LungeSegment, MobilityTest, NeckLevel,
    RowField, SequenceQuality, StickSegment,
};

/// One row of the mobility table. Every field defaults to the empty string;
/// the row only exists in the document once something has been typed into it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRow {
    #[serde(rename = "Left", default)]
    pub left: String,
    #[serde(rename = "Right", default)]
    pub right: String,
    #[serde(rename = "Bilat", default)]
    pub bilat: String,
    #[serde(rename = "ADL Normal", default)]
    pub adl_normal: String,
    #[serde(rename = "Spec Sport", default)]
    pub spec_sport: String,
    #[serde(rename = "Notater", default)]
    pub notater: String,
}

impl TestRow {
    pub fn field(&self, field: RowField) -> &str {
        match field {
            RowField::Left => &self.left,
            RowField::Right => &self.right,
            RowField::Bilat => &self.bilat,
            RowField::AdlNormal => &self.adl_normal,
            RowField::SpecSport => &self.spec_sport,
            RowField::Notater => &self.notater,
        }
    }

    pub fn field_mut(&mut self, field: RowField) -> &mut String {
        match field {
            RowField::Left => &mut self.left,
            RowField::Right => &mut self.right,
            RowField::Bilat => &mut self.bilat,
            RowField::AdlNormal => &mut self.adl_normal,
            RowField::SpecSport => &mut self.spec_sport,
            RowField::Notater => &mut self.notater,
        }
    }

    pub fn is_empty(&self) -> bool {
        RowField::ALL.iter().all(|f| self.field(*f).is_empty())
    }
}

/// A left/right pair for one body segment of the lunge or stick test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidePair {
    #[serde(rename = "Left", default)]
    pub left: String,
    #[serde(rename = "Right", default)]
    pub right: String,
}

impl SidePair {
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LungeRecord {
    #[serde(rename = "Foot", default)]
    pub foot: SidePair,
    #[serde(rename = "Knee", default)]
    pub knee: SidePair,
    #[serde(rename = "Hip", default)]
    pub hip: SidePair,
    #[serde(rename = "Upper body", default)]
    pub upper_body: SidePair,
    #[serde(rename = "Posture", default)]
    pub posture: SidePair,
    #[serde(default)]
    pub notes: String,
}

impl LungeRecord {
    pub fn pair(&self, segment: LungeSegment) -> &SidePair {
        match segment {
            LungeSegment::Foot => &self.foot,
            LungeSegment::Knee => &self.knee,
            LungeSegment::Hip => &self.hip,
            LungeSegment::UpperBody => &self.upper_body,
            LungeSegment::Posture => &self.posture,
        }
    }

    pub fn pair_mut(&mut self, segment: LungeSegment) -> &mut SidePair {
        match segment {
            LungeSegment::Foot => &mut self.foot,
            LungeSegment::Knee => &mut self.knee,
            LungeSegment::Hip => &mut self.hip,
            LungeSegment::UpperBody => &mut self.upper_body,
            LungeSegment::Posture => &mut self.posture,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickRecord {
    #[serde(rename = "Rotation", default)]
    pub rotation: SidePair,
    #[serde(rename = "Frontal", default)]
    pub frontal: SidePair,
    #[serde(rename = "Sagittal", default)]
    pub sagittal: SidePair,
    #[serde(rename = "Shoulders", default)]
    pub shoulders: SidePair,
    #[serde(rename = "Pelvic", default)]
    pub pelvic: SidePair,
    #[serde(default)]
    pub notes: String,
}

impl StickRecord {
    pub fn pair(&self, segment: StickSegment) -> &SidePair {
        match segment {
            StickSegment::Rotation => &self.rotation,
            StickSegment::Frontal => &self.frontal,
            StickSegment::Sagittal => &self.sagittal,
            StickSegment::Shoulders => &self.shoulders,
            StickSegment::Pelvic => &self.pelvic,
        }
    }

    pub fn pair_mut(&mut self, segment: StickSegment) -> &mut SidePair {
        match segment {
            StickSegment::Rotation => &mut self.rotation,
            StickSegment::Frontal => &mut self.frontal,
            StickSegment::Sagittal => &mut self.sagittal,
            StickSegment::Shoulders => &mut self.shoulders,
            StickSegment::Pelvic => &mut self.pelvic,
        }
    }
}

/// The "Core Requirement & Strength Level" section of the form.
/// Defaults are materialized here once, not re-derived at each read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breathing: Option<Breathing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<SequenceQuality>,
    #[serde(rename = "lumboPelvicLevel", default, skip_serializing_if = "Option::is_none")]
    pub lumbo_pelvic_level: Option<LumboPelvicLevel>,
    #[serde(rename = "lumboPelvicReps", default)]
    pub lumbo_pelvic_reps: String,
    #[serde(rename = "lumboPelvicNotes", default)]
    pub lumbo_pelvic_notes: String,
    /// The "OK / Godkjent" checkbox. Does not gate export.
    #[serde(rename = "lumboPelvicChecked", default)]
    pub lumbo_pelvic_checked: bool,
    #[serde(rename = "neckLevel", default, skip_serializing_if = "Option::is_none")]
    pub neck_level: Option<NeckLevel>,
    #[serde(rename = "neckNotes", default)]
    pub neck_notes: String,
    #[serde(default)]
    pub lunge: LungeRecord,
    #[serde(default)]
    pub stick: StickRecord,
}

/// The complete persisted assessment: one row per mobility test that has
/// data, plus the fixed-shape core record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentDocument {
    #[serde(default)]
    pub rows: BTreeMap<MobilityTest, TestRow>,
    #[serde(default)]
    pub core: CoreRecord,
}

impl AssessmentDocument {
    /// Reads one cell, defaulting to the empty string when the row has never
    /// been touched.
    pub fn field(&self, test: MobilityTest, field: RowField) -> &str {
        self.rows.get(&test).map_or("", |row| row.field(field))
    }

    /// Returns a new document with exactly the one leaf field replaced.
    /// Degree fields are sanitized on assignment; all sibling fields and
    /// other rows are preserved unchanged.
    pub fn with_field(mut self, test: MobilityTest, field: RowField, value: &str) -> Self {
        let value = if field.is_degrees() {
            sanitize_degrees(value)
        } else {
            value.to_string()
        };
        *self.rows.entry(test).or_default().field_mut(field) = value;
        self
    }

    /// Returns a new document with the core record merged through `update`.
    pub fn with_core(mut self, update: impl FnOnce(&mut CoreRecord)) -> Self {
        update(&mut self.core);
        self
    }

    /// Number of tests with at least one populated field.
    pub fn rows_with_data(&self) -> usize {
        self.rows.values().filter(|row| !row.is_empty()).count()
    }

    /// Number of populated degree cells across all rows.
    pub fn degrees_recorded(&self) -> usize {
        self.rows
            .values()
            .map(|row| {
                [&row.left, &row.right, &row.bilat]
                    .into_iter()
                    .filter(|v| !v.is_empty())
                    .count()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_field_replaces_exactly_one_leaf() {
        let doc = AssessmentDocument::default()
            .with_field(MobilityTest::SupineHipFlexion, RowField::Left, "95")
            .with_field(MobilityTest::SupineHipFlexion, RowField::Notater, "stiff")
            .with_field(MobilityTest::SeatedNeckRotation, RowField::Right, "60");

        let updated = doc
            .clone()
            .with_field(MobilityTest::SupineHipFlexion, RowField::Left, "100");

        assert_eq!(
            updated.field(MobilityTest::SupineHipFlexion, RowField::Left),
            "100"
        );
        // Siblings untouched
        assert_eq!(
            updated.field(MobilityTest::SupineHipFlexion, RowField::Notater),
            "stiff"
        );
        // Other rows untouched
        assert_eq!(
            updated.field(MobilityTest::SeatedNeckRotation, RowField::Right),
            "60"
        );
        // The original document was not mutated in place
        assert_eq!(doc.field(MobilityTest::SupineHipFlexion, RowField::Left), "95");
    }

    #[test]
    fn degree_fields_are_sanitized_on_assignment() {
        let doc = AssessmentDocument::default().with_field(
            MobilityTest::SupineStraightLegRaise,
            RowField::Bilat,
            "90° ca.",
        );
        assert_eq!(
            doc.field(MobilityTest::SupineStraightLegRaise, RowField::Bilat),
            "90."
        );

        // Free-text fields pass through untouched
        let doc = doc.with_field(
            MobilityTest::SupineStraightLegRaise,
            RowField::AdlNormal,
            "Normal °!",
        );
        assert_eq!(
            doc.field(MobilityTest::SupineStraightLegRaise, RowField::AdlNormal),
            "Normal °!"
        );
    }

    #[test]
    fn missing_rows_read_as_empty() {
        let doc = AssessmentDocument::default();
        for test in MobilityTest::ALL {
            for field in RowField::ALL {
                assert_eq!(doc.field(test, field), "");
            }
        }
        assert_eq!(doc.rows_with_data(), 0);
    }

    #[test]
    fn with_core_merges_into_the_record() {
        let doc = AssessmentDocument::default()
            .with_core(|core| core.breathing = Some(Breathing::Belly))
            .with_core(|core| {
                core.lumbo_pelvic_checked = true;
                core.lumbo_pelvic_reps = "12".to_string();
            });

        assert_eq!(doc.core.breathing, Some(Breathing::Belly));
        assert!(doc.core.lumbo_pelvic_checked);
        assert_eq!(doc.core.lumbo_pelvic_reps, "12");
        // Fields not named by either update keep their defaults
        assert_eq!(doc.core.sequence, None);
        assert!(doc.core.neck_notes.is_empty());
    }

    #[test]
    fn json_round_trip_preserves_every_populated_field() -> Result<(), Box<dyn std::error::Error>> {
        let doc = AssessmentDocument::default()
            .with_field(MobilityTest::SupineHipFlexion, RowField::Left, "95")
            .with_field(
                MobilityTest::OverHeadSquatCombinedMobility,
                RowField::Notater,
                "He said, \"ouch\"\nand stopped",
            )
            .with_core(|core| {
                core.breathing = Some(Breathing::CanAlternate);
                core.sequence = Some(SequenceQuality::RDominant);
                core.lumbo_pelvic_level = Some(LumboPelvicLevel::L26To50);
                core.lumbo_pelvic_reps = "8".to_string();
                core.lumbo_pelvic_notes = "shaky after 6".to_string();
                core.lumbo_pelvic_checked = true;
                core.neck_level = Some(NeckLevel::Three);
                core.neck_notes = "left weaker".to_string();
                core.lunge.pair_mut(LungeSegment::Knee).left = "valgus".to_string();
                core.lunge.notes = "redo barefoot".to_string();
                core.stick.pair_mut(StickSegment::Pelvic).right = "drops".to_string();
            });

        let json = serde_json::to_string(&doc)?;
        let restored: AssessmentDocument = serde_json::from_str(&json)?;
        assert_eq!(doc, restored);
        Ok(())
    }

    #[test]
    fn degrees_recorded_counts_populated_cells() {
        let doc = AssessmentDocument::default()
            .with_field(MobilityTest::SupineHipFlexion, RowField::Left, "95")
            .with_field(MobilityTest::SupineHipFlexion, RowField::Right, "90")
            .with_field(MobilityTest::SeatedNeckRotation, RowField::Bilat, "70")
            .with_field(MobilityTest::SeatedNeckRotation, RowField::Notater, "n/a");

        assert_eq!(doc.degrees_recorded(), 3);
        assert_eq!(doc.rows_with_data(), 2);
    }
}
