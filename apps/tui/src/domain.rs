use serde::{Deserialize, Serialize};

/// The 17 canonical mobility tests, in the order they appear on the form
/// and in every export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MobilityTest {
    #[serde(rename = "Supine Straight Leg Raise (SLR)")]
    SupineStraightLegRaise,
    #[serde(rename = "Supine Hip Flexion (Hip to chest)")]
    SupineHipFlexion,
    #[serde(rename = "Supine Medial Hip Rotation @ 90° hip flex")]
    SupineMedialHipRotation,
    #[serde(rename = "Supine Lateral Hip Rotation @ 90° hip flex")]
    SupineLateralHipRotation,
    #[serde(rename = "Supine Shoulder Position @ angulus acromiale")]
    SupineShoulderPosition,
    #[serde(rename = "Supine Shoulder Lateral Rotation @ 60° abd")]
    SupineShoulderLateralRotation,
    #[serde(rename = "Squat position Ankle Angular Mobility")]
    SquatAnkleAngularMobility,
    #[serde(rename = "Standing straight arm raise")]
    StandingStraightArmRaise,
    #[serde(rename = "Standing Upper body Side Flexion")]
    StandingUpperBodySideFlexion,
    #[serde(rename = "Standing Head-Neck Side Flexion")]
    StandingHeadNeckSideFlexion,
    #[serde(rename = "Standing Medial Hip Rotation @ 0° hip flex")]
    StandingMedialHipRotation,
    #[serde(rename = "Standing Lateral Hip Rotation @ 0° hip flex")]
    StandingLateralHipRotation,
    #[serde(rename = "Short Hip Flexor Mobility (Thomas)")]
    ShortHipFlexorMobility,
    #[serde(rename = "Long Hip Flexor Mobility (Thomas)")]
    LongHipFlexorMobility,
    #[serde(rename = "Seated Upper Body Rotation")]
    SeatedUpperBodyRotation,
    #[serde(rename = "Seated Neck Rotation")]
    SeatedNeckRotation,
    #[serde(rename = "Over Head Squat Combined Mobility")]
    OverHeadSquatCombinedMobility,
}

impl MobilityTest {
    pub const ALL: [Self; 17] = [
        Self::SupineStraightLegRaise,
        Self::SupineHipFlexion,
        Self::SupineMedialHipRotation,
        Self::SupineLateralHipRotation,
        Self::SupineShoulderPosition,
        Self::SupineShoulderLateralRotation,
        Self::SquatAnkleAngularMobility,
        Self::StandingStraightArmRaise,
        Self::StandingUpperBodySideFlexion,
        Self::StandingHeadNeckSideFlexion,
        Self::StandingMedialHipRotation,
        Self::StandingLateralHipRotation,
        Self::ShortHipFlexorMobility,
        Self::LongHipFlexorMobility,
        Self::SeatedUpperBodyRotation,
        Self::SeatedNeckRotation,
        Self::OverHeadSquatCombinedMobility,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::SupineStraightLegRaise => "Supine Straight Leg Raise (SLR)",
            Self::SupineHipFlexion => "Supine Hip Flexion (Hip to chest)",
            Self::SupineMedialHipRotation => "Supine Medial Hip Rotation @ 90° hip flex",
            Self::SupineLateralHipRotation => "Supine Lateral Hip Rotation @ 90° hip flex",
            Self::SupineShoulderPosition => "Supine Shoulder Position @ angulus acromiale",
            Self::SupineShoulderLateralRotation => "Supine Shoulder Lateral Rotation @ 60° abd",
            Self::SquatAnkleAngularMobility => "Squat position Ankle Angular Mobility",
            Self::StandingStraightArmRaise => "Standing straight arm raise",
            Self::StandingUpperBodySideFlexion => "Standing Upper body Side Flexion",
            Self::StandingHeadNeckSideFlexion => "Standing Head-Neck Side Flexion",
            Self::StandingMedialHipRotation => "Standing Medial Hip Rotation @ 0° hip flex",
            Self::StandingLateralHipRotation => "Standing Lateral Hip Rotation @ 0° hip flex",
            Self::ShortHipFlexorMobility => "Short Hip Flexor Mobility (Thomas)",
            Self::LongHipFlexorMobility => "Long Hip Flexor Mobility (Thomas)",
            Self::SeatedUpperBodyRotation => "Seated Upper Body Rotation",
            Self::SeatedNeckRotation => "Seated Neck Rotation",
            Self::OverHeadSquatCombinedMobility => "Over Head Squat Combined Mobility",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn parse(value: &str) -> Option<Self> {
        let needle = value.trim();
        Self::ALL.iter().copied().find(|t| t.label() == needle)
    }
}

/// The six editable columns of a test row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Left,
    Right,
    Bilat,
    AdlNormal,
    SpecSport,
    Notater,
}

impl RowField {
    pub const ALL: [Self; 6] = [
        Self::Left,
        Self::Right,
        Self::Bilat,
        Self::AdlNormal,
        Self::SpecSport,
        Self::Notater,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Bilat => "Bilat",
            Self::AdlNormal => "ADL Normal",
            Self::SpecSport => "Spec Sport",
            Self::Notater => "Notater",
        }
    }

    /// Degree fields take sanitized numeric input only.
    pub const fn is_degrees(self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::Bilat)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Breathing {
    Belly,
    Chest,
    Double,
    #[serde(rename = "Can alternate")]
    CanAlternate,
}

impl Breathing {
    pub const ALL: [Self; 4] = [Self::Belly, Self::Chest, Self::Double, Self::CanAlternate];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Belly => "Belly",
            Self::Chest => "Chest",
            Self::Double => "Double",
            Self::CanAlternate => "Can alternate",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceQuality {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "R-dominant")]
    RDominant,
    #[serde(rename = "Wrong order")]
    WrongOrder,
    #[serde(rename = "Can’t at all")]
    CannotAtAll,
}

impl SequenceQuality {
    pub const ALL: [Self; 4] = [
        Self::Ok,
        Self::RDominant,
        Self::WrongOrder,
        Self::CannotAtAll,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::RDominant => "R-dominant",
            Self::WrongOrder => "Wrong order",
            Self::CannotAtAll => "Can’t at all",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Ordinal range selector for the supine lumbo-pelvic strength test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LumboPelvicLevel {
    #[serde(rename = "0–10°")]
    L0To10,
    #[serde(rename = "11–25°")]
    L11To25,
    #[serde(rename = "26–50°")]
    L26To50,
    #[serde(rename = "51–75°")]
    L51To75,
    #[serde(rename = "76–90°")]
    L76To90,
}

impl LumboPelvicLevel {
    pub const ALL: [Self; 5] = [
        Self::L0To10,
        Self::L11To25,
        Self::L26To50,
        Self::L51To75,
        Self::L76To90,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::L0To10 => "0–10°",
            Self::L11To25 => "11–25°",
            Self::L26To50 => "26–50°",
            Self::L51To75 => "51–75°",
            Self::L76To90 => "76–90°",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeckLevel {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
}

impl NeckLevel {
    pub const ALL: [Self; 5] = [Self::One, Self::Two, Self::Three, Self::Four, Self::Five];

    pub const fn label(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Body segments evaluated left/right in the standing lunge test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LungeSegment {
    Foot,
    Knee,
    Hip,
    UpperBody,
    Posture,
}

impl LungeSegment {
    pub const ALL: [Self; 5] = [
        Self::Foot,
        Self::Knee,
        Self::Hip,
        Self::UpperBody,
        Self::Posture,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Foot => "Foot",
            Self::Knee => "Knee",
            Self::Hip => "Hip",
            Self::UpperBody => "Upper body",
            Self::Posture => "Posture",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Body segments evaluated left/right in the standing stick test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickSegment {
    Rotation,
    Frontal,
    Sagittal,
    Shoulders,
    Pelvic,
}

impl StickSegment {
    pub const ALL: [Self; 5] = [
        Self::Rotation,
        Self::Frontal,
        Self::Sagittal,
        Self::Shoulders,
        Self::Pelvic,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rotation => "Rotation",
            Self::Frontal => "Frontal",
            Self::Sagittal => "Sagittal",
            Self::Shoulders => "Shoulders",
            Self::Pelvic => "Pelvic",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Filters raw degree input down to digits, `.`, `,` and `-`.
/// Runs on every keystroke into a Left/Right/Bilat field and again when the
/// value is assigned into the document.
pub fn sanitize_degrees(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_invalid_characters() {
        assert_eq!(sanitize_degrees("12a3°-.,"), "123-.,");
        assert_eq!(sanitize_degrees("  45° "), "45");
        assert_eq!(sanitize_degrees(""), "");
    }

    #[test]
    fn sanitize_output_alphabet() {
        let out = sanitize_degrees("abc123°!?.,--xyz");
        assert!(out
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-')));
    }

    #[test]
    fn sanitize_is_idempotent() {
        let once = sanitize_degrees("1a2b3°-.,");
        let twice = sanitize_degrees(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_labels_round_trip_through_parse() {
        for test in MobilityTest::ALL {
            assert_eq!(MobilityTest::parse(test.label()), Some(test));
        }
        assert_eq!(MobilityTest::parse("Unknown test"), None);
    }

    #[test]
    fn canonical_order_is_stable() {
        assert_eq!(MobilityTest::ALL.len(), 17);
        assert_eq!(
            MobilityTest::from_index(0),
            Some(MobilityTest::SupineStraightLegRaise)
        );
        assert_eq!(
            MobilityTest::from_index(16),
            Some(MobilityTest::OverHeadSquatCombinedMobility)
        );
        assert_eq!(MobilityTest::from_index(17), None);
    }
}
