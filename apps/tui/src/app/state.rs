use crate::app::actions::AppActions;
use crate::domain::{MobilityTest, RowField};
use crate::store::AssessmentDocument;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::time::Instant;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Overview,
    EditRow,
    Core,
    Lunge,
    Stick,
    Actions,
    EmailPrompt,
}

/// Which export the event loop should run next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Csv,
    Pdf,
}

impl ExportKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Pdf => "PDF",
        }
    }
}

/// The four action controls of the form header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Reset,
    EmailDraft,
    ExportCsv,
    ExportPdf,
}

impl FormAction {
    pub const ALL: [Self; 4] = [
        Self::Reset,
        Self::EmailDraft,
        Self::ExportCsv,
        Self::ExportPdf,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Reset => "Nullstill",
            Self::EmailDraft => "E-post-kladd",
            Self::ExportCsv => "Last ned CSV",
            Self::ExportPdf => "Last ned PDF",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Fields of the core section, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreField {
    Breathing,
    Sequence,
    LumboLevel,
    LumboChecked,
    LumboReps,
    LumboNotes,
    NeckLevel,
    NeckNotes,
}

impl CoreField {
    pub const ALL: [Self; 8] = [
        Self::Breathing,
        Self::Sequence,
        Self::LumboLevel,
        Self::LumboChecked,
        Self::LumboReps,
        Self::LumboNotes,
        Self::NeckLevel,
        Self::NeckNotes,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Breathing => "Breathing pattern & control",
            Self::Sequence => "1st & 2nd sequence requirement",
            Self::LumboLevel => "Supine Lumbo-Pelvic Strength Level",
            Self::LumboChecked => "OK / Godkjent",
            Self::LumboReps => "Antall reps",
            Self::LumboNotes => "Notater (lumbo-pelvic)",
            Self::NeckLevel => "Seated Head-Neck Strength Level",
            Self::NeckNotes => "Notater (head-neck)",
        }
    }

    /// Radio-style fields cycle with ←/→ instead of taking text.
    pub const fn is_choice(self) -> bool {
        matches!(
            self,
            Self::Breathing | Self::Sequence | Self::LumboLevel | Self::NeckLevel
        )
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Holds the cursor of the row editor. Values are not buffered here: every
/// keystroke mutates the document through the controller so persistence
/// fires per edit.
#[derive(Debug, Clone)]
pub struct EditRowState {
    pub test: MobilityTest,
    pub field_index: usize,
    pub editing: bool,
}

impl EditRowState {
    pub const fn new(test: MobilityTest) -> Self {
        Self {
            test,
            field_index: 0,
            editing: false,
        }
    }

    pub fn field(&self) -> RowField {
        RowField::from_index(self.field_index).unwrap_or(RowField::Left)
    }
}

/// Cursor over a bilateral sub-form: five segments with a left and a right
/// cell, plus one trailing notes field.
#[derive(Debug, Clone, Default)]
pub struct BilateralCursor {
    pub index: usize,
    pub editing: bool,
}

impl BilateralCursor {
    /// 5 segments x 2 sides + notes
    pub const CELLS: usize = 11;

    pub const fn is_notes(&self) -> bool {
        self.index == Self::CELLS - 1
    }

    pub const fn segment_index(&self) -> usize {
        self.index / 2
    }

    pub const fn is_right(&self) -> bool {
        self.index % 2 == 1
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub document: AssessmentDocument,
    pub actions: AppActions,
    pub status_message: String,
    pub show_help: bool,
    pub animation_counter: f64,
    pub last_frame: Instant,

    // Overview screen
    pub selected_test_index: usize,
    pub filter_input: String,
    pub filter_editing: bool,

    // Row editor
    pub edit_row: Option<EditRowState>,

    // Core section
    pub core_field_index: usize,
    pub core_editing: bool,

    // Lunge / stick sub-forms
    pub lunge_cursor: BilateralCursor,
    pub stick_cursor: BilateralCursor,

    // Actions menu and e-mail prompt
    pub action_index: usize,
    pub email_input: String,

    // Export requested by input handlers, consumed by the event loop
    pub pending_export: Option<ExportKind>,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            screen: AppScreen::Overview,
            document: AssessmentDocument::default(),
            actions: AppActions::new(),
            status_message: String::new(),
            show_help: false,
            animation_counter: 0.0,
            last_frame: Instant::now(),
            selected_test_index: 0,
            filter_input: String::new(),
            filter_editing: false,
            edit_row: None,
            core_field_index: 0,
            core_editing: false,
            lunge_cursor: BilateralCursor::default(),
            stick_cursor: BilateralCursor::default(),
            action_index: 0,
            email_input: String::new(),
            pending_export: None,
        }
    }

    /// Resolves configuration and rehydrates the persisted document.
    pub fn initialize(&mut self) -> color_eyre::Result<()> {
        self.actions.initialize()?;
        self.document = self.actions.load();
        Ok(())
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Update animation counter (cycles between 0 and 2*PI)
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }
    }

    /// On-change hook: every document mutation goes through here so the
    /// blob is persisted after each edit.
    fn on_change(&mut self) {
        self.actions.persist(&self.document);
    }

    /// Replaces one leaf field of one row and persists.
    pub fn apply_field(&mut self, test: MobilityTest, field: RowField, value: &str) {
        let document = std::mem::take(&mut self.document);
        self.document = document.with_field(test, field, value);
        self.on_change();
    }

    /// Merges an update into the core record and persists.
    pub fn apply_core(&mut self, update: impl FnOnce(&mut crate::store::CoreRecord)) {
        let document = std::mem::take(&mut self.document);
        self.document = document.with_core(update);
        self.on_change();
    }

    /// Explicit user-triggered clear: removes the blob and resets the
    /// in-memory document to first-run state.
    pub fn reset_document(&mut self) {
        self.actions.clear();
        self.document = AssessmentDocument::default();
        self.selected_test_index = 0;
        self.filter_input.clear();
        self.filter_editing = false;
        self.status_message = "Skjemaet er nullstilt".to_string();
    }

    /// The tests visible in the overview, fuzzy-filtered when a filter is
    /// active, otherwise all 17 in canonical order.
    pub fn visible_tests(&self) -> Vec<MobilityTest> {
        if self.filter_input.is_empty() {
            return MobilityTest::ALL.to_vec();
        }

        let matcher = SkimMatcherV2::default();
        MobilityTest::ALL
            .iter()
            .copied()
            .filter(|test| {
                matcher
                    .fuzzy_match(test.label(), &self.filter_input)
                    .is_some()
            })
            .collect()
    }

    /// The test currently highlighted in the overview list.
    pub fn selected_test(&self) -> Option<MobilityTest> {
        self.visible_tests().get(self.selected_test_index).copied()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_field_mutates_and_keeps_siblings() {
        let mut app = App::new();
        app.apply_field(MobilityTest::SupineHipFlexion, RowField::Left, "95");
        app.apply_field(MobilityTest::SupineHipFlexion, RowField::Notater, "tight");

        assert_eq!(
            app.document.field(MobilityTest::SupineHipFlexion, RowField::Left),
            "95"
        );
        assert_eq!(
            app.document
                .field(MobilityTest::SupineHipFlexion, RowField::Notater),
            "tight"
        );
    }

    #[test]
    fn fuzzy_filter_narrows_the_visible_tests() {
        let mut app = App::new();
        assert_eq!(app.visible_tests().len(), 17);

        app.filter_input = "thomas".to_string();
        let visible = app.visible_tests();
        assert_eq!(visible.len(), 2);
        assert!(visible.contains(&MobilityTest::ShortHipFlexorMobility));
        assert!(visible.contains(&MobilityTest::LongHipFlexorMobility));

        app.filter_input = "zzzzzz".to_string();
        assert!(app.visible_tests().is_empty());
        assert_eq!(app.selected_test(), None);
    }

    #[test]
    fn reset_returns_the_document_to_first_run_state() {
        let mut app = App::new();
        app.apply_field(MobilityTest::SeatedNeckRotation, RowField::Bilat, "70");
        app.reset_document();
        assert_eq!(app.document, AssessmentDocument::default());
    }

    #[test]
    fn bilateral_cursor_maps_cells_to_segments() {
        let mut cursor = BilateralCursor::default();
        assert_eq!(cursor.segment_index(), 0);
        assert!(!cursor.is_right());
        assert!(!cursor.is_notes());

        cursor.index = 7;
        assert_eq!(cursor.segment_index(), 3);
        assert!(cursor.is_right());

        cursor.index = BilateralCursor::CELLS - 1;
        assert!(cursor.is_notes());
    }
}
