use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::convert::TryFrom;
use std::fmt;
use std::io::Stdout;
use std::path::PathBuf;

use crate::app::state::ExportKind;
use crate::app::{handle_input, App};
use crate::cli::CliArgs;
use crate::domain::{MobilityTest, RowField};
use crate::ui;

// States of a single export run
#[derive(Clone, Copy, PartialEq, Debug)]
enum ExportState {
    Idle,
    Exporting,
    Success,
    Error,
}

impl fmt::Display for ExportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Exporting => write!(f, "Exporting"),
            Self::Success => write!(f, "Success"),
            Self::Error => write!(f, "Error"),
        }
    }
}

// Events that drive an export run
#[derive(Clone, Debug)]
enum ExportEvent {
    Start(ExportKind),
    Success(PathBuf),
    Error(String),
    Reset,
}

impl fmt::Display for ExportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start(kind) => write!(f, "Start({})", kind.label()),
            Self::Success(path) => write!(f, "Success({path})", path = path.display()),
            Self::Error(msg) => write!(f, "Error({msg})"),
            Self::Reset => write!(f, "Reset"),
        }
    }
}

#[derive(Debug)]
struct StateTransitionError {
    from: ExportState,
    event: ExportEvent,
}

impl fmt::Display for StateTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid transition from {} with event {}",
            self.from, self.event
        )
    }
}

impl std::error::Error for StateTransitionError {}

/// Tracks one export run so the loop cannot kick off a second export while
/// a PDF render is still on the blocking pool.
struct ExportMachine {
    state: ExportState,
}

impl ExportMachine {
    const fn new(initial_state: ExportState) -> Self {
        Self {
            state: initial_state,
        }
    }

    const fn state(&self) -> ExportState {
        self.state
    }

    fn process_event(
        &mut self,
        event: &ExportEvent,
        app: &mut App,
    ) -> std::result::Result<(), StateTransitionError> {
        let next_state = NextState::try_from((self.state, event, app))?;
        self.state = next_state.0;
        Ok(())
    }
}

struct NextState(ExportState);

impl NextState {
    const fn new(state: ExportState) -> Self {
        Self(state)
    }
}

impl ExportState {
    const fn next_state(self) -> NextState {
        NextState::new(self)
    }
}

impl TryFrom<(ExportState, &ExportEvent, &mut App)> for NextState {
    type Error = StateTransitionError;

    fn try_from(
        value: (ExportState, &ExportEvent, &mut App),
    ) -> std::result::Result<Self, Self::Error> {
        let (current_state, event, app) = value;

        match (current_state, event) {
            (ExportState::Idle, ExportEvent::Start(kind)) => {
                app.status_message = format!("Eksporterer {}...", kind.label());
                Ok(ExportState::Exporting.next_state())
            }
            (ExportState::Exporting, ExportEvent::Success(path)) => {
                let filename = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("unknown");
                app.status_message = format!("Fil lagret: {filename}");
                Ok(ExportState::Success.next_state())
            }
            (ExportState::Exporting, ExportEvent::Error(error)) => {
                app.status_message = format!("Eksport feilet: {error}");
                Ok(ExportState::Error.next_state())
            }
            (ExportState::Success | ExportState::Error, ExportEvent::Reset) => {
                Ok(ExportState::Idle.next_state())
            }
            _ => Err(StateTransitionError {
                from: current_state,
                event: event.clone(),
            }),
        }
    }
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, args: &CliArgs) -> Result<()> {
    app.initialize()?;

    if args.csv {
        let path = app.actions.export_csv(&app.document)?;
        println!("{}", path.display());
    }

    if args.pdf {
        let path = app.actions.export_pdf(&app.document).await?;
        println!("{}", path.display());
    }

    if args.csv || args.pdf {
        return Ok(());
    }

    if args.json {
        render_headless_json(app)?;
    } else {
        render_headless_summary(app);
    }

    Ok(())
}

fn render_headless_summary(app: &App) {
    let summary = build_headless_summary(app);

    println!("\nCor Optima Mobility Assessment");
    println!("===============================");
    if !summary.practitioner.is_empty() {
        println!("Practitioner: {}", summary.practitioner);
    }
    println!("Store: {}", summary.store);
    println!("Tests with data: {}/17", summary.tests_with_data);
    println!("Degree cells recorded: {}", summary.degrees_recorded);

    if !summary.rows.is_empty() {
        println!("\nRecorded tests:");
        for row in &summary.rows {
            println!(
                "- {} | L: {} | R: {} | Bilat: {}",
                row.test,
                or_dash(&row.left),
                or_dash(&row.right),
                or_dash(&row.bilat)
            );
        }
    }

    println!("\nCore Requirement & Strength Level:");
    println!("- Breathing: {}", or_dash(&summary.breathing));
    println!("- Sequence: {}", or_dash(&summary.sequence));
    println!(
        "- Supine Lumbo-Pelvic: {} ({} reps, OK: {})",
        or_dash(&summary.lumbo_pelvic_level),
        or_dash(&summary.lumbo_pelvic_reps),
        if summary.lumbo_pelvic_ok { "Ja" } else { "Nei" }
    );
    println!("- Seated Head-Neck: {}", or_dash(&summary.neck_level));
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn render_headless_json(app: &App) -> Result<()> {
    let summary = build_headless_summary(app);
    let json = serde_json::to_string_pretty(&summary)?;
    println!("{json}");
    Ok(())
}

fn build_headless_summary(app: &App) -> HeadlessSummary {
    let rows = MobilityTest::ALL
        .iter()
        .filter_map(|test| {
            let row = app.document.rows.get(test)?;
            if row.is_empty() {
                return None;
            }
            Some(HeadlessRow {
                test: test.label().to_string(),
                left: row.field(RowField::Left).to_string(),
                right: row.field(RowField::Right).to_string(),
                bilat: row.field(RowField::Bilat).to_string(),
            })
        })
        .collect();

    let core = &app.document.core;

    HeadlessSummary {
        practitioner: app.actions.practitioner.clone(),
        store: app
            .actions
            .store
            .as_ref()
            .map_or_else(String::new, |store| store.path().display().to_string()),
        tests_with_data: app.document.rows_with_data(),
        degrees_recorded: app.document.degrees_recorded(),
        rows,
        breathing: core.breathing.map_or("", |b| b.label()).to_string(),
        sequence: core.sequence.map_or("", |s| s.label()).to_string(),
        lumbo_pelvic_level: core
            .lumbo_pelvic_level
            .map_or("", |l| l.label())
            .to_string(),
        lumbo_pelvic_reps: core.lumbo_pelvic_reps.clone(),
        lumbo_pelvic_ok: core.lumbo_pelvic_checked,
        neck_level: core.neck_level.map_or("", |l| l.label()).to_string(),
    }
}

#[derive(serde::Serialize)]
struct HeadlessSummary {
    practitioner: String,
    store: String,
    tests_with_data: usize,
    degrees_recorded: usize,
    rows: Vec<HeadlessRow>,
    breathing: String,
    sequence: String,
    lumbo_pelvic_level: String,
    lumbo_pelvic_reps: String,
    lumbo_pelvic_ok: bool,
    neck_level: String,
}

#[derive(serde::Serialize)]
struct HeadlessRow {
    test: String,
    left: String,
    right: String,
    bilat: String,
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let mut export_machine = ExportMachine::new(ExportState::Idle);

    loop {
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events for now
                }
            }
        }

        // Run any export the input handlers queued
        if let Some(kind) = app.pending_export.take() {
            if export_machine.state() != ExportState::Idle {
                continue;
            }

            if export_machine
                .process_event(&ExportEvent::Start(kind), app)
                .is_err()
            {
                continue;
            }

            let result = match kind {
                ExportKind::Csv => app.actions.export_csv(&app.document),
                ExportKind::Pdf => app.actions.export_pdf(&app.document).await,
            };

            match result {
                Ok(path) => {
                    if export_machine
                        .process_event(&ExportEvent::Success(path), app)
                        .is_err()
                    {
                        // Non-fatal state transition error
                    }
                }
                Err(e) => {
                    let error_msg = format!("{e}");
                    if export_machine
                        .process_event(&ExportEvent::Error(error_msg), app)
                        .is_err()
                    {
                        // Non-fatal state transition error
                    }
                }
            }

            if export_machine
                .process_event(&ExportEvent::Reset, app)
                .is_err()
            {
                // Non-fatal reset error
            }

            // Force a redraw to show the updated status
            if terminal.draw(|f| ui::ui(app, f)).is_err() {
                // Non-fatal redraw error
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_machine_walks_the_happy_path() {
        let mut app = App::new();
        let mut machine = ExportMachine::new(ExportState::Idle);

        machine
            .process_event(&ExportEvent::Start(ExportKind::Csv), &mut app)
            .unwrap();
        assert_eq!(machine.state(), ExportState::Exporting);
        assert_eq!(app.status_message, "Eksporterer CSV...");

        machine
            .process_event(
                &ExportEvent::Success(PathBuf::from("/tmp/coroptima_mobility.csv")),
                &mut app,
            )
            .unwrap();
        assert_eq!(machine.state(), ExportState::Success);
        assert_eq!(app.status_message, "Fil lagret: coroptima_mobility.csv");

        machine
            .process_event(&ExportEvent::Reset, &mut app)
            .unwrap();
        assert_eq!(machine.state(), ExportState::Idle);
    }

    #[test]
    fn export_machine_surfaces_errors_and_recovers() {
        let mut app = App::new();
        let mut machine = ExportMachine::new(ExportState::Idle);

        machine
            .process_event(&ExportEvent::Start(ExportKind::Pdf), &mut app)
            .unwrap();
        machine
            .process_event(&ExportEvent::Error("disk full".to_string()), &mut app)
            .unwrap();
        assert_eq!(machine.state(), ExportState::Error);
        assert_eq!(app.status_message, "Eksport feilet: disk full");

        machine
            .process_event(&ExportEvent::Reset, &mut app)
            .unwrap();
        assert_eq!(machine.state(), ExportState::Idle);
    }

    #[test]
    fn export_machine_rejects_out_of_order_events() {
        let mut app = App::new();
        let mut machine = ExportMachine::new(ExportState::Idle);

        let err = machine
            .process_event(
                &ExportEvent::Success(PathBuf::from("/tmp/x.csv")),
                &mut app,
            )
            .unwrap_err();
        assert!(err.to_string().contains("Invalid transition from Idle"));
        assert_eq!(machine.state(), ExportState::Idle);
    }

    #[test]
    fn headless_summary_reflects_the_document() {
        use crate::store::AssessmentDocument;

        let mut app = App::new();
        app.document = AssessmentDocument::default()
            .with_field(MobilityTest::SupineHipFlexion, RowField::Left, "95")
            .with_core(|core| {
                core.lumbo_pelvic_checked = true;
                core.lumbo_pelvic_reps = "10".to_string();
            });

        let summary = build_headless_summary(&app);
        assert_eq!(summary.tests_with_data, 1);
        assert_eq!(summary.degrees_recorded, 1);
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows[0].test, "Supine Hip Flexion (Hip to chest)");
        assert_eq!(summary.rows[0].left, "95");
        assert!(summary.lumbo_pelvic_ok);
        assert_eq!(summary.lumbo_pelvic_reps, "10");
    }
}
