use clap::Parser;
use color_eyre::Result;
use coroptima_mobility_tui::{app::App, cli::CliArgs, event, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let mut app = App::new();

    // Headless when asked for, or when stdout is not a terminal
    if args.wants_headless() || !is_terminal() {
        return event::run_headless(&mut app, &args).await;
    }

    if let Err(e) = app.initialize() {
        eprintln!("Error loading configuration: {e}");
        eprintln!("Will continue with an empty assessment");
    }

    let mut terminal = terminal::setup_terminal()?;

    let result = event::run(&mut terminal, &mut app).await;

    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
