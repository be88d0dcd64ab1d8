use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "coroptima_mobility-tui",
    version,
    about = "Cor Optima mobility & core assessment TUI"
)]
pub struct CliArgs {
    /// Print an assessment summary and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Export the current assessment as CSV and exit
    #[arg(long)]
    pub csv: bool,

    /// Export the current assessment as PDF and exit
    #[arg(long)]
    pub pdf: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the assessment blob path
    #[arg(long, value_name = "PATH")]
    pub store: Option<String>,

    /// Override the export output directory
    #[arg(long = "export-dir", value_name = "PATH")]
    pub export_dir: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(store) = &self.store {
            std::env::set_var("STORE_FILE", store);
        }
        if let Some(dir) = &self.export_dir {
            std::env::set_var("EXPORT_DIR", dir);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    /// Any of these flags bypasses the interactive UI.
    pub const fn wants_headless(&self) -> bool {
        self.headless || self.json || self.csv || self.pdf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_flags_imply_headless() {
        let args = CliArgs::parse_from(["coroptima_mobility-tui", "--csv"]);
        assert!(args.wants_headless());

        let args = CliArgs::parse_from(["coroptima_mobility-tui"]);
        assert!(!args.wants_headless());
    }
}
