use color_eyre::eyre::eyre;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::process::Command;
use std::str;

use crate::store::default_store_path;

/// Initializes the application configuration.
/// Returns the assessment blob path and the practitioner name.
pub fn init_app_config() -> color_eyre::eyre::Result<(PathBuf, String)> {
    // Load environment variables from .env file
    dotenv().ok();

    let store_path = get_store_path();

    // Practitioner name comes from git config; the form is filled in by
    // whoever runs the tool.
    let practitioner = get_git_username().unwrap_or_else(|_| "unknown practitioner".to_string());

    Ok((store_path, practitioner))
}

/// Gets the path of the persisted assessment blob.
pub fn get_store_path() -> PathBuf {
    env::var("STORE_FILE").map_or_else(|_| default_store_path(), PathBuf::from)
}

/// Gets the directory CSV and PDF artifacts are written into.
pub fn get_export_dir() -> PathBuf {
    env::var("EXPORT_DIR").map_or_else(|_| PathBuf::from("./exports"), PathBuf::from)
}

/// Whether debug logging is on (DEBUG=1, usually via --debug).
pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok_and(|v| v == "1")
}

/// Gets the user name from git config
fn get_git_username() -> color_eyre::eyre::Result<String> {
    let username = Command::new("git")
        .args(["config", "--get", "user.name"])
        .output()?;

    let username_str = str::from_utf8(&username.stdout)?.trim().to_string();

    if username_str.is_empty() {
        return Err(eyre!("Git username not found"));
    }

    Ok(username_str)
}
