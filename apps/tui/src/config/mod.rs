mod config;

pub use config::{debug_enabled, get_export_dir, get_store_path, init_app_config};
