//! Prints the persisted assessment blob as pretty JSON. Handy for checking
//! what the form actually saved without opening the UI.

use color_eyre::Result;
use coroptima_mobility_tui::config::get_store_path;
use coroptima_mobility_tui::store::FormStateStore;

fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv::dotenv().ok();

    let path = get_store_path();
    let store = FormStateStore::new(&path);
    let document = store.load();

    eprintln!("Store: {}", path.display());
    eprintln!(
        "Tests with data: {} | degree cells: {}",
        document.rows_with_data(),
        document.degrees_recorded()
    );

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
