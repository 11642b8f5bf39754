use clap::ArgMatches;
use tracing::info;

use sidedock_core::Dock;

use super::helpers::{backend_for, load_config_with_warning};

pub(crate) async fn handle_list_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.list_started", json_output = json_output);

    let config = load_config_with_warning(matches);
    let dock = Dock::load(backend_for(&config), config);

    // Listing failures are absorbed by the dock: every entry shows as not running.
    let view = dock.view().await;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else if view.is_empty() {
        println!("No applications found.");
    } else {
        println!("Applications:");
        let formatter = crate::table::AppTableFormatter::new(&view);
        formatter.print_table(&view);
    }

    info!(event = "cli.list_completed", count = view.len());

    Ok(())
}
