use clap::ArgMatches;
use tracing::{error, info};

use sidedock_core::{DesktopBackend, events};

use super::helpers::{backend_for, load_config_with_warning};

pub(crate) async fn handle_windows_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.windows_started", json_output = json_output);

    let config = load_config_with_warning(matches);
    let backend = backend_for(&config);

    match backend.list_windows().await {
        Ok(inventory) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&inventory)?);
            } else if inventory.is_empty() {
                println!("No windows found.");
            } else {
                println!("Windows:");
                let formatter = crate::table::WindowTableFormatter::new(&inventory);
                formatter.print_table(&inventory);
            }

            info!(
                event = "cli.windows_completed",
                classes = inventory.len(),
                windows = inventory.window_count()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to list windows: {}", e);

            error!(event = "cli.windows_failed", error = %e);

            events::log_command_failed("windows", &e);
            Err(e.into())
        }
    }
}
