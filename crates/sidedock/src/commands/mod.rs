use clap::ArgMatches;
use tracing::error;

use sidedock_core::events;

pub mod helpers;

mod activate;
mod completions;
mod list;
mod run;
mod windows;

pub async fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(name) = matches.subcommand_name() {
        events::log_command_started(name);
    }

    match matches.subcommand() {
        Some(("run", sub_matches)) => run::handle_run_command(sub_matches).await,
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches).await,
        Some(("windows", sub_matches)) => windows::handle_windows_command(sub_matches).await,
        Some(("activate", sub_matches)) => activate::handle_activate_command(sub_matches).await,
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
