use clap::ArgMatches;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use sidedock_core::{Dock, events};

use super::helpers::{backend_for, load_config_with_warning};

pub(crate) async fn handle_run_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.run_started");

    let config = load_config_with_warning(matches);
    let dock = Dock::load(backend_for(&config), config);

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!(event = "cli.run.interrupted");
            signal_cancel.cancel();
        }
    });

    let mut stdin = BufReader::new(tokio::io::stdin());
    let result = dock.serve(&mut stdin, tokio::io::stdout(), cancel).await;

    events::log_session_ended();

    match result {
        Ok(()) => {
            info!(event = "cli.run_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Dock session failed: {}", e);
            error!(event = "cli.run_failed", error = %e);
            events::log_command_failed("run", &e);
            Err(e.into())
        }
    }
}
