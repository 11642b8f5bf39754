use clap::ArgMatches;
use tracing::{error, info};

use sidedock_core::{ActivationOutcome, DockError, FocusController, events, notify};

use super::helpers::{backend_for, load_config_with_warning};

pub(crate) async fn handle_activate_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let exec_command = matches
        .get_one::<String>("exec")
        .ok_or("Exec command is required")?;
    let window_id = matches.get_one::<String>("window-id").map(String::as_str);

    info!(
        event = "cli.activate_started",
        exec_command = exec_command,
        window_id = window_id
    );

    let config = load_config_with_warning(matches);
    // A fresh controller starts idle, so this never minimizes.
    let controller = FocusController::new(backend_for(&config));

    match controller.activate(window_id, exec_command).await {
        Ok(outcome) => {
            match &outcome {
                ActivationOutcome::Launched { command } => println!("✅ Launched '{}'", command),
                ActivationOutcome::Focused { window_id } => {
                    println!("✅ Focused window {}", window_id)
                }
                ActivationOutcome::Minimized { window_id } => {
                    println!("✅ Minimized window {}", window_id)
                }
            }
            info!(event = "cli.activate_completed", outcome = ?outcome);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Activation failed: {}", e);

            error!(
                event = "cli.activate_failed",
                error = %e,
                code = e.error_code()
            );

            if notify::should_notify(config.notifications.enabled, &e) {
                notify::send_notification(
                    config.tools.notify_send(),
                    &notify::format_notification_message(&e),
                    config.tools.timeout(),
                )
                .await;
            }

            events::log_command_failed("activate", &e);
            Err(e.into())
        }
    }
}
