use tokio::io::{AsyncBufRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::backend::DesktopBackend;
use crate::dock::{Dock, Reply};
use crate::errors::DockError;
use crate::protocol::{DockAction, DockEvent, ProtocolError, read_message, write_message};
use crate::refresh::run_refresh_loop;
use crate::visibility::run_visibility_loop;

impl<B: DesktopBackend> Dock<B> {
    /// Run a session until end of input, a `quit` action, or `cancel`.
    ///
    /// Actions are read from `reader` and handled one at a time. Every event
    /// (replies and loop output alike) goes through a single writer task so
    /// lines never interleave. The initial `apps` snapshot is always the first
    /// line written.
    pub async fn serve<R, W>(
        &self,
        reader: &mut R,
        writer: W,
        cancel: CancellationToken,
    ) -> Result<(), ProtocolError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        info!(event = "core.dock.serve_started", apps = self.descriptors.len());

        let (tx, mut rx) = mpsc::unbounded_channel::<DockEvent>();

        let writer_cancel = cancel.clone();
        let writer_task = tokio::spawn(async move {
            let mut writer = writer;
            while let Some(message) = rx.recv().await {
                if let Err(e) = write_message(&mut writer, &message).await {
                    error!(event = "core.dock.write_failed", error = %e);
                    writer_cancel.cancel();
                    return Err(e);
                }
            }
            Ok(())
        });

        let _ = tx.send(self.snapshot().await);

        let visibility = tokio::spawn(run_visibility_loop(
            self.backend.clone(),
            self.config.visibility.clone(),
            self.descriptors.len(),
            tx.clone(),
            cancel.child_token(),
        ));
        let refresh = tokio::spawn(run_refresh_loop(
            self.backend.clone(),
            self.config.refresh.interval(),
            self.config.reconcile.ignored_classes(),
            tx.clone(),
            cancel.child_token(),
        ));

        let mut result = Ok(());
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!(event = "core.dock.serve_cancelled");
                    break;
                }
                message = read_message::<_, DockAction>(reader) => match message {
                    Ok(Some(action)) => match self.handle(action).await {
                        Reply::Continue(Some(event)) => {
                            let _ = tx.send(event);
                        }
                        Reply::Continue(None) => {}
                        Reply::Quit => {
                            info!(event = "core.dock.quit_requested");
                            break;
                        }
                    },
                    Ok(None) => {
                        debug!(event = "core.dock.input_closed");
                        break;
                    }
                    Err(e @ ProtocolError::Json(_)) => {
                        warn!(event = "core.dock.invalid_action", error = %e);
                        let _ = tx.send(DockEvent::Error {
                            code: e.error_code().to_string(),
                            message: e.to_string(),
                        });
                    }
                    Err(e) => {
                        error!(event = "core.dock.read_failed", error = %e);
                        result = Err(e);
                        break;
                    }
                },
            }
        }

        cancel.cancel();
        for (name, handle) in [("visibility", visibility), ("refresh", refresh)] {
            if let Err(e) = handle.await {
                error!(event = "core.dock.loop_join_failed", task = name, error = %e);
            }
        }
        drop(tx);

        match writer_task.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                if result.is_ok() {
                    result = Err(e);
                }
            }
            Err(e) => {
                error!(event = "core.dock.writer_join_failed", error = %e);
            }
        }

        info!(event = "core.dock.serve_completed");
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::Value;
    use tokio::io::{AsyncReadExt, BufReader};

    use super::*;
    use crate::backend::mock::MockBackend;
    use crate::config::DockConfig;
    use crate::descriptors::ApplicationDescriptor;

    fn quiet_config() -> DockConfig {
        let mut config = DockConfig::default();
        config.visibility.poll_interval_ms = Some(60_000);
        config.refresh.interval_ms = Some(60_000);
        config
    }

    fn dock() -> Dock<MockBackend> {
        let backend = Arc::new(MockBackend::with_listing(
            "0x01 0 firefox.Firefox host Page\n",
        ));
        let descriptor = ApplicationDescriptor {
            name: "Firefox".to_string(),
            icon_path: String::new(),
            exec_command: "firefox %U".to_string(),
            window_class: "firefox".to_string(),
        };
        Dock::new(backend, quiet_config(), vec![descriptor])
    }

    async fn run_session(dock: &Dock<MockBackend>, input: &'static [u8]) -> Vec<Value> {
        let (client, server) = tokio::io::duplex(64 * 1024);
        let mut reader = BufReader::new(input);

        dock.serve(&mut reader, server, CancellationToken::new())
            .await
            .unwrap();

        let mut output = String::new();
        let mut client = client;
        client.read_to_string(&mut output).await.unwrap();
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn of_type<'a>(events: &'a [Value], kind: &str) -> Vec<&'a Value> {
        events.iter().filter(|e| e["type"] == kind).collect()
    }

    #[tokio::test]
    async fn test_snapshot_is_first_line() {
        let dock = dock();
        let events = run_session(&dock, b"").await;

        assert_eq!(events[0]["type"], "apps");
        assert_eq!(events[0]["apps"][0]["instances"][0]["windowId"], "0x01");
    }

    #[tokio::test]
    async fn test_activate_then_quit() {
        let dock = dock();
        let events = run_session(
            &dock,
            b"{\"type\":\"activate\",\"exec_command\":\"firefox %U\"}\n{\"type\":\"quit\"}\n{\"type\":\"refresh\"}\n",
        )
        .await;

        let activated = of_type(&events, "activated");
        assert_eq!(activated.len(), 1);
        assert_eq!(activated[0]["outcome"]["action"], "launched");
        assert_eq!(activated[0]["outcome"]["command"], "firefox");

        // Nothing after quit is handled.
        assert_eq!(of_type(&events, "apps").len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_line_reports_error_and_continues() {
        let dock = dock();
        let events = run_session(&dock, b"{oops\n{\"type\":\"refresh\"}\n").await;

        let errors = of_type(&events, "error");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["code"], "INVALID_MESSAGE");
        assert_eq!(of_type(&events, "apps").len(), 2);
    }

    #[tokio::test]
    async fn test_cancelled_session_returns() {
        let dock = dock();
        let (_client, server) = tokio::io::duplex(64 * 1024);
        let (_input_writer, input) = tokio::io::duplex(1024);
        let mut reader = BufReader::new(input);
        let cancel = CancellationToken::new();
        cancel.cancel();

        dock.serve(&mut reader, server, cancel).await.unwrap();
    }
}
