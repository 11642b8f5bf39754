use sidedock_core::init_logging;

mod app;
mod commands;
mod table;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Quiet unless -v/--verbose
    let verbose = matches.get_flag("verbose");
    init_logging(!verbose);

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(commands::run_command(&matches));

    // A pending stdin read in `run` would otherwise keep the runtime alive.
    runtime.shutdown_background();

    result
}
