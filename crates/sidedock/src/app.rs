use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("sidedock")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Auto-hiding application dock for the left screen edge")
        .long_about("sidedock lists installed applications next to their running windows, reveals a panel when the pointer touches the left screen edge, and launches, focuses or minimizes applications on click. Rendering is done by a separate process that speaks JSONL with `sidedock run`.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file applied on top of ~/.sidedock/config.toml")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Run the dock service (JSONL events on stdout, actions on stdin)"),
        )
        .subcommand(
            Command::new("list")
                .about("List applications with their running windows")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("windows")
                .about("List running windows grouped by window class")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("activate")
                .about("Launch an application, or focus one of its windows")
                .arg(
                    Arg::new("exec")
                        .help("Launch command, run through `sh -c` (trusted input; field codes like %U are removed)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("window-id")
                        .long("window-id")
                        .short('w')
                        .help("Window to focus instead of launching (e.g. 0x04000007)"),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .index(1)
                        .value_parser(value_parser!(Shell)),
                ),
        )
}
