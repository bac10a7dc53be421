//! sasswatch CLI
//!
//! Usage: sasswatch [OPTIONS] <WATCH_DIR> <OUTPUT> [CSS_OUTPUT]
//!
//! Keeps OUTPUT importing every stylesheet under WATCH_DIR and, when
//! CSS_OUTPUT is given, recompiles it there on every change.

use std::process::ExitCode;

use clap::Parser;
use crossterm::style::Stylize;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use sasswatch::presentation::Cli;
use sasswatch::{SassWatchError, WatchEvent};

mod commands;
mod ui;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::watch::cmd_watch(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` flags raise the level for this crate.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "sasswatch=warn",
        1 => "sasswatch=info",
        2 => "sasswatch=debug",
        _ => "sasswatch=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report_error(err: &anyhow::Error, json: bool) {
    let message = match err.downcast_ref::<SassWatchError>() {
        Some(e) if e.is_startup_error() => capitalize_sentence(&e.to_string()),
        _ => format!("{:#}", err),
    };

    if json {
        println!("{}", WatchEvent::Error { message }.to_json());
    } else if std::io::stderr().is_terminal() {
        eprintln!("{} {}", "error:".red().bold(), message);
    } else {
        eprintln!("error: {}", message);
    }
}

/// "must specify an output filename" -> "Must specify an output filename."
fn capitalize_sentence(message: &str) -> String {
    let mut chars = message.chars();
    let mut out: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    if !out.ends_with('.') {
        out.push('.');
    }
    out
}
