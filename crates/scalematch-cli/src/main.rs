//! Command-line front end.
//!
//! Prints exactly one JSON line to stdout and exits 0 on success, 1 on
//! any failure. Logs go to stderr so stdout stays machine-parseable.

use std::panic;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use scalematch::{locate, MatchConfig, Report};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: scalematch <screenshot> <template> [threshold] [match_index]";

/// Locate a template image inside a screenshot across scales.
#[derive(Parser, Debug)]
#[command(name = "scalematch", disable_version_flag = true)]
struct Cli {
    /// Path to the screenshot to search.
    screenshot: PathBuf,
    /// Path to the template to look for.
    template: PathBuf,
    /// Minimum correlation score a window must reach, in [-1, 1].
    #[arg(default_value_t = 0.75, allow_negative_numbers = true)]
    threshold: f32,
    /// Which match to report, ordered by top edge; out-of-range clamps to
    /// the last match.
    #[arg(default_value_t = 0)]
    match_index: usize,
}

fn main() {
    // The version flag is only honored as the sole argument.
    let args: Vec<String> = std::env::args().collect();
    if args.len() == 2 && (args[1] == "--version" || args[1] == "-v") {
        println!("scalematch {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            let _ = err.print();
            return;
        }
        Err(_) => emit(&Report::failure(USAGE), 1),
    };

    let config = MatchConfig::default();
    let outcome = panic::catch_unwind(|| {
        locate(&cli.screenshot, &cli.template, cli.threshold, cli.match_index, &config)
    });

    match outcome {
        Ok(Ok(selection)) => emit(&Report::success(&selection), 0),
        Ok(Err(err)) => emit(&Report::failure(err.to_string()), 1),
        Err(payload) => {
            let msg = panic_message(payload.as_ref());
            emit(&Report::failure(format!("internal error: {msg}")), 1)
        }
    }
}

/// Print the report on stdout and exit with `code`.
fn emit(report: &Report, code: i32) -> ! {
    println!("{}", report.to_json_line());
    process::exit(code);
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(&s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unexpected panic"
    }
}
