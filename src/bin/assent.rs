//! assent CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use assent::cli::args::*;
use assent::cli::commands::*;

/// Warnings about unwritten reports show by default; per-utterance match
/// traces need -vvv (affirmative) or -vvvv (negative).
fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let args = AssentArgs::parse();

    // -v/-q pick the base level; RUST_LOG (e.g. `RUST_LOG=assent=trace`)
    // is applied on top of it.
    Builder::new()
        .filter_level(log_level(args.verbosity()))
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
