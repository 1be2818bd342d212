mod cli;

use cli::commands::Command;
use cli::Reversi;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    init_instrumentation();

    Reversi::from_args().execute();

    report_instrumentation();
}

#[cfg(feature = "instrumentation")]
fn init_instrumentation() {
    if let Err(error) = reversi::instrumentation::init_tracing() {
        eprintln!("failed to initialize tracing: {}", error);
    }
}

#[cfg(not(feature = "instrumentation"))]
fn init_instrumentation() {}

#[cfg(feature = "instrumentation")]
fn report_instrumentation() {
    reversi::instrumentation::print_timing_statistics();
}

#[cfg(not(feature = "instrumentation"))]
fn report_instrumentation() {}
