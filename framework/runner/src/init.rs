use crate::cli::BenchCli;
use clap::Parser;

/// Initialise the CLI and logging for the benchmark runner.
pub fn init() -> BenchCli {
    env_logger::init();

    BenchCli::parse()
}
