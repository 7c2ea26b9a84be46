use std::path::PathBuf;

use clap::Parser;

use crate::interpreter::LF_BENCH_INTERPRETER_ENV;

#[derive(Parser, Debug, Clone, Default)]
#[command(about, long_about = None)]
pub struct BenchCli {
    /// Path to write the benchmark summary to as a padded CSV file.
    #[clap(long)]
    pub csv: Option<PathBuf>,

    /// The number of times to run each benchmark.
    ///
    /// Overrides the default chosen by the benchmark definition. Must be at least 1.
    #[clap(long, value_parser = parse_runs)]
    pub runs: Option<usize>,

    /// The command used to run a Linefeed script, the script path is appended as its last argument.
    ///
    /// The command is split on whitespace into a program and its leading arguments, for example
    /// `--interpreter "target/release/linefeed"`. Defaults to `cargo run --release --`.
    #[clap(long, env = LF_BENCH_INTERPRETER_ENV)]
    pub interpreter: Option<String>,

    /// A TOML file of `[[workload]]` tables, with `script` and `input` paths, to benchmark
    /// instead of the built-in workloads.
    #[clap(long)]
    pub catalog: Option<PathBuf>,
}

fn parse_runs(s: &str) -> anyhow::Result<usize> {
    let runs = s
        .parse::<usize>()
        .map_err(|e| anyhow::anyhow!("Invalid number of runs '{s}': {e}"))?;
    if runs == 0 {
        anyhow::bail!("The number of runs must be at least 1");
    }

    Ok(runs)
}
