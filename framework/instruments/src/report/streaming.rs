//! Output printed while the suite is running, as each trial and workload completes.

use linefeed_bench_core::prelude::{BenchmarkStats, TrialError, WorkloadSpec};

pub fn print_suite_start(runs: usize) {
    println!("Starting benchmark suite. Running each benchmark {runs} times.");
}

pub fn print_workload_start(spec: &WorkloadSpec) {
    println!(
        "\nBenchmarking '{}' with stdin from '{}'...",
        spec.script_path.display(),
        spec.input_path.display()
    );
}

pub fn format_trial(run: usize, runs: usize, duration_ms: f64) -> String {
    format!("  Run {run}/{runs}: {duration_ms:.3}ms")
}

pub fn print_trial(run: usize, runs: usize, duration_ms: f64) {
    println!("{}", format_trial(run, runs, duration_ms));
}

/// Describe a failed trial, followed by the interpreter's stderr when it was captured.
pub fn format_trial_error(run: usize, err: &TrialError) -> String {
    let mut out = format!("Error in run {run}: {err}");
    if let Some(stderr) = err.diagnostic() {
        out.push_str("\nStderr:\n");
        out.push_str(stderr);
    }
    out
}

pub fn print_trial_error(run: usize, err: &TrialError) {
    eprintln!("{}", format_trial_error(run, err));
}

pub fn format_stats_block(stats: &BenchmarkStats) -> String {
    [
        "\n  --- Statistics ---".to_string(),
        format!("  Total runs: {}", stats.runs),
        format!("  Min time:   {:.3}ms", stats.min),
        format!("  Max time:   {:.3}ms", stats.max),
        format!("  Mean time:  {:.3}ms", stats.mean),
        format!("  Std dev:    {:.3}ms", stats.stdev),
        "  ------------------".to_string(),
    ]
    .join("\n")
}

pub fn print_stats_block(stats: &BenchmarkStats) {
    println!("{}", format_stats_block(stats));
}

pub fn print_no_successful_runs() {
    println!("No successful runs to analyze.");
}

pub fn print_suite_finished() {
    println!("Benchmark suite finished.");
}
