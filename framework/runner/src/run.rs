use linefeed_bench_core::prelude::{aggregate, TrialErrorKind};
use linefeed_bench_instruments::{
    print_no_successful_runs, print_stats_block, print_suite_finished, print_suite_start,
    print_trial, print_trial_error, print_workload_start, ReportConfig, SummaryRow,
};

use crate::definition::BenchmarkDefinitionBuilder;
use crate::process::ProcessRunner;
use crate::types::LinefeedBenchResult;

/// Run every workload in the definition's catalog and report the results.
///
/// Workloads run one at a time in catalog order. A workload that fails is reported and skipped
/// without affecting the rest of the suite, so this only returns an error for a definition that
/// cannot be built. The rows that made it into the summary are returned in catalog order.
pub fn run(definition: BenchmarkDefinitionBuilder) -> LinefeedBenchResult<Vec<SummaryRow>> {
    let definition = definition.build()?;

    log::info!("Running benchmark suite: {}", definition.name);
    log::info!(
        "Running {} workloads with interpreter: {}",
        definition.catalog.len(),
        definition.interpreter
    );

    let runs = definition.runs;
    let runner = ProcessRunner::new(definition.interpreter);

    let mut report_config = ReportConfig::default().enable_summary();
    if let Some(path) = definition.csv_path {
        report_config = report_config.enable_csv(path);
    }
    let mut reporter = report_config.init();

    print_suite_start(runs);

    let mut summary = Vec::new();
    for spec in &definition.catalog {
        print_workload_start(spec);

        let outcomes = runner.run_trials_with(spec, runs, |run, outcome| match outcome {
            Ok(duration_ms) => print_trial(run, runs, *duration_ms),
            Err(e) => {
                print_trial_error(run, e);
                log::warn!(
                    "Abandoning workload {} after run {run}: {}",
                    spec.file_name(),
                    e.kind()
                );
            }
        });

        let durations = outcomes
            .iter()
            .filter_map(|outcome| outcome.as_ref().ok().copied())
            .collect::<Vec<_>>();

        match aggregate(&durations) {
            Some(stats) => {
                print_stats_block(&stats);

                let row = SummaryRow {
                    file_name: spec.file_name(),
                    stats,
                };
                reporter.add_summary(row.clone());
                summary.push(row);
            }
            None => print_no_successful_runs(),
        }
    }

    // Reporting failures are printed, the console summary has already been written by now.
    for err in reporter.finalize() {
        eprintln!("\n{err}");
        log::error!("{}: {err:?}", TrialErrorKind::UnexpectedError);
    }

    print_suite_finished();

    Ok(summary)
}
