mod csv_report;
mod streaming;
mod summary_report;

use std::path::PathBuf;

use linefeed_bench_core::prelude::BenchmarkStats;

pub use csv_report::{render_csv, CsvReportCollector};
pub use streaming::*;
pub use summary_report::{render_summary_table, SummaryReportCollector};

/// The statistics of one workload, labelled for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Base name of the workload's script.
    pub file_name: String,
    pub stats: BenchmarkStats,
}

pub trait ReportCollector {
    /// Record the statistics of a workload that had at least one successful trial.
    fn add_summary(&mut self, row: &SummaryRow);

    /// Output everything recorded, after the last workload has run.
    fn finalize(&self) -> Result<(), ReportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Error writing to file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Choose which end of suite reports to produce.
#[derive(Debug, Default)]
pub struct ReportConfig {
    summary: bool,
    csv_path: Option<PathBuf>,
}

impl ReportConfig {
    /// Print the summary table to the console.
    pub fn enable_summary(mut self) -> Self {
        self.summary = true;
        self
    }

    /// Write the padded summary export to `path`.
    pub fn enable_csv<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.csv_path = Some(path.into());
        self
    }

    pub fn init(self) -> Reporter {
        let mut collectors: Vec<Box<dyn ReportCollector>> = Vec::new();

        if self.summary {
            collectors.push(Box::new(SummaryReportCollector::new()));
        }
        if let Some(path) = self.csv_path {
            log::debug!("Summary export will be written to {}", path.display());
            collectors.push(Box::new(CsvReportCollector::new(path)));
        }

        Reporter { collectors }
    }
}

/// Fans workload summaries out to every configured [ReportCollector].
pub struct Reporter {
    collectors: Vec<Box<dyn ReportCollector>>,
}

impl Reporter {
    pub fn add_summary(&mut self, row: SummaryRow) {
        for collector in &mut self.collectors {
            collector.add_summary(&row);
        }
    }

    /// Finalize every collector in the order they were configured.
    ///
    /// A collector that fails does not stop the others. The failures are returned so the caller
    /// can report them.
    pub fn finalize(&self) -> Vec<ReportError> {
        self.collectors
            .iter()
            .filter_map(|collector| collector.finalize().err())
            .collect()
    }
}
