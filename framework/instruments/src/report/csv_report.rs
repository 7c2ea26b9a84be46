use std::path::PathBuf;

use crate::report::{ReportCollector, ReportError, SummaryRow};

const CSV_HEADER: [&str; 5] = ["File", "Mean (ms)", "Min (ms)", "Max (ms)", "Std Dev (ms)"];

/// Writes the summary to a comma separated file with columns padded for reading by eye.
pub struct CsvReportCollector {
    path: PathBuf,
    rows: Vec<SummaryRow>,
}

impl CsvReportCollector {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            rows: Vec::new(),
        }
    }
}

/// Render the header and one line per row, in order.
///
/// Cells are left justified to the widest cell of their column, header included, and joined with
/// `", "`. Values are never quoted so this is not meant for strict CSV readers.
pub fn render_csv(rows: &[SummaryRow]) -> String {
    let grid = std::iter::once(CSV_HEADER.map(String::from))
        .chain(rows.iter().map(|row| {
            [
                row.file_name.clone(),
                format!("{:>9.3}", row.stats.mean),
                format!("{:>9.3}", row.stats.min),
                format!("{:>9.3}", row.stats.max),
                format!("{:>9.3}", row.stats.stdev),
            ]
        }))
        .collect::<Vec<_>>();

    let mut widths = [0usize; CSV_HEADER.len()];
    for cells in &grid {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for cells in &grid {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&line);
        out.push('\n');
    }

    out
}

impl ReportCollector for CsvReportCollector {
    fn add_summary(&mut self, row: &SummaryRow) {
        self.rows.push(row.clone());
    }

    fn finalize(&self) -> Result<(), ReportError> {
        if self.rows.is_empty() {
            log::debug!("No rows to write to {}", self.path.display());
            return Ok(());
        }

        std::fs::write(&self.path, render_csv(&self.rows)).map_err(|source| {
            ReportError::Write {
                path: self.path.clone(),
                source,
            }
        })?;
        println!(
            "\nSuccessfully wrote benchmark summary to '{}'",
            self.path.display()
        );

        Ok(())
    }
}
