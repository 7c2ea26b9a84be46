mod summary_table;

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::Table;

use crate::report::summary_report::summary_table::SummaryTableRow;
use crate::report::{ReportCollector, ReportError, SummaryRow};

/// Prints a table of every reported workload once the suite has finished.
#[derive(Default)]
pub struct SummaryReportCollector {
    rows: Vec<SummaryRow>,
}

impl SummaryReportCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Render `rows`, in the order given, as a pipe delimited table with a header and separator rule.
///
/// The file name column is left aligned and the timing columns are right aligned, each to three
/// decimal places.
pub fn render_summary_table(rows: &[SummaryRow]) -> String {
    let rows = rows.iter().map(SummaryTableRow::from).collect::<Vec<_>>();

    let mut table = Table::new(rows);
    table
        .with(Style::markdown())
        .modify(Columns::new(1..), Alignment::right());

    table.to_string()
}

impl ReportCollector for SummaryReportCollector {
    fn add_summary(&mut self, row: &SummaryRow) {
        self.rows.push(row.clone());
    }

    fn finalize(&self) -> Result<(), ReportError> {
        if self.rows.is_empty() {
            return Ok(());
        }

        println!("\n--- Benchmark Summary ---");
        println!("{}", render_summary_table(&self.rows));
        println!("-------------------------\n");

        Ok(())
    }
}
