use tabled::Tabled;

use crate::report::SummaryRow;

#[derive(Tabled)]
pub struct SummaryTableRow {
    #[tabled(rename = "File")]
    pub file_name: String,
    #[tabled(rename = "Mean (ms)", display = "float3")]
    pub mean_ms: f64,
    #[tabled(rename = "Min (ms)", display = "float3")]
    pub min_ms: f64,
    #[tabled(rename = "Max (ms)", display = "float3")]
    pub max_ms: f64,
    #[tabled(rename = "Std Dev", display = "float3")]
    pub stdev_ms: f64,
}

impl From<&SummaryRow> for SummaryTableRow {
    fn from(row: &SummaryRow) -> Self {
        Self {
            file_name: row.file_name.clone(),
            mean_ms: row.stats.mean,
            min_ms: row.stats.min,
            max_ms: row.stats.max,
            stdev_ms: row.stats.stdev,
        }
    }
}

fn float3(n: &f64) -> String {
    format!("{:.3}", n)
}
