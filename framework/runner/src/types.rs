/// Recommended error type for a benchmark `main` function. Configuration problems surface through
/// this type, failures of individual workloads never do.
pub type LinefeedBenchResult<T> = anyhow::Result<T>;
