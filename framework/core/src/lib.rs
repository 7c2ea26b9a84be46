mod catalog;
mod duration;
mod stats;
mod trial;

pub mod prelude {
    pub use crate::catalog::{CatalogError, WorkloadCatalog, WorkloadSpec};
    pub use crate::duration::{extract_duration_ms, DurationParseError, TimeUnit};
    pub use crate::stats::{aggregate, BenchmarkStats};
    pub use crate::trial::{TrialError, TrialErrorKind, TrialOutcome};
}
