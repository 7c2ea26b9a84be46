mod cli;
mod definition;
mod init;
mod interpreter;
mod process;
mod run;
mod types;

pub mod prelude {
    pub use crate::cli::BenchCli;
    pub use crate::definition::{BenchmarkDefinitionBuilder, DEFAULT_RUNS};
    pub use crate::interpreter::{
        InterpreterCommand, DEFAULT_INTERPRETER, LF_BENCH_INTERPRETER_ENV,
    };
    pub use crate::process::ProcessRunner;
    pub use crate::run::run;
    pub use crate::types::LinefeedBenchResult;

    pub use linefeed_bench_core::prelude::*;
    pub use linefeed_bench_instruments::SummaryRow;
}
