use std::path::PathBuf;

use anyhow::{bail, Context};
use linefeed_bench_core::prelude::WorkloadCatalog;

use crate::cli::BenchCli;
use crate::interpreter::{InterpreterCommand, DEFAULT_INTERPRETER};
use crate::types::LinefeedBenchResult;

/// Number of trials per workload when neither the definition nor the command line picks one.
pub const DEFAULT_RUNS: usize = 4;

/// The builder for a benchmark definition.
///
/// This must be used at the start of a benchmark binary to define the workloads that you want to
/// run. Options given on the command line take precedence over the defaults set here.
pub struct BenchmarkDefinitionBuilder {
    /// The name of the benchmark suite.
    ///
    /// Recommended value is `env!("CARGO_PKG_NAME")`.
    name: String,
    /// Parsed command line options.
    cli: BenchCli,
    /// The workloads to run unless a catalog file is given on the command line.
    catalog: WorkloadCatalog,
    /// Trials per workload unless `--runs` is given.
    default_runs: usize,
}

#[derive(Debug)]
pub struct BenchmarkDefinition {
    pub name: String,
    pub catalog: WorkloadCatalog,
    pub runs: usize,
    pub interpreter: InterpreterCommand,
    pub csv_path: Option<PathBuf>,
}

impl BenchmarkDefinitionBuilder {
    /// Initialise a new benchmark definition from the suite name and already parsed command line
    /// options.
    pub fn new(name: &str, cli: BenchCli) -> Self {
        Self {
            name: name.to_string(),
            cli,
            catalog: WorkloadCatalog::default(),
            default_runs: DEFAULT_RUNS,
        }
    }

    /// Initialise logging, parse the command line and create a new benchmark definition.
    pub fn new_with_init(name: &str) -> Self {
        Self::new(name, crate::init::init())
    }

    /// Set the workloads to benchmark, in the order they should run and be reported.
    pub fn with_catalog(mut self, catalog: WorkloadCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Set how many trials to run per workload if the command line doesn't say.
    pub fn with_default_runs(mut self, runs: usize) -> Self {
        self.default_runs = runs;
        self
    }

    pub(crate) fn build(self) -> LinefeedBenchResult<BenchmarkDefinition> {
        let catalog = match &self.cli.catalog {
            Some(path) => WorkloadCatalog::load(path)
                .with_context(|| format!("Failed to load catalog '{}'", path.display()))?,
            None => self.catalog,
        };

        let runs = self.cli.runs.unwrap_or(self.default_runs);
        if runs == 0 {
            bail!("Benchmark '{}' is configured to run 0 times", self.name);
        }

        let interpreter = match self.cli.interpreter.as_deref() {
            Some(command_line) => InterpreterCommand::parse(command_line)?,
            None => InterpreterCommand::parse(DEFAULT_INTERPRETER)?,
        };

        Ok(BenchmarkDefinition {
            name: self.name,
            catalog,
            runs,
            interpreter,
            csv_path: self.cli.csv,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use linefeed_bench_core::prelude::WorkloadSpec;
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn catalog() -> WorkloadCatalog {
        WorkloadCatalog::new(vec![WorkloadSpec::new("day01.lf", "day01.txt")])
    }

    #[test]
    fn test_should_use_defaults_without_cli_options() {
        let definition = BenchmarkDefinitionBuilder::new("suite", BenchCli::default())
            .with_catalog(catalog())
            .build()
            .unwrap();

        assert_eq!(definition.runs, DEFAULT_RUNS);
        assert_eq!(definition.catalog, catalog());
        assert_eq!(definition.interpreter, InterpreterCommand::default());
        assert_eq!(definition.csv_path, None);
    }

    #[test]
    fn test_should_prefer_cli_options() {
        let mut file = NamedTempFile::new().expect("failed to create temp file");
        file.write_all(b"[[workload]]\nscript = \"x.lf\"\ninput = \"x.txt\"\n")
            .unwrap();

        let cli = BenchCli {
            csv: Some(PathBuf::from("out.csv")),
            runs: Some(2),
            interpreter: Some("target/release/linefeed".to_string()),
            catalog: Some(file.path().to_path_buf()),
        };
        let definition = BenchmarkDefinitionBuilder::new("suite", cli)
            .with_catalog(catalog())
            .with_default_runs(10)
            .build()
            .unwrap();

        assert_eq!(definition.runs, 2);
        assert_eq!(
            definition.catalog,
            WorkloadCatalog::new(vec![WorkloadSpec::new("x.lf", "x.txt")])
        );
        assert_eq!(definition.interpreter.program(), "target/release/linefeed");
        assert_eq!(definition.csv_path, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_should_not_build_with_zero_runs() {
        let result = BenchmarkDefinitionBuilder::new("suite", BenchCli::default())
            .with_default_runs(0)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_should_not_build_with_blank_interpreter() {
        let cli = BenchCli {
            interpreter: Some("   ".to_string()),
            ..Default::default()
        };
        let result = BenchmarkDefinitionBuilder::new("suite", cli).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_should_not_build_with_missing_catalog_file() {
        let cli = BenchCli {
            catalog: Some(PathBuf::from("/non/existent/catalog.toml")),
            ..Default::default()
        };

        let err = BenchmarkDefinitionBuilder::new("suite", cli)
            .build()
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to load catalog"));
    }
}
