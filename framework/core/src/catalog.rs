use std::path::{Path, PathBuf};

use serde::Deserialize;

/// One benchmark target: an interpreter script and the file fed to it on stdin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkloadSpec {
    /// Path to the script, passed to the interpreter as its final argument.
    #[serde(rename = "script")]
    pub script_path: PathBuf,
    /// Path to the file whose contents are written to the interpreter's stdin.
    #[serde(rename = "input")]
    pub input_path: PathBuf,
}

impl WorkloadSpec {
    pub fn new<S, I>(script_path: S, input_path: I) -> Self
    where
        S: Into<PathBuf>,
        I: Into<PathBuf>,
    {
        Self {
            script_path: script_path.into(),
            input_path: input_path.into(),
        }
    }

    /// The script's base name, used to label the workload in reports.
    ///
    /// Falls back to the full script path if it has no final component.
    pub fn file_name(&self) -> String {
        self.script_path
            .file_name()
            .unwrap_or(self.script_path.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

/// The ordered set of workloads to benchmark.
///
/// A catalog is fixed once built. Iteration order is the order the workloads were given in, and
/// that order is kept all the way through to the final report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkloadCatalog {
    workloads: Vec<WorkloadSpec>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "workload")]
    workloads: Vec<WorkloadSpec>,
}

impl WorkloadCatalog {
    pub fn new(workloads: Vec<WorkloadSpec>) -> Self {
        Self { workloads }
    }

    /// Parse a catalog from TOML made of `[[workload]]` tables with `script` and `input` keys.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self::new(file.workloads))
    }

    /// Load a catalog from a TOML file, see [WorkloadCatalog::from_toml_str] for the format.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_toml_str(&content)?;
        log::debug!(
            "Loaded {} workloads from catalog file {}",
            catalog.len(),
            path.display()
        );

        Ok(catalog)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkloadSpec> {
        self.workloads.iter()
    }

    pub fn len(&self) -> usize {
        self.workloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workloads.is_empty()
    }
}

impl<'a> IntoIterator for &'a WorkloadCatalog {
    type Item = &'a WorkloadSpec;
    type IntoIter = std::slice::Iter<'a, WorkloadSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<WorkloadSpec> for WorkloadCatalog {
    fn from_iter<T: IntoIterator<Item = WorkloadSpec>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// An error loading a [WorkloadCatalog] from a file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    const CATALOG: &str = r#"
[[workload]]
script = "tests/aoc/day02.lf"
input = "tests/aoc/inputs/day02.txt"

[[workload]]
script = "tests/aoc/day01.lf"
input = "tests/aoc/inputs/day01.txt"
"#;

    #[test]
    fn test_should_use_script_base_name_as_file_name() {
        let spec = WorkloadSpec::new("tests/aoc/day07.lf", "tests/aoc/inputs/day07.txt");
        assert_eq!(spec.file_name(), "day07.lf");
    }

    #[test]
    fn test_should_keep_declaration_order_when_parsing() {
        let catalog = WorkloadCatalog::from_toml_str(CATALOG).unwrap();

        let names = catalog.iter().map(|w| w.file_name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["day02.lf", "day01.lf"]);
        assert_eq!(
            catalog.iter().next().unwrap().input_path,
            PathBuf::from("tests/aoc/inputs/day02.txt")
        );
    }

    #[test]
    fn test_should_parse_empty_catalog() {
        let catalog = WorkloadCatalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_should_reject_workload_without_input() {
        let result = WorkloadCatalog::from_toml_str("[[workload]]\nscript = \"a.lf\"\n");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_should_load_catalog_from_file() {
        let mut file = NamedTempFile::new().expect("failed to create temp file");
        file.write_all(CATALOG.as_bytes()).unwrap();

        let catalog = WorkloadCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_should_not_load_missing_catalog_file() {
        let result = WorkloadCatalog::load("/non/existent/catalog.toml");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
