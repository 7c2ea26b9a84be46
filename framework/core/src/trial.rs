use std::path::PathBuf;

use crate::duration::DurationParseError;

/// The result of a single trial: the interpreter's self-reported run time in milliseconds, or the
/// reason the trial failed.
pub type TrialOutcome = Result<f64, TrialError>;

/// Classifies a [TrialError] so callers can react to each kind without matching on its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TrialErrorKind {
    InputNotFound,
    ProcessExecutionError,
    TimingParseError,
    UnexpectedError,
}

/// Why a trial failed.
///
/// Every variant ends the workload it occurred in. The remaining workloads in the suite still run.
#[derive(Debug, thiserror::Error)]
pub enum TrialError {
    /// The input file could not be opened or read.
    #[error("Input file '{}' not found", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The interpreter could not be launched or exited with a non-zero status.
    #[error("Error running Linefeed script: {reason}")]
    ProcessExecution { reason: String, stderr: String },
    /// The interpreter succeeded but its stderr held no recognisable run time.
    #[error("Could not find 'Run time' in stderr: {source}")]
    TimingParse {
        #[source]
        source: DurationParseError,
        stderr: String,
    },
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl TrialError {
    pub fn kind(&self) -> TrialErrorKind {
        match self {
            TrialError::InputNotFound { .. } => TrialErrorKind::InputNotFound,
            TrialError::ProcessExecution { .. } => TrialErrorKind::ProcessExecutionError,
            TrialError::TimingParse { .. } => TrialErrorKind::TimingParseError,
            TrialError::Unexpected(_) => TrialErrorKind::UnexpectedError,
        }
    }

    /// The interpreter's captured stderr, if the trial got far enough to capture any.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            TrialError::ProcessExecution { stderr, .. }
            | TrialError::TimingParse { stderr, .. } => Some(stderr),
            TrialError::InputNotFound { .. } | TrialError::Unexpected(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_classify_errors() {
        let err = TrialError::InputNotFound {
            path: PathBuf::from("inputs/day01.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.kind(), TrialErrorKind::InputNotFound);
        assert_eq!(err.diagnostic(), None);
        assert_eq!(err.to_string(), "Input file 'inputs/day01.txt' not found");

        let err = TrialError::TimingParse {
            source: DurationParseError::NotFound,
            stderr: "oops".to_string(),
        };
        assert_eq!(err.kind(), TrialErrorKind::TimingParseError);
        assert_eq!(err.diagnostic(), Some("oops"));
    }

    #[test]
    fn test_should_expose_stderr_of_failed_process() {
        let err = TrialError::ProcessExecution {
            reason: "exit status: 1".to_string(),
            stderr: "Parse error at line 3".to_string(),
        };
        assert_eq!(err.kind(), TrialErrorKind::ProcessExecutionError);
        assert_eq!(err.diagnostic(), Some("Parse error at line 3"));
        assert_eq!(err.kind().to_string(), "ProcessExecutionError");
    }
}
