use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// Matches the timing line the interpreter writes to stderr, e.g. `Run time: 1.234567ms`.
///
/// The unit alternatives are tried in order, so `ms` is only picked when the token is not a bare
/// `s`.
static RUN_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Run time: (\d+(?:\.\d+)?)(s|ms|µs)").expect("run time pattern is valid")
});

/// The units the interpreter may report its run time in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TimeUnit {
    #[display("s")]
    Seconds,
    #[display("ms")]
    Milliseconds,
    #[display("µs")]
    Microseconds,
}

impl TimeUnit {
    /// Convert a value in this unit to milliseconds.
    pub fn to_millis(self, value: f64) -> f64 {
        match self {
            TimeUnit::Seconds => value * 1_000.0,
            TimeUnit::Milliseconds => value,
            TimeUnit::Microseconds => value / 1_000.0,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(TimeUnit::Seconds),
            "ms" => Ok(TimeUnit::Milliseconds),
            // U+00B5 MICRO SIGN, as written by Rust's `Debug` for `Duration`.
            "µs" => Ok(TimeUnit::Microseconds),
            other => Err(DurationParseError::UnknownUnit(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DurationParseError {
    #[error("Could not find 'Run time' in the diagnostic output")]
    NotFound,
    #[error("Unrecognised time unit '{0}'")]
    UnknownUnit(String),
    #[error("Invalid run time value '{0}'")]
    InvalidNumber(String),
}

/// Find the first `Run time: <number><unit>` in `text` and return it in milliseconds.
///
/// Only `s`, `ms` and `µs` are recognised. A timing line in any other unit, for example `ns`,
/// does not match. A value too large to represent as a finite number of milliseconds is rejected.
pub fn extract_duration_ms(text: &str) -> Result<f64, DurationParseError> {
    let captures = RUN_TIME_PATTERN
        .captures(text)
        .ok_or(DurationParseError::NotFound)?;

    let value_str = &captures[1];
    let unit = captures[2].parse::<TimeUnit>()?;
    let millis = value_str
        .parse::<f64>()
        .map(|value| unit.to_millis(value))
        .ok()
        .filter(|millis| millis.is_finite())
        .ok_or_else(|| DurationParseError::InvalidNumber(value_str.to_string()))?;

    Ok(millis)
}
