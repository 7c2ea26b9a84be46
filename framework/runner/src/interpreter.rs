use std::fmt;
use std::path::Path;
use std::process::Command;

use anyhow::bail;

use crate::types::LinefeedBenchResult;

/// Environment variable to override the command used to run Linefeed scripts.
pub const LF_BENCH_INTERPRETER_ENV: &str = "LF_BENCH_INTERPRETER";

/// Builds the interpreter from the current checkout and runs the script with it.
pub const DEFAULT_INTERPRETER: &str = "cargo run --release --";

/// The command line that runs a Linefeed script: a program and any arguments that come before the
/// script path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterCommand {
    program: String,
    args: Vec<String>,
}

impl InterpreterCommand {
    /// Split `command_line` on whitespace into the program and its leading arguments.
    ///
    /// Quoting is not supported, a program path containing spaces cannot be expressed.
    pub fn parse(command_line: &str) -> LinefeedBenchResult<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let Some(program) = parts.next() else {
            bail!("Interpreter command is empty, set '--interpreter' or '{LF_BENCH_INTERPRETER_ENV}' to the command that runs a Linefeed script");
        };

        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// A command that runs `script`, with the script path as the final argument.
    pub fn command_for(&self, script: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(script);
        cmd
    }
}

impl Default for InterpreterCommand {
    fn default() -> Self {
        Self {
            program: "cargo".to_string(),
            args: vec!["run".to_string(), "--release".to_string(), "--".to_string()],
        }
    }
}

impl fmt::Display for InterpreterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_should_parse_default_interpreter() {
        let cmd = InterpreterCommand::parse(DEFAULT_INTERPRETER).unwrap();
        assert_eq!(cmd, InterpreterCommand::default());
        assert_eq!(cmd.to_string(), DEFAULT_INTERPRETER);
    }

    #[test]
    fn test_should_parse_bare_program() {
        let cmd = InterpreterCommand::parse("  target/release/linefeed ").unwrap();
        assert_eq!(cmd.program(), "target/release/linefeed");
        assert_eq!(cmd.to_string(), "target/release/linefeed");
    }

    #[test]
    fn test_should_not_parse_blank_command() {
        assert!(InterpreterCommand::parse("").is_err());
        assert!(InterpreterCommand::parse(" \t ").is_err());
    }

    #[test]
    fn test_should_append_script_as_last_argument() {
        let cmd = InterpreterCommand::default().command_for(Path::new("day01.lf"));

        assert_eq!(cmd.get_program(), "cargo");
        let args = cmd
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        assert_eq!(args, vec!["run", "--release", "--", "day01.lf"]);
    }
}
