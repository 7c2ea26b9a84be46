use std::io::{self, Write as _};
use std::process::{ChildStdin, Stdio};

use linefeed_bench_core::prelude::{extract_duration_ms, TrialError, TrialOutcome, WorkloadSpec};

use crate::interpreter::InterpreterCommand;

/// Runs trials of a workload by launching the interpreter once per trial.
///
/// Trials run one after another and each process is waited on before the next one starts, so
/// measurements are not skewed by other interpreter instances.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    interpreter: InterpreterCommand,
}

impl ProcessRunner {
    pub fn new(interpreter: InterpreterCommand) -> Self {
        Self { interpreter }
    }

    /// Run up to `trial_count` trials of `spec`, see [ProcessRunner::run_trials_with].
    pub fn run_trials(&self, spec: &WorkloadSpec, trial_count: usize) -> Vec<TrialOutcome> {
        self.run_trials_with(spec, trial_count, |_, _| {})
    }

    /// Run up to `trial_count` trials of `spec`, calling `on_trial` with the 1-based trial number
    /// as each one completes.
    ///
    /// The first failed trial is the last one attempted, the workload's environment is broken and
    /// further attempts would fail the same way. The returned outcomes are in trial order.
    pub fn run_trials_with<F>(
        &self,
        spec: &WorkloadSpec,
        trial_count: usize,
        mut on_trial: F,
    ) -> Vec<TrialOutcome>
    where
        F: FnMut(usize, &TrialOutcome),
    {
        let mut outcomes = Vec::with_capacity(trial_count);

        for run in 1..=trial_count {
            let outcome = self.run_trial(spec);
            on_trial(run, &outcome);

            let failed = outcome.is_err();
            outcomes.push(outcome);
            if failed {
                log::debug!(
                    "Skipping the remaining {} trials of workload {}",
                    trial_count - run,
                    spec.file_name()
                );
                break;
            }
        }

        outcomes
    }

    /// Run the interpreter once on `spec` and extract the run time it reports on stderr.
    pub fn run_trial(&self, spec: &WorkloadSpec) -> TrialOutcome {
        let input = match std::fs::read(&spec.input_path) {
            Ok(input) => input,
            Err(source) => {
                return Err(TrialError::InputNotFound {
                    path: spec.input_path.clone(),
                    source,
                });
            }
        };

        let mut child = self
            .interpreter
            .command_for(&spec.script_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| TrialError::ProcessExecution {
                reason: format!("Failed to launch '{}': {e}", self.interpreter),
                stderr: String::new(),
            })?;
        log::debug!("Running interpreter with PID: {pid}", pid = child.id());

        // Feed stdin from a second thread while this one drains stdout and stderr, otherwise a
        // child that writes before it has read all of its input can fill a pipe and block both.
        let stdin = child.stdin.take();
        let (written, output) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || write_input(stdin, &input));
            let output = child.wait_with_output();
            (writer.join(), output)
        });

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                return Err(TrialError::Unexpected(format!(
                    "Failed to wait for the interpreter: {e}"
                )));
            }
        };
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        log::debug!("Interpreter finished with status: {}", output.status);
        log::trace!("Interpreter stdout:\n{}", String::from_utf8_lossy(&output.stdout));

        if !output.status.success() {
            return Err(TrialError::ProcessExecution {
                reason: format!(
                    "Command '{} {}' returned {}",
                    self.interpreter,
                    spec.script_path.display(),
                    output.status
                ),
                stderr,
            });
        }

        match written {
            Ok(Ok(())) => {}
            // The interpreter is free to exit without reading all of its input.
            Ok(Err(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
                log::debug!("Interpreter closed stdin early: {e}");
            }
            Ok(Err(e)) => {
                return Err(TrialError::Unexpected(format!(
                    "Failed to write input to the interpreter: {e}"
                )));
            }
            Err(_) => {
                return Err(TrialError::Unexpected("Input writer thread panicked".to_string()));
            }
        }

        extract_duration_ms(&stderr).map_err(|source| TrialError::TimingParse { source, stderr })
    }
}

fn write_input(stdin: Option<ChildStdin>, input: &[u8]) -> io::Result<()> {
    match stdin {
        // Dropping the handle afterwards closes the pipe so the interpreter sees end of input.
        Some(mut stdin) => stdin.write_all(input),
        None => Ok(()),
    }
}
