use std::io::Write;

use super::pipeline::Pipeline;
use super::prompt::Styler;
use crate::core::commands::{Builtin, BuiltinRegistry, Context};
use crate::core::state::{ShellState, Signal, FAILURE_STATUS};
use crate::error::ShellResult;
use crate::input::History;
use crate::process::{self, Orchestrator};

/// Turns one raw input line into builtin calls or child processes.
pub struct Executor {
    registry: BuiltinRegistry,
    styler: Styler,
}

impl Executor {
    pub fn new(styler: Styler) -> Self {
        Self {
            registry: BuiltinRegistry::new(),
            styler,
        }
    }

    /// Runs `line` and updates `state`. Errors are reported on stderr, record
    /// [`FAILURE_STATUS`] and never end the session; only `exit` does.
    pub fn execute_line(
        &self,
        line: &str,
        state: &mut ShellState,
        history: &History,
        out: &mut dyn Write,
    ) -> Signal {
        match self.dispatch(line, state, history, out) {
            Ok(signal) => signal,
            Err(e) => {
                eprintln!("{}", self.styler.error_line(&e));
                state.last_exit_status = FAILURE_STATUS;
                Signal::Continue
            }
        }
    }

    fn dispatch(
        &self,
        line: &str,
        state: &mut ShellState,
        history: &History,
        out: &mut dyn Write,
    ) -> ShellResult<Signal> {
        let pipeline = Pipeline::parse(line)?;

        if !pipeline.is_single() {
            return Orchestrator::new(&self.registry, history).run(&pipeline, state);
        }

        let stage = &pipeline.stages()[0];
        let Some(command) = stage.command() else {
            return Ok(Signal::Continue);
        };

        match self.registry.find(command) {
            Some(builtin) => {
                tracing::debug!(builtin = command, "dispatching builtin");
                let signal = builtin.invoke(
                    &stage.args,
                    &mut Context {
                        state: &mut *state,
                        history,
                        out: &mut *out,
                    },
                )?;
                out.flush()?;
                if signal == Signal::Continue {
                    state.last_exit_status = 0;
                }
                Ok(signal)
            }
            None => process::launch(&stage.args, state),
        }
    }
}
