use std::fs::File;
use std::mem::ManuallyDrop;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};

use nix::unistd::{self, Pid};

use super::exec::ExecArgs;
use super::sys::{self, ForkFn, ForkResult};
use crate::core::commands::{Builtin, BuiltinKind, BuiltinRegistry, Context};
use crate::core::state::{ShellState, Signal, FAILURE_STATUS};
use crate::error::{ShellError, ShellResult};
use crate::input::History;
use crate::shell::pipeline::{Pipeline, Stage};

/// The N-1 pipes joining N stages. Pipe `i` carries stage `i`'s stdout to
/// stage `i + 1`'s stdin. Dropping the set closes every endpoint.
struct PipeSet {
    pipes: Vec<(OwnedFd, OwnedFd)>,
}

impl PipeSet {
    /// All pipes or none: on failure the ones already made are closed.
    ///
    /// Every endpoint is close-on-exec so that a child forked elsewhere in the
    /// process never inherits it. The `dup2` copies made in the stage children
    /// do not carry the flag.
    fn new(count: usize) -> ShellResult<Self> {
        let pipes = (0..count)
            .map(|_| sys::pipe().map_err(ShellError::PipeCreateFailed))
            .collect::<ShellResult<Vec<_>>>()?;
        Ok(Self { pipes })
    }

    fn read_end(&self, index: usize) -> RawFd {
        self.pipes[index].0.as_raw_fd()
    }

    fn write_end(&self, index: usize) -> RawFd {
        self.pipes[index].1.as_raw_fd()
    }

    /// Child side: closes every endpoint without touching the owned handles,
    /// which are never dropped because the child ends in exec or `_exit`.
    fn close_in_child(&self) {
        for (read, write) in &self.pipes {
            let _ = unistd::close(read.as_raw_fd());
            let _ = unistd::close(write.as_raw_fd());
        }
    }
}

/// What a stage runs once its descriptors are wired.
enum StageProgram {
    External(ExecArgs),
    Builtin(BuiltinKind),
}

impl StageProgram {
    fn prepare(stage: &Stage, registry: &BuiltinRegistry) -> ShellResult<Self> {
        let command = stage
            .command()
            .ok_or(ShellError::EmptyStage { index: stage.index })?;
        match registry.find(command) {
            Some(builtin) => Ok(StageProgram::Builtin(builtin)),
            None => Ok(StageProgram::External(ExecArgs::new(&stage.args)?)),
        }
    }
}

/// Runs pipelines of two or more stages.
pub struct Orchestrator<'a> {
    registry: &'a BuiltinRegistry,
    history: &'a History,
    fork: ForkFn,
}

impl<'a> Orchestrator<'a> {
    pub fn new(registry: &'a BuiltinRegistry, history: &'a History) -> Self {
        Self {
            registry,
            history,
            fork: sys::fork,
        }
    }

    #[cfg(test)]
    fn with_fork(mut self, fork: ForkFn) -> Self {
        self.fork = fork;
        self
    }

    /// Forks one child per stage, wires them with pipes and waits for all of
    /// them. The last stage's status becomes `state.last_exit_status`.
    ///
    /// Nothing is forked when a stage cannot be prepared or a pipe cannot be
    /// created. When a fork fails midway the children already running are
    /// still reaped before the error is returned.
    pub fn run(&self, pipeline: &Pipeline, state: &mut ShellState) -> ShellResult<Signal> {
        let stages = pipeline.stages();
        let programs = stages
            .iter()
            .map(|stage| StageProgram::prepare(stage, self.registry))
            .collect::<ShellResult<Vec<_>>>()?;

        let pipes = PipeSet::new(stages.len().saturating_sub(1))?;
        super::flush_stdout();

        let mut children: Vec<(usize, Pid)> = Vec::with_capacity(stages.len());
        let mut fork_error = None;

        for (index, program) in programs.iter().enumerate() {
            match unsafe { (self.fork)() } {
                Ok(ForkResult::Child) => self.run_child(index, stages, program, &pipes, state),
                Ok(ForkResult::Parent { child }) => {
                    tracing::debug!(pid = child.as_raw(), stage = index, "spawned pipeline stage");
                    children.push((index, child));
                }
                Err(e) => {
                    fork_error = Some(ShellError::ForkFailed(e));
                    break;
                }
            }
        }

        drop(pipes);

        let last = stages.len() - 1;
        let mut last_status = None;
        for (index, pid) in children {
            let status = match sys::wait_for(pid) {
                Ok(status) => {
                    tracing::debug!(pid = pid.as_raw(), stage = index, status, "pipeline stage exited");
                    status
                }
                Err(e) => {
                    tracing::warn!(pid = pid.as_raw(), "waitpid failed: {}", e);
                    FAILURE_STATUS
                }
            };
            if index == last {
                last_status = Some(status);
            }
        }

        if let Some(err) = fork_error {
            return Err(err);
        }
        if let Some(status) = last_status {
            state.last_exit_status = status;
        }
        Ok(Signal::Continue)
    }

    fn run_child(
        &self,
        index: usize,
        stages: &[Stage],
        program: &StageProgram,
        pipes: &PipeSet,
        state: &ShellState,
    ) -> ! {
        if index > 0 {
            redirect_or_exit(pipes.read_end(index - 1), libc::STDIN_FILENO);
        }
        if index < stages.len() - 1 {
            redirect_or_exit(pipes.write_end(index), libc::STDOUT_FILENO);
        }
        pipes.close_in_child();
        super::signal::reset_child_signals();

        match program {
            StageProgram::External(exec) => exec.exec_or_exit(),
            StageProgram::Builtin(builtin) => {
                sys::exit_child(self.run_builtin(*builtin, &stages[index].args, state))
            }
        }
    }

    /// Runs a builtin inside a pipeline child against the child's own copy of
    /// the state. Returns the child's exit status.
    fn run_builtin(&self, builtin: BuiltinKind, args: &[String], state: &ShellState) -> i32 {
        let mut state = state.clone();
        // fd 1 is already the pipe (or the terminal for the last stage) and
        // must stay open until `_exit`.
        let mut out = ManuallyDrop::new(unsafe { File::from_raw_fd(libc::STDOUT_FILENO) });
        let mut ctx = Context {
            state: &mut state,
            history: self.history,
            out: &mut *out,
        };

        match builtin.invoke(args, &mut ctx) {
            Ok(Signal::Continue) => 0,
            Ok(Signal::Terminate) => state.last_exit_status,
            Err(e) => {
                sys::report(&e);
                FAILURE_STATUS
            }
        }
    }
}

fn redirect_or_exit(fd: RawFd, target: RawFd) {
    if let Err(e) = sys::dup2(fd, target) {
        sys::report(&ShellError::DescriptorRedirectFailed(e));
        sys::exit_child(FAILURE_STATUS);
    }
}
