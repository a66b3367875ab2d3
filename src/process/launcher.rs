use super::exec::ExecArgs;
use super::sys::{self, ForkResult};
use crate::core::state::{ShellState, Signal};
use crate::error::{ShellError, ShellResult};

/// Runs one external command in a child process and waits for it.
///
/// The child's status lands in `state.last_exit_status`. A failing exec is
/// reported by the child itself, which exits with
/// [`EXEC_FAILURE_STATUS`](super::EXEC_FAILURE_STATUS). A failing fork is
/// returned to the caller; the shell keeps running either way.
pub fn launch(args: &[String], state: &mut ShellState) -> ShellResult<Signal> {
    let exec = ExecArgs::new(args)?;
    super::flush_stdout();

    match unsafe { sys::fork() }.map_err(ShellError::ForkFailed)? {
        ForkResult::Child => exec.exec_or_exit(),
        ForkResult::Parent { child } => {
            tracing::debug!(pid = child.as_raw(), command = %args[0], "spawned child");
            let status = sys::wait_for(child)?;
            tracing::debug!(pid = child.as_raw(), status, "child exited");
            state.last_exit_status = status;
            Ok(Signal::Continue)
        }
    }
}
