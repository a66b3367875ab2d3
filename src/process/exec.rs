use std::ffi::CString;
use std::io;

use nix::errno::Errno;
use nix::unistd;

use super::sys;
use crate::error::{ShellError, ShellResult};

/// Exit status of a child whose image replacement failed.
pub const EXEC_FAILURE_STATUS: i32 = 127;

/// An argument vector converted to the C strings `execvp` wants.
///
/// Built in the parent before forking, so an argument that cannot reach exec
/// is rejected without spawning anything.
pub(crate) struct ExecArgs {
    command: String,
    args: Vec<CString>,
}

impl ExecArgs {
    pub fn new(args: &[String]) -> ShellResult<Self> {
        let Some(command) = args.first() else {
            return Err(ShellError::InvalidArgument("empty command".to_string()));
        };

        let args = args
            .iter()
            .map(|arg| {
                CString::new(arg.as_bytes()).map_err(|_| {
                    ShellError::InvalidArgument(format!("{}: argument contains NUL byte", arg.escape_debug()))
                })
            })
            .collect::<ShellResult<Vec<_>>>()?;

        Ok(Self {
            command: command.clone(),
            args,
        })
    }

    /// Child side: replaces the image or reports the failure on stderr and
    /// exits with [`EXEC_FAILURE_STATUS`]. Never returns.
    pub fn exec_or_exit(&self) -> ! {
        super::signal::reset_child_signals();
        let errno = match unistd::execvp(&self.args[0], &self.args) {
            Ok(never) => match never {},
            Err(errno) => errno,
        };
        sys::report(&self.failure(errno));
        sys::exit_child(EXEC_FAILURE_STATUS)
    }

    fn failure(&self, errno: Errno) -> ShellError {
        let reason = match errno {
            Errno::ENOENT => "command not found",
            errno => errno.desc(),
        };
        ShellError::ExecFailed {
            command: self.command.clone(),
            source: io::Error::new(io::Error::from(errno).kind(), reason),
        }
    }
}
