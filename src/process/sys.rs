//! Process and descriptor calls made around `fork`, on top of `nix`.

use std::io;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};

use nix::errno::Errno;
use nix::fcntl::{fcntl, FcntlArg};
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::{self, Pid};

pub(crate) use nix::unistd::ForkResult;

use crate::error::ShellError;

/// Pipe endpoints never occupy the standard descriptors, even when the shell
/// was started with one of them closed.
const MIN_PIPE_FD: RawFd = 3;

/// Retries `f` while it fails with `EINTR`.
fn syscall<F, T>(mut f: F) -> nix::Result<T>
where
    F: FnMut() -> nix::Result<T>,
{
    loop {
        match f() {
            Err(Errno::EINTR) => (),
            result => return result,
        }
    }
}

/// Signature shared by [`fork`] and the stand-ins tests install.
pub(crate) type ForkFn = unsafe fn() -> io::Result<ForkResult>;

/// # Safety
///
/// The child side may only perform async-signal-safe work before it calls
/// `exec` or `_exit` when other threads exist in the process.
pub(crate) unsafe fn fork() -> io::Result<ForkResult> {
    Ok(unistd::fork()?)
}

/// Creates a pipe as `(read, write)`. Both ends are close-on-exec.
pub(crate) fn pipe() -> io::Result<(OwnedFd, OwnedFd)> {
    let (read, write) = unistd::pipe()?;
    Ok((relocate(read)?, relocate(write)?))
}

/// Moves `fd` to the lowest free descriptor at or above [`MIN_PIPE_FD`] with
/// close-on-exec set. The original descriptor is closed.
fn relocate(fd: OwnedFd) -> io::Result<OwnedFd> {
    let raw = syscall(|| fcntl(fd.as_raw_fd(), FcntlArg::F_DUPFD_CLOEXEC(MIN_PIPE_FD)))?;
    Ok(unsafe { OwnedFd::from_raw_fd(raw) })
}

/// Duplicates `fd` onto `target`. The duplicate does not carry close-on-exec.
pub(crate) fn dup2(fd: RawFd, target: RawFd) -> io::Result<()> {
    syscall(|| unistd::dup2(fd, target))?;
    Ok(())
}

/// Blocks until `pid` terminates and returns its status: the exit code for a
/// normal exit, `128 + signal` for a signal death. Stop notifications are
/// ignored.
pub(crate) fn wait_for(pid: Pid) -> io::Result<i32> {
    loop {
        match syscall(|| waitpid(pid, Some(WaitPidFlag::WUNTRACED)))? {
            WaitStatus::Exited(_, code) => return Ok(code),
            WaitStatus::Signaled(_, signal, _) => return Ok(128 + signal as i32),
            _ => continue,
        }
    }
}

/// Terminates the calling process without running destructors or atexit
/// handlers. Used by forked children.
pub(crate) fn exit_child(code: i32) -> ! {
    // SAFETY: `_exit` is async-signal-safe and never returns.
    unsafe { libc::_exit(code) }
}

/// Child side: prints `ksh: <err>` on stderr.
pub(crate) fn report(err: &ShellError) {
    write_stderr(&[b"ksh: ", err.to_string().as_bytes(), b"\n"]);
}

/// Writes every part to stderr with raw `write(2)`, ignoring failures.
fn write_stderr(parts: &[&[u8]]) {
    for part in parts {
        let mut rest = *part;
        while !rest.is_empty() {
            let n = unsafe {
                libc::write(
                    libc::STDERR_FILENO,
                    rest.as_ptr().cast::<libc::c_void>(),
                    rest.len(),
                )
            };
            if n <= 0 {
                if n == -1 && Errno::last() == Errno::EINTR {
                    continue;
                }
                return;
            }
            rest = &rest[n as usize..];
        }
    }
}
