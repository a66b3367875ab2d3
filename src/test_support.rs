//! Helpers for tests that touch process-wide state: the working directory,
//! environment variables, forked children and open descriptors.

use std::env;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use nix::errno::Errno;
use nix::sys::wait::{waitpid, WaitPidFlag};
use nix::unistd::Pid;
use tracing_subscriber::fmt::MakeWriter;

static PROCESS_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that depend on process-wide state.
pub fn serial() -> MutexGuard<'static, ()> {
    PROCESS_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Restores the working directory on drop.
pub struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    pub fn new() -> Self {
        Self {
            original: env::current_dir().unwrap_or_else(|_| env::temp_dir()),
        }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original);
    }
}

/// Restores one environment variable on drop.
pub struct EnvGuard {
    name: &'static str,
    original: Option<OsString>,
}

impl EnvGuard {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            original: env::var_os(name),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.original {
            Some(value) => env::set_var(self.name, value),
            None => env::remove_var(self.name),
        }
    }
}

/// Number of descriptors currently open in this process.
#[cfg(target_os = "linux")]
pub fn open_fd_count() -> usize {
    std::fs::read_dir("/proc/self/fd")
        .map(|dir| dir.count())
        .unwrap_or(0)
}

/// True when this process has no child left to reap, running or zombie.
pub fn no_children_left() -> bool {
    matches!(
        waitpid(Pid::from_raw(-1), Some(WaitPidFlag::WNOHANG)),
        Err(Errno::ECHILD)
    )
}

/// In-memory sink for `tracing` output, for tests that check what is logged.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Runs `f` with a subscriber that records every event into this buffer.
    pub fn record<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(self.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
