use std::env;
use std::path::{Path, PathBuf};

use crate::error::ShellResult;

/// Status recorded when a line fails before or instead of running a command,
/// or when its outcome cannot be collected.
pub const FAILURE_STATUS: i32 = 1;

/// Result of executing one line: keep reading input or end the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Terminate,
}

/// Mutable state of one shell session, owned by the REPL driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    pub working_directory: PathBuf,
    pub last_exit_status: i32,
    pub should_exit: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellState {
    /// Snapshots the process working directory, falling back to `/` when it
    /// cannot be read (for instance after it was removed).
    pub fn new() -> Self {
        let working_directory = env::current_dir().unwrap_or_else(|e| {
            tracing::warn!("cannot read working directory: {}", e);
            PathBuf::from("/")
        });
        Self::with_directory(working_directory)
    }

    pub fn with_directory(path: impl Into<PathBuf>) -> Self {
        Self {
            working_directory: path.into(),
            last_exit_status: 0,
            should_exit: false,
        }
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn refresh_working_directory(&mut self) -> ShellResult<()> {
        self.working_directory = env::current_dir()?;
        Ok(())
    }
}
