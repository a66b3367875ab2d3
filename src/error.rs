use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Discriminant of a [`ShellError`], used where callers only care about the
/// failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ForkFailed,
    PipeCreateFailed,
    DescriptorRedirectFailed,
    ExecFailed,
    ChdirFailed,
    NoHome,
    EmptyStage,
    Other,
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("fork failed: {0}")]
    ForkFailed(#[source] io::Error),

    #[error("pipe creation failed: {0}")]
    PipeCreateFailed(#[source] io::Error),

    #[error("descriptor redirect failed: {0}")]
    DescriptorRedirectFailed(#[source] io::Error),

    #[error("{command}: {source}")]
    ExecFailed {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("cd: {}: {source}", .path.display())]
    ChdirFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cd: HOME environment variable not set")]
    NoHome,

    #[error("syntax error: pipeline stage {} is empty", .index + 1)]
    EmptyStage { index: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("Ctrl-C handler error: {0}")]
    CtrlC(#[from] ctrlc::Error),
}

impl ShellError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShellError::ForkFailed(_) => ErrorKind::ForkFailed,
            ShellError::PipeCreateFailed(_) => ErrorKind::PipeCreateFailed,
            ShellError::DescriptorRedirectFailed(_) => ErrorKind::DescriptorRedirectFailed,
            ShellError::ExecFailed { .. } => ErrorKind::ExecFailed,
            ShellError::ChdirFailed { .. } => ErrorKind::ChdirFailed,
            ShellError::NoHome => ErrorKind::NoHome,
            ShellError::EmptyStage { .. } => ErrorKind::EmptyStage,
            _ => ErrorKind::Other,
        }
    }
}

pub type ShellResult<T> = Result<T, ShellError>;
