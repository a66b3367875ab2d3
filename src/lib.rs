pub mod core;
pub mod error;
pub mod flags;
pub mod input;
pub mod logging;
pub mod process;
pub mod shell;

#[cfg(test)]
mod test_support;

pub use crate::core::state::{ShellState, Signal};
pub use error::{ErrorKind, ShellError, ShellResult};
