use std::io::{self, Write};

mod exec;
pub mod launcher;
pub mod orchestrator;
mod signal;
mod sys;

pub use exec::EXEC_FAILURE_STATUS;
pub use launcher::launch;
pub use orchestrator::Orchestrator;

/// Flushes buffered shell output so it cannot interleave with, or be
/// duplicated into, a forked child.
fn flush_stdout() {
    if let Err(e) = io::stdout().flush() {
        tracing::debug!("stdout flush failed: {}", e);
    }
}
