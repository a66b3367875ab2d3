use nix::sys::signal::{signal, SigHandler, Signal};

/// Dispositions the shell process changes (the Rust runtime ignores SIGPIPE,
/// the REPL catches SIGINT) and which a launched program must not inherit.
const RESET_IN_CHILD: [Signal; 2] = [Signal::SIGPIPE, Signal::SIGINT];

/// Restores default dispositions. Async-signal-safe; called in forked
/// children before exec.
pub(crate) fn reset_child_signals() {
    for sig in RESET_IN_CHILD {
        let _ = unsafe { signal(sig, SigHandler::SigDfl) };
    }
}
