use super::{Builtin, Context};
use crate::core::state::Signal;
use crate::error::ShellResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExitCommand;

impl Builtin for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Exit the shell"
    }

    /// A missing or non-numeric code exits with 0.
    fn invoke(&self, args: &[String], ctx: &mut Context<'_>) -> ShellResult<Signal> {
        let code = args
            .get(1)
            .and_then(|arg| arg.trim().parse::<i32>().ok())
            .unwrap_or(0);

        ctx.state.should_exit = true;
        ctx.state.last_exit_status = code;
        Ok(Signal::Terminate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ShellState;
    use crate::input::History;

    fn run(args: &[&str]) -> (Signal, ShellState) {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut state = ShellState::with_directory("/");
        state.last_exit_status = 3;
        let history = History::default();
        let mut out = Vec::new();
        let signal = ExitCommand
            .invoke(
                &args,
                &mut Context {
                    state: &mut state,
                    history: &history,
                    out: &mut out,
                },
            )
            .unwrap();
        (signal, state)
    }

    #[test]
    fn test_exit_with_code() {
        let (signal, state) = run(&["exit", "7"]);
        assert_eq!(signal, Signal::Terminate);
        assert!(state.should_exit);
        assert_eq!(state.last_exit_status, 7);
    }

    #[test]
    fn test_exit_default_code() {
        let (signal, state) = run(&["exit"]);
        assert_eq!(signal, Signal::Terminate);
        assert_eq!(state.last_exit_status, 0);
    }

    #[test]
    fn test_exit_non_numeric() {
        let (_, state) = run(&["exit", "abc"]);
        assert!(state.should_exit);
        assert_eq!(state.last_exit_status, 0);
    }
}
