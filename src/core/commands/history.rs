use super::{Builtin, Context};
use crate::core::state::Signal;
use crate::error::ShellResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryCommand;

impl Builtin for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn description(&self) -> &'static str {
        "Display history"
    }

    fn invoke(&self, _args: &[String], ctx: &mut Context<'_>) -> ShellResult<Signal> {
        ctx.history.render(ctx.out)?;
        Ok(Signal::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ShellState;
    use crate::input::History;

    #[test]
    fn test_lists_entries_with_ordinals() {
        let mut history = History::new(10);
        history.append("ls -la");
        history.append("history");

        let mut state = ShellState::with_directory("/");
        let mut out = Vec::new();
        let signal = HistoryCommand
            .invoke(
                &["history".to_string()],
                &mut Context {
                    state: &mut state,
                    history: &history,
                    out: &mut out,
                },
            )
            .unwrap();

        assert_eq!(signal, Signal::Continue);
        assert_eq!(String::from_utf8(out).unwrap(), "1 ls -la\n2 history\n");
    }
}
