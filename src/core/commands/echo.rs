use super::{Builtin, Context};
use crate::core::state::Signal;
use crate::error::ShellResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EchoCommand;

impl Builtin for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn description(&self) -> &'static str {
        "Display text"
    }

    fn invoke(&self, args: &[String], ctx: &mut Context<'_>) -> ShellResult<Signal> {
        let words = args.get(1..).unwrap_or_default();
        writeln!(ctx.out, "{}", words.join(" "))?;
        Ok(Signal::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ShellState;
    use crate::input::History;

    fn echo(args: &[&str]) -> String {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut state = ShellState::with_directory("/");
        let history = History::default();
        let mut out = Vec::new();
        EchoCommand
            .invoke(
                &args,
                &mut Context {
                    state: &mut state,
                    history: &history,
                    out: &mut out,
                },
            )
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_joins_with_single_space() {
        assert_eq!(echo(&["echo", "a", "b", "c"]), "a b c\n");
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(echo(&["echo"]), "\n");
    }

    #[test]
    fn test_keeps_inner_whitespace_of_arguments() {
        assert_eq!(echo(&["echo", "a  b", "c"]), "a  b c\n");
    }
}
