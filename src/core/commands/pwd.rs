use super::{Builtin, Context};
use crate::core::state::Signal;
use crate::error::ShellResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PwdCommand;

impl Builtin for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn description(&self) -> &'static str {
        "Print working directory"
    }

    fn invoke(&self, _args: &[String], ctx: &mut Context<'_>) -> ShellResult<Signal> {
        writeln!(ctx.out, "{}", ctx.state.working_directory.display())?;
        Ok(Signal::Continue)
    }
}
