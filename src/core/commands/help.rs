use super::{Builtin, BuiltinRegistry, Context};
use crate::core::state::Signal;
use crate::error::ShellResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HelpCommand;

impl Builtin for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Display help information"
    }

    fn invoke(&self, _args: &[String], ctx: &mut Context<'_>) -> ShellResult<Signal> {
        writeln!(ctx.out, "KSH - Simple Shell")?;
        writeln!(ctx.out, "Built-in commands:")?;
        for cmd in BuiltinRegistry::new().list() {
            writeln!(ctx.out, "  {:<10} - {}", cmd.name(), cmd.description())?;
        }
        writeln!(ctx.out)?;
        writeln!(ctx.out, "Use 'man <command>' to learn about other commands.")?;
        writeln!(ctx.out, "Supports piping with '|' operator.")?;
        Ok(Signal::Continue)
    }
}
