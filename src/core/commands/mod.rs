use std::io::Write;

mod cd;
mod echo;
mod exit;
mod help;
mod history;
mod pwd;

pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use history::HistoryCommand;
pub use pwd::PwdCommand;

use crate::core::state::{ShellState, Signal};
use crate::error::ShellResult;
use crate::input::History;

/// Everything a builtin may read or mutate while it runs.
pub struct Context<'a> {
    pub state: &'a mut ShellState,
    pub history: &'a History,
    pub out: &'a mut dyn Write,
}

/// A command implemented inside the shell process.
///
/// `args` is the full argument vector; `args[0]` is the command name.
pub trait Builtin {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn invoke(&self, args: &[String], ctx: &mut Context<'_>) -> ShellResult<Signal>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinKind {
    Cd(CdCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
    Pwd(PwdCommand),
    Echo(EchoCommand),
    History(HistoryCommand),
}

static BUILTINS: [BuiltinKind; 6] = [
    BuiltinKind::Cd(CdCommand),
    BuiltinKind::Help(HelpCommand),
    BuiltinKind::Exit(ExitCommand),
    BuiltinKind::Pwd(PwdCommand),
    BuiltinKind::Echo(EchoCommand),
    BuiltinKind::History(HistoryCommand),
];

impl BuiltinKind {
    fn as_builtin(&self) -> &dyn Builtin {
        match self {
            BuiltinKind::Cd(cmd) => cmd,
            BuiltinKind::Help(cmd) => cmd,
            BuiltinKind::Exit(cmd) => cmd,
            BuiltinKind::Pwd(cmd) => cmd,
            BuiltinKind::Echo(cmd) => cmd,
            BuiltinKind::History(cmd) => cmd,
        }
    }
}

impl Builtin for BuiltinKind {
    fn name(&self) -> &'static str {
        self.as_builtin().name()
    }

    fn description(&self) -> &'static str {
        self.as_builtin().description()
    }

    fn invoke(&self, args: &[String], ctx: &mut Context<'_>) -> ShellResult<Signal> {
        self.as_builtin().invoke(args, ctx)
    }
}

/// Fixed, read-only table of builtins, consulted before anything is spawned.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinRegistry {
    entries: &'static [BuiltinKind],
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self {
            entries: &BUILTINS,
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn find(&self, name: &str) -> Option<BuiltinKind> {
        self.entries.iter().copied().find(|cmd| cmd.name() == name)
    }

    pub fn list(&self) -> &'static [BuiltinKind] {
        self.entries
    }
}
