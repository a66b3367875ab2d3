use std::io;

use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};

pub mod executor;
pub mod pipeline;
pub mod prompt;
pub mod tokenizer;

pub use executor::Executor;
pub use pipeline::{Pipeline, Stage};
pub use prompt::Styler;

use crate::{
    core::{config::Config, state::ShellState, state::Signal},
    error::ShellResult,
    flags::Flags,
    input::History,
};

/// The interactive read-eval loop around [`Executor`].
pub struct Shell {
    editor: DefaultEditor,
    state: ShellState,
    history: History,
    executor: Executor,
    styler: Styler,
    quiet: bool,
}

impl Shell {
    pub fn new(flags: &Flags, config: Config) -> ShellResult<Self> {
        let editor_config = EditorConfig::builder()
            .max_history_size(config.history_size)?
            .auto_add_history(false)
            .build();
        let editor = DefaultEditor::with_config(editor_config)?;

        // SIGINT goes to the whole foreground group; the shell survives it
        // while the children it waits for do not.
        ctrlc::set_handler(|| {})?;

        let styler = Styler::new(config.color);

        Ok(Shell {
            editor,
            state: ShellState::new(),
            history: History::new(config.history_size),
            executor: Executor::new(styler),
            styler,
            quiet: flags.quiet || !config.banner,
        })
    }

    /// Runs until `exit` or end of input and returns the process exit code:
    /// the `exit` argument, or 0 when input simply ended.
    pub fn run(&mut self) -> ShellResult<i32> {
        if !self.quiet {
            println!("KSH - Simple Shell v{}", env!("CARGO_PKG_VERSION"));
            println!("Type 'help' for available commands.");
        }

        while !self.state.should_exit {
            if let Err(e) = self.state.refresh_working_directory() {
                eprintln!("{}", self.styler.error_line(&e));
            }

            let prompt = self.styler.prompt(self.state.working_directory());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    if self.execute(&line) == Signal::Terminate {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        if !self.quiet {
            println!("Exiting...");
        }

        Ok(if self.state.should_exit {
            self.state.last_exit_status
        } else {
            0
        })
    }

    fn execute(&mut self, line: &str) -> Signal {
        self.history.append(line);
        if let Err(e) = self.editor.add_history_entry(line) {
            tracing::warn!("couldn't add to line editor history: {}", e);
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.executor
            .execute_line(line, &mut self.state, &self.history, &mut out)
    }
}
