use std::env;
use std::path::PathBuf;

use super::{Builtin, Context};
use crate::core::state::Signal;
use crate::error::{ShellError, ShellResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CdCommand;

impl Builtin for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn description(&self) -> &'static str {
        "Change directory"
    }

    fn invoke(&self, args: &[String], ctx: &mut Context<'_>) -> ShellResult<Signal> {
        let target = match args.get(1) {
            Some(dir) => PathBuf::from(dir),
            None => env::var_os("HOME")
                .map(PathBuf::from)
                .ok_or(ShellError::NoHome)?,
        };

        env::set_current_dir(&target).map_err(|source| ShellError::ChdirFailed {
            path: target.clone(),
            source,
        })?;

        if let Err(e) = ctx.state.refresh_working_directory() {
            tracing::warn!("cannot read working directory after cd: {}", e);
            ctx.state.working_directory = target;
        }
        Ok(Signal::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ShellState;
    use crate::error::ErrorKind;
    use crate::input::History;
    use crate::test_support::{self, CwdGuard, EnvGuard};

    fn run(args: &[&str], state: &mut ShellState) -> ShellResult<Signal> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let history = History::default();
        let mut out = Vec::new();
        CdCommand.invoke(
            &args,
            &mut Context {
                state,
                history: &history,
                out: &mut out,
            },
        )
    }

    #[test]
    fn test_cd_home() {
        let _guard = test_support::serial();
        let _cwd = CwdGuard::new();
        let _home = EnvGuard::new("HOME");
        let home = env::temp_dir().canonicalize().unwrap();
        env::set_var("HOME", &home);

        let mut state = ShellState::new();
        assert_eq!(run(&["cd"], &mut state).unwrap(), Signal::Continue);
        assert_eq!(env::current_dir().unwrap(), home);
        assert_eq!(state.working_directory, home);
    }

    #[test]
    fn test_cd_without_home() {
        let _guard = test_support::serial();
        let _cwd = CwdGuard::new();
        let _home = EnvGuard::new("HOME");
        env::remove_var("HOME");

        let mut state = ShellState::new();
        let before = state.clone();
        let err = run(&["cd"], &mut state).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoHome);
        assert_eq!(state, before);
    }

    #[test]
    fn test_cd_invalid() {
        let _guard = test_support::serial();
        let _cwd = CwdGuard::new();

        let mut state = ShellState::new();
        let before = env::current_dir().unwrap();
        let err = run(&["cd", "/nonexistent/path"], &mut state).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ChdirFailed);
        assert_eq!(env::current_dir().unwrap(), before);
        assert!(!state.should_exit);
    }

    #[test]
    fn test_cd_relative() {
        let _guard = test_support::serial();
        let _cwd = CwdGuard::new();
        env::set_current_dir("/").unwrap();

        let mut state = ShellState::new();
        run(&["cd", "tmp"], &mut state).unwrap();
        assert_eq!(state.working_directory, PathBuf::from("/tmp").canonicalize().unwrap());
    }
}
