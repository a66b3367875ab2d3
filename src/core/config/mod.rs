mod loader;
mod paths;

use std::path::Path;

pub use loader::ConfigLoader;
pub use paths::ConfigPaths;

use crate::error::ShellResult;
use crate::input::history::DEFAULT_MAX_ENTRIES;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Capacity of the history ring buffer.
    pub history_size: usize,
    pub color: bool,
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_MAX_ENTRIES,
            color: true,
            banner: true,
        }
    }
}

impl Config {
    /// Loads `explicit` when given, failing if it cannot be read. Otherwise
    /// reads `~/.kshrc` if it exists and falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> ShellResult<Self> {
        let mut config = Config::default();

        match explicit {
            Some(path) => ConfigLoader::new(&mut config).load_file(path)?,
            None => {
                if let Some(paths) = ConfigPaths::new() {
                    if paths.rc_path.exists() {
                        if let Err(e) = ConfigLoader::new(&mut config).load_file(&paths.rc_path) {
                            tracing::warn!("{}", e);
                        }
                    }
                }
            }
        }

        Ok(config)
    }
}
