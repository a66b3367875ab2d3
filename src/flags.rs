use std::path::PathBuf;

use argh::FromArgs;

/// A small interactive shell with pipelines.
#[derive(FromArgs, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// read configuration from this file instead of ~/.kshrc
    #[argh(option, short = 'c')]
    pub config: Option<PathBuf>,

    /// do not print the startup and exit banners
    #[argh(switch, short = 'q')]
    pub quiet: bool,

    /// enable debug output
    #[argh(switch, short = 'd')]
    pub debug: bool,

    /// show version information
    #[argh(switch, short = 'v')]
    pub version: bool,
}
