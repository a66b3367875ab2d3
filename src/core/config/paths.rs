use std::path::PathBuf;

const RC_FILE_NAME: &str = ".kshrc";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
}

impl ConfigPaths {
    /// Returns `None` when no home directory can be determined.
    pub fn new() -> Option<Self> {
        dirs::home_dir().map(|home| ConfigPaths {
            rc_path: home.join(RC_FILE_NAME),
        })
    }
}
