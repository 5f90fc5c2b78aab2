use std::path::PathBuf;

pub const DEFAULT_STATE_FILE: &str = "terraform.tfstate";

#[derive(Debug, Clone, PartialEq)]
pub struct LookupConfig {
    /// Relative paths resolve against the current working directory.
    pub state_path: PathBuf,
}

impl LookupConfig {
    pub fn new(state_path: impl Into<PathBuf>) -> Self {
        Self {
            state_path: state_path.into(),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STATE_FILE)
    }
}
