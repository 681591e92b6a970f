use crate::error::Result;
use crate::workspace::Workspace;
use std::fs;
use std::path::{Path, PathBuf};

/// Workspace backed by the real filesystem
pub struct FsWorkspace {
    root: PathBuf,
}

impl FsWorkspace {
    /// Root the workspace at `root`; nothing is checked until a rule runs
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        FsWorkspace { root: root.into() }
    }
}

impl Workspace for FsWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, relative: &Path) -> bool {
        self.resolve(relative).exists()
    }

    fn read_to_string(&self, relative: &Path) -> Result<String> {
        Ok(fs::read_to_string(self.resolve(relative))?)
    }

    fn write(&self, relative: &Path, contents: &str) -> Result<()> {
        fs::write(self.resolve(relative), contents)?;
        Ok(())
    }
}
