use crate::error::{Result, VerstampError};
use crate::workspace::Workspace;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// In-memory workspace for testing without touching the disk
pub struct MockWorkspace {
    root: PathBuf,
    files: Mutex<HashMap<PathBuf, String>>,
    read_failures: HashSet<PathBuf>,
    write_failures: HashSet<PathBuf>,
    writes: Mutex<Vec<PathBuf>>,
}

impl MockWorkspace {
    /// Create a new empty mock workspace
    pub fn new() -> Self {
        MockWorkspace {
            root: PathBuf::from("/mock"),
            files: Mutex::new(HashMap::new()),
            read_failures: HashSet::new(),
            write_failures: HashSet::new(),
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Add a file with the given contents
    pub fn add_file(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.lock_files().insert(path.into(), contents.into());
    }

    /// Make every read of `path` fail with a permission error
    pub fn fail_reads(&mut self, path: impl Into<PathBuf>) {
        self.read_failures.insert(path.into());
    }

    /// Make every write to `path` fail with a permission error
    pub fn fail_writes(&mut self, path: impl Into<PathBuf>) {
        self.write_failures.insert(path.into());
    }

    /// Current contents of a file
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock_files().get(path.as_ref()).cloned()
    }

    /// Paths written so far, in order
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn lock_files(&self) -> MutexGuard<'_, HashMap<PathBuf, String>> {
        self.files
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MockWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

fn permission_denied(path: &Path) -> VerstampError {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("permission denied: {}", path.display()),
    )
    .into()
}

impl Workspace for MockWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, relative: &Path) -> bool {
        self.lock_files().contains_key(relative)
    }

    fn read_to_string(&self, relative: &Path) -> Result<String> {
        if self.read_failures.contains(relative) {
            return Err(permission_denied(relative));
        }
        self.lock_files().get(relative).cloned().ok_or_else(|| {
            VerstampError::from(io::Error::new(io::ErrorKind::NotFound, "file not found"))
        })
    }

    fn write(&self, relative: &Path, contents: &str) -> Result<()> {
        if self.write_failures.contains(relative) {
            return Err(permission_denied(relative));
        }
        self.lock_files()
            .insert(relative.to_path_buf(), contents.to_string());
        self.writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(relative.to_path_buf());
        Ok(())
    }
}
