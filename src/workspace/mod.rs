//! File access abstraction layer
//!
//! Rules name their target files relative to a working directory. This
//! module hides how those files are reached so the propagation logic can be
//! exercised against an in-memory tree.
//!
//! - [fs::FsWorkspace]: the real filesystem, rooted at a directory
//! - [mock::MockWorkspace]: an in-memory tree with injectable failures
//!
//! ```rust
//! # use verstamp::workspace::Workspace;
//! # use std::path::Path;
//! # fn example<W: Workspace>(ws: &W) -> verstamp::Result<()> {
//! let manifest = Path::new("pubspec.yaml");
//! if ws.exists(manifest) {
//!     let content = ws.read_to_string(manifest)?;
//!     ws.write(manifest, &content)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod fs;
pub mod mock;

pub use fs::FsWorkspace;
pub use mock::MockWorkspace;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Access to the files a run may touch.
///
/// All paths are relative to [Workspace::root]. Implementors must be
/// `Send + Sync`.
pub trait Workspace: Send + Sync {
    /// Directory relative paths are resolved against
    fn root(&self) -> &Path;

    /// Whether the file exists
    fn exists(&self, relative: &Path) -> bool;

    /// Read the whole file as UTF-8 text
    ///
    /// # Returns
    /// * `Ok(String)` - File contents
    /// * `Err(VerstampError::Io)` - Unreadable file or invalid UTF-8
    fn read_to_string(&self, relative: &Path) -> Result<String>;

    /// Overwrite the file in place
    fn write(&self, relative: &Path, contents: &str) -> Result<()>;

    /// Absolute (or root-joined) path, for messages
    fn resolve(&self, relative: &Path) -> PathBuf {
        self.root().join(relative)
    }
}
