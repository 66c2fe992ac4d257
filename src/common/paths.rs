//! Path utilities for command-line path arguments

use std::path::{Path, PathBuf};

/// Make `path` absolute against `base` without touching the filesystem.
///
/// Symlinks are not resolved, so the result stays textually related to what
/// the user typed. Windows verbatim prefixes are stripped where possible.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };
    dunce::simplified(&joined).to_path_buf()
}

/// Current working directory, as an absolute path
pub fn current_dir() -> crate::error::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(dunce::simplified(&cwd).to_path_buf())
}
