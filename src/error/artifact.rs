//! Artifact bundle errors

use super::AppcoreError;

/// Creates a "no local build" error
pub fn local_missing(path: impl Into<String>) -> AppcoreError {
    AppcoreError::LocalBuildMissing { path: path.into() }
}
