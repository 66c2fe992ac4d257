//! Output rendering errors

use super::AppcoreError;

/// Creates a render failed error
pub fn failed(format: impl Into<String>, reason: impl Into<String>) -> AppcoreError {
    AppcoreError::RenderFailed {
        format: format.into(),
        reason: reason.into(),
    }
}
