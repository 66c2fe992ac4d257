//! Build graph consistency errors

use super::AppcoreError;

/// Creates an inconsistent graph error
pub fn inconsistent(message: impl Into<String>) -> AppcoreError {
    AppcoreError::GraphInconsistent {
        message: message.into(),
    }
}
