//! Build descriptor path errors

use super::AppcoreError;

/// Creates a "descriptor path is relative" error
pub fn not_absolute(path: impl Into<String>) -> AppcoreError {
    AppcoreError::DescriptorNotAbsolute { path: path.into() }
}

/// Creates a descriptor file name mismatch error
pub fn file_name_mismatch(path: impl Into<String>, expected: impl Into<String>) -> AppcoreError {
    AppcoreError::DescriptorFileNameMismatch {
        path: path.into(),
        expected: expected.into(),
    }
}

/// Creates a "descriptor has no parent directory" error
pub fn without_parent(path: impl Into<String>) -> AppcoreError {
    AppcoreError::DescriptorWithoutParent { path: path.into() }
}
