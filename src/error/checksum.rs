//! Release archive checksum errors

use super::AppcoreError;

/// Creates a checksum mismatch error
pub fn mismatch(
    path: impl Into<String>,
    expected: impl Into<String>,
    actual: impl Into<String>,
) -> AppcoreError {
    AppcoreError::ChecksumMismatch {
        path: path.into(),
        expected: expected.into(),
        actual: actual.into(),
    }
}

/// Creates a malformed checksum error
pub fn malformed(value: impl Into<String>, reason: impl Into<String>) -> AppcoreError {
    AppcoreError::ChecksumMalformed {
        value: value.into(),
        reason: reason.into(),
    }
}
