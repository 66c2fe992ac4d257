//! SHA-256 checksums for release archives
//!
//! Matches the digest format package tooling pins for binary artifacts:
//! lowercase hex, no prefix.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{Result, checksum, fs};

/// Length of a hex-encoded SHA-256 digest
pub const CHECKSUM_HEX_LEN: usize = 64;

/// Calculate the SHA-256 checksum of a file
pub fn checksum_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(fs::not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;

    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Validate a checksum and return it in canonical lowercase form
pub fn normalize_checksum(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.len() != CHECKSUM_HEX_LEN {
        return Err(checksum::malformed(
            value,
            format!(
                "expected {} hex characters, got {}",
                CHECKSUM_HEX_LEN,
                trimmed.len()
            ),
        ));
    }

    hex::decode(trimmed).map_err(|e| checksum::malformed(value, e.to_string()))?;

    Ok(trimmed.to_ascii_lowercase())
}

/// Verify an archive against its pinned checksum
pub fn verify_file(path: &Path, expected: &str) -> Result<String> {
    let expected = normalize_checksum(expected)?;
    let actual = checksum_file(path)?;

    if actual != expected {
        return Err(checksum::mismatch(
            path.display().to_string(),
            expected,
            actual,
        ));
    }

    Ok(actual)
}
