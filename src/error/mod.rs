//! Error types and handling for appcore-resolve
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`descriptor`]: Build descriptor path errors
//! - [`artifact`]: Artifact bundle errors
//! - [`config`]: Configuration errors
//! - [`checksum`]: Release archive checksum errors
//! - [`fs`]: File system errors
//! - [`graph`]: Build graph consistency errors
//! - [`render`]: Output rendering errors

pub mod artifact;
pub mod checksum;
pub mod config;
pub mod descriptor;
pub mod fs;
pub mod graph;
pub mod render;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for appcore-resolve operations
#[derive(Error, Diagnostic, Debug)]
pub enum AppcoreError {
    // Descriptor errors
    #[error("Descriptor path must be absolute: {path}")]
    #[diagnostic(
        code(appcore::descriptor::not_absolute),
        help("Pass an absolute path, or run from the package root so the default resolves")
    )]
    DescriptorNotAbsolute { path: String },

    #[error("Descriptor path '{path}' does not name '{expected}'")]
    #[diagnostic(
        code(appcore::descriptor::wrong_file_name),
        help("The descriptor path must end with the package descriptor file name")
    )]
    DescriptorFileNameMismatch { path: String, expected: String },

    #[error("Descriptor path has no parent directory: {path}")]
    #[diagnostic(code(appcore::descriptor::no_parent))]
    DescriptorWithoutParent { path: String },

    // Artifact errors
    #[error("No local build found at: {path}")]
    #[diagnostic(
        code(appcore::artifact::local_missing),
        help("Build the Appcore framework locally, or drop --require to use the pinned release")
    )]
    LocalBuildMissing { path: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(appcore::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(appcore::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(appcore::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(appcore::config::invalid))]
    ConfigInvalid { message: String },

    // Checksum errors
    #[error("Checksum mismatch for '{path}': expected {expected}, got {actual}")]
    #[diagnostic(
        code(appcore::checksum::mismatch),
        help("The archive differs from the pinned release. Do not use it.")
    )]
    ChecksumMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("Malformed checksum '{value}': {reason}")]
    #[diagnostic(
        code(appcore::checksum::malformed),
        help("Checksums are 64 hex characters (SHA-256)")
    )]
    ChecksumMalformed { value: String, reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(appcore::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(appcore::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(appcore::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(appcore::fs::io_error))]
    IoError { message: String },

    // Build graph errors
    #[error("Inconsistent build graph: {message}")]
    #[diagnostic(
        code(appcore::graph::inconsistent),
        help("Module, product and dependency names must match exactly")
    )]
    GraphInconsistent { message: String },

    // Render errors
    #[error("Failed to render build graph as {format}: {reason}")]
    #[diagnostic(code(appcore::render::failed))]
    RenderFailed { format: String, reason: String },
}

impl From<std::io::Error> for AppcoreError {
    fn from(err: std::io::Error) -> Self {
        AppcoreError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AppcoreError {
    fn from(err: serde_yaml::Error) -> Self {
        AppcoreError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AppcoreError>;
