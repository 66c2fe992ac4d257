//! Diagnostics policy binder
//!
//! Strict flags are unsafe compiler flags, which package distribution refuses
//! on published modules. They are bound from the selected artifact itself so
//! the flag set can never disagree with the artifact choice.

use crate::domain::{ArtifactDescriptor, DiagnosticsPolicy};

/// Policy for the library module given the selected artifact
pub fn bind(artifact: &ArtifactDescriptor) -> DiagnosticsPolicy {
    match artifact {
        ArtifactDescriptor::Local(_) => DiagnosticsPolicy::strict(),
        ArtifactDescriptor::Remote(_) => DiagnosticsPolicy::empty(),
    }
}
