//! Binary artifact descriptors
//!
//! A build carries exactly one active [`ArtifactDescriptor`]: either the
//! pinned remote release or a bundle built on this machine.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Pinned release artifact, fetched and checksum-verified by the external build tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteArtifact {
    /// Module name the artifact is bound to
    pub name: String,
    /// Immutable, versioned release URL of the zipped bundle
    pub url: String,
    /// Hex-encoded SHA-256 of the zipped bundle
    pub checksum: String,
}

/// Bundle produced by a local build. Never checksum-verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalArtifact {
    /// Module name the artifact is bound to
    pub name: String,
    /// Absolute path of the bundle directory
    pub path: PathBuf,
}

/// The binary dependency selected for this build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ArtifactDescriptor {
    Remote(RemoteArtifact),
    Local(LocalArtifact),
}

impl ArtifactDescriptor {
    pub fn name(&self) -> &str {
        match self {
            ArtifactDescriptor::Remote(remote) => &remote.name,
            ArtifactDescriptor::Local(local) => &local.name,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, ArtifactDescriptor::Local(_))
    }

    /// Expected checksum, only present for release artifacts
    pub fn checksum(&self) -> Option<&str> {
        match self {
            ArtifactDescriptor::Remote(remote) => Some(&remote.checksum),
            ArtifactDescriptor::Local(_) => None,
        }
    }

    pub fn local_path(&self) -> Option<&Path> {
        match self {
            ArtifactDescriptor::Remote(_) => None,
            ArtifactDescriptor::Local(local) => Some(&local.path),
        }
    }

    /// Human-readable location: the URL or the bundle path
    pub fn location(&self) -> String {
        match self {
            ArtifactDescriptor::Remote(remote) => remote.url.clone(),
            ArtifactDescriptor::Local(local) => local.path.display().to_string(),
        }
    }
}

impl From<RemoteArtifact> for ArtifactDescriptor {
    fn from(remote: RemoteArtifact) -> Self {
        ArtifactDescriptor::Remote(remote)
    }
}

impl From<LocalArtifact> for ArtifactDescriptor {
    fn from(local: LocalArtifact) -> Self {
        ArtifactDescriptor::Local(local)
    }
}
