//! Source selector
//!
//! A present local build always wins over the pinned release. Checksum
//! verification is a release-channel guarantee, so choosing the local bundle
//! also means no checksum is attached.

use crate::config::ResolverConfig;
use crate::domain::{ArtifactDescriptor, LocalArtifact, RemoteArtifact};

use super::locator::ArtifactLocation;

/// The two candidate descriptors for the binary dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    pub remote: RemoteArtifact,
    pub local: LocalArtifact,
}

impl Candidates {
    pub fn from_config(config: &ResolverConfig, location: &ArtifactLocation) -> Self {
        let name = config.artifact.name.clone();
        Self {
            remote: RemoteArtifact {
                name: name.clone(),
                url: config.artifact.remote.url.clone(),
                checksum: config.artifact.remote.checksum.trim().to_ascii_lowercase(),
            },
            local: LocalArtifact {
                name,
                path: location.bundle.clone(),
            },
        }
    }
}

/// Pick exactly one artifact from the presence signal
pub fn select(local_present: bool, candidates: Candidates) -> ArtifactDescriptor {
    if local_present {
        ArtifactDescriptor::Local(candidates.local)
    } else {
        ArtifactDescriptor::Remote(candidates.remote)
    }
}
