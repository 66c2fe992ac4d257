//! Artifact locator
//!
//! Computes where a locally built bundle would live, relative to the build
//! descriptor. Pure path arithmetic: nothing is read from disk here.

use std::path::{Path, PathBuf};

use crate::config::ResolverConfig;
use crate::error::{Result, descriptor};

/// Candidate location of a locally built bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLocation {
    /// Directory containing the build descriptor
    pub package_root: PathBuf,
    /// Bundle directory the local artifact descriptor points at
    pub bundle: PathBuf,
    /// Marker file whose existence stands in for "was built locally"
    pub marker: PathBuf,
}

/// Maps a descriptor path to the expected local bundle location
#[derive(Debug, Clone)]
pub struct Locator {
    descriptor_file: String,
    bundle_path: PathBuf,
    marker_file: String,
}

impl Locator {
    pub fn new(
        descriptor_file: impl Into<String>,
        bundle_path: impl Into<PathBuf>,
        marker_file: impl Into<String>,
    ) -> Self {
        Self {
            descriptor_file: descriptor_file.into(),
            bundle_path: bundle_path.into(),
            marker_file: marker_file.into(),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(
            config.package.descriptor.clone(),
            &config.artifact.local.path,
            config.artifact.local.marker.clone(),
        )
    }

    /// Compute the bundle and marker paths for `descriptor_path`.
    ///
    /// The path must be absolute and its last component must be the
    /// descriptor file name. The package root is its parent, so the file
    /// name itself can never leak into the computed prefix.
    pub fn locate(&self, descriptor_path: &Path) -> Result<ArtifactLocation> {
        if !descriptor_path.is_absolute() {
            return Err(descriptor::not_absolute(
                descriptor_path.display().to_string(),
            ));
        }

        let file_name = descriptor_path.file_name().and_then(|n| n.to_str());
        if file_name != Some(self.descriptor_file.as_str()) {
            return Err(descriptor::file_name_mismatch(
                descriptor_path.display().to_string(),
                self.descriptor_file.clone(),
            ));
        }

        let package_root = descriptor_path
            .parent()
            .ok_or_else(|| descriptor::without_parent(descriptor_path.display().to_string()))?
            .to_path_buf();

        let bundle = package_root.join(&self.bundle_path);
        let marker = bundle.join(&self.marker_file);

        Ok(ArtifactLocation {
            package_root,
            bundle,
            marker,
        })
    }
}
