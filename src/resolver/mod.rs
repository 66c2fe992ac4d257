//! Build-time artifact resolution for the Appcore binary dependency
//!
//! This module handles:
//! - Locating where a local build of the bundle would live
//! - Checking whether that local build exists
//! - Selecting the local bundle or the pinned release
//! - Binding the matching diagnostics policy
//! - Assembling the final build graph
//!
//! The presence check is the only input that depends on the outside world.
//! Everything after it is a pure function of one boolean.

pub mod assembly;
pub mod locator;
pub mod policy;
pub mod presence;
pub mod selector;

use std::path::Path;

use crate::config::ResolverConfig;
use crate::domain::{ArtifactDescriptor, BuildGraph, DiagnosticsPolicy};
use crate::error::Result;

pub use assembly::GraphBuilder;
pub use locator::{ArtifactLocation, Locator};
pub use presence::{FsProbe, Probe};
pub use selector::Candidates;

/// The selected artifact together with the policy derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    artifact: ArtifactDescriptor,
    diagnostics: DiagnosticsPolicy,
}

impl Resolution {
    /// Resolve from the presence signal
    pub fn from_presence(local_present: bool, candidates: Candidates) -> Self {
        Self::from_selection(selector::select(local_present, candidates))
    }

    /// Bind the diagnostics policy for an already selected artifact
    pub fn from_selection(artifact: ArtifactDescriptor) -> Self {
        let diagnostics = policy::bind(&artifact);
        Self {
            artifact,
            diagnostics,
        }
    }

    pub fn artifact(&self) -> &ArtifactDescriptor {
        &self.artifact
    }

    pub fn diagnostics(&self) -> &DiagnosticsPolicy {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (ArtifactDescriptor, DiagnosticsPolicy) {
        (self.artifact, self.diagnostics)
    }
}

/// Everything produced by one resolution run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub location: ArtifactLocation,
    pub resolution: Resolution,
    pub graph: BuildGraph,
}

/// Resolves the binary dependency for a descriptor
#[derive(Debug, Clone)]
pub struct Resolver<'a, P: Probe> {
    config: &'a ResolverConfig,
    probe: P,
}

impl<'a> Resolver<'a, FsProbe> {
    pub fn new(config: &'a ResolverConfig) -> Self {
        Self::with_probe(config, FsProbe)
    }
}

impl<'a, P: Probe> Resolver<'a, P> {
    pub fn with_probe(config: &'a ResolverConfig, probe: P) -> Self {
        Self { config, probe }
    }

    /// Locate the local bundle candidate without checking for it
    pub fn locate(&self, descriptor_path: &Path) -> Result<ArtifactLocation> {
        Locator::from_config(self.config).locate(descriptor_path)
    }

    /// Run the full resolution for `descriptor_path`
    pub fn resolve(&self, descriptor_path: &Path) -> Result<Resolved> {
        let location = self.locate(descriptor_path)?;
        let local_present = presence::check(&self.probe, &location);

        let candidates = Candidates::from_config(self.config, &location);
        let resolution = Resolution::from_presence(local_present, candidates);
        tracing::info!(
            source = if resolution.artifact().is_local() { "local" } else { "remote" },
            location = %resolution.artifact().location(),
            flags = resolution.diagnostics().flags().len(),
            "resolved binary dependency"
        );

        let graph = GraphBuilder::new(self.config)
            .resolution(resolution.clone())
            .build();
        graph.validate_names()?;

        Ok(Resolved {
            location,
            resolution,
            graph,
        })
    }
}
