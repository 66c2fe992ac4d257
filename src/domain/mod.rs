//! Domain types for artifact resolution
//!
//! Everything here is constructed once per build invocation and never
//! mutated afterwards.

pub mod artifact;
pub mod diagnostics;
pub mod graph;
pub mod module;

pub use artifact::{ArtifactDescriptor, LocalArtifact, RemoteArtifact};
pub use diagnostics::DiagnosticsPolicy;
pub use graph::{BuildGraph, Platform, PlatformFloor, Product, ProductKind};
pub use module::{BuildSetting, ModuleDescriptor, ModuleKind, Resource};
