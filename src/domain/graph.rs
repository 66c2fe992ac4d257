//! Root build graph aggregate

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{ModuleDescriptor, ModuleKind};
use crate::error::{Result, graph};

/// Target platform family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Macos,
    Tvos,
    Watchos,
    Visionos,
}

impl Platform {
    /// Platform identifier as written in a Swift package manifest
    pub fn swift_name(self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Macos => "macOS",
            Platform::Tvos => "tvOS",
            Platform::Watchos => "watchOS",
            Platform::Visionos => "visionOS",
        }
    }
}

/// Minimum deployment target for one platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformFloor {
    pub platform: Platform,
    pub version: String,
}

/// Exported product kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Library,
}

/// Product exported to package consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub kind: ProductKind,
    pub name: String,
    pub targets: Vec<String>,
}

/// Fully assembled, immutable build graph for a single build invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildGraph {
    pub name: String,
    pub tools_version: String,
    pub platforms: Vec<PlatformFloor>,
    pub products: Vec<Product>,
    pub modules: Vec<ModuleDescriptor>,
    pub language_versions: Vec<String>,
}

impl BuildGraph {
    pub fn modules_of_kind(&self, kind: ModuleKind) -> impl Iterator<Item = &ModuleDescriptor> {
        self.modules.iter().filter(move |m| m.kind == kind)
    }

    /// Binary module carrying the resolved artifact, if the graph has one
    pub fn binary_module(&self) -> Option<&ModuleDescriptor> {
        self.modules_of_kind(ModuleKind::Binary).next()
    }

    /// Check that every name reference resolves.
    ///
    /// Consumers resolve dependencies by exact name equality, so module
    /// names must be unique and every product target and module dependency
    /// must name a module in this graph.
    pub fn validate_names(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for module in &self.modules {
            if !seen.insert(module.name.as_str()) {
                return Err(graph::inconsistent(format!(
                    "module '{}' is declared more than once",
                    module.name
                )));
            }
        }

        for product in &self.products {
            for target in &product.targets {
                if !seen.contains(target.as_str()) {
                    return Err(graph::inconsistent(format!(
                        "product '{}' exports unknown module '{}'",
                        product.name, target
                    )));
                }
            }
        }

        for module in &self.modules {
            for dependency in &module.dependencies {
                if dependency == &module.name {
                    return Err(graph::inconsistent(format!(
                        "module '{}' depends on itself",
                        module.name
                    )));
                }
                if !seen.contains(dependency.as_str()) {
                    return Err(graph::inconsistent(format!(
                        "module '{}' depends on unknown module '{}'",
                        module.name, dependency
                    )));
                }
            }
        }

        Ok(())
    }
}
