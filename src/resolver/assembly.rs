//! Package assembly
//!
//! Wires already-resolved values into a [`BuildGraph`]. No decisions are made
//! here. Every name reference is taken from a single config field so the
//! product, the library module and the test dependency always agree.

use crate::config::ResolverConfig;
use crate::domain::{
    BuildGraph, BuildSetting, DiagnosticsPolicy, ModuleDescriptor, PlatformFloor, Product,
    ProductKind, Resource,
};

use super::Resolution;

/// Assembles a build graph from configuration and a resolution
#[derive(Debug, Clone)]
pub struct GraphBuilder<'a> {
    config: &'a ResolverConfig,
    resolution: Option<Resolution>,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(config: &'a ResolverConfig) -> Self {
        Self {
            config,
            resolution: None,
        }
    }

    /// Bind the selected artifact and its diagnostics policy
    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = Some(resolution);
        self
    }

    /// Build the graph. Without a resolution the binary module is omitted
    /// and the library carries an empty policy.
    pub fn build(mut self) -> BuildGraph {
        let config = self.config;
        let package_name = config.package.name.clone();

        let (binary, diagnostics) = match self.resolution.take() {
            Some(resolution) => {
                let (artifact, diagnostics) = resolution.into_parts();
                (Some(ModuleDescriptor::binary(artifact)), diagnostics)
            }
            None => (None, DiagnosticsPolicy::empty()),
        };

        let library = ModuleDescriptor::library(package_name.clone(), config.library.path.clone())
            .with_dependency(config.artifact.name.clone())
            .with_public_headers(config.library.public_headers.clone())
            .with_diagnostics(diagnostics);

        let tests = self.test_module(&package_name);

        let mut modules = vec![library];
        modules.extend(binary);
        modules.push(tests);

        BuildGraph {
            name: package_name.clone(),
            tools_version: config.package.tools_version.clone(),
            platforms: vec![PlatformFloor {
                platform: config.package.platform,
                version: config.package.platform_version.clone(),
            }],
            products: vec![Product {
                kind: ProductKind::Library,
                name: package_name.clone(),
                targets: vec![package_name],
            }],
            modules,
            language_versions: config.package.language_versions.clone(),
        }
    }

    fn test_module(&self, library_name: &str) -> ModuleDescriptor {
        let tests = &self.config.tests;
        let mut module = ModuleDescriptor::test(tests.name.clone(), tests.path.clone())
            .with_dependency(library_name);

        for resource in &tests.resources {
            module = module.with_resource(Resource::Copy(resource.clone()));
        }

        if !tests.header_search_path.is_empty() {
            module = module.with_setting(BuildSetting::HeaderSearchPath {
                path: tests.header_search_path.clone(),
            });
        }

        if !tests.define.is_empty() {
            module = module.with_setting(BuildSetting::Define {
                name: tests.define.clone(),
                value: None,
            });
        }

        module
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArtifactDescriptor, ModuleKind, RemoteArtifact};

    fn remote_resolution() -> Resolution {
        Resolution::from_selection(ArtifactDescriptor::Remote(RemoteArtifact {
            name: "Appcore".to_string(),
            url: "https://example.com/Appcore.xcframework.zip".to_string(),
            checksum: "ab".repeat(32),
        }))
    }

    #[test]
    fn test_full_graph_shape() {
        let config = ResolverConfig::default();
        let graph = GraphBuilder::new(&config)
            .resolution(remote_resolution())
            .build();

        assert_eq!(graph.name, "CriticalMoments");
        assert_eq!(graph.modules.len(), 3);
        assert_eq!(graph.modules[0].kind, ModuleKind::Regular);
        assert_eq!(graph.modules[1].kind, ModuleKind::Binary);
        assert_eq!(graph.modules[2].kind, ModuleKind::Test);
        assert_eq!(graph.platforms[0].version, "12.0");
        assert_eq!(graph.tools_version, "5.7");
        assert_eq!(graph.language_versions, vec!["5"]);
        assert!(graph.validate_names().is_ok());
    }

    #[test]
    fn test_names_are_consistent() {
        let config = ResolverConfig::default();
        let graph = GraphBuilder::new(&config)
            .resolution(remote_resolution())
            .build();

        let library = &graph.modules[0];
        let tests = &graph.modules[2];
        assert_eq!(graph.products[0].name, library.name);
        assert_eq!(graph.products[0].targets, vec![library.name.clone()]);
        assert_eq!(tests.dependencies, vec![library.name.clone()]);
        assert_eq!(library.dependencies, vec![graph.modules[1].name.clone()]);
    }

    #[test]
    fn test_partial_graph_without_resolution() {
        let config = ResolverConfig::default();
        let graph = GraphBuilder::new(&config).build();

        assert_eq!(graph.modules.len(), 2);
        assert!(graph.binary_module().is_none());
        assert!(graph.modules[0].diagnostics.is_empty());
        // The library still names its binary dependency
        assert!(graph.validate_names().is_err());
    }

    #[test]
    fn test_test_module_settings() {
        let config = ResolverConfig::default();
        let graph = GraphBuilder::new(&config).build();
        let tests = &graph.modules[1];
        assert_eq!(tests.name, "CriticalMomentsTests");

        assert_eq!(
            tests.resources,
            vec![Resource::Copy("TestResources".to_string())]
        );
        assert_eq!(
            tests.settings,
            vec![
                BuildSetting::HeaderSearchPath {
                    path: "../../Sources/CriticalMoments".to_string()
                },
                BuildSetting::Define {
                    name: "CRITICAL_MOMENTS_INTERNAL".to_string(),
                    value: None
                },
            ]
        );
    }

    #[test]
    fn test_build_with_resolution_keeps_test_module() {
        let config = ResolverConfig::default();
        let graph = GraphBuilder::new(&config)
            .resolution(remote_resolution())
            .build();

        let tests = &graph.modules[2];
        assert_eq!(tests.kind, ModuleKind::Test);
        assert_eq!(tests.dependencies, vec!["CriticalMoments"]);
        assert_eq!(tests.settings.len(), 2);
        assert_eq!(
            graph.modules[1].artifact.as_ref().map(|a| a.name()),
            Some("Appcore")
        );
    }

    #[test]
    fn test_renamed_package_propagates_everywhere() {
        let mut config = ResolverConfig::default();
        config.package.name = "Moments".to_string();
        let graph = GraphBuilder::new(&config)
            .resolution(remote_resolution())
            .build();

        assert_eq!(graph.name, "Moments");
        assert_eq!(graph.products[0].targets, vec!["Moments"]);
        assert_eq!(graph.modules[2].dependencies, vec!["Moments"]);
        assert!(graph.validate_names().is_ok());
    }
}
