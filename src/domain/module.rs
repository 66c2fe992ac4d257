//! Buildable module descriptors

use serde::Serialize;

use super::{ArtifactDescriptor, DiagnosticsPolicy};

/// What kind of buildable unit a module is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// Source library module
    Regular,
    /// Prebuilt binary dependency
    Binary,
    /// Test suite
    Test,
}

/// Resource copied verbatim into the module's bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", content = "path", rename_all = "lowercase")]
pub enum Resource {
    Copy(String),
}

/// Safe (distribution-allowed) C-family build settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BuildSetting {
    HeaderSearchPath {
        path: String,
    },
    Define {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
}

/// A buildable unit in the package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    pub name: String,
    pub kind: ModuleKind,

    /// Source directory, relative to the package root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Names of modules this one depends on
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_headers_path: Option<String>,

    /// Bound artifact for binary modules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<ArtifactDescriptor>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub settings: Vec<BuildSetting>,

    /// Strictness flags; only ever non-empty for local development builds
    #[serde(skip_serializing_if = "DiagnosticsPolicy::is_empty")]
    pub diagnostics: DiagnosticsPolicy,
}

impl ModuleDescriptor {
    fn new(name: impl Into<String>, kind: ModuleKind) -> Self {
        Self {
            name: name.into(),
            kind,
            path: None,
            dependencies: Vec::new(),
            public_headers_path: None,
            artifact: None,
            resources: Vec::new(),
            settings: Vec::new(),
            diagnostics: DiagnosticsPolicy::empty(),
        }
    }

    /// Source library module
    pub fn library(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, ModuleKind::Regular).with_path(path)
    }

    /// Binary module named after, and bound to, the given artifact
    pub fn binary(artifact: ArtifactDescriptor) -> Self {
        let mut module = Self::new(artifact.name(), ModuleKind::Binary);
        module.artifact = Some(artifact);
        module
    }

    /// Test suite module
    pub fn test(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, ModuleKind::Test).with_path(path)
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_dependency(mut self, name: impl Into<String>) -> Self {
        self.dependencies.push(name.into());
        self
    }

    pub fn with_public_headers(mut self, path: impl Into<String>) -> Self {
        self.public_headers_path = Some(path.into());
        self
    }

    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn with_setting(mut self, setting: BuildSetting) -> Self {
        self.settings.push(setting);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: DiagnosticsPolicy) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LocalArtifact, RemoteArtifact};
    use std::path::PathBuf;

    #[test]
    fn test_binary_module_takes_artifact_name() {
        let artifact: ArtifactDescriptor = LocalArtifact {
            name: "Appcore".to_string(),
            path: PathBuf::from("/repo/go/appcore/build/Appcore.xcframework"),
        }
        .into();
        let module = ModuleDescriptor::binary(artifact.clone());
        assert_eq!(module.name, "Appcore");
        assert_eq!(module.kind, ModuleKind::Binary);
        assert_eq!(module.artifact, Some(artifact));
        assert!(module.path.is_none());
    }

    #[test]
    fn test_library_builder() {
        let module = ModuleDescriptor::library("CriticalMoments", "ios/Sources/CriticalMoments")
            .with_dependency("Appcore")
            .with_public_headers("include")
            .with_diagnostics(DiagnosticsPolicy::strict());
        assert_eq!(module.kind, ModuleKind::Regular);
        assert_eq!(module.dependencies, vec!["Appcore"]);
        assert_eq!(module.public_headers_path.as_deref(), Some("include"));
        assert!(!module.diagnostics.is_empty());
    }

    #[test]
    fn test_empty_fields_are_not_serialized() {
        let artifact: ArtifactDescriptor = RemoteArtifact {
            name: "Appcore".to_string(),
            url: "https://example.com/a.zip".to_string(),
            checksum: "00".repeat(32),
        }
        .into();
        let json = serde_json::to_value(ModuleDescriptor::binary(artifact)).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("diagnostics"));
        assert!(!object.contains_key("dependencies"));
        assert!(!object.contains_key("resources"));
        assert_eq!(json["kind"], "binary");
        assert_eq!(json["artifact"]["type"], "remote");
    }

    #[test]
    fn test_test_module_serializes_settings() {
        let module = ModuleDescriptor::test("CriticalMomentsTests", "ios/Tests/CriticalMomentsTests")
            .with_dependency("CriticalMoments")
            .with_resource(Resource::Copy("TestResources".to_string()))
            .with_setting(BuildSetting::Define {
                name: "CRITICAL_MOMENTS_INTERNAL".to_string(),
                value: None,
            });
        let json = serde_json::to_value(module).unwrap();
        assert_eq!(json["resources"][0]["rule"], "copy");
        assert_eq!(json["resources"][0]["path"], "TestResources");
        assert_eq!(json["settings"][0]["type"], "define");
        assert!(json["settings"][0].get("value").is_none());
    }
}
