//! Resolver configuration (appcore.yaml) data structures
//!
//! Every field has a built-in default matching the published package, so an
//! empty or absent file resolves exactly like the shipped descriptor.
//! There is no diagnostics setting; strictness follows the artifact source.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::domain::Platform;
use crate::error::{Result, config};

/// Top-level resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    pub package: PackageSection,
    pub library: LibrarySection,
    pub tests: TestsSection,
    pub artifact: ArtifactSection,
}

/// Package identity and tooling floors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageSection {
    /// Package, product and library module name
    pub name: String,
    /// File name of the build descriptor
    pub descriptor: String,
    pub tools_version: String,
    pub language_versions: Vec<String>,
    pub platform: Platform,
    pub platform_version: String,
}

impl Default for PackageSection {
    fn default() -> Self {
        Self {
            name: "CriticalMoments".to_string(),
            descriptor: "Package.swift".to_string(),
            tools_version: "5.7".to_string(),
            language_versions: vec!["5".to_string()],
            platform: Platform::Ios,
            platform_version: "12.0".to_string(),
        }
    }
}

/// Consuming library module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibrarySection {
    pub path: String,
    pub public_headers: String,
}

impl Default for LibrarySection {
    fn default() -> Self {
        Self {
            path: "ios/Sources/CriticalMoments".to_string(),
            public_headers: "include".to_string(),
        }
    }
}

/// Test suite module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestsSection {
    pub name: String,
    pub path: String,
    /// Directories copied into the test bundle
    pub resources: Vec<String>,
    /// Lets tests reach the library's internal headers
    pub header_search_path: String,
    /// Internal-visibility marker define
    pub define: String,
}

impl Default for TestsSection {
    fn default() -> Self {
        Self {
            name: "CriticalMomentsTests".to_string(),
            path: "ios/Tests/CriticalMomentsTests".to_string(),
            resources: vec!["TestResources".to_string()],
            header_search_path: "../../Sources/CriticalMoments".to_string(),
            define: "CRITICAL_MOMENTS_INTERNAL".to_string(),
        }
    }
}

/// Binary dependency and its two candidate sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtifactSection {
    /// Binary module name, shared by both candidates
    pub name: String,
    pub remote: RemoteSection,
    pub local: LocalSection,
}

impl Default for ArtifactSection {
    fn default() -> Self {
        Self {
            name: "Appcore".to_string(),
            remote: RemoteSection::default(),
            local: LocalSection::default(),
        }
    }
}

/// Pinned release produced by CI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteSection {
    pub url: String,
    pub checksum: String,
}

impl Default for RemoteSection {
    fn default() -> Self {
        Self {
            url: "https://github.com/CriticalMoments/CriticalMoments/releases/download/appcore-v0.8.0-beta/Appcore.xcframework.zip".to_string(),
            checksum: "45ee96b2143ef9fe38d1bc47f5b8464f7fed5a9371b5a5b59b51dec39a059b4f"
                .to_string(),
        }
    }
}

/// Where a developer build of the bundle lands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocalSection {
    /// Bundle directory, relative to the descriptor's directory
    pub path: String,
    /// File inside the bundle whose presence marks a local build
    pub marker: String,
}

impl Default for LocalSection {
    fn default() -> Self {
        Self {
            path: "go/appcore/build/Appcore.xcframework".to_string(),
            marker: "Info.plist".to_string(),
        }
    }
}

impl ResolverConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        require_non_empty("package.name", &self.package.name)?;
        require_non_empty("package.tools_version", &self.package.tools_version)?;
        require_non_empty("package.platform_version", &self.package.platform_version)?;
        require_file_name("package.descriptor", &self.package.descriptor)?;
        require_non_empty("library.path", &self.library.path)?;
        require_non_empty("tests.name", &self.tests.name)?;
        require_non_empty("tests.path", &self.tests.path)?;
        require_non_empty("artifact.name", &self.artifact.name)?;
        require_file_name("artifact.local.marker", &self.artifact.local.marker)?;

        if self.package.language_versions.is_empty() {
            return Err(config::invalid("package.language_versions must not be empty"));
        }

        let names = [&self.package.name, &self.tests.name, &self.artifact.name];
        for (i, a) in names.iter().enumerate() {
            if names[i + 1..].contains(a) {
                return Err(config::invalid(format!(
                    "module name '{}' is used for more than one module",
                    a
                )));
            }
        }

        if !self.artifact.remote.url.starts_with("https://") {
            return Err(config::invalid(format!(
                "artifact.remote.url must be an https URL, got '{}'",
                self.artifact.remote.url
            )));
        }

        crate::hash::normalize_checksum(&self.artifact.remote.checksum)?;

        let local = Path::new(&self.artifact.local.path);
        let escapes = local
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if self.artifact.local.path.trim().is_empty() || escapes {
            return Err(config::invalid(format!(
                "artifact.local.path must be a relative path inside the package, got '{}'",
                self.artifact.local.path
            )));
        }

        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(config::invalid(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_file_name(field: &str, value: &str) -> Result<()> {
    require_non_empty(field, value)?;
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(config::invalid(format!(
            "{field} must be a bare file name, got '{value}'"
        ))),
    }
}
