//! Swift package manifest rendering
//!
//! Unsafe flags are only written when the library carries a non-empty
//! diagnostics policy, which happens on the local branch alone. A manifest
//! rendered for a release build is therefore always publishable.

use std::fmt::Write as _;
use std::path::Path;

use crate::domain::{
    ArtifactDescriptor, BuildGraph, BuildSetting, ModuleDescriptor, ModuleKind, Resource,
};
use crate::error::{Result, render};

/// Render the graph as a `Package.swift` manifest
pub fn manifest(graph: &BuildGraph, package_root: &Path) -> Result<String> {
    let mut out = String::new();
    write_manifest(&mut out, graph, package_root)
        .map_err(|e| render::failed("swift", e.to_string()))?;
    Ok(out)
}

#[derive(Debug, thiserror::Error)]
enum ManifestError {
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
    #[error("local artifact '{0}' is outside the package root")]
    LocalPathOutsidePackage(String),
}

fn write_manifest(
    out: &mut String,
    graph: &BuildGraph,
    package_root: &Path,
) -> std::result::Result<(), ManifestError> {
    let source = match graph.binary_module().and_then(|m| m.artifact.as_ref()) {
        Some(artifact) if artifact.is_local() => "local",
        Some(_) => "remote",
        None => "none",
    };

    writeln!(out, "// swift-tools-version: {}", graph.tools_version)?;
    writeln!(out, "// Generated by appcore-resolve. Binary source: {source}.")?;
    writeln!(out)?;
    writeln!(out, "import PackageDescription")?;
    writeln!(out)?;
    writeln!(out, "let package = Package(")?;
    writeln!(out, "    name: {},", quote(&graph.name))?;

    let platforms: Vec<String> = graph
        .platforms
        .iter()
        .map(|p| format!(".{}(.{})", p.platform.swift_name(), version_token(&p.version)))
        .collect();
    writeln!(out, "    platforms: [{}],", platforms.join(", "))?;

    writeln!(out, "    products: [")?;
    for product in &graph.products {
        writeln!(out, "        .library(")?;
        writeln!(out, "            name: {},", quote(&product.name))?;
        writeln!(out, "            targets: {}),", string_list(&product.targets))?;
    }
    writeln!(out, "    ],")?;

    writeln!(out, "    targets: [")?;
    for module in &graph.modules {
        match module.kind {
            ModuleKind::Regular => write_target(out, ".target", module)?,
            ModuleKind::Test => write_target(out, ".testTarget", module)?,
            ModuleKind::Binary => write_binary_target(out, module, package_root)?,
        }
    }
    writeln!(out, "    ],")?;

    let languages: Vec<String> = graph
        .language_versions
        .iter()
        .map(|v| format!(".{}", version_token(v)))
        .collect();
    writeln!(out, "    swiftLanguageVersions: [{}]", languages.join(", "))?;
    writeln!(out, ")")?;

    Ok(())
}

fn write_target(
    out: &mut String,
    constructor: &str,
    module: &ModuleDescriptor,
) -> std::result::Result<(), ManifestError> {
    writeln!(out, "        {constructor}(")?;
    writeln!(out, "            name: {},", quote(&module.name))?;
    writeln!(out, "            dependencies: {},", string_list(&module.dependencies))?;

    let mut fields = Vec::new();
    if let Some(path) = &module.path {
        fields.push(format!("path: {}", quote(path)));
    }
    if let Some(headers) = &module.public_headers_path {
        fields.push(format!("publicHeadersPath: {}", quote(headers)));
    }
    if !module.resources.is_empty() {
        let resources: Vec<String> = module
            .resources
            .iter()
            .map(|r| match r {
                Resource::Copy(path) => format!("                .copy({})", quote(path)),
            })
            .collect();
        fields.push(format!(
            "resources: [\n{}\n            ]",
            resources.join(",\n")
        ));
    }

    let mut settings: Vec<String> = module
        .settings
        .iter()
        .map(|s| match s {
            BuildSetting::HeaderSearchPath { path } => {
                format!(".headerSearchPath({})", quote(path))
            }
            BuildSetting::Define { name, value: None } => format!(".define({})", quote(name)),
            BuildSetting::Define {
                name,
                value: Some(value),
            } => format!(".define({}, to: {})", quote(name), quote(value)),
        })
        .collect();
    if !module.diagnostics.is_empty() {
        let flags: Vec<String> = module
            .diagnostics
            .compiler_flags()
            .into_iter()
            .map(|f| format!("                    {}", quote(f)))
            .collect();
        settings.push(format!(".unsafeFlags([\n{}\n                ])", flags.join(",\n")));
    }
    if !settings.is_empty() {
        let settings: Vec<String> = settings
            .into_iter()
            .map(|s| format!("                {s},"))
            .collect();
        fields.push(format!("cSettings: [\n{}\n            ]", settings.join("\n")));
    }

    for (i, field) in fields.iter().enumerate() {
        let separator = if i + 1 == fields.len() { "" } else { "," };
        writeln!(out, "            {field}{separator}")?;
    }
    writeln!(out, "        ),")?;
    Ok(())
}

fn write_binary_target(
    out: &mut String,
    module: &ModuleDescriptor,
    package_root: &Path,
) -> std::result::Result<(), ManifestError> {
    writeln!(out, "        .binaryTarget(")?;
    writeln!(out, "            name: {},", quote(&module.name))?;
    match &module.artifact {
        Some(ArtifactDescriptor::Remote(remote)) => {
            writeln!(out, "            url: {},", quote(&remote.url))?;
            writeln!(out, "            checksum: {}),", quote(&remote.checksum))?;
        }
        Some(ArtifactDescriptor::Local(local)) => {
            // Package manifests only accept binary paths relative to the package root
            let relative = local.path.strip_prefix(package_root).map_err(|_| {
                ManifestError::LocalPathOutsidePackage(local.path.display().to_string())
            })?;
            let relative = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            writeln!(out, "            path: {}),", quote(&relative))?;
        }
        None => writeln!(out, "            path: \"\"),")?,
    }
    Ok(())
}

/// Swift version enum case for a dotted version: "12.0" -> "v12", "10.15" -> "v10_15"
fn version_token(version: &str) -> String {
    let mut parts: Vec<&str> = version.split('.').collect();
    while parts.len() > 1 && parts.last().is_some_and(|p| p.chars().all(|c| c == '0')) {
        parts.pop();
    }
    format!("v{}", parts.join("_"))
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

fn string_list(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| quote(v)).collect();
    format!("[{}]", quoted.join(", "))
}
