//! Human-readable resolution summary

use std::fmt::Write as _;

use console::Style;

use crate::domain::ModuleKind;
use crate::resolver::Resolved;

/// Styled multi-line summary of a resolution
pub fn summary(resolved: &Resolved) -> String {
    let bold = Style::new().bold();
    let graph = &resolved.graph;
    let mut out = String::new();

    let platforms: Vec<String> = graph
        .platforms
        .iter()
        .map(|p| format!("{} {}", p.platform.swift_name(), p.version))
        .collect();
    let _ = writeln!(
        out,
        "{} ({}, tools {})",
        Style::new().bold().yellow().apply_to(&graph.name),
        platforms.join(", "),
        graph.tools_version
    );

    let artifact = resolved.resolution.artifact();
    match artifact.local_path() {
        Some(path) => {
            let _ = writeln!(out, "  {} local build", bold.apply_to("Binary source:"));
            let _ = writeln!(out, "    Path:     {}", path.display());
        }
        None => {
            let _ = writeln!(out, "  {} remote release", bold.apply_to("Binary source:"));
            let _ = writeln!(out, "    URL:      {}", artifact.location());
        }
    }
    let _ = writeln!(
        out,
        "    Checksum: {}",
        artifact.checksum().unwrap_or("not verified")
    );

    let diagnostics = resolved.resolution.diagnostics();
    let flags = if diagnostics.is_empty() {
        "none".to_string()
    } else {
        diagnostics.compiler_flags().join(" ")
    };
    let _ = writeln!(out, "  {} {}", bold.apply_to("Diagnostics:"), flags);

    let _ = writeln!(out, "  {}", bold.apply_to("Modules:"));
    for module in &graph.modules {
        let kind = match module.kind {
            ModuleKind::Regular => "library",
            ModuleKind::Binary => "binary",
            ModuleKind::Test => "test",
        };
        let _ = write!(out, "    - {} ({kind})", Style::new().cyan().apply_to(&module.name));
        if !module.dependencies.is_empty() {
            let _ = write!(out, " -> {}", module.dependencies.join(", "));
        }
        let _ = writeln!(out);
    }

    out
}
