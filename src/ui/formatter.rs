//! Formatters for build graph output in different modes
//!
//! Machine-readable formats (JSON, YAML) serialize the graph as is. The
//! Swift formatter writes an equivalent package manifest and the text
//! formatter a styled summary for developers.

use clap::ValueEnum;

use crate::error::{Result, render};
use crate::resolver::Resolved;

use super::{swift, text};

/// Output format for a resolved build graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Swift,
    Text,
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Swift => "swift",
            OutputFormat::Text => "text",
        }
    }

    pub fn formatter(self) -> &'static dyn GraphFormatter {
        match self {
            OutputFormat::Json => &JsonFormatter,
            OutputFormat::Yaml => &YamlFormatter,
            OutputFormat::Swift => &SwiftFormatter,
            OutputFormat::Text => &TextFormatter,
        }
    }
}

/// Formatter trait for rendering a resolved build graph
pub trait GraphFormatter {
    fn format(&self, resolved: &Resolved) -> Result<String>;
}

/// Pretty-printed JSON of the build graph
pub struct JsonFormatter;

impl GraphFormatter for JsonFormatter {
    fn format(&self, resolved: &Resolved) -> Result<String> {
        let mut json = serde_json::to_string_pretty(&resolved.graph)
            .map_err(|e| render::failed("json", e.to_string()))?;
        json.push('\n');
        Ok(json)
    }
}

/// YAML of the build graph
pub struct YamlFormatter;

impl GraphFormatter for YamlFormatter {
    fn format(&self, resolved: &Resolved) -> Result<String> {
        serde_yaml::to_string(&resolved.graph).map_err(|e| render::failed("yaml", e.to_string()))
    }
}

/// Swift package manifest equivalent to the build graph
pub struct SwiftFormatter;

impl GraphFormatter for SwiftFormatter {
    fn format(&self, resolved: &Resolved) -> Result<String> {
        swift::manifest(&resolved.graph, &resolved.location.package_root)
    }
}

/// Human-readable summary
pub struct TextFormatter;

impl GraphFormatter for TextFormatter {
    fn format(&self, resolved: &Resolved) -> Result<String> {
        Ok(text::summary(resolved))
    }
}

/// Render a resolution in the requested format
pub fn render(resolved: &Resolved, format: OutputFormat) -> Result<String> {
    format.formatter().format(resolved)
}
