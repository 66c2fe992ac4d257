//! Loading resolver configuration from disk

use std::path::{Path, PathBuf};

use super::ResolverConfig;
use crate::error::{AppcoreError, Result, config};

/// Implicit configuration file name, looked up next to the descriptor
pub const CONFIG_FILE: &str = "appcore.yaml";

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    BuiltIn,
    File(PathBuf),
}

/// Load configuration for a package.
///
/// An explicit file must exist and replaces the implicit one. Otherwise
/// `appcore.yaml` in `package_dir` is used when present, falling back to
/// the built-in defaults. The result is always validated.
pub fn load(
    package_dir: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<(ResolverConfig, ConfigOrigin)> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(config::not_found(path.display().to_string()));
            }
            Some(path.to_path_buf())
        }
        None => package_dir
            .map(|dir| dir.join(CONFIG_FILE))
            .filter(|candidate| candidate.is_file()),
    };

    let (loaded, origin) = match path {
        Some(path) => (read_file(&path)?, ConfigOrigin::File(path)),
        None => (ResolverConfig::default(), ConfigOrigin::BuiltIn),
    };

    loaded.validate()?;
    tracing::debug!(origin = ?origin, "loaded resolver configuration");

    Ok((loaded, origin))
}

fn read_file(path: &Path) -> Result<ResolverConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;

    ResolverConfig::from_yaml(&content).map_err(|e| match e {
        AppcoreError::ConfigParseFailed { reason, .. } => {
            config::parse_failed(path.display().to_string(), reason)
        }
        other => other,
    })
}
