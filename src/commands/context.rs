//! Descriptor and configuration lookup shared by resolving commands

use std::path::{Path, PathBuf};

use crate::cli::DescriptorArgs;
use crate::common::paths;
use crate::config::{self, ConfigOrigin, ResolverConfig};
use crate::error::Result;

/// Resolved inputs for one command invocation
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: ResolverConfig,
    pub origin: ConfigOrigin,
    /// Absolute descriptor path
    pub descriptor: PathBuf,
}

impl CommandContext {
    pub fn load(args: &DescriptorArgs) -> Result<Self> {
        Self::load_from(&paths::current_dir()?, args)
    }

    /// Load relative to `cwd`.
    ///
    /// The implicit configuration file is looked up next to an explicit
    /// descriptor, or in `cwd` when the descriptor is defaulted.
    pub fn load_from(cwd: &Path, args: &DescriptorArgs) -> Result<Self> {
        let explicit = args
            .descriptor
            .as_deref()
            .map(|descriptor| paths::absolutize(cwd, descriptor));
        let package_dir = explicit.as_deref().and_then(Path::parent).unwrap_or(cwd);
        let config_file = args
            .config
            .as_deref()
            .map(|file| paths::absolutize(cwd, file));

        let (config, origin) = config::load(Some(package_dir), config_file.as_deref())?;
        let descriptor = explicit.unwrap_or_else(|| cwd.join(&config.package.descriptor));

        Ok(Self {
            config,
            origin,
            descriptor,
        })
    }
}
