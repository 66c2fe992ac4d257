use clap::{Args, Parser};
use std::path::PathBuf;

use crate::ui::OutputFormat;

/// Descriptor and configuration selection shared by resolving commands
#[derive(Args, Debug, Clone, Default)]
pub struct DescriptorArgs {
    /// Path to the package descriptor (defaults to ./Package.swift)
    #[arg(long, short = 'd', env = "APPCORE_DESCRIPTOR", value_name = "PATH")]
    pub descriptor: Option<PathBuf>,

    /// Resolver configuration file (defaults to appcore.yaml beside the descriptor)
    #[arg(long, short = 'c', env = "APPCORE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the build graph as JSON:\n    appcore-resolve resolve\n\n\
                  Write an equivalent Package.swift:\n    appcore-resolve resolve --format swift -o Package.resolved.swift\n\n\
                  Resolve for another checkout:\n    appcore-resolve resolve -d ~/src/CriticalMoments/Package.swift --format text")]
pub struct ResolveArgs {
    #[command(flatten)]
    pub descriptor: DescriptorArgs,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}
