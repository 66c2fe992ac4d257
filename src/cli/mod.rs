//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - resolve: Resolve command arguments
//! - locate: Locate command arguments
//! - checksum: Checksum command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod checksum;
pub mod completions;
pub mod locate;
pub mod resolve;

pub use checksum::ChecksumArgs;
pub use completions::CompletionsArgs;
pub use locate::LocateArgs;
pub use resolve::{DescriptorArgs, ResolveArgs};

/// appcore-resolve - Appcore binary dependency resolver
///
/// Decide which Appcore artifact a build links against and which compiler
/// strictness goes with it.
#[derive(Parser, Debug)]
#[command(
    name = "appcore-resolve",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve the Appcore binary dependency for a package build",
    long_about = "appcore-resolve picks the Appcore binary artifact for a package build: a locally \
                  built bundle when one exists, the pinned and checksummed release otherwise. \
                  Local builds also turn on strict compiler diagnostics for the library module.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  appcore-resolve resolve                       \x1b[90m# Build graph as JSON\x1b[0m\n   \
                  appcore-resolve resolve --format swift        \x1b[90m# Equivalent Package.swift\x1b[0m\n   \
                  appcore-resolve locate                        \x1b[90m# Where a local build is expected\x1b[0m\n   \
                  appcore-resolve checksum Appcore.xcframework.zip \x1b[90m# SHA-256 of a release archive\x1b[0m\n"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the binary dependency and print the build graph
    Resolve(ResolveArgs),

    /// Show where a local build is expected and whether it exists
    Locate(LocateArgs),

    /// Compute or verify the SHA-256 checksum of a release archive
    Checksum(ChecksumArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
