use clap::Parser;
use std::path::PathBuf;

/// Arguments for the checksum command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the checksum of an archive:\n    appcore-resolve checksum Appcore.xcframework.zip\n\n\
                  Verify an archive against the pinned release:\n    appcore-resolve checksum Appcore.xcframework.zip --pinned\n\n\
                  Verify against an explicit value:\n    appcore-resolve checksum Appcore.xcframework.zip --expect 45ee96b2...")]
pub struct ChecksumArgs {
    /// Zipped artifact bundle to hash
    pub archive: PathBuf,

    /// Expected hex-encoded SHA-256
    #[arg(long, value_name = "HEX", conflicts_with = "pinned")]
    pub expect: Option<String>,

    /// Verify against the checksum pinned in the resolver configuration
    #[arg(long)]
    pub pinned: bool,

    /// Resolver configuration file used with --pinned
    #[arg(long, short = 'c', env = "APPCORE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}
