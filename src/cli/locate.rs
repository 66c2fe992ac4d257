use clap::Parser;

use super::DescriptorArgs;

/// Arguments for the locate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the expected local bundle:\n    appcore-resolve locate\n\n\
                  Fail unless a local build exists:\n    appcore-resolve locate --require")]
pub struct LocateArgs {
    #[command(flatten)]
    pub descriptor: DescriptorArgs,

    /// Exit with an error when no local build is present
    #[arg(long)]
    pub require: bool,
}
