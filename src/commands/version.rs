//! Version command implementation

use crate::config::ResolverConfig;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    let pinned = ResolverConfig::default();

    println!("appcore-resolve {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!("  Pinned release: {}", pinned.artifact.remote.url);

    Ok(())
}

fn rustc_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
