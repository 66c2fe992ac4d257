//! Checksum command implementation

use console::Style;

use crate::cli::ChecksumArgs;
use crate::common::paths;
use crate::config;
use crate::error::Result;
use crate::hash;

/// Run checksum command
pub fn run(args: ChecksumArgs) -> Result<()> {
    let cwd = paths::current_dir()?;
    let archive = paths::absolutize(&cwd, &args.archive);

    let expected = if args.pinned {
        let config_file = args.config.as_deref().map(|f| paths::absolutize(&cwd, f));
        let (config, _) = config::load(Some(&cwd), config_file.as_deref())?;
        Some(config.artifact.remote.checksum)
    } else {
        args.expect
    };

    match expected {
        Some(expected) => {
            let actual = hash::verify_file(&archive, &expected)?;
            println!("{}  {}", actual, args.archive.display());
            eprintln!("{}", Style::new().green().apply_to("Checksum matches"));
        }
        None => {
            let actual = hash::checksum_file(&archive)?;
            println!("{}  {}", actual, args.archive.display());
        }
    }

    Ok(())
}
