//! Locate command implementation

use console::Style;

use crate::cli::LocateArgs;
use crate::config::ConfigOrigin;
use crate::error::{Result, artifact};
use crate::resolver::{FsProbe, Probe, Resolver};

use super::context::CommandContext;

/// Run locate command
pub fn run(args: LocateArgs) -> Result<()> {
    let context = CommandContext::load(&args.descriptor)?;
    let location = Resolver::new(&context.config).locate(&context.descriptor)?;
    let present = FsProbe.exists(&location.marker);

    let bold = Style::new().bold();
    println!("{} {}", bold.apply_to("Descriptor:"), context.descriptor.display());
    println!("{} {}", bold.apply_to("Bundle:    "), location.bundle.display());
    println!("{} {}", bold.apply_to("Marker:    "), location.marker.display());
    match &context.origin {
        ConfigOrigin::File(path) => {
            println!("{} {}", bold.apply_to("Config:    "), path.display());
        }
        ConfigOrigin::BuiltIn => println!("{} built-in defaults", bold.apply_to("Config:    ")),
    }
    if present {
        println!(
            "{} {}",
            bold.apply_to("Source:    "),
            Style::new().yellow().apply_to("local build")
        );
    } else {
        println!(
            "{} {}",
            bold.apply_to("Source:    "),
            Style::new().green().apply_to("pinned release")
        );
    }

    if args.require && !present {
        return Err(artifact::local_missing(location.marker.display().to_string()));
    }

    Ok(())
}
