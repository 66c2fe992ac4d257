//! Resolve command implementation

use crate::cli::ResolveArgs;
use crate::error::{Result, fs};
use crate::resolver::Resolver;
use crate::ui;

use super::context::CommandContext;

/// Run resolve command
pub fn run(args: ResolveArgs) -> Result<()> {
    let context = CommandContext::load(&args.descriptor)?;
    tracing::debug!(
        descriptor = %context.descriptor.display(),
        config = ?context.origin,
        "resolving"
    );

    let resolved = Resolver::new(&context.config).resolve(&context.descriptor)?;
    let output = ui::render(&resolved, args.format)?;

    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .map_err(|e| fs::write_failed(parent.display().to_string(), e.to_string()))?;
            }
            std::fs::write(&path, output)
                .map_err(|e| fs::write_failed(path.display().to_string(), e.to_string()))?;
            tracing::info!(path = %path.display(), format = args.format.name(), "wrote build graph");
        }
        None => print!("{output}"),
    }

    Ok(())
}
