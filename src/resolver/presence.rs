//! Presence check for a locally built bundle
//!
//! Existence of the marker file is the whole signal. The bundle's contents
//! are never opened or validated; a broken bundle surfaces later as a link
//! failure in the external toolchain.

use std::path::Path;

use console::Style;

use super::locator::ArtifactLocation;

/// Answers "does this path exist" for the presence check
pub trait Probe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl Probe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl<P: Probe + ?Sized> Probe for &P {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// Line shown to developers when their own build is picked up
pub fn local_notice(marker: &Path) -> String {
    format!("Using Local Appcore Build From: {}", marker.display())
}

/// Check for the local marker file. Prints the local notice when found.
pub fn check(probe: &impl Probe, location: &ArtifactLocation) -> bool {
    let present = probe.exists(&location.marker);
    tracing::debug!(marker = %location.marker.display(), present, "checked local bundle marker");

    if present {
        eprintln!(
            "{}",
            Style::new().yellow().apply_to(local_notice(&location.marker))
        );
    }

    present
}
