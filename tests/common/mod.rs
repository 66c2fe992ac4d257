//! Common test utilities for appcore-resolve integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Default bundle location relative to the package root
pub const LOCAL_BUNDLE: &str = "go/appcore/build/Appcore.xcframework";

/// Checksum pinned for the default release
#[allow(dead_code)]
pub const PINNED_CHECKSUM: &str =
    "45ee96b2143ef9fe38d1bc47f5b8464f7fed5a9371b5a5b59b51dec39a059b4f";

/// A package checkout for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to package root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new package checkout with an empty descriptor
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp dir");
        let workspace = Self { temp, path };
        workspace.write_file("Package.swift", "// swift-tools-version: 5.7\n");
        workspace
    }

    /// Absolute path to the descriptor
    pub fn descriptor(&self) -> PathBuf {
        self.path.join("Package.swift")
    }

    /// Absolute path to the local bundle marker
    #[allow(dead_code)]
    pub fn marker(&self) -> PathBuf {
        self.path.join(LOCAL_BUNDLE).join("Info.plist")
    }

    /// Simulate a local Appcore build
    #[allow(dead_code)]
    pub fn create_local_bundle(&self) -> PathBuf {
        self.write_file(&format!("{LOCAL_BUNDLE}/Info.plist"), "<plist/>\n");
        self.path.join(LOCAL_BUNDLE)
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Binary invocation rooted at the workspace, isolated from the caller's environment
    pub fn cmd(&self) -> Command {
        let mut cmd = appcore_cmd();
        cmd.current_dir(&self.path);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Binary invocation with resolver environment variables cleared
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn appcore_cmd() -> Command {
    let mut cmd = Command::cargo_bin("appcore-resolve").unwrap();
    cmd.env_remove("APPCORE_DESCRIPTOR")
        .env_remove("APPCORE_CONFIG")
        .env_remove("APPCORE_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
        assert!(workspace.descriptor().is_file());
    }

    #[test]
    fn test_workspace_local_bundle() {
        let workspace = TestWorkspace::new();
        workspace.create_local_bundle();
        assert!(workspace.marker().is_file());
    }
}
