//! Compiler diagnostics policy
//!
//! A policy is either empty or the full strict set. There is no way to build
//! a partial policy, and release builds always carry the empty one because
//! package distribution rejects unsafe compiler flags on published modules.

use serde::Serialize;

/// A single treat-as-error compiler flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticFlag {
    /// Missing return / implicit fallthrough is an error
    #[serde(rename = "-Werror=return-type")]
    ErrorOnMissingReturn,
    /// Unused variables are errors
    #[serde(rename = "-Werror=unused-variable")]
    ErrorOnUnusedVariable,
    /// Every remaining default warning is an error
    #[serde(rename = "-Werror")]
    ErrorOnAllWarnings,
}

impl DiagnosticFlag {
    /// Flag as passed to the C-family compiler
    pub fn as_flag(self) -> &'static str {
        match self {
            DiagnosticFlag::ErrorOnMissingReturn => "-Werror=return-type",
            DiagnosticFlag::ErrorOnUnusedVariable => "-Werror=unused-variable",
            DiagnosticFlag::ErrorOnAllWarnings => "-Werror",
        }
    }
}

const STRICT_FLAGS: [DiagnosticFlag; 3] = [
    DiagnosticFlag::ErrorOnMissingReturn,
    DiagnosticFlag::ErrorOnUnusedVariable,
    DiagnosticFlag::ErrorOnAllWarnings,
];

/// Ordered set of strictness flags attached to the library module
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct DiagnosticsPolicy {
    flags: Vec<DiagnosticFlag>,
}

impl DiagnosticsPolicy {
    /// No flags. The only policy allowed on distributed builds.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Full strictness set used for local development builds
    pub fn strict() -> Self {
        Self {
            flags: STRICT_FLAGS.to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn flags(&self) -> &[DiagnosticFlag] {
        &self.flags
    }

    pub fn compiler_flags(&self) -> Vec<&'static str> {
        self.flags.iter().map(|flag| flag.as_flag()).collect()
    }
}
