//! Command implementations for appcore-resolve CLI

pub mod checksum;
pub mod completions;
pub mod context;
pub mod locate;
pub mod resolve;
pub mod version;
