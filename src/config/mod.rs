//! Configuration file handling for appcore-resolve
//!
//! This module contains data structures for:
//! - `appcore.yaml` - Optional resolver configuration beside the descriptor

pub mod loader;
pub mod resolver;

// Re-export commonly used types
pub use loader::{ConfigOrigin, load};
pub use resolver::ResolverConfig;
