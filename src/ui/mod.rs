//! Output rendering for resolved build graphs

pub mod formatter;
pub mod swift;
pub mod text;

pub use formatter::{OutputFormat, render};
