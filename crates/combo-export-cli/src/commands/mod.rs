//! CLI command implementations

pub mod csv;
pub mod json;
