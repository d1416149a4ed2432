//! Shared building blocks: frame/id newtypes and the crate-wide error taxonomy.

/// Frame index, frame range and identifier newtypes.
pub mod core;
/// Error and result types used across the crate.
pub mod error;
