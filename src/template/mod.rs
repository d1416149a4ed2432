//! Modifier templates and the repository that serves them.
//!
//! Templates declare the shape of an effect: an ordered list of parameter
//! declarations under a stable string id. They are loaded once from a
//! directory of JSON descriptors, shared immutably, and instantiated into
//! independent [`Modifier`](crate::project::modifier::Modifier)s.

/// JSON descriptor records for template files.
pub(crate) mod descriptor;
/// Parameter and modifier template types.
pub mod model;
/// The id-keyed template registry.
pub mod repository;
