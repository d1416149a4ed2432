//! The editable project graph.
//!
//! Ownership is a strict tree: a [`Project`](graph::Project) owns
//! [`Sequence`](sequence::Sequence)s by id, a sequence owns an ordered stack
//! of [`Layer`](layer::Layer)s, and a layer owns an ordered stack of
//! [`Modifier`](modifier::Modifier)s. The only outward reference is the
//! modifier's template id, which is resolved through a
//! [`ModifierRepository`](crate::template::repository::ModifierRepository)
//! on demand and may legitimately dangle.

/// Top-level project state.
pub mod graph;
/// Layer variants and their shared contract.
pub mod layer;
/// Effect instances bound to a template id.
pub mod modifier;
/// Timelines of composited layers.
pub mod sequence;
