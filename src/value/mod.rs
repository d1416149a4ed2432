//! The typed value model.
//!
//! Every animatable quantity in a project is a [`Value`](model::Value): a closed
//! set of variants with a fixed shape each. Arithmetic, clamping and
//! interpolation are element-wise and never cross variants.

/// Color payload with a working-space tag and lazy conversion cache.
pub mod color;
/// The `Value` sum type, its discriminant and the canonical codec form.
pub mod model;
/// Color spaces and the conversion collaborator.
pub mod space;
