//! The keyframe animation engine.
//!
//! A [`Parameter`](parameter::Parameter) owns a sorted list of
//! [`Keyframe`](keyframe::Keyframe)s and answers `value_at(frame)` queries
//! with constant extrapolation outside the keyed span and linear blending
//! inside it.

/// Immutable frame/value pairs.
pub mod keyframe;
/// Animatable parameter state and sampling.
pub mod parameter;
