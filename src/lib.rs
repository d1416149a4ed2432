//! Motio is the data and evaluation core of a non-destructive motion-graphics
//! editor.
//!
//! A project is a strict ownership tree: a [`Project`] owns [`Sequence`]s by
//! id, a sequence owns an ordered compositing stack of [`Layer`]s, a layer
//! owns [`Modifier`]s instantiated from templates, and every modifier
//! [`Parameter`] is animated by [`Keyframe`]s over a frame timeline.
//!
//! # Pipeline overview
//!
//! 1. **Author**: build or load a [`Project`]; instantiate effects from a
//!    [`ModifierRepository`] populated from a directory of template
//!    descriptors.
//! 2. **Animate**: edit parameter keyframes; `value_at(frame)` answers any
//!    frame deterministically with constant extrapolation outside the keyed
//!    span and linear blending inside it.
//! 3. **Evaluate**: `Sequence + FrameIndex -> SampledFrame` (active layers in
//!    compositing order, each with its enabled modifiers fully sampled).
//! 4. **Persist**: the JSON project codec round-trips the whole graph, typed
//!    values included.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic sampling**: frame evaluation is a pure function of the
//!   graph and the frame index, safe to call from a render thread while the
//!   graph is not being edited.
//! - **Typed values everywhere**: every animatable quantity is a [`Value`]
//!   with a fixed variant; cross-variant arithmetic is rejected, never
//!   coerced.
//! - **Atomic loads**: loading builds a complete fresh [`Project`] before
//!   handing it over, so a failed load never corrupts live state.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod codec;
mod eval;
mod foundation;
mod project;
mod template;
mod value;

pub use animation::keyframe::Keyframe;
pub use animation::parameter::Parameter;
pub use codec::project_file::{
    load_project, load_project_string, save_project, save_project_string,
};
pub use eval::sampler::{FrameSampler, SampledFrame, SampledLayer, SampledModifier};
pub use foundation::core::{FrameIndex, FrameRange, LayerId, SequenceId};
pub use foundation::error::{MotioError, MotioResult};
pub use project::graph::Project;
pub use project::layer::{Layer, LayerKind};
pub use project::modifier::Modifier;
pub use project::sequence::Sequence;
pub use template::model::{ModifierTemplate, ParameterFlag, ParameterTemplate};
pub use template::repository::ModifierRepository;
pub use value::color::ColorValue;
pub use value::model::{Value, ValueKind};
pub use value::space::ColorSpace;
