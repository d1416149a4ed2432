//! Frame evaluation for the render collaborator.
//!
//! Sampling is a pure function of `(&Sequence, FrameIndex)` with no IO and
//! no mutation. The result is a serializable graph of the layers active at
//! the frame, each with the sampled values of its enabled modifiers, in
//! compositing order.

/// Stateless frame sampling.
pub mod sampler;
