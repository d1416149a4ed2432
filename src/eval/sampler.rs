use crate::foundation::core::{FrameIndex, LayerId};
use crate::project::sequence::Sequence;
use crate::value::model::Value;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One fully sampled frame of a sequence.
pub struct SampledFrame {
    /// The frame that was sampled.
    pub frame: FrameIndex,
    /// Layers active at the frame, bottom-most first.
    pub layers: Vec<SampledLayer>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One active layer with its evaluated modifier stack.
pub struct SampledLayer {
    /// Stable identity of the layer within its sequence.
    pub layer_id: LayerId,
    /// Layer title, carried for diagnostics and snapshots.
    pub title: String,
    /// Enabled modifiers in stack order.
    pub modifiers: Vec<SampledModifier>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One enabled modifier with every parameter sampled.
pub struct SampledModifier {
    /// Template id the modifier was instantiated from.
    pub template_id: String,
    /// Sampled parameter values, in template order.
    pub values: Vec<Value>,
}

/// Stateless sampler from a sequence to a frame graph.
pub struct FrameSampler;

impl FrameSampler {
    #[tracing::instrument(skip(sequence))]
    /// Sample one frame of `sequence`.
    ///
    /// Layers whose span does not cover `frame` and modifiers with the
    /// enabled flag off are left out. Sampling is total: a frame past the
    /// sequence duration extrapolates like any other (callers that want the
    /// timeline boundary use [`Sequence::clamp_frame`] first).
    pub fn sample_frame(sequence: &Sequence, frame: FrameIndex) -> SampledFrame {
        let layers = sequence
            .layers()
            .iter()
            .filter(|layer| layer.is_active_at(frame))
            .map(|layer| SampledLayer {
                layer_id: layer.id(),
                title: layer.title().to_string(),
                modifiers: layer
                    .modifiers()
                    .iter()
                    .filter(|modifier| modifier.enabled())
                    .map(|modifier| SampledModifier {
                        template_id: modifier.template_id().to_string(),
                        values: modifier
                            .parameters()
                            .iter()
                            .map(|parameter| parameter.value_at(frame))
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        SampledFrame { frame, layers }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/sampler.rs"]
mod tests;
