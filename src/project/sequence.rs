use crate::foundation::core::{FrameIndex, LayerId};
use crate::foundation::error::{MotioError, MotioResult};
use crate::project::layer::Layer;

/// A timeline of composited layers with fixed resolution, frame rate and
/// duration.
///
/// Layer order is compositing order: the first layer in the stack is
/// bottom-most. Layers are addressed by the stable [`LayerId`] handed out by
/// [`add_layer`](Sequence::add_layer); positional access exists for walking
/// the stack in compositing order.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    title: String,
    width: u32,
    height: u32,
    frame_rate: u32,
    duration: u64,
    layers: Vec<Layer>,
    next_layer_id: u64,
}

impl Sequence {
    /// Build a sequence. Rejects a zero frame rate.
    pub fn new(
        title: impl Into<String>,
        width: u32,
        height: u32,
        frame_rate: u32,
        duration: u64,
    ) -> MotioResult<Self> {
        if frame_rate == 0 {
            return Err(MotioError::validation("frame rate must be positive"));
        }
        Ok(Self {
            title: title.into(),
            width,
            height,
            frame_rate,
            duration,
            layers: Vec::new(),
            next_layer_id: 0,
        })
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rename the sequence.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Output width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Change the output width.
    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    /// Output height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Change the output height.
    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    /// Playback rate in frames per second.
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Total length in frames.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Change the total length. Layers keep their spans; a layer may end up
    /// partly or wholly past the new duration.
    pub fn set_duration(&mut self, duration: u64) {
        self.duration = duration;
    }

    /// Change the frame rate, rescaling every layer span and keyframe so
    /// wall-clock timing is preserved. Rejects a zero rate. The duration is
    /// left alone; callers that want the same wall-clock length adjust it
    /// separately.
    pub fn set_frame_rate(&mut self, frame_rate: u32) -> MotioResult<()> {
        if frame_rate == 0 {
            return Err(MotioError::validation("frame rate must be positive"));
        }
        let old = self.frame_rate;
        if old != frame_rate {
            for layer in &mut self.layers {
                layer.adapt_to_frame_rate(old, frame_rate);
            }
            self.frame_rate = frame_rate;
        }
        Ok(())
    }

    /// Clamp `frame` onto the timeline, `[0, duration - 1]`.
    pub fn clamp_frame(&self, frame: FrameIndex) -> FrameIndex {
        let max_inclusive = self.duration.saturating_sub(1);
        FrameIndex(frame.0.min(max_inclusive))
    }

    /// The compositing stack, bottom-most first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Append `layer` on top of the stack and hand out its id.
    pub fn add_layer(&mut self, mut layer: Layer) -> LayerId {
        let id = LayerId(self.next_layer_id);
        self.next_layer_id += 1;
        layer.assign_id(id);
        self.layers.push(layer);
        id
    }

    /// Remove the layer with identity `id`, wherever it sits in the stack.
    pub fn remove_layer(&mut self, id: LayerId) -> Option<Layer> {
        let index = self.layers.iter().position(|l| l.id() == id)?;
        Some(self.layers.remove(index))
    }

    /// Look up a layer by identity.
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id() == id)
    }

    /// Mutable lookup by identity.
    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id() == id)
    }

    /// Positional access in compositing order.
    pub fn layer_at(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Mutable positional access in compositing order.
    pub fn layer_at_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }
}

impl Default for Sequence {
    /// A 1920x1080 sequence at 60 fps, 600 frames long.
    fn default() -> Self {
        Self {
            title: "Sequence".to_string(),
            width: 1920,
            height: 1080,
            frame_rate: 60,
            duration: 600,
            layers: Vec::new(),
            next_layer_id: 0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/sequence.rs"]
mod tests;
