use crate::foundation::core::{FrameIndex, FrameRange, LayerId};
use crate::project::modifier::Modifier;
use crate::value::color::ColorValue;

/// Variant payload of a layer.
///
/// The set is closed: every kind shares the base contract of a frame span
/// plus a modifier stack, and adding a kind means adding a variant here and
/// a record case at the codec boundary, nothing else.
#[derive(Clone, Debug, PartialEq)]
pub enum LayerKind {
    /// A flat color card.
    Solid {
        /// Card width in pixels.
        width: u32,
        /// Card height in pixels.
        height: u32,
        /// Fill color.
        color: ColorValue,
    },
    /// Footage or a still referenced by path.
    Visual {
        /// Source file path, relative to the project.
        file_path: String,
    },
}

/// One entry in a sequence's compositing stack.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    id: LayerId,
    title: String,
    range: FrameRange,
    modifiers: Vec<Modifier>,
    kind: LayerKind,
}

impl Layer {
    /// Build a solid-color layer. The id is assigned when the layer joins a
    /// sequence.
    pub fn solid(
        title: impl Into<String>,
        range: FrameRange,
        width: u32,
        height: u32,
        color: ColorValue,
    ) -> Self {
        Self {
            id: LayerId(0),
            title: title.into(),
            range,
            modifiers: Vec::new(),
            kind: LayerKind::Solid {
                width,
                height,
                color,
            },
        }
    }

    /// Build a footage layer. The id is assigned when the layer joins a
    /// sequence.
    pub fn visual(title: impl Into<String>, range: FrameRange, file_path: impl Into<String>) -> Self {
        Self {
            id: LayerId(0),
            title: title.into(),
            range,
            modifiers: Vec::new(),
            kind: LayerKind::Visual {
                file_path: file_path.into(),
            },
        }
    }

    /// Stable identity within the owning sequence.
    pub fn id(&self) -> LayerId {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: LayerId) {
        self.id = id;
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rename the layer.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// The span of frames the layer is active on.
    pub fn range(&self) -> FrameRange {
        self.range
    }

    /// Move or resize the layer's span.
    pub fn set_range(&mut self, range: FrameRange) {
        self.range = range;
    }

    /// The variant payload.
    pub fn kind(&self) -> &LayerKind {
        &self.kind
    }

    /// Mutable access to the variant payload.
    pub fn kind_mut(&mut self) -> &mut LayerKind {
        &mut self.kind
    }

    /// The modifier stack, in evaluation order.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Append a modifier to the stack.
    pub fn add_modifier(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
    }

    /// Remove the modifier at `index`.
    pub fn remove_modifier(&mut self, index: usize) -> Option<Modifier> {
        (index < self.modifiers.len()).then(|| self.modifiers.remove(index))
    }

    /// Positional modifier access.
    pub fn modifier(&self, index: usize) -> Option<&Modifier> {
        self.modifiers.get(index)
    }

    /// Positional mutable modifier access.
    pub fn modifier_mut(&mut self, index: usize) -> Option<&mut Modifier> {
        self.modifiers.get_mut(index)
    }

    /// Whether the layer participates in compositing at `frame`.
    pub fn is_active_at(&self, frame: FrameIndex) -> bool {
        self.range.contains(frame)
    }

    /// Rescale the layer's span and every keyframe it owns from `old_fps`
    /// to `new_fps`, preserving wall-clock timing.
    pub fn adapt_to_frame_rate(&mut self, old_fps: u32, new_fps: u32) {
        if old_fps == 0 || old_fps == new_fps {
            return;
        }
        self.range = self.range.rescaled(old_fps, new_fps);
        for modifier in &mut self.modifiers {
            modifier.adapt_to_frame_rate(old_fps, new_fps);
        }
    }
}
