use crate::foundation::core::FrameIndex;
use crate::value::model::Value;

/// A value pinned to one frame of a parameter's timeline.
///
/// Immutable once constructed. Moving a keyframe is a remove plus an add on
/// the owning [`Parameter`](crate::animation::parameter::Parameter).
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    frame: FrameIndex,
    value: Value,
}

impl Keyframe {
    /// Pin `value` to `frame`.
    pub fn new(frame: FrameIndex, value: Value) -> Self {
        Self { frame, value }
    }

    /// The frame this keyframe sits on.
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    /// The pinned value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}
