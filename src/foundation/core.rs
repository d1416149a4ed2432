use crate::foundation::error::{MotioError, MotioResult};

/// Index of a single frame on a sequence timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Identifier of a sequence within a project. Monotonic, never reused.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SequenceId(pub u32);

/// Identifier of a layer within a sequence. Stable across reordering and removal.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct LayerId(pub u64);

/// Half-open span of frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame inside the range.
    pub start: FrameIndex,
    /// First frame past the range.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Build a range, rejecting an inverted span.
    pub fn new(start: FrameIndex, end: FrameIndex) -> MotioResult<Self> {
        if start.0 > end.0 {
            return Err(MotioError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Whether the range covers no frames at all.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Whether `f` lies inside the range (`start` inclusive, `end` exclusive).
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Clamp `f` to the closest frame inside the range.
    pub fn clamp(self, f: FrameIndex) -> FrameIndex {
        if self.is_empty() {
            return self.start;
        }
        let max_inclusive = self.end.0.saturating_sub(1);
        FrameIndex(f.0.clamp(self.start.0, max_inclusive))
    }

    /// Rescale both endpoints from one frame rate to another, rounding to nearest.
    pub fn rescaled(self, old_fps: u32, new_fps: u32) -> Self {
        Self {
            start: FrameIndex(rescale_frame(self.start.0, old_fps, new_fps)),
            end: FrameIndex(rescale_frame(self.end.0, old_fps, new_fps)),
        }
    }
}

/// Map a frame count from `old_fps` to `new_fps`, preserving wall-clock time.
pub(crate) fn rescale_frame(frame: u64, old_fps: u32, new_fps: u32) -> u64 {
    if old_fps == 0 || old_fps == new_fps {
        return frame;
    }
    let scaled = frame as f64 * f64::from(new_fps) / f64::from(old_fps);
    scaled.round() as u64
}
