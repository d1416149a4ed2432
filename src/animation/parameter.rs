use crate::animation::keyframe::Keyframe;
use crate::foundation::core::{FrameIndex, rescale_frame};
use crate::foundation::error::{MotioError, MotioResult};
use crate::value::model::{Value, ValueKind};

/// One animatable quantity of a modifier.
///
/// A parameter is born with the declared kind of its template and never
/// changes it: every keyframe and every current-value edit must carry that
/// kind or the mutation is rejected with
/// [`MotioError::TypeMismatch`](crate::foundation::error::MotioError).
/// Keyframes are kept sorted by frame with unique frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    data_type: ValueKind,
    current_value: Value,
    keyframes: Vec<Keyframe>, // sorted by frame, frames unique
}

impl Parameter {
    /// Build an un-animated parameter whose kind is taken from `current_value`.
    pub fn new(current_value: Value) -> Self {
        Self {
            data_type: current_value.kind(),
            current_value,
            keyframes: Vec::new(),
        }
    }

    /// The declared value kind.
    pub fn data_type(&self) -> ValueKind {
        self.data_type
    }

    /// The static value used while no keyframes exist.
    pub fn current_value(&self) -> &Value {
        &self.current_value
    }

    /// The keyframes, sorted ascending by frame.
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Whether any keyframes drive this parameter.
    pub fn is_animated(&self) -> bool {
        !self.keyframes.is_empty()
    }

    /// Replace the static value. Rejects a kind change.
    pub fn set_current_value(&mut self, value: Value) -> MotioResult<()> {
        self.check_kind(&value)?;
        self.current_value = value;
        Ok(())
    }

    /// Insert a keyframe, replacing any existing keyframe on the same frame.
    pub fn add_keyframe(&mut self, keyframe: Keyframe) -> MotioResult<()> {
        self.check_kind(keyframe.value())?;
        match self
            .keyframes
            .binary_search_by_key(&keyframe.frame(), |k| k.frame())
        {
            Ok(idx) => self.keyframes[idx] = keyframe,
            Err(idx) => self.keyframes.insert(idx, keyframe),
        }
        Ok(())
    }

    /// Remove the keyframe on `frame`. Returns whether one was there.
    pub fn remove_keyframe(&mut self, frame: FrameIndex) -> bool {
        match self.keyframes.binary_search_by_key(&frame, |k| k.frame()) {
            Ok(idx) => {
                self.keyframes.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Drop all keyframes, leaving the current value in place.
    pub fn clear_keyframes(&mut self) {
        self.keyframes.clear();
    }

    /// Sample the parameter at `frame`.
    ///
    /// With no keyframes this returns the current value. Outside the keyed
    /// span the nearest keyframe holds (constant extrapolation). On a knot
    /// the keyed value is returned exactly. Between two knots the values
    /// blend linearly; Boolean holds the earlier knot until the next one.
    pub fn value_at(&self, frame: FrameIndex) -> Value {
        if self.keyframes.is_empty() {
            return self.current_value.clone();
        }

        let f = frame.0;
        let idx = self.keyframes.partition_point(|k| k.frame().0 <= f);

        if idx == 0 {
            return self.keyframes[0].value().clone();
        }
        let a = &self.keyframes[idx - 1];
        if a.frame().0 == f || idx >= self.keyframes.len() {
            return a.value().clone();
        }

        let b = &self.keyframes[idx];
        let t = (f - a.frame().0) as f64 / (b.frame().0 - a.frame().0) as f64;
        match a.value().lerp(b.value(), t) {
            Ok(v) => v,
            // Unreachable while the kind invariant holds; hold the earlier
            // knot rather than panic if it ever breaks.
            Err(_) => a.value().clone(),
        }
    }

    /// Rescale every keyframe's frame from `old_fps` to `new_fps`,
    /// preserving wall-clock timing. Keyframes that collide after rounding
    /// collapse to the later one.
    pub fn adapt_to_frame_rate(&mut self, old_fps: u32, new_fps: u32) {
        if old_fps == 0 || old_fps == new_fps {
            return;
        }
        let old = std::mem::take(&mut self.keyframes);
        for kf in old {
            let frame = FrameIndex(rescale_frame(kf.frame().0, old_fps, new_fps));
            let kf = Keyframe::new(frame, kf.value().clone());
            match self.keyframes.last_mut() {
                Some(last) if last.frame() == frame => *last = kf,
                _ => self.keyframes.push(kf),
            }
        }
    }

    fn check_kind(&self, value: &Value) -> MotioResult<()> {
        if value.kind() != self.data_type {
            return Err(MotioError::type_mismatch(format!(
                "parameter holds {} values, got {}",
                self.data_type,
                value.kind()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/parameter.rs"]
mod tests;
