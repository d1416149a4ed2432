use serde_json::json;

use crate::foundation::error::{MotioError, MotioResult};
use crate::value::color::ColorValue;
use crate::value::space::ColorSpace;

/// Discriminant of a [`Value`] variant.
///
/// Serializes as the bare variant name (`"Number"`, `"Vector2"`, ...), which
/// is the `value_type` tag persisted next to every keyframe. Deserializing an
/// unknown tag fails, and the codec surfaces that as a malformed file rather
/// than defaulting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ValueKind {
    /// One 32-bit float.
    Number,
    /// One 32-bit signed integer.
    Integer,
    /// Two 32-bit floats.
    Vector2,
    /// Three 32-bit floats.
    Vector3,
    /// Four 32-bit floats (RGBA) plus a color-space tag.
    Color,
    /// One flag.
    Boolean,
}

impl ValueKind {
    /// The neutral starting value of this kind: zeros, opaque black for
    /// colors, false for booleans.
    pub fn zero(self) -> Value {
        match self {
            ValueKind::Number => Value::Number(0.0),
            ValueKind::Integer => Value::Integer(0),
            ValueKind::Vector2 => Value::Vector2([0.0; 2]),
            ValueKind::Vector3 => Value::Vector3([0.0; 3]),
            ValueKind::Color => Value::Color(ColorValue::linear(0.0, 0.0, 0.0, 1.0)),
            ValueKind::Boolean => Value::Boolean(false),
        }
    }

    /// The persisted tag string for this kind.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Number => "Number",
            ValueKind::Integer => "Integer",
            ValueKind::Vector2 => "Vector2",
            ValueKind::Vector3 => "Vector3",
            ValueKind::Color => "Color",
            ValueKind::Boolean => "Boolean",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed animatable value.
///
/// The variant and element count are fixed at construction. Arithmetic is
/// element-wise and requires identical variants; crossing variants fails with
/// [`MotioError::TypeMismatch`]. Boolean defines no arithmetic at all.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Scalar float.
    Number(f32),
    /// Scalar integer.
    Integer(i32),
    /// 2D float vector.
    Vector2([f32; 2]),
    /// 3D float vector.
    Vector3([f32; 3]),
    /// RGBA color, see [`ColorValue`].
    Color(ColorValue),
    /// Flag.
    Boolean(bool),
}

impl Value {
    /// The discriminant of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Integer(_) => ValueKind::Integer,
            Value::Vector2(_) => ValueKind::Vector2,
            Value::Vector3(_) => ValueKind::Vector3,
            Value::Color(_) => ValueKind::Color,
            Value::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Element-wise addition. Colors add on linear components.
    pub fn add(&self, other: &Value) -> MotioResult<Value> {
        Ok(match (self, other) {
            (Value::Number(a), Value::Number(b)) => Value::Number(a + b),
            (Value::Integer(a), Value::Integer(b)) => Value::Integer(a.saturating_add(*b)),
            (Value::Vector2(a), Value::Vector2(b)) => Value::Vector2([a[0] + b[0], a[1] + b[1]]),
            (Value::Vector3(a), Value::Vector3(b)) => {
                Value::Vector3([a[0] + b[0], a[1] + b[1], a[2] + b[2]])
            }
            (Value::Color(a), Value::Color(b)) => Value::Color(a.add(b)),
            (Value::Boolean(_), Value::Boolean(_)) => return Err(no_boolean_arithmetic("add")),
            _ => return Err(mismatch("add", self, other)),
        })
    }

    /// Element-wise subtraction. Colors subtract on linear components.
    pub fn sub(&self, other: &Value) -> MotioResult<Value> {
        Ok(match (self, other) {
            (Value::Number(a), Value::Number(b)) => Value::Number(a - b),
            (Value::Integer(a), Value::Integer(b)) => Value::Integer(a.saturating_sub(*b)),
            (Value::Vector2(a), Value::Vector2(b)) => Value::Vector2([a[0] - b[0], a[1] - b[1]]),
            (Value::Vector3(a), Value::Vector3(b)) => {
                Value::Vector3([a[0] - b[0], a[1] - b[1], a[2] - b[2]])
            }
            (Value::Color(a), Value::Color(b)) => Value::Color(a.sub(b)),
            (Value::Boolean(_), Value::Boolean(_)) => {
                return Err(no_boolean_arithmetic("subtract"));
            }
            _ => return Err(mismatch("subtract", self, other)),
        })
    }

    /// Scale every element by a float factor. Integers round to nearest.
    pub fn scale(&self, factor: f32) -> MotioResult<Value> {
        Ok(match self {
            Value::Number(a) => Value::Number(a * factor),
            Value::Integer(a) => {
                Value::Integer((f64::from(*a) * f64::from(factor)).round() as i32)
            }
            Value::Vector2(a) => Value::Vector2([a[0] * factor, a[1] * factor]),
            Value::Vector3(a) => Value::Vector3([a[0] * factor, a[1] * factor, a[2] * factor]),
            Value::Color(c) => Value::Color(c.scale(factor)),
            Value::Boolean(_) => return Err(no_boolean_arithmetic("scale")),
        })
    }

    /// Clamp element-wise between optional bounds. The floor is applied
    /// first, so a floor above the ceiling resolves to the ceiling.
    pub fn clip(&self, min: Option<&Value>, max: Option<&Value>) -> MotioResult<Value> {
        let mut out = self.clone();
        if let Some(lo) = min {
            out = out.elementwise(lo, "clip", f32::max, i32::max, ColorValue::max)?;
        }
        if let Some(hi) = max {
            out = out.elementwise(hi, "clip", f32::min, i32::min, ColorValue::min)?;
        }
        Ok(out)
    }

    /// Convex element-wise blend at `t` in `[0, 1]`.
    ///
    /// Integers blend in f64 and round to nearest. Booleans have no
    /// in-between state and hold the left operand. Colors blend on linear
    /// components.
    pub fn lerp(&self, other: &Value, t: f64) -> MotioResult<Value> {
        Ok(match (self, other) {
            (Value::Number(a), Value::Number(b)) => Value::Number(lerp_f32(*a, *b, t)),
            (Value::Integer(a), Value::Integer(b)) => {
                let blended = f64::from(*a) + (f64::from(*b) - f64::from(*a)) * t;
                Value::Integer(blended.round() as i32)
            }
            (Value::Vector2(a), Value::Vector2(b)) => {
                Value::Vector2([lerp_f32(a[0], b[0], t), lerp_f32(a[1], b[1], t)])
            }
            (Value::Vector3(a), Value::Vector3(b)) => Value::Vector3([
                lerp_f32(a[0], b[0], t),
                lerp_f32(a[1], b[1], t),
                lerp_f32(a[2], b[2], t),
            ]),
            (Value::Color(a), Value::Color(b)) => Value::Color(a.lerp(b, t)),
            (Value::Boolean(a), Value::Boolean(_)) => Value::Boolean(*a),
            _ => return Err(mismatch("interpolate", self, other)),
        })
    }

    fn elementwise(
        &self,
        other: &Value,
        op: &str,
        ff: fn(f32, f32) -> f32,
        fi: fn(i32, i32) -> i32,
        fc: fn(&ColorValue, &ColorValue) -> ColorValue,
    ) -> MotioResult<Value> {
        Ok(match (self, other) {
            (Value::Number(a), Value::Number(b)) => Value::Number(ff(*a, *b)),
            (Value::Integer(a), Value::Integer(b)) => Value::Integer(fi(*a, *b)),
            (Value::Vector2(a), Value::Vector2(b)) => {
                Value::Vector2([ff(a[0], b[0]), ff(a[1], b[1])])
            }
            (Value::Vector3(a), Value::Vector3(b)) => {
                Value::Vector3([ff(a[0], b[0]), ff(a[1], b[1]), ff(a[2], b[2])])
            }
            (Value::Color(a), Value::Color(b)) => Value::Color(fc(a, b)),
            (Value::Boolean(_), Value::Boolean(_)) => return Err(no_boolean_arithmetic(op)),
            _ => return Err(mismatch(op, self, other)),
        })
    }

    /// The canonical field record persisted by the codec.
    ///
    /// Colors always store linear-space components here, whatever their
    /// authoring space.
    pub fn to_canonical(&self) -> serde_json::Value {
        match self {
            Value::Number(v) => json!({ "value": v }),
            Value::Integer(v) => json!({ "value": v }),
            Value::Vector2(v) => json!({ "x": v[0], "y": v[1] }),
            Value::Vector3(v) => json!({ "x": v[0], "y": v[1], "z": v[2] }),
            Value::Color(c) => {
                let l = c.components_in(ColorSpace::Linear);
                json!({ "r": l[0], "g": l[1], "b": l[2], "a": l[3] })
            }
            Value::Boolean(v) => json!({ "value": v }),
        }
    }

    /// Rebuild a value from its persisted tag and field record.
    ///
    /// Missing fields fall back to zero (alpha to one, flags to false), and
    /// bare scalars are accepted for the scalar kinds, both of which appear
    /// in files written by older builds. A structurally wrong payload is a
    /// malformed file.
    pub fn from_canonical(kind: ValueKind, data: &serde_json::Value) -> MotioResult<Value> {
        match kind {
            ValueKind::Number => match data {
                serde_json::Value::Object(map) => {
                    Ok(Value::Number(opt_f32(map, "value")?.unwrap_or(0.0)))
                }
                _ => data
                    .as_f64()
                    .map(|v| Value::Number(v as f32))
                    .ok_or_else(|| payload_error(kind, data)),
            },
            ValueKind::Integer => match data {
                serde_json::Value::Object(map) => {
                    Ok(Value::Integer(opt_i32(map, "value")?.unwrap_or(0)))
                }
                _ => data
                    .as_i64()
                    .map(int_in_range)
                    .transpose()?
                    .map(Value::Integer)
                    .ok_or_else(|| payload_error(kind, data)),
            },
            ValueKind::Vector2 => {
                let map = require_object(kind, data)?;
                Ok(Value::Vector2([
                    opt_f32(map, "x")?.unwrap_or(0.0),
                    opt_f32(map, "y")?.unwrap_or(0.0),
                ]))
            }
            ValueKind::Vector3 => {
                let map = require_object(kind, data)?;
                Ok(Value::Vector3([
                    opt_f32(map, "x")?.unwrap_or(0.0),
                    opt_f32(map, "y")?.unwrap_or(0.0),
                    opt_f32(map, "z")?.unwrap_or(0.0),
                ]))
            }
            ValueKind::Color => {
                let map = require_object(kind, data)?;
                Ok(Value::Color(ColorValue::linear(
                    opt_f32(map, "r")?.unwrap_or(0.0),
                    opt_f32(map, "g")?.unwrap_or(0.0),
                    opt_f32(map, "b")?.unwrap_or(0.0),
                    opt_f32(map, "a")?.unwrap_or(1.0),
                )))
            }
            ValueKind::Boolean => match data {
                serde_json::Value::Object(map) => {
                    Ok(Value::Boolean(opt_bool(map, "value")?.unwrap_or(false)))
                }
                serde_json::Value::Bool(b) => Ok(Value::Boolean(*b)),
                _ => Err(payload_error(kind, data)),
            },
        }
    }
}

/// Serializes as the canonical field record with the tag inlined, e.g.
/// `{"value_type": "Vector2", "x": 1.0, "y": 2.0}`. There is no
/// `Deserialize`: reconstruction always goes through
/// [`Value::from_canonical`] with an explicit tag.
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let canonical = self.to_canonical();
        let fields = canonical.as_object().map(|m| m.len()).unwrap_or(0);
        let mut map = serializer.serialize_map(Some(fields + 1))?;
        map.serialize_entry("value_type", self.kind().name())?;
        if let Some(obj) = canonical.as_object() {
            for (k, v) in obj {
                map.serialize_entry(k, v)?;
            }
        }
        map.end()
    }
}

fn lerp_f32(a: f32, b: f32, t: f64) -> f32 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * t) as f32
}

fn mismatch(op: &str, a: &Value, b: &Value) -> MotioError {
    MotioError::type_mismatch(format!("cannot {op} {} and {}", a.kind(), b.kind()))
}

fn no_boolean_arithmetic(op: &str) -> MotioError {
    MotioError::type_mismatch(format!("Boolean values do not support {op}"))
}

fn payload_error(kind: ValueKind, data: &serde_json::Value) -> MotioError {
    MotioError::malformed(format!("{kind} payload has unexpected shape: {data}"))
}

fn require_object(
    kind: ValueKind,
    data: &serde_json::Value,
) -> MotioResult<&serde_json::Map<String, serde_json::Value>> {
    data.as_object().ok_or_else(|| payload_error(kind, data))
}

fn opt_f32(map: &serde_json::Map<String, serde_json::Value>, key: &str) -> MotioResult<Option<f32>> {
    match map.get(key) {
        None => Ok(None),
        Some(v) => v
            .as_f64()
            .map(|n| Some(n as f32))
            .ok_or_else(|| MotioError::malformed(format!("field \"{key}\" must be a number"))),
    }
}

fn opt_i32(map: &serde_json::Map<String, serde_json::Value>, key: &str) -> MotioResult<Option<i32>> {
    match map.get(key) {
        None => Ok(None),
        Some(v) => match v.as_i64() {
            Some(n) => int_in_range(n).map(Some),
            None => Err(MotioError::malformed(format!(
                "field \"{key}\" must be an integer"
            ))),
        },
    }
}

fn opt_bool(
    map: &serde_json::Map<String, serde_json::Value>,
    key: &str,
) -> MotioResult<Option<bool>> {
    match map.get(key) {
        None => Ok(None),
        Some(v) => v
            .as_bool()
            .map(Some)
            .ok_or_else(|| MotioError::malformed(format!("field \"{key}\" must be a boolean"))),
    }
}

fn int_in_range(n: i64) -> MotioResult<i32> {
    i32::try_from(n)
        .map_err(|_| MotioError::malformed(format!("integer {n} is out of 32-bit range")))
}

#[cfg(test)]
#[path = "../../tests/unit/value/model.rs"]
mod tests;
