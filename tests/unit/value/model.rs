use super::*;
use crate::foundation::error::MotioError;

fn assert_type_mismatch(result: MotioResult<Value>) {
    match result {
        Err(MotioError::TypeMismatch(_)) => {}
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn add_then_sub_returns_original() {
    let cases = [
        (Value::Number(1.25), Value::Number(3.5)),
        (Value::Integer(7), Value::Integer(-3)),
        (Value::Vector2([1.0, 2.0]), Value::Vector2([0.5, -4.0])),
        (
            Value::Vector3([1.0, 2.0, 3.0]),
            Value::Vector3([-1.0, 0.25, 8.0]),
        ),
    ];
    for (a, b) in cases {
        let back = a.add(&b).unwrap().sub(&b).unwrap();
        assert_eq!(back, a, "add/sub did not return to {a:?}");
    }
}

#[test]
fn arithmetic_across_variants_is_rejected() {
    assert_type_mismatch(Value::Number(1.0).add(&Value::Integer(1)));
    assert_type_mismatch(Value::Vector2([0.0; 2]).sub(&Value::Vector3([0.0; 3])));
    assert_type_mismatch(Value::Number(1.0).clip(Some(&Value::Integer(0)), None));
    assert_type_mismatch(Value::Color(ColorValue::white()).lerp(&Value::Number(0.0), 0.5));
}

#[test]
fn booleans_define_no_arithmetic() {
    assert_type_mismatch(Value::Boolean(true).add(&Value::Boolean(false)));
    assert_type_mismatch(Value::Boolean(true).scale(2.0));
    assert_type_mismatch(Value::Boolean(true).clip(Some(&Value::Boolean(false)), None));
}

#[test]
fn scale_rounds_integers_to_nearest() {
    assert_eq!(Value::Integer(5).scale(0.5).unwrap(), Value::Integer(3));
    assert_eq!(Value::Integer(-5).scale(0.5).unwrap(), Value::Integer(-3));
    assert_eq!(Value::Integer(10).scale(0.25).unwrap(), Value::Integer(3));
    assert_eq!(
        Value::Number(10.0).scale(0.25).unwrap(),
        Value::Number(2.5)
    );
}

#[test]
fn integer_addition_saturates_instead_of_wrapping() {
    assert_eq!(
        Value::Integer(i32::MAX).add(&Value::Integer(1)).unwrap(),
        Value::Integer(i32::MAX)
    );
    assert_eq!(
        Value::Integer(i32::MIN).sub(&Value::Integer(1)).unwrap(),
        Value::Integer(i32::MIN)
    );
}

#[test]
fn clip_applies_floor_then_ceiling() {
    let v = Value::Vector2([-1.0, 5.0]);
    let clipped = v
        .clip(
            Some(&Value::Vector2([0.0, 0.0])),
            Some(&Value::Vector2([1.0, 1.0])),
        )
        .unwrap();
    assert_eq!(clipped, Value::Vector2([0.0, 1.0]));

    // One-sided bounds leave the other side open.
    let floored = Value::Number(-2.0)
        .clip(Some(&Value::Number(0.0)), None)
        .unwrap();
    assert_eq!(floored, Value::Number(0.0));
}

#[test]
fn lerp_is_convex_per_element() {
    let a = Value::Vector2([960.0, 540.0]);
    let b = Value::Vector2([1260.0, 540.0]);
    assert_eq!(a.lerp(&b, 0.5).unwrap(), Value::Vector2([1110.0, 540.0]));
    assert_eq!(a.lerp(&b, 0.0).unwrap(), a);
    assert_eq!(a.lerp(&b, 1.0).unwrap(), b);
}

#[test]
fn lerp_rounds_integers_and_holds_booleans() {
    assert_eq!(
        Value::Integer(0).lerp(&Value::Integer(10), 0.33).unwrap(),
        Value::Integer(3)
    );
    assert_eq!(
        Value::Integer(0).lerp(&Value::Integer(3), 0.5).unwrap(),
        Value::Integer(2) // 1.5 rounds away from zero
    );
    assert_eq!(
        Value::Boolean(true).lerp(&Value::Boolean(false), 0.99).unwrap(),
        Value::Boolean(true)
    );
}

#[test]
fn canonical_round_trips_every_variant() {
    let values = [
        Value::Number(2.5),
        Value::Integer(-42),
        Value::Vector2([1.0, -2.0]),
        Value::Vector3([0.5, 0.25, -0.125]),
        Value::Color(ColorValue::linear(0.25, 0.5, 0.75, 1.0)),
        Value::Boolean(true),
    ];
    for v in values {
        let kind = v.kind();
        let back = Value::from_canonical(kind, &v.to_canonical()).unwrap();
        assert_eq!(back, v);
        assert_eq!(back.kind(), kind);
    }
}

#[test]
fn canonical_color_is_linear_regardless_of_authoring_space() {
    let srgb = Value::Color(ColorValue::srgb(0.5, 0.5, 0.5, 1.0));
    let canonical = srgb.to_canonical();
    let r = canonical.get("r").and_then(|v| v.as_f64()).unwrap();
    assert!((r - 0.21404114).abs() < 1e-5);
    // Reconstruction lands in linear space and compares equal.
    assert_eq!(Value::from_canonical(ValueKind::Color, &canonical).unwrap(), srgb);
}

#[test]
fn from_canonical_accepts_bare_scalars() {
    assert_eq!(
        Value::from_canonical(ValueKind::Number, &json!(1.5)).unwrap(),
        Value::Number(1.5)
    );
    assert_eq!(
        Value::from_canonical(ValueKind::Integer, &json!(7)).unwrap(),
        Value::Integer(7)
    );
    assert_eq!(
        Value::from_canonical(ValueKind::Boolean, &json!(true)).unwrap(),
        Value::Boolean(true)
    );
}

#[test]
fn from_canonical_defaults_missing_fields() {
    assert_eq!(
        Value::from_canonical(ValueKind::Vector2, &json!({"x": 3.0})).unwrap(),
        Value::Vector2([3.0, 0.0])
    );
    assert_eq!(
        Value::from_canonical(ValueKind::Color, &json!({"r": 1.0})).unwrap(),
        Value::Color(ColorValue::linear(1.0, 0.0, 0.0, 1.0))
    );
    assert_eq!(
        Value::from_canonical(ValueKind::Number, &json!({})).unwrap(),
        Value::Number(0.0)
    );
    assert_eq!(
        Value::from_canonical(ValueKind::Boolean, &json!({})).unwrap(),
        Value::Boolean(false)
    );
}

#[test]
fn from_canonical_rejects_wrong_shapes() {
    assert!(Value::from_canonical(ValueKind::Vector2, &json!(7)).is_err());
    assert!(Value::from_canonical(ValueKind::Number, &json!("1.5")).is_err());
    assert!(Value::from_canonical(ValueKind::Number, &json!({"value": "x"})).is_err());
    assert!(Value::from_canonical(ValueKind::Integer, &json!(1.5)).is_err());
    assert!(Value::from_canonical(ValueKind::Integer, &json!(1_i64 << 40)).is_err());
    assert!(Value::from_canonical(ValueKind::Boolean, &json!(1)).is_err());
}

#[test]
fn kind_tag_round_trips_through_serde() {
    for kind in [
        ValueKind::Number,
        ValueKind::Integer,
        ValueKind::Vector2,
        ValueKind::Vector3,
        ValueKind::Color,
        ValueKind::Boolean,
    ] {
        let tag = serde_json::to_value(kind).unwrap();
        assert_eq!(tag, json!(kind.name()));
        let back: ValueKind = serde_json::from_value(tag).unwrap();
        assert_eq!(back, kind);
    }
    assert!(serde_json::from_value::<ValueKind>(json!("Quaternion")).is_err());
}

#[test]
fn value_serializes_with_inline_tag() {
    let v = Value::Vector2([1.0, 2.0]);
    let out = serde_json::to_value(&v).unwrap();
    assert_eq!(out, json!({"value_type": "Vector2", "x": 1.0, "y": 2.0}));
}
