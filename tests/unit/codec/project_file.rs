use super::*;

use serde_json::json;

use crate::template::model::{ModifierTemplate, ParameterTemplate};

fn repo() -> ModifierRepository {
    let mut repo = ModifierRepository::new();
    repo.register(ModifierTemplate::new(
        "black_hole",
        "Black Hole",
        vec![
            ParameterTemplate::new("center", Value::Vector2([960.0, 540.0])),
            ParameterTemplate::new("radius", Value::Number(100.0)),
            ParameterTemplate::new("mass", Value::Number(1.0)),
        ],
    ));
    repo
}

fn demo_project(repo: &ModifierRepository) -> Project {
    let mut project = Project::new("Black Hole Demo");

    let mut sequence = Sequence::new("Main", 1280, 720, 30, 900).unwrap();
    let range = FrameRange::new(FrameIndex(0), FrameIndex(900)).unwrap();

    let mut backdrop = Layer::solid(
        "Backdrop",
        range,
        1280,
        720,
        ColorValue::srgb(0.2, 0.4, 0.6, 1.0),
    );
    let mut modifier = repo.instantiate("black_hole").unwrap();
    let center = modifier.parameter_mut(0).unwrap();
    center
        .add_keyframe(Keyframe::new(FrameIndex(0), Value::Vector2([960.0, 540.0])))
        .unwrap();
    center
        .add_keyframe(Keyframe::new(
            FrameIndex(600),
            Value::Vector2([1260.0, 540.0]),
        ))
        .unwrap();
    modifier
        .parameter_mut(1)
        .unwrap()
        .add_keyframe(Keyframe::new(FrameIndex(300), Value::Number(250.0)))
        .unwrap();
    backdrop.add_modifier(modifier);

    let mut disabled = repo.instantiate("black_hole").unwrap();
    disabled.set_enabled(false);
    backdrop.add_modifier(disabled);

    sequence.add_layer(backdrop);
    sequence.add_layer(Layer::visual(
        "Plate",
        FrameRange::new(FrameIndex(60), FrameIndex(660)).unwrap(),
        "footage/plate.mp4",
    ));

    project.add_sequence(sequence);
    project
}

#[test]
fn round_trip_preserves_the_graph() {
    let repo = repo();
    let project = demo_project(&repo);

    let text = save_project_string(&project).unwrap();
    let loaded = load_project_string(&text, &repo).unwrap();

    assert_eq!(loaded, project);
}

#[test]
fn round_trip_is_stable_after_one_pass() {
    let repo = repo();
    let project = demo_project(&repo);

    let once = save_project_string(&project).unwrap();
    let twice = save_project_string(&load_project_string(&once, &repo).unwrap()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn absent_fields_fall_back_to_documented_defaults() {
    let text = r#"{"sequences": {"0": {"layers": [{"type": "SolidLayer"}]}}}"#;
    let loaded = load_project_string(text, &repo()).unwrap();

    assert_eq!(loaded.title(), "Untitled Project");
    let sequence = loaded.sequence(SequenceId(0)).unwrap();
    assert_eq!(sequence.title(), "Untitled Sequence");
    assert_eq!(
        (
            sequence.width(),
            sequence.height(),
            sequence.frame_rate(),
            sequence.duration()
        ),
        (1920, 1080, 60, 600)
    );

    let layer = sequence.layer_at(0).unwrap();
    assert_eq!(layer.title(), "Solid Layer");
    assert_eq!(
        layer.range(),
        FrameRange::new(FrameIndex(0), FrameIndex(600)).unwrap()
    );
    match layer.kind() {
        LayerKind::Solid {
            width,
            height,
            color,
        } => {
            assert_eq!((*width, *height), (1920, 1080));
            assert_eq!(color, &ColorValue::white());
        }
        other => panic!("expected a solid layer, got {other:?}"),
    }
}

#[test]
fn missing_template_drops_only_that_modifier() {
    let text = json!({
        "title": "Lossy",
        "sequences": {"0": {"title": "Main", "layers": [{
            "type": "SolidLayer",
            "title": "Backdrop",
            "start_frame": 10,
            "end_frame": 200,
            "modifiers": [
                {"template_id": "glow", "parameters": {}},
                {"template_id": "black_hole", "parameters": {}}
            ]
        }]}}
    })
    .to_string();

    let loaded = load_project_string(&text, &repo()).unwrap();
    let layer = loaded
        .sequence(SequenceId(0))
        .unwrap()
        .layer_at(0)
        .unwrap();

    assert_eq!(layer.title(), "Backdrop");
    assert_eq!(
        layer.range(),
        FrameRange::new(FrameIndex(10), FrameIndex(200)).unwrap()
    );
    assert_eq!(layer.modifiers().len(), 1);
    assert_eq!(layer.modifier(0).unwrap().template_id(), "black_hole");
}

#[test]
fn unusable_keyframes_are_dropped_not_fatal() {
    let text = json!({
        "sequences": {"0": {"layers": [{
            "type": "SolidLayer",
            "modifiers": [{"template_id": "black_hole", "parameters": {
                "0": {"keyframes": [
                    {"frame": 0, "value": {"x": 1.0, "y": 2.0}, "value_type": "Vector2"},
                    {"frame": 10, "value": {"value": 5.0}, "value_type": "Number"},
                    {"frame": 20, "value": [3.0, 4.0], "value_type": "Vector2"}
                ]}
            }}]
        }]}}
    })
    .to_string();

    let loaded = load_project_string(&text, &repo()).unwrap();
    let modifier = loaded
        .sequence(SequenceId(0))
        .unwrap()
        .layer_at(0)
        .unwrap()
        .modifier(0)
        .unwrap();

    // The Number keyframe mismatches the Vector2 parameter and the array
    // payload cannot be rebuilt; only the first keyframe survives.
    let keyframes = modifier.parameter(0).unwrap().keyframes();
    assert_eq!(keyframes.len(), 1);
    assert_eq!(keyframes[0].value(), &Value::Vector2([1.0, 2.0]));
}

#[test]
fn parameter_keys_without_an_index_are_skipped() {
    let text = json!({
        "sequences": {"0": {"layers": [{
            "type": "SolidLayer",
            "modifiers": [{"template_id": "black_hole", "parameters": {
                "7": {"keyframes": [
                    {"frame": 0, "value": {"value": 1.0}, "value_type": "Number"}
                ]},
                "not_a_number": {"keyframes": []}
            }}]
        }]}}
    })
    .to_string();

    let loaded = load_project_string(&text, &repo()).unwrap();
    let modifier = loaded
        .sequence(SequenceId(0))
        .unwrap()
        .layer_at(0)
        .unwrap()
        .modifier(0)
        .unwrap();

    assert_eq!(modifier.parameters().len(), 3);
    assert!(modifier.parameters().iter().all(|p| !p.is_animated()));
}

#[test]
fn unknown_layer_type_fails_the_load() {
    let text = r#"{"sequences": {"0": {"layers": [{"type": "PuppetLayer"}]}}}"#;
    let err = load_project_string(text, &repo()).unwrap_err();
    assert!(err.to_string().starts_with("malformed project file:"), "{err}");
}

#[test]
fn unknown_value_kind_fails_the_load() {
    let text = json!({
        "sequences": {"0": {"layers": [{
            "type": "SolidLayer",
            "modifiers": [{"template_id": "black_hole", "parameters": {
                "1": {"keyframes": [
                    {"frame": 0, "value": {"value": 1.0}, "value_type": "Quaternion"}
                ]}
            }}]
        }]}}
    })
    .to_string();

    let err = load_project_string(&text, &repo()).unwrap_err();
    assert!(err.to_string().contains("Quaternion"), "{err}");
}

#[test]
fn non_integer_sequence_keys_fail_the_load() {
    let text = r#"{"sequences": {"main": {}}}"#;
    let err = load_project_string(text, &repo()).unwrap_err();
    assert!(err.to_string().contains("\"main\""), "{err}");
}

#[test]
fn zero_frame_rate_fails_the_load() {
    let text = r#"{"sequences": {"0": {"title": "Broken", "frame_rate": 0}}}"#;
    let err = load_project_string(text, &repo()).unwrap_err();
    assert!(err.to_string().contains("zero frame rate"), "{err}");
}

#[test]
fn inverted_layer_span_fails_the_load() {
    let text = r#"{"sequences": {"0": {"layers": [
        {"type": "SolidLayer", "start_frame": 500, "end_frame": 100}
    ]}}}"#;
    let err = load_project_string(text, &repo()).unwrap_err();
    assert!(err.to_string().starts_with("malformed project file:"), "{err}");
}

#[test]
fn sequence_ids_resume_past_the_highest_loaded_id() {
    let text = r#"{"sequences": {"0": {}, "5": {}}}"#;
    let mut loaded = load_project_string(text, &repo()).unwrap();

    assert_eq!(loaded.sequences().len(), 2);
    assert_eq!(loaded.add_sequence(Sequence::default()), SequenceId(6));
}

#[test]
fn io_failures_surface_with_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let gone = dir.path().join("missing.json");
    let err = load_project(&gone, &repo()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("io failure:"), "{msg}");
    assert!(msg.contains("missing.json"), "{msg}");
}

#[test]
fn save_and_load_through_a_file() {
    let repo = repo();
    let project = demo_project(&repo);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.json");

    save_project(&project, &path).unwrap();
    let loaded = load_project(&path, &repo).unwrap();
    assert_eq!(loaded, project);
}
