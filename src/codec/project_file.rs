//! Save/load of whole projects.
//!
//! Saving walks the live graph into the record shapes and pretty-prints
//! them. Loading is two-phase: records are parsed and a complete fresh
//! [`Project`] is built first, and only then handed to the caller to swap
//! into place, so a failure partway through never touches live state.
//!
//! Loading is deliberately lossy in two documented places: a modifier whose
//! template is missing from the repository is dropped, and a keyframe whose
//! persisted value cannot be rebuilt or is rejected by its parameter is
//! dropped. Both are logged. Everything else that is structurally wrong
//! fails the load.

use std::path::Path;

use serde_json::json;

use crate::animation::keyframe::Keyframe;
use crate::codec::records::{
    KeyframeRecord, LayerKindRecord, LayerRecord, ModifierRecord, ParameterRecord, ProjectRecord,
    SequenceRecord,
};
use crate::foundation::core::{FrameIndex, FrameRange, SequenceId};
use crate::foundation::error::{MotioError, MotioResult};
use crate::project::graph::Project;
use crate::project::layer::{Layer, LayerKind};
use crate::project::modifier::Modifier;
use crate::project::sequence::Sequence;
use crate::template::repository::ModifierRepository;
use crate::value::color::ColorValue;
use crate::value::model::{Value, ValueKind};

/// Serialize `project` to the pretty-printed project file text.
pub fn save_project_string(project: &Project) -> MotioResult<String> {
    let record = record_from_project(project);
    serde_json::to_string_pretty(&record)
        .map_err(|e| anyhow::anyhow!(e).context("failed to serialize project").into())
}

#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
/// Write `project` to `path` as a project file.
pub fn save_project(project: &Project, path: impl AsRef<Path>) -> MotioResult<()> {
    let path = path.as_ref();
    let text = save_project_string(project)?;
    std::fs::write(path, text).map_err(|e| {
        MotioError::io_failure(format!(
            "failed to write project file '{}': {e}",
            path.display()
        ))
    })
}

/// Rebuild a project from project file text, resolving modifier templates
/// through `repository`.
pub fn load_project_string(
    text: &str,
    repository: &ModifierRepository,
) -> MotioResult<Project> {
    let record: ProjectRecord = serde_json::from_str(text)
        .map_err(|e| MotioError::malformed(format!("not valid JSON: {e}")))?;
    project_from_record(record, repository)
}

#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
/// Read and rebuild the project stored at `path`.
pub fn load_project(
    path: impl AsRef<Path>,
    repository: &ModifierRepository,
) -> MotioResult<Project> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        MotioError::io_failure(format!(
            "failed to read project file '{}': {e}",
            path.display()
        ))
    })?;
    load_project_string(&text, repository)
}

fn record_from_project(project: &Project) -> ProjectRecord {
    ProjectRecord {
        title: project.title().to_string(),
        sequences: project
            .sequences()
            .iter()
            .map(|(id, sequence)| (id.0.to_string(), record_from_sequence(*id, sequence)))
            .collect(),
    }
}

fn record_from_sequence(id: SequenceId, sequence: &Sequence) -> SequenceRecord {
    SequenceRecord {
        id: Some(id.0),
        title: sequence.title().to_string(),
        width: sequence.width(),
        height: sequence.height(),
        frame_rate: sequence.frame_rate(),
        duration: sequence.duration(),
        layers: sequence.layers().iter().map(record_from_layer).collect(),
    }
}

fn record_from_layer(layer: &Layer) -> LayerRecord {
    let kind = match layer.kind() {
        LayerKind::Solid {
            width,
            height,
            color,
        } => LayerKindRecord::SolidLayer {
            color: Some(Value::Color(color.clone()).to_canonical()),
            width: Some(json!({ "value": width })),
            height: Some(json!({ "value": height })),
        },
        LayerKind::Visual { file_path } => LayerKindRecord::VisualLayer {
            file_path: Some(file_path.clone()),
        },
    };
    LayerRecord {
        id: layer.id().0,
        title: Some(layer.title().to_string()),
        start_frame: layer.range().start.0,
        end_frame: layer.range().end.0,
        modifiers: layer.modifiers().iter().map(record_from_modifier).collect(),
        kind,
    }
}

fn record_from_modifier(modifier: &Modifier) -> ModifierRecord {
    ModifierRecord {
        template_id: modifier.template_id().to_string(),
        enabled: modifier.enabled(),
        parameters: modifier
            .parameters()
            .iter()
            .enumerate()
            .map(|(index, parameter)| {
                let keyframes = parameter
                    .keyframes()
                    .iter()
                    .map(|keyframe| KeyframeRecord {
                        frame: keyframe.frame().0,
                        value: keyframe.value().to_canonical(),
                        value_type: keyframe.value().kind(),
                    })
                    .collect();
                (index.to_string(), ParameterRecord { keyframes })
            })
            .collect(),
    }
}

fn project_from_record(
    record: ProjectRecord,
    repository: &ModifierRepository,
) -> MotioResult<Project> {
    let mut project = Project::new(record.title);
    for (key, sequence_record) in record.sequences {
        let id = key.parse::<u32>().map_err(|_| {
            MotioError::malformed(format!("sequence key \"{key}\" is not an integer id"))
        })?;
        let sequence = sequence_from_record(sequence_record, repository)?;
        project.restore_sequence(SequenceId(id), sequence);
    }
    Ok(project)
}

fn sequence_from_record(
    record: SequenceRecord,
    repository: &ModifierRepository,
) -> MotioResult<Sequence> {
    if record.frame_rate == 0 {
        return Err(MotioError::malformed(format!(
            "sequence \"{}\" has a zero frame rate",
            record.title
        )));
    }
    let mut sequence = Sequence::new(
        record.title,
        record.width,
        record.height,
        record.frame_rate,
        record.duration,
    )?;
    for layer_record in record.layers {
        sequence.add_layer(layer_from_record(layer_record, repository)?);
    }
    Ok(sequence)
}

fn layer_from_record(
    record: LayerRecord,
    repository: &ModifierRepository,
) -> MotioResult<Layer> {
    let range = FrameRange::new(FrameIndex(record.start_frame), FrameIndex(record.end_frame))
        .map_err(|_| {
            MotioError::malformed(format!(
                "layer start_frame {} is after end_frame {}",
                record.start_frame, record.end_frame
            ))
        })?;

    let mut layer = match record.kind {
        LayerKindRecord::SolidLayer {
            color,
            width,
            height,
        } => Layer::solid(
            record.title.unwrap_or_else(|| "Solid Layer".to_string()),
            range,
            dimension_from(width.as_ref(), "width", 1920)?,
            dimension_from(height.as_ref(), "height", 1080)?,
            color_from(color.as_ref())?,
        ),
        LayerKindRecord::VisualLayer { file_path } => Layer::visual(
            record.title.unwrap_or_else(|| "Visual Layer".to_string()),
            range,
            file_path.unwrap_or_default(),
        ),
    };

    for modifier_record in record.modifiers {
        if let Some(modifier) = modifier_from_record(modifier_record, repository) {
            layer.add_modifier(modifier);
        }
    }
    Ok(layer)
}

/// Lossy by design: a template the repository no longer knows drops the
/// whole modifier, and a keyframe the parameter rejects drops that keyframe.
fn modifier_from_record(
    record: ModifierRecord,
    repository: &ModifierRepository,
) -> Option<Modifier> {
    let mut modifier = match repository.instantiate(&record.template_id) {
        Ok(modifier) => modifier,
        Err(_) => {
            tracing::warn!(
                template_id = %record.template_id,
                "unknown modifier template, dropping the modifier"
            );
            return None;
        }
    };
    modifier.set_enabled(record.enabled);

    for (key, parameter_record) in record.parameters {
        let parameter = key
            .parse::<usize>()
            .ok()
            .and_then(|index| modifier.parameter_mut(index));
        let Some(parameter) = parameter else {
            tracing::warn!(
                template_id = %record.template_id,
                key = %key,
                "no parameter at this index, skipping its keyframes"
            );
            continue;
        };

        // Replay through the live mutation path so the type and ordering
        // rules hold for persisted data exactly as they do for edits.
        parameter.clear_keyframes();
        for keyframe_record in parameter_record.keyframes {
            let frame = FrameIndex(keyframe_record.frame);
            let value =
                match Value::from_canonical(keyframe_record.value_type, &keyframe_record.value) {
                    Ok(value) => value,
                    Err(e) => {
                        tracing::warn!(
                            template_id = %record.template_id,
                            frame = frame.0,
                            error = %e,
                            "dropping keyframe with unusable value"
                        );
                        continue;
                    }
                };
            if let Err(e) = parameter.add_keyframe(Keyframe::new(frame, value)) {
                tracing::warn!(
                    template_id = %record.template_id,
                    frame = frame.0,
                    error = %e,
                    "dropping keyframe the parameter rejected"
                );
            }
        }
    }
    Some(modifier)
}

fn dimension_from(
    data: Option<&serde_json::Value>,
    what: &str,
    default: u32,
) -> MotioResult<u32> {
    let raw = match data {
        None | Some(serde_json::Value::Null) => return Ok(default),
        Some(serde_json::Value::Object(map)) => match map.get("value") {
            None | Some(serde_json::Value::Null) => return Ok(default),
            Some(raw) => raw,
        },
        Some(raw) => raw,
    };
    let n = raw.as_u64().ok_or_else(|| {
        MotioError::malformed(format!("solid layer {what} has unexpected shape: {raw}"))
    })?;
    u32::try_from(n)
        .map_err(|_| MotioError::malformed(format!("solid layer {what} {n} is too large")))
}

fn color_from(data: Option<&serde_json::Value>) -> MotioResult<ColorValue> {
    let Some(data) = data.filter(|d| !d.is_null()) else {
        return Ok(ColorValue::white());
    };
    if let Value::Color(color) = Value::from_canonical(ValueKind::Color, data)? {
        Ok(color)
    } else {
        Err(MotioError::malformed(format!(
            "solid layer color has unexpected shape: {data}"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/codec/project_file.rs"]
mod tests;
