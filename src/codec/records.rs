use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::model::ValueKind;

fn default_project_title() -> String {
    "Untitled Project".to_string()
}

fn default_sequence_title() -> String {
    "Untitled Sequence".to_string()
}

fn default_width() -> u32 {
    1920
}

fn default_height() -> u32 {
    1080
}

fn default_frame_rate() -> u32 {
    60
}

fn default_duration() -> u64 {
    600
}

fn default_end_frame() -> u64 {
    600
}

fn default_true() -> bool {
    true
}

/// Top-level shape of a project file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ProjectRecord {
    #[serde(default = "default_project_title")]
    pub(crate) title: String,
    /// Keyed by stringified sequence id; the key is authoritative.
    #[serde(default)]
    pub(crate) sequences: BTreeMap<String, SequenceRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SequenceRecord {
    /// Echo of the map key, written for readability and ignored on load.
    #[serde(default)]
    pub(crate) id: Option<u32>,
    #[serde(default = "default_sequence_title")]
    pub(crate) title: String,
    #[serde(default = "default_width")]
    pub(crate) width: u32,
    #[serde(default = "default_height")]
    pub(crate) height: u32,
    #[serde(default = "default_frame_rate")]
    pub(crate) frame_rate: u32,
    #[serde(default = "default_duration")]
    pub(crate) duration: u64,
    #[serde(default)]
    pub(crate) layers: Vec<LayerRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct LayerRecord {
    /// Positional echo, ignored on load (layers get fresh ids in file order).
    #[serde(default)]
    pub(crate) id: u64,
    /// Absent titles fall back to a per-kind default.
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) start_frame: u64,
    #[serde(default = "default_end_frame")]
    pub(crate) end_frame: u64,
    #[serde(default)]
    pub(crate) modifiers: Vec<ModifierRecord>,
    #[serde(flatten)]
    pub(crate) kind: LayerKindRecord,
}

/// Kind discriminator plus the kind-specific fields. An unrecognized tag
/// fails the whole load; the kind set is closed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub(crate) enum LayerKindRecord {
    SolidLayer {
        /// Canonical color record; linear components.
        #[serde(default)]
        color: Option<serde_json::Value>,
        /// Canonical integer record for the card width.
        #[serde(default)]
        width: Option<serde_json::Value>,
        /// Canonical integer record for the card height.
        #[serde(default)]
        height: Option<serde_json::Value>,
    },
    VisualLayer {
        #[serde(default)]
        file_path: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ModifierRecord {
    pub(crate) template_id: String,
    #[serde(default = "default_true")]
    pub(crate) enabled: bool,
    /// Keyed by stringified parameter index within the template.
    #[serde(default)]
    pub(crate) parameters: BTreeMap<String, ParameterRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ParameterRecord {
    #[serde(default)]
    pub(crate) keyframes: Vec<KeyframeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct KeyframeRecord {
    #[serde(default)]
    pub(crate) frame: u64,
    /// Canonical value payload, shaped by `value_type`.
    #[serde(default)]
    pub(crate) value: serde_json::Value,
    pub(crate) value_type: ValueKind,
}
