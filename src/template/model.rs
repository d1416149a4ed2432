use std::collections::{BTreeMap, BTreeSet};

use crate::foundation::error::{MotioError, MotioResult};
use crate::value::model::{Value, ValueKind};

/// UI hints attached to a parameter declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterFlag {
    /// Present the parameter as a dropdown; options live in the
    /// declaration's additional data.
    Dropdown,
}

/// Declaration of one parameter of a modifier template.
///
/// Immutable after load and shared by every modifier instantiated from the
/// owning template. The default, minimum and maximum all carry the declared
/// value kind.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterTemplate {
    name: String,
    data_type: ValueKind,
    default_value: Value,
    min_value: Option<Value>,
    max_value: Option<Value>,
    flags: BTreeSet<ParameterFlag>,
    additional_data: BTreeMap<String, serde_json::Value>,
}

impl ParameterTemplate {
    /// Declare a parameter; the kind is taken from the default value.
    pub fn new(name: impl Into<String>, default_value: Value) -> Self {
        Self {
            name: name.into(),
            data_type: default_value.kind(),
            default_value,
            min_value: None,
            max_value: None,
            flags: BTreeSet::new(),
            additional_data: BTreeMap::new(),
        }
    }

    /// Attach numeric bounds. Rejects bounds of a different kind.
    pub fn with_bounds(
        mut self,
        min_value: Option<Value>,
        max_value: Option<Value>,
    ) -> MotioResult<Self> {
        for bound in [&min_value, &max_value].into_iter().flatten() {
            if bound.kind() != self.data_type {
                return Err(MotioError::validation(format!(
                    "bound kind {} does not match parameter \"{}\" of kind {}",
                    bound.kind(),
                    self.name,
                    self.data_type
                )));
            }
        }
        self.min_value = min_value;
        self.max_value = max_value;
        Ok(self)
    }

    /// Attach UI flags.
    pub fn with_flags(mut self, flags: BTreeSet<ParameterFlag>) -> Self {
        self.flags = flags;
        self
    }

    /// Attach open-ended extra declaration data (dropdown options and such).
    pub fn with_additional_data(mut self, data: BTreeMap<String, serde_json::Value>) -> Self {
        self.additional_data = data;
        self
    }

    /// Human-readable parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared value kind.
    pub fn data_type(&self) -> ValueKind {
        self.data_type
    }

    /// The value a fresh instance starts from.
    pub fn default_value(&self) -> &Value {
        &self.default_value
    }

    /// Optional lower bound.
    pub fn min_value(&self) -> Option<&Value> {
        self.min_value.as_ref()
    }

    /// Optional upper bound.
    pub fn max_value(&self) -> Option<&Value> {
        self.max_value.as_ref()
    }

    /// UI flags.
    pub fn flags(&self) -> &BTreeSet<ParameterFlag> {
        &self.flags
    }

    /// Extra declaration data.
    pub fn additional_data(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.additional_data
    }
}

/// The declarative shape of an effect kind: an ordered parameter list under
/// a stable string id.
#[derive(Clone, Debug, PartialEq)]
pub struct ModifierTemplate {
    id: String,
    label: String,
    parameters: Vec<ParameterTemplate>,
}

impl ModifierTemplate {
    /// Build a template. The label falls back to the id when empty.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        parameters: Vec<ParameterTemplate>,
    ) -> Self {
        let id = id.into();
        let mut label = label.into();
        if label.is_empty() {
            label = id.clone();
        }
        Self {
            id,
            label,
            parameters,
        }
    }

    /// Stable id this template registers under.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Ordered parameter declarations.
    pub fn parameters(&self) -> &[ParameterTemplate] {
        &self.parameters
    }
}
