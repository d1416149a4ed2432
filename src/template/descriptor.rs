use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::foundation::error::{MotioError, MotioResult};
use crate::template::model::{ModifierTemplate, ParameterFlag, ParameterTemplate};
use crate::value::model::{Value, ValueKind};

/// One template descriptor file.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TemplateDef {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) label: String,
    #[serde(default)]
    pub(crate) parameters: Vec<ParameterDef>,
}

/// One parameter declaration inside a descriptor. `default`, `min` and `max`
/// use the same canonical field records the project codec uses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ParameterDef {
    pub(crate) name: String,
    pub(crate) data_type: ValueKind,
    #[serde(default)]
    pub(crate) default: Option<serde_json::Value>,
    #[serde(default)]
    pub(crate) min: Option<serde_json::Value>,
    #[serde(default)]
    pub(crate) max: Option<serde_json::Value>,
    #[serde(default)]
    pub(crate) flags: BTreeSet<ParameterFlag>,
    #[serde(default)]
    pub(crate) additional_data: BTreeMap<String, serde_json::Value>,
}

impl TemplateDef {
    pub(crate) fn into_template(self) -> MotioResult<ModifierTemplate> {
        if self.id.trim().is_empty() {
            return Err(MotioError::malformed("template id must be non-empty"));
        }
        let mut parameters = Vec::with_capacity(self.parameters.len());
        for def in self.parameters {
            parameters.push(def.into_parameter()?);
        }
        Ok(ModifierTemplate::new(self.id, self.label, parameters))
    }
}

impl ParameterDef {
    fn into_parameter(self) -> MotioResult<ParameterTemplate> {
        let context = |err: MotioError| {
            let detail = match err {
                MotioError::MalformedProjectFile(msg) => msg,
                other => other.to_string(),
            };
            MotioError::malformed(format!("parameter \"{}\": {detail}", self.name))
        };
        let default = match &self.default {
            Some(data) => Value::from_canonical(self.data_type, data).map_err(context)?,
            None => self.data_type.zero(),
        };
        let min = self
            .min
            .as_ref()
            .map(|data| Value::from_canonical(self.data_type, data))
            .transpose()
            .map_err(context)?;
        let max = self
            .max
            .as_ref()
            .map(|data| Value::from_canonical(self.data_type, data))
            .transpose()
            .map_err(context)?;
        Ok(ParameterTemplate::new(self.name, default)
            .with_bounds(min, max)?
            .with_flags(self.flags)
            .with_additional_data(self.additional_data))
    }
}
