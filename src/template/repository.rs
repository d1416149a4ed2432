//! Template storage and lookup.
//!
//! A [`ModifierRepository`] owns every [`ModifierTemplate`] known to the
//! application. Templates are registered programmatically or bulk-loaded from
//! a directory of JSON descriptor files, and [`Modifier`]s are always
//! instantiated through the repository so each instance starts from its
//! template's defaults.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use crate::foundation::error::{MotioError, MotioResult};
use crate::project::modifier::Modifier;
use crate::template::descriptor::TemplateDef;
use crate::template::model::ModifierTemplate;

/// Registry of modifier templates keyed by template id.
///
/// Lookups hand out [`Arc`] clones so callers can hold a template across
/// repository mutations without copying parameter lists.
#[derive(Clone, Debug, Default)]
pub struct ModifierRepository {
    templates: BTreeMap<String, Arc<ModifierTemplate>>,
}

impl ModifierRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True when no template has been registered.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Register `template` under its id, returning the template it displaced
    /// if the id was already taken.
    pub fn register(&mut self, template: ModifierTemplate) -> Option<Arc<ModifierTemplate>> {
        self.templates
            .insert(template.id().to_string(), Arc::new(template))
    }

    /// Look up a template by id.
    pub fn get_template(&self, id: &str) -> Option<Arc<ModifierTemplate>> {
        self.templates.get(id).cloned()
    }

    /// Ids of all registered templates, in sorted order.
    pub fn template_ids(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Load every `*.json` descriptor under `dir` and register the parsed
    /// templates, returning how many were registered.
    ///
    /// Files are visited in filename order so id collisions resolve the same
    /// way on every platform; the later file wins and the displaced template
    /// is reported through a warning.
    #[tracing::instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn load_from_directory(&mut self, dir: impl AsRef<Path>) -> MotioResult<usize> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|e| {
            MotioError::io_failure(format!(
                "failed to read template directory '{}': {e}",
                dir.display()
            ))
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                MotioError::io_failure(format!(
                    "failed to read template directory '{}': {e}",
                    dir.display()
                ))
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") && path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            let text = std::fs::read_to_string(&path).map_err(|e| {
                MotioError::io_failure(format!(
                    "failed to read template descriptor '{}': {e}",
                    path.display()
                ))
            })?;
            let def: TemplateDef = serde_json::from_str(&text).map_err(|e| {
                MotioError::malformed(format!("template descriptor {}: {e}", path.display()))
            })?;
            let template = def.into_template().map_err(|e| {
                let detail = match e {
                    MotioError::MalformedProjectFile(msg) => msg,
                    other => other.to_string(),
                };
                MotioError::malformed(format!("template descriptor {}: {detail}", path.display()))
            })?;

            let id = template.id().to_string();
            if let Some(previous) = self.register(template) {
                tracing::warn!(
                    id = %id,
                    path = %path.display(),
                    previous_label = %previous.label(),
                    "template id collision, keeping the later definition"
                );
            } else {
                tracing::debug!(id = %id, path = %path.display(), "registered template");
            }
            loaded += 1;
        }

        Ok(loaded)
    }

    /// Instantiate a fresh [`Modifier`] from the template registered under
    /// `template_id`.
    pub fn instantiate(&self, template_id: &str) -> MotioResult<Modifier> {
        let template = self.get_template(template_id).ok_or_else(|| {
            MotioError::not_found(format!("modifier template \"{template_id}\""))
        })?;
        Ok(Modifier::from_template(&template))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/repository.rs"]
mod tests;
