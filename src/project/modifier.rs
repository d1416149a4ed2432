use crate::animation::parameter::Parameter;
use crate::template::model::ModifierTemplate;

/// An effect instance on a layer.
///
/// A modifier holds one concrete [`Parameter`] per template parameter, at the
/// same index. The template itself is referenced only by id: it may be
/// reloaded or dropped from the repository without invalidating the instance,
/// whose parameters keep working on their own.
#[derive(Clone, Debug, PartialEq)]
pub struct Modifier {
    template_id: String,
    enabled: bool,
    parameters: Vec<Parameter>,
}

impl Modifier {
    /// Instantiate `template` with every parameter at its declared default
    /// and no keyframes.
    pub fn from_template(template: &ModifierTemplate) -> Self {
        let parameters = template
            .parameters()
            .iter()
            .map(|p| Parameter::new(p.default_value().clone()))
            .collect();
        Self {
            template_id: template.id().to_string(),
            enabled: true,
            parameters,
        }
    }

    /// Id of the template this instance was built from.
    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    /// Whether the sampler evaluates this modifier.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle evaluation of this modifier.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The parameters, in template order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Positional parameter access.
    pub fn parameter(&self, index: usize) -> Option<&Parameter> {
        self.parameters.get(index)
    }

    /// Positional mutable parameter access.
    pub fn parameter_mut(&mut self, index: usize) -> Option<&mut Parameter> {
        self.parameters.get_mut(index)
    }

    /// Rescale every parameter's keyframes from `old_fps` to `new_fps`.
    pub(crate) fn adapt_to_frame_rate(&mut self, old_fps: u32, new_fps: u32) {
        for parameter in &mut self.parameters {
            parameter.adapt_to_frame_rate(old_fps, new_fps);
        }
    }
}
