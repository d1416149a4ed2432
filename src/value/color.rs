use std::sync::OnceLock;

use crate::value::space::{self, ColorSpace, SPACE_COUNT};

/// RGBA color carried in the space it was authored in.
///
/// Conversions to other spaces are computed on demand through
/// [`space::convert`] and cached per target space. The cache is derived
/// state: it never serializes and takes no part in equality. Arithmetic and
/// interpolation always happen on the linear-space components and produce a
/// linear-tagged color.
#[derive(Clone, Debug)]
pub struct ColorValue {
    components: [f32; 4],
    space: ColorSpace,
    converted: [OnceLock<[f32; 4]>; SPACE_COUNT],
}

impl ColorValue {
    /// Build a color from raw components in the given space.
    pub fn new(components: [f32; 4], space: ColorSpace) -> Self {
        Self {
            components,
            space,
            converted: Default::default(),
        }
    }

    /// Linear-space color from individual components.
    pub fn linear(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new([r, g, b, a], ColorSpace::Linear)
    }

    /// sRGB-space color from individual components.
    pub fn srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new([r, g, b, a], ColorSpace::Srgb)
    }

    /// Opaque white, authored in sRGB.
    pub fn white() -> Self {
        Self::srgb(1.0, 1.0, 1.0, 1.0)
    }

    /// Opaque black, authored in sRGB.
    pub fn black() -> Self {
        Self::srgb(0.0, 0.0, 0.0, 1.0)
    }

    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self::srgb(0.0, 0.0, 0.0, 0.0)
    }

    /// Raw components in the authoring space.
    pub fn components(&self) -> [f32; 4] {
        self.components
    }

    /// The space the raw components are expressed in.
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Components converted into `space`, cached after the first request.
    pub fn components_in(&self, space: ColorSpace) -> [f32; 4] {
        if space == self.space {
            return self.components;
        }
        *self.converted[space.cache_slot()]
            .get_or_init(|| space::convert(self.components, self.space, space))
    }

    pub(crate) fn add(&self, other: &Self) -> Self {
        self.zip_linear(other, |a, b| a + b)
    }

    pub(crate) fn sub(&self, other: &Self) -> Self {
        self.zip_linear(other, |a, b| a - b)
    }

    pub(crate) fn scale(&self, factor: f32) -> Self {
        let a = self.components_in(ColorSpace::Linear);
        Self::linear(a[0] * factor, a[1] * factor, a[2] * factor, a[3] * factor)
    }

    pub(crate) fn max(&self, other: &Self) -> Self {
        self.zip_linear(other, f32::max)
    }

    pub(crate) fn min(&self, other: &Self) -> Self {
        self.zip_linear(other, f32::min)
    }

    pub(crate) fn lerp(&self, other: &Self, t: f64) -> Self {
        self.zip_linear(other, |a, b| {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * t) as f32
        })
    }

    fn zip_linear(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let a = self.components_in(ColorSpace::Linear);
        let b = other.components_in(ColorSpace::Linear);
        Self::linear(f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3]))
    }
}

/// Colors compare on their linear-space components, so the same color
/// authored in different spaces is equal.
impl PartialEq for ColorValue {
    fn eq(&self, other: &Self) -> bool {
        self.components_in(ColorSpace::Linear) == other.components_in(ColorSpace::Linear)
    }
}
