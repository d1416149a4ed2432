/// Color space a color's raw components are expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpace {
    /// Scene-linear RGB. Arithmetic and interpolation happen here.
    Linear,
    /// Gamma-encoded sRGB, the space UI swatches are authored in.
    Srgb,
}

pub(crate) const SPACE_COUNT: usize = 2;

impl ColorSpace {
    pub(crate) fn cache_slot(self) -> usize {
        match self {
            ColorSpace::Linear => 0,
            ColorSpace::Srgb => 1,
        }
    }
}

/// Convert RGBA components between color spaces. Alpha passes through untouched.
pub fn convert(components: [f32; 4], from: ColorSpace, to: ColorSpace) -> [f32; 4] {
    let f: fn(f32) -> f32 = match (from, to) {
        (ColorSpace::Srgb, ColorSpace::Linear) => srgb_to_linear,
        (ColorSpace::Linear, ColorSpace::Srgb) => linear_to_srgb,
        _ => return components,
    };
    [f(components[0]), f(components[1]), f(components[2]), components[3]]
}

// Piecewise sRGB transfer curve (IEC 61966-2-1).
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
