use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An sRGB color sample with alpha, each channel conceptually in 0.0-1.0.
///
/// Immutable value type: every operation produces a new sample. Out-of-range
/// channels (wide-gamut input) are accepted without panicking, but the WCAG
/// formulas are only contractually correct for canonical [0,1] sRGB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba { r, g, b, a }
    }

    /// Fully opaque sample.
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Rgba { r, g, b, a: 1.0 }
    }
}

/// How to measure the perceptual brightness of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrightnessMethod {
    /// WCAG 2.1 gamma-corrected relative luminance.
    #[default]
    RelativeLuminance,
    /// Arithmetic mean of the r, g, b channels.
    RgbAverage,
}

/// Whether the search blends toward black, toward white, or decides itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContrastDirection {
    /// Pick whichever anchor yields the higher contrast at full blend.
    /// Ties go to dark.
    #[default]
    Auto,
    /// Always blend toward white, even if black would contrast better.
    ForceLight,
    /// Always blend toward black, even if white would contrast better.
    ForceDark,
    /// Blend toward white unless white provably cannot reach the target
    /// even at full blend; only then fall back to black.
    PreferLight,
    /// Mirror of `PreferLight`.
    PreferDark,
}

/// Named minimum-blend presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendStyle {
    /// No minimum; the search may return the input nearly unchanged.
    Minimal,
    /// At least a 50% shift toward the anchor.
    Moderate,
    /// At least a 70% shift toward the anchor.
    Strong,
    /// Full blend: always land on the anchor itself.
    Maximum,
}

impl BlendStyle {
    /// Minimum blend ratio this preset imposes.
    pub fn minimum_blend(self) -> f64 {
        match self {
            BlendStyle::Minimal => 0.0,
            BlendStyle::Moderate => 0.5,
            BlendStyle::Strong => 0.7,
            BlendStyle::Maximum => 1.0,
        }
    }
}

/// A closed sub-range of [0,1] the search must stay inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendRange {
    pub lower: f64,
    pub upper: f64,
}

impl BlendRange {
    pub const FULL: BlendRange = BlendRange { lower: 0.0, upper: 1.0 };

    /// Rejects ranges that are inverted or escape [0,1].
    pub fn new(lower: f64, upper: f64) -> Result<Self, ColorError> {
        if !(0.0..=1.0).contains(&lower) || !(0.0..=1.0).contains(&upper) || lower > upper {
            return Err(ColorError::InvalidBlendRange { lower, upper });
        }
        Ok(BlendRange { lower, upper })
    }
}

/// Light/dark label derived from a brightness value. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    Light,
    Dark,
}

impl Classification {
    /// Scheme recommendation matching the label.
    pub fn recommended_scheme(self) -> Scheme {
        match self {
            Classification::Light => Scheme::Light,
            Classification::Dark => Scheme::Dark,
        }
    }
}

/// Recommended appearance scheme for a classified color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    Light,
    Dark,
}

/// Options for a contrast optimization call.
///
/// Exactly one of `minimum_blend`, `blend_style`, `blend_range` is honored,
/// in that precedence order; all `None` means the full [0,1] range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastOptions {
    /// Contrast ratio the result should meet, in [1,21]. Defaults to AA (4.5).
    pub target_ratio: f64,
    pub direction: ContrastDirection,
    /// Brightness measure for classification-adjacent uses; the contrast
    /// ratio itself is always luminance-based.
    pub method: BrightnessMethod,
    /// Explicit floor for the blend ratio, in [0,1].
    pub minimum_blend: Option<f64>,
    pub blend_style: Option<BlendStyle>,
    pub blend_range: Option<BlendRange>,
}

impl Default for ContrastOptions {
    fn default() -> Self {
        ContrastOptions {
            target_ratio: crate::math::wcag::AA_RATIO,
            direction: ContrastDirection::Auto,
            method: BrightnessMethod::RelativeLuminance,
            minimum_blend: None,
            blend_style: None,
            blend_range: None,
        }
    }
}

impl ContrastOptions {
    /// Validate and resolve the effective search range.
    ///
    /// Rejected eagerly, before any search runs: target ratios outside
    /// [1,21], minimum blends outside [0,1], inverted or escaping ranges.
    pub fn search_range(&self) -> Result<BlendRange, ColorError> {
        if !(1.0..=21.0).contains(&self.target_ratio) {
            return Err(ColorError::InvalidTargetRatio { ratio: self.target_ratio });
        }
        if let Some(min) = self.minimum_blend {
            if !(0.0..=1.0).contains(&min) {
                return Err(ColorError::InvalidMinimumBlend { value: min });
            }
            return Ok(BlendRange { lower: min, upper: 1.0 });
        }
        if let Some(style) = self.blend_style {
            return Ok(BlendRange { lower: style.minimum_blend(), upper: 1.0 });
        }
        if let Some(range) = self.blend_range {
            // Re-validate: the struct is constructible via deserialization.
            return BlendRange::new(range.lower, range.upper);
        }
        Ok(BlendRange::FULL)
    }
}

/// Failures local to a single color computation; all recoverable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The color reader could not decompose a value into RGBA components.
    #[error("cannot extract RGBA components from {value:?}")]
    ComponentExtraction { value: String },

    /// The color is expressed in a space that cannot be converted to sRGB.
    #[error("cannot convert {value:?} to color space {color_space}")]
    ColorSpaceConversion { value: String, color_space: String },

    /// Target contrast ratio outside the WCAG-representable [1,21].
    #[error("target contrast ratio {ratio} outside [1, 21]")]
    InvalidTargetRatio { ratio: f64 },

    #[error("blend range [{lower}, {upper}] is not a sub-range of [0, 1]")]
    InvalidBlendRange { lower: f64, upper: f64 },

    #[error("minimum blend {value} outside [0, 1]")]
    InvalidMinimumBlend { value: f64 },
}
