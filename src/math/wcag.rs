use crate::types::{BrightnessMethod, Classification, Rgba};

/// WCAG AA contrast threshold for normal text.
pub const AA_RATIO: f64 = 4.5;
/// WCAG AAA contrast threshold for normal text.
pub const AAA_RATIO: f64 = 7.0;

/// Default brightness threshold separating light from dark.
pub const CLASSIFY_THRESHOLD: f64 = 0.5;

/// Convert an sRGB channel (0.0-1.0) to linear light.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.1.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(color: Rgba) -> f64 {
    0.2126 * srgb_to_linear(color.r)
        + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b)
}

/// Arithmetic mean of the r, g, b channels. Cheaper than luminance and
/// sometimes a better match for "perceived lightness" of saturated colors.
pub fn rgb_brightness(color: Rgba) -> f64 {
    (color.r + color.g + color.b) / 3.0
}

/// Brightness of a color under the chosen measure.
pub fn brightness(color: Rgba, method: BrightnessMethod) -> f64 {
    match method {
        BrightnessMethod::RelativeLuminance => relative_luminance(color),
        BrightnessMethod::RgbAverage => rgb_brightness(color),
    }
}

/// Calculate WCAG 2.1 contrast ratio between two colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
///
/// Always luminance-based, whatever brightness measure the caller uses
/// elsewhere. Symmetric in its arguments; range [1, 21] for sRGB input.
pub fn contrast_ratio(a: Rgba, b: Rgba) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Label a color light or dark: brightness above `threshold` is light.
pub fn classify(color: Rgba, threshold: f64, method: BrightnessMethod) -> Classification {
    if brightness(color, method) > threshold {
        Classification::Light
    } else {
        Classification::Dark
    }
}

/// Whether a precomputed ratio meets a threshold.
pub fn meets_threshold(ratio: f64, threshold: f64) -> bool {
    ratio >= threshold
}

/// Whether the contrast between two colors meets a threshold.
pub fn meets_contrast(a: Rgba, b: Rgba, threshold: f64) -> bool {
    meets_threshold(contrast_ratio(a, b), threshold)
}
