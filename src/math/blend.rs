use crate::types::Rgba;

/// Linearly interpolate two samples.
/// formula per channel: result = base * (1 - ratio) + other * ratio
///
/// Applied to r, g, b and a independently. `ratio` is not clamped here:
/// values outside [0,1] extrapolate, which is intentional; the search layer
/// is responsible for keeping ratios in range.
pub fn blend(base: Rgba, other: Rgba, ratio: f64) -> Rgba {
    let lerp = |b: f64, o: f64| b * (1.0 - ratio) + o * ratio;
    Rgba {
        r: lerp(base.r, other.r),
        g: lerp(base.g, other.g),
        b: lerp(base.b, other.b),
        a: lerp(base.a, other.a),
    }
}
