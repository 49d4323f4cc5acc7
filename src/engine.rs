use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::direction::select_anchor;
use crate::math::wcag::{meets_contrast, AA_RATIO};
use crate::search::search_blend;
use crate::types::{ColorError, ContrastOptions, Rgba};

/// Produce a variant of `color` that meets the target contrast ratio against
/// `background`, blended toward black or white per the direction policy.
///
/// Parameter errors (target ratio outside [1,21], bad blend bounds) are
/// rejected before any search runs. A target unreachable within the blend
/// range is not an error: the best achievable blend is returned, and callers
/// needing a hard guarantee re-check the resulting ratio.
pub fn contrasting_color(
    color: Rgba,
    background: Rgba,
    options: &ContrastOptions,
) -> Result<Rgba, ColorError> {
    let range = options.search_range()?;
    let anchor = select_anchor(color, background, options.direction, options.target_ratio);
    debug!(?anchor, target = options.target_ratio, "optimizing contrast");
    Ok(search_blend(color, background, anchor, options.target_ratio, range))
}

/// Monochromatic case: a contrasting shade of the color itself. Not a
/// separate algorithm — the color plays both subject and reference.
pub fn contrasting_shade(color: Rgba, options: &ContrastOptions) -> Result<Rgba, ColorError> {
    contrasting_color(color, color, options)
}

/// Whether two colors meet WCAG AA (4.5:1) against each other.
pub fn has_good_contrast(a: Rgba, b: Rgba) -> bool {
    meets_contrast(a, b, AA_RATIO)
}

/// A (color, background) pair for batch optimization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorPair {
    pub color: Rgba,
    pub background: Rgba,
}

/// Optimize many pairs in parallel under one set of options.
///
/// Each pair is an independent pure computation (no shared mutable state),
/// so Rayon may evaluate them in any order. Output order matches input.
pub fn contrasting_colors(
    pairs: &[ColorPair],
    options: &ContrastOptions,
) -> Vec<Result<Rgba, ColorError>> {
    pairs
        .par_iter()
        .map(|pair| contrasting_color(pair.color, pair.background, options))
        .collect()
}
