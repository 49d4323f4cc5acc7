use tracing::{debug, trace};

use crate::math::blend::blend;
use crate::math::wcag::contrast_ratio;
use crate::types::{BlendRange, Rgba};

/// Iteration budget for the binary search. Five halvings resolve the blend
/// ratio to 1/32 of the search range, which is below what the eye can
/// distinguish for a single blend step.
pub const SEARCH_ITERATIONS: u32 = 5;

/// Once a sufficient blend lands within this distance of the target ratio,
/// the search stops refining. An optimization, not a correctness bound.
pub const RATIO_TOLERANCE: f64 = 0.05;

/// Find the smallest blend ratio in `range` whose blend of `color` toward
/// `anchor` meets `target_ratio` against `background`, then apply it.
///
/// Already-sufficient input is returned unchanged, byte for byte — no blend
/// is applied at all. An unreachable target is not an error: the search
/// returns its best provisional blend, and callers needing a hard guarantee
/// re-check the resulting ratio themselves.
///
/// Validity rests on contrast being monotone in the blend ratio, which holds
/// because the anchor is a luminance extreme on the far side of the
/// background. Anything replacing the anchor choice must preserve that.
pub fn search_blend(
    color: Rgba,
    background: Rgba,
    anchor: Rgba,
    target_ratio: f64,
    range: BlendRange,
) -> Rgba {
    if contrast_ratio(color, background) >= target_ratio {
        trace!("contrast already sufficient, returning input");
        return color;
    }
    blend(color, anchor, best_ratio(color, background, anchor, target_ratio, range))
}

/// Core of the optimizer: binary search for the minimal sufficient ratio.
///
/// Sufficient midpoints become the candidate and tighten `high`; failing
/// midpoints raise `low` and, while no sufficient candidate exists, stand in
/// as the provisional result so the search always yields some blend amount.
pub(crate) fn best_ratio(
    color: Rgba,
    background: Rgba,
    anchor: Rgba,
    target_ratio: f64,
    range: BlendRange,
) -> f64 {
    let mut low = range.lower;
    let mut high = range.upper;
    let mut best: Option<f64> = None;
    let mut provisional = range.upper;

    for iteration in 0..SEARCH_ITERATIONS {
        let mid = (low + high) / 2.0;
        let ratio = contrast_ratio(blend(color, anchor, mid), background);
        trace!(iteration, mid, ratio, "search step");
        if ratio >= target_ratio {
            best = Some(best.map_or(mid, |b: f64| b.min(mid)));
            high = mid;
            if ratio - target_ratio <= RATIO_TOLERANCE {
                break;
            }
        } else {
            low = mid;
            if best.is_none() {
                provisional = mid;
            }
        }
    }

    match best {
        Some(t) => t,
        None => {
            debug!(
                target_ratio,
                provisional, "target unreachable in range, using provisional blend"
            );
            provisional
        }
    }
}
