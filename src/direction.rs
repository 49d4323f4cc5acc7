use tracing::trace;

use crate::math::blend::blend;
use crate::math::wcag::contrast_ratio;
use crate::types::{ContrastDirection, Rgba};

/// Choose the anchor (pure black or pure white) the search blends toward.
///
/// `Force*` policies skip evaluation entirely. `Auto` compares the contrast
/// each anchor achieves at full blend and takes the higher; an exact tie
/// goes to dark. `Prefer*` keeps the preferred anchor unless it provably
/// cannot reach `target_ratio` even at full blend; only then does it switch.
/// Preference never compares against the alternate anchor's achievable ratio.
pub fn select_anchor(
    color: Rgba,
    background: Rgba,
    direction: ContrastDirection,
    target_ratio: f64,
) -> Rgba {
    match direction {
        ContrastDirection::ForceDark => Rgba::BLACK,
        ContrastDirection::ForceLight => Rgba::WHITE,
        ContrastDirection::Auto => {
            let dark_ratio = contrast_ratio(blend(color, Rgba::BLACK, 1.0), background);
            let light_ratio = contrast_ratio(blend(color, Rgba::WHITE, 1.0), background);
            trace!(dark_ratio, light_ratio, "auto direction");
            pick_auto(dark_ratio, light_ratio)
        }
        ContrastDirection::PreferLight => {
            prefer(color, background, Rgba::WHITE, Rgba::BLACK, target_ratio)
        }
        ContrastDirection::PreferDark => {
            prefer(color, background, Rgba::BLACK, Rgba::WHITE, target_ratio)
        }
    }
}

/// Higher full-blend ratio wins; an exact tie goes to dark.
fn pick_auto(dark_ratio: f64, light_ratio: f64) -> Rgba {
    if light_ratio > dark_ratio {
        Rgba::WHITE
    } else {
        Rgba::BLACK
    }
}

fn prefer(color: Rgba, background: Rgba, preferred: Rgba, fallback: Rgba, target: f64) -> Rgba {
    let achievable = contrast_ratio(blend(color, preferred, 1.0), background);
    if achievable >= target {
        preferred
    } else {
        trace!(achievable, target, "preferred anchor unreachable, switching");
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: Rgba = Rgba { r: 0.5, g: 0.5, b: 0.5, a: 1.0 };

    #[test]
    fn force_dark_always_black() {
        // Black is the worst possible anchor against a black background;
        // forcing ignores that.
        let anchor = select_anchor(GRAY, Rgba::BLACK, ContrastDirection::ForceDark, 4.5);
        assert_eq!(anchor, Rgba::BLACK);
    }

    #[test]
    fn force_light_always_white() {
        let anchor = select_anchor(GRAY, Rgba::WHITE, ContrastDirection::ForceLight, 4.5);
        assert_eq!(anchor, Rgba::WHITE);
    }

    #[test]
    fn auto_picks_black_on_light_background() {
        let anchor = select_anchor(GRAY, Rgba::WHITE, ContrastDirection::Auto, 4.5);
        assert_eq!(anchor, Rgba::BLACK);
    }

    #[test]
    fn auto_picks_white_on_dark_background() {
        let anchor = select_anchor(GRAY, Rgba::BLACK, ContrastDirection::Auto, 4.5);
        assert_eq!(anchor, Rgba::WHITE);
    }

    #[test]
    fn auto_tie_goes_dark() {
        assert_eq!(pick_auto(4.58, 4.58), Rgba::BLACK);
        assert_eq!(pick_auto(4.58, 4.581), Rgba::WHITE);
        assert_eq!(pick_auto(4.581, 4.58), Rgba::BLACK);
    }

    #[test]
    fn prefer_light_kept_when_reachable() {
        // White on black reaches 21:1, far above target.
        let anchor = select_anchor(GRAY, Rgba::BLACK, ContrastDirection::PreferLight, 4.5);
        assert_eq!(anchor, Rgba::WHITE);
    }

    #[test]
    fn prefer_light_switches_when_unreachable() {
        // White on white never exceeds 1:1.
        let anchor = select_anchor(GRAY, Rgba::WHITE, ContrastDirection::PreferLight, 4.5);
        assert_eq!(anchor, Rgba::BLACK);
    }

    #[test]
    fn prefer_dark_switches_when_unreachable() {
        let anchor = select_anchor(GRAY, Rgba::BLACK, ContrastDirection::PreferDark, 4.5);
        assert_eq!(anchor, Rgba::WHITE);
    }

    #[test]
    fn prefer_does_not_chase_the_better_anchor() {
        // Against a light-gray background, black achieves a much higher
        // ratio than white, but white still clears a low target, so a
        // light preference sticks with white.
        let bg = Rgba::opaque(0.8, 0.8, 0.8);
        let white_ratio = contrast_ratio(Rgba::WHITE, bg);
        let black_ratio = contrast_ratio(Rgba::BLACK, bg);
        assert!(black_ratio > white_ratio);
        let target = white_ratio - 0.1;
        let anchor = select_anchor(GRAY, bg, ContrastDirection::PreferLight, target);
        assert_eq!(anchor, Rgba::WHITE);
    }
}
