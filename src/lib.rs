//! Contrast optimization for colors.
//!
//! Given a color (and optionally a background), find a minimal-but-sufficient
//! blend of that color toward black or white so it meets a target WCAG
//! contrast ratio against its reference. Everything here is a pure, bounded
//! computation over value types: no caches, no global state, safe to call
//! from any thread.
//!
//! ```
//! use contrast_kit::{contrasting_shade, has_good_contrast, ContrastOptions, Rgba};
//!
//! let blue = Rgba::opaque(0.0, 0.0, 1.0);
//! let shade = contrasting_shade(blue, &ContrastOptions::default()).unwrap();
//! assert!(has_good_contrast(shade, blue));
//! ```

pub mod direction;
pub mod engine;
pub mod math;
pub mod search;
pub mod types;

pub use engine::{contrasting_color, contrasting_colors, contrasting_shade, has_good_contrast, ColorPair};
pub use math::blend::blend;
pub use math::hex::{parse_hex, to_hex};
pub use math::reader::from_css;
pub use math::wcag::{
    brightness, classify, contrast_ratio, meets_contrast, meets_threshold, relative_luminance,
    rgb_brightness, AAA_RATIO, AA_RATIO, CLASSIFY_THRESHOLD,
};
pub use types::{
    BlendRange, BlendStyle, BrightnessMethod, Classification, ColorError, ContrastDirection,
    ContrastOptions, Rgba, Scheme,
};
