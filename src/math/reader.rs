use csscolorparser::Color;

use crate::types::{ColorError, Rgba};

/// Decompose an opaque color value into RGBA components.
/// Handles: hex, rgb, hsl, oklch, named colors, `color()` functions.
///
/// Contextual values (`currentcolor`, `inherit`, …) have no components to
/// extract and fail explicitly; so does anything unparseable. The rest of
/// the crate never sees a defaulted component from this boundary.
pub fn from_css(value: &str) -> Result<Rgba, ColorError> {
    let trimmed = value.trim();

    match trimmed.to_lowercase().as_str() {
        "transparent" | "inherit" | "currentcolor" | "initial" | "unset" => {
            return Err(ColorError::ComponentExtraction { value: value.to_string() });
        }
        _ => {}
    }

    match trimmed.parse::<Color>() {
        Ok(color) => Ok(Rgba::new(
            color.r as f64,
            color.g as f64,
            color.b as f64,
            color.a as f64,
        )),
        Err(_) => {
            // color(space ...) that failed to parse: report the space name.
            if let Some(space) = unconvertible_space(trimmed) {
                return Err(ColorError::ColorSpaceConversion {
                    value: value.to_string(),
                    color_space: space,
                });
            }
            Err(ColorError::ComponentExtraction { value: value.to_string() })
        }
    }
}

fn unconvertible_space(value: &str) -> Option<String> {
    let inner = value.strip_prefix("color(")?;
    let space = inner.split_whitespace().next()?.trim_end_matches(')');
    if space.is_empty() {
        None
    } else {
        Some(space.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses() {
        let c = from_css("#ff0000").unwrap();
        assert!((c.r - 1.0).abs() < 1e-6 && c.g.abs() < 1e-6);
    }

    #[test]
    fn rgb_comma_format() {
        let c = from_css("rgb(255, 0, 128)").unwrap();
        assert!((c.r - 1.0).abs() < 1e-6);
        assert!((c.b - 128.0 / 255.0).abs() < 0.01);
    }

    #[test]
    fn hsl_red() {
        let c = from_css("hsl(0, 100%, 50%)").unwrap();
        assert!((c.r - 1.0).abs() < 0.01 && c.g < 0.01 && c.b < 0.01);
    }

    #[test]
    fn oklch_parses() {
        // oklch(0.637 0.237 25.331) ~ #fb2c36; allow library-level slack
        let c = from_css("oklch(0.637 0.237 25.331)").unwrap();
        assert!((c.r - 251.0 / 255.0).abs() < 0.02, "red channel {}", c.r);
    }

    #[test]
    fn named_color() {
        let c = from_css("red").unwrap();
        assert!((c.r - 1.0).abs() < 1e-6);
    }

    #[test]
    fn contextual_values_fail() {
        for v in ["transparent", "inherit", "currentColor", "initial", "unset"] {
            assert!(matches!(
                from_css(v),
                Err(ColorError::ComponentExtraction { .. })
            ), "{v} should fail");
        }
    }

    #[test]
    fn garbage_fails_with_offending_value() {
        match from_css("definitely-not-a-color") {
            Err(ColorError::ComponentExtraction { value }) => {
                assert_eq!(value, "definitely-not-a-color");
            }
            other => panic!("expected extraction error, got {other:?}"),
        }
    }

    #[test]
    fn bad_color_function_reports_space() {
        match from_css("color(made-up-space 1 2 3)") {
            Err(ColorError::ColorSpaceConversion { color_space, .. }) => {
                assert_eq!(color_space, "made-up-space");
            }
            // csscolorparser may accept or reject unknown spaces differently
            // across versions; extraction failure is also acceptable here.
            Err(ColorError::ComponentExtraction { .. }) => {}
            other => panic!("expected a conversion failure, got {other:?}"),
        }
    }
}
