use crate::types::{ColorError, Rgba};

/// Format a sample as lowercase hex: 6 digits, or 8 when alpha < 1.
/// Channels are clamped to [0,1] before quantizing to bytes.
pub fn to_hex(color: Rgba) -> String {
    let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    let (r, g, b) = (byte(color.r), byte(color.g), byte(color.b));
    let a = byte(color.a);
    if a < 255 {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    } else {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Parse a hex color string into a sample.
/// Accepts 3-, 4-, 6- and 8-digit forms, with or without a leading `#`.
/// Malformed input is an explicit error, never a silent black.
pub fn parse_hex(hex: &str) -> Result<Rgba, ColorError> {
    let raw = hex.trim().strip_prefix('#').unwrap_or_else(|| hex.trim());

    let err = || ColorError::ComponentExtraction { value: hex.to_string() };

    // Byte-position slicing below; multibyte input must not reach it.
    if !raw.is_ascii() {
        return Err(err());
    }

    let nibble = |c: char| c.to_digit(16).map(|d| d as f64 / 15.0);
    let pair = |s: &str| u8::from_str_radix(s, 16).ok().map(|b| b as f64 / 255.0);

    match raw.len() {
        3 | 4 => {
            let mut ch = raw.chars();
            let r = ch.next().and_then(nibble).ok_or_else(err)?;
            let g = ch.next().and_then(nibble).ok_or_else(err)?;
            let b = ch.next().and_then(nibble).ok_or_else(err)?;
            let a = match ch.next() {
                Some(c) => nibble(c).ok_or_else(err)?,
                None => 1.0,
            };
            Ok(Rgba::new(r, g, b, a))
        }
        6 | 8 => {
            let r = pair(&raw[0..2]).ok_or_else(err)?;
            let g = pair(&raw[2..4]).ok_or_else(err)?;
            let b = pair(&raw[4..6]).ok_or_else(err)?;
            let a = if raw.len() == 8 {
                pair(&raw[6..8]).ok_or_else(err)?
            } else {
                1.0
            };
            Ok(Rgba::new(r, g, b, a))
        }
        _ => Err(err()),
    }
}
