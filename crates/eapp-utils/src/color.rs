//! Textual colors: parsing, formatting and tone adjustments

use eframe::egui::Color32;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color string is empty")]
    Empty,

    #[error("`{0}` has {1} hex digits, expected 3, 6 or 8")]
    HexLength(String, usize),

    #[error("`{0}` contains a non hex digit")]
    HexDigit(String),

    #[error("`{0}` is not a known color name")]
    UnknownName(String),
}

/// Named colors, values follow the classic toolkit palette
/// (e.g. `gray` is `#a0a0a4`, not the svg `#808080`).
const NAMED_COLORS: &[(&str, [u8; 4])] = &[
    ("white", [255, 255, 255, 255]),
    ("black", [0, 0, 0, 255]),
    ("gray", [160, 160, 164, 255]),
    ("grey", [160, 160, 164, 255]),
    ("lightgray", [192, 192, 192, 255]),
    ("lightgrey", [192, 192, 192, 255]),
    ("darkgray", [128, 128, 128, 255]),
    ("darkgrey", [128, 128, 128, 255]),
    ("red", [255, 0, 0, 255]),
    ("green", [0, 255, 0, 255]),
    ("blue", [0, 0, 255, 255]),
    ("cyan", [0, 255, 255, 255]),
    ("magenta", [255, 0, 255, 255]),
    ("yellow", [255, 255, 0, 255]),
    ("transparent", [0, 0, 0, 0]),
];

/// Parses `#RGB`, `#RRGGBB`, `#AARRGGBB` (alpha first) or a color name.
pub fn parse_color(text: &str) -> Result<Color32, ColorError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ColorError::Empty);
    }

    let Some(hex) = text.strip_prefix('#') else {
        let name = text.to_ascii_lowercase();
        return NAMED_COLORS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, [r, g, b, a])| Color32::from_rgba_unmultiplied(*r, *g, *b, *a))
            .ok_or_else(|| ColorError::UnknownName(text.to_owned()));
    };

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::HexDigit(text.to_owned()));
    }

    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).unwrap_or_default();
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or_default();

    match hex.len() {
        3 => Ok(Color32::from_rgb(
            digit(0) * 17,
            digit(1) * 17,
            digit(2) * 17,
        )),
        6 => Ok(Color32::from_rgb(byte(0), byte(2), byte(4))),
        8 => Ok(Color32::from_rgba_unmultiplied(
            byte(2),
            byte(4),
            byte(6),
            byte(0),
        )),
        len => Err(ColorError::HexLength(text.to_owned(), len)),
    }
}

/// Formats as `#RRGGBB`, or `#AARRGGBB` (alpha first, as [`parse_color`]
/// expects) when the color is not opaque.
pub fn to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{a:02x}{r:02x}{g:02x}{b:02x}")
    }
}

/// Brightens `color` by `factor` percent in HSV space.
///
/// When the scaled value overflows, the overflow is taken out of the
/// saturation instead, so very bright colors wash out towards white.
/// Factors below 100 darken, alpha is kept.
pub fn lighter(color: Color32, factor: u32) -> Color32 {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let (h, mut s, mut v) = rgb_to_hsv(r, g, b);

    v *= factor as f32 / 100.0;
    if v > 1.0 {
        s = (s - (v - 1.0)).max(0.0);
        v = 1.0;
    }

    let [r, g, b] = hsv_to_rgb(h, s, v);
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// `h` in degrees `[0, 360)`, `s` and `v` in `[0, 1]`
fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let (r, g, b) = (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max > 0.0 { delta / max } else { 0.0 };
    let h = if delta <= 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (h, s, max)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [u8; 3] {
    let sector = (h / 60.0).floor();
    let f = h / 60.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as i32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    let to_u8 = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    [to_u8(r), to_u8(g), to_u8(b)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: u8, b: u8) -> bool {
        a.abs_diff(b) <= 1
    }

    #[test]
    fn parse_hex_forms() {
        assert_eq!(parse_color("#fff"), Ok(Color32::WHITE));
        assert_eq!(
            parse_color("#23d18b"),
            Ok(Color32::from_rgb(0x23, 0xd1, 0x8b))
        );
        assert_eq!(
            parse_color("#4400B0EE"),
            Ok(Color32::from_rgba_unmultiplied(0x00, 0xb0, 0xee, 0x44))
        );
    }

    #[test]
    fn parse_names_ignores_case() {
        assert_eq!(parse_color("White"), Ok(Color32::WHITE));
        assert_eq!(parse_color(" gray "), Ok(Color32::from_rgb(160, 160, 164)));
        assert_eq!(parse_color("transparent"), Ok(Color32::TRANSPARENT));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_color(""), Err(ColorError::Empty));
        assert_eq!(
            parse_color("#12345"),
            Err(ColorError::HexLength("#12345".to_owned(), 5))
        );
        assert_eq!(
            parse_color("#12345z"),
            Err(ColorError::HexDigit("#12345z".to_owned()))
        );
        assert_eq!(
            parse_color("mauve-ish"),
            Err(ColorError::UnknownName("mauve-ish".to_owned()))
        );
    }

    #[test]
    fn hex_output_parses_back() {
        let color = Color32::from_rgb(0x23, 0xd1, 0x8b);
        assert_eq!(parse_color(&to_hex(color)), Ok(color));
        assert_eq!(to_hex(Color32::from_rgb(1, 2, 255)), "#0102ff");
        assert_eq!(to_hex(Color32::TRANSPARENT), "#00000000");
    }

    #[test]
    fn lighter_washes_out_bright_colors() {
        let [r, g, b, a] = lighter(Color32::from_rgb(0x23, 0xd1, 0x8b), 150).to_srgba_unmultiplied();
        assert!(close(r, 101), "r = {r}");
        assert_eq!(g, 255);
        assert!(close(b, 193), "b = {b}");
        assert_eq!(a, 255);
    }

    #[test]
    fn lighter_scales_dark_colors() {
        let [r, g, b, _] = lighter(Color32::from_rgb(100, 50, 0), 150).to_srgba_unmultiplied();
        assert!(close(r, 150), "r = {r}");
        assert!(close(g, 75), "g = {g}");
        assert_eq!(b, 0);
    }

    #[test]
    fn lighter_keeps_grays_gray() {
        let [r, g, b, _] = lighter(Color32::from_rgb(128, 128, 128), 150).to_srgba_unmultiplied();
        assert_eq!((r, g, b), (192, 192, 192));
    }
}
