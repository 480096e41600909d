use std::str::FromStr;

use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Hex parsing
// ---------------------------------------------------------------------------

/// Parse `#rrggbb` / `#rgb` (leading `#` optional) into a [`Color32`].
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let rgb = Srgb::<u8>::from_str(hex).ok()?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Parse a list of hex codes, substituting grey for anything unparsable.
pub fn palette_from_hex(codes: &[&str]) -> Vec<Color32> {
    codes
        .iter()
        .map(|code| {
            parse_hex(code).unwrap_or_else(|| {
                log::warn!("Invalid colour code '{code}', using grey");
                Color32::GRAY
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Compositing
// ---------------------------------------------------------------------------

/// Composite `fg` at `alpha` over an opaque `bg`, in linear light.
pub fn blend_over(fg: Color32, bg: Color32, alpha: f32) -> Color32 {
    let to_linear = |c: Color32| -> LinSrgb {
        Srgb::new(c.r(), c.g(), c.b())
            .into_format::<f32>()
            .into_linear()
    };

    let mixed = to_linear(bg).mix(to_linear(fg), alpha.clamp(0.0, 1.0));
    let out: Srgb<u8> = Srgb::<f32>::from_linear(mixed).into_format();
    Color32::from_rgb(out.red, out.green, out.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(parse_hex("#1f77b4"), Some(Color32::from_rgb(0x1f, 0x77, 0xb4)));
        assert_eq!(parse_hex("fff"), Some(Color32::WHITE));
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn invalid_codes_fall_back_to_grey() {
        let p = palette_from_hex(&["#000000", "nope"]);
        assert_eq!(p, vec![Color32::BLACK, Color32::GRAY]);
    }

    fn close(a: Color32, b: Color32) -> bool {
        a.to_array()
            .iter()
            .zip(b.to_array().iter())
            .all(|(x, y)| x.abs_diff(*y) <= 1)
    }

    #[test]
    fn blend_endpoints() {
        let fg = Color32::from_rgb(10, 20, 30);
        assert!(close(blend_over(fg, Color32::WHITE, 0.0), Color32::WHITE));
        assert!(close(blend_over(fg, Color32::WHITE, 1.0), fg));
    }

    #[test]
    fn light_blend_stays_light() {
        let c = blend_over(Color32::BLACK, Color32::WHITE, 0.2);
        assert!(c.r() > 150 && c.r() == c.g() && c.g() == c.b());
    }
}
