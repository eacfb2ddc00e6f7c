//! Color parsing for control background properties.

use egui::Color32;

/// Color names understood in `Background` values (case-insensitive).
pub const NAMED_COLORS: [(&str, Color32); 14] = [
    ("Transparent", Color32::TRANSPARENT),
    ("White", Color32::WHITE),
    ("Black", Color32::BLACK),
    ("Gray", Color32::from_rgb(128, 128, 128)),
    ("LightGray", Color32::from_rgb(211, 211, 211)),
    ("DarkGray", Color32::from_rgb(169, 169, 169)),
    ("Red", Color32::from_rgb(255, 0, 0)),
    ("Green", Color32::from_rgb(0, 128, 0)),
    ("Blue", Color32::from_rgb(0, 0, 255)),
    ("Yellow", Color32::from_rgb(255, 255, 0)),
    ("Orange", Color32::from_rgb(255, 165, 0)),
    ("Purple", Color32::from_rgb(128, 0, 128)),
    ("LightBlue", Color32::from_rgb(173, 216, 230)),
    ("LightGreen", Color32::from_rgb(144, 238, 144)),
];

fn hex_byte(text: &str, at: usize) -> Option<u8> {
    u8::from_str_radix(text.get(at..at + 2)?, 16).ok()
}

/// Parse a color name, `#RRGGBB` or `#AARRGGBB`.
///
/// Returns `None` for anything else; the caller decides the fallback.
pub fn parse_color(text: &str) -> Option<Color32> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix('#') {
        return match hex.len() {
            6 => Some(Color32::from_rgb(
                hex_byte(hex, 0)?,
                hex_byte(hex, 2)?,
                hex_byte(hex, 4)?,
            )),
            8 => Some(Color32::from_rgba_unmultiplied(
                hex_byte(hex, 2)?,
                hex_byte(hex, 4)?,
                hex_byte(hex, 6)?,
                hex_byte(hex, 0)?,
            )),
            _ => None,
        };
    }
    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(text))
        .map(|&(_, color)| color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_color("LightGray"), Some(Color32::from_rgb(211, 211, 211)));
        assert_eq!(parse_color(" lightgray "), Some(Color32::from_rgb(211, 211, 211)));
        assert_eq!(parse_color("Chartreuse-ish"), None);
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_color("#3b82f6"), Some(Color32::from_rgb(59, 130, 246)));
        assert_eq!(
            parse_color("#FF102030"),
            Some(Color32::from_rgba_unmultiplied(16, 32, 48, 255))
        );
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
    }
}
