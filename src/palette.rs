use ratatui::style::Color;

use crate::config::{ConfigError, PaletteFile};
use crate::tint::Tint;

/// Colours used to draw the board and its overlays.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Palette {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    /// Board background while the tint is neutral.
    pub board: Color,
    pub border: Color,
    pub text: Color,
    pub accent: Color,
}

/// Sea-green snake, tomato food, light grey board.
pub const CLASSIC_PALETTE: Palette = Palette {
    snake_head: Color::Rgb(0x2E, 0x8B, 0x57),
    snake_body: Color::Rgb(0x3C, 0xB3, 0x71),
    food: Color::Rgb(0xFF, 0x63, 0x47),
    board: Color::Rgb(0xE8, 0xE8, 0xE8),
    border: Color::DarkGray,
    text: Color::White,
    accent: Color::Green,
};

impl Default for Palette {
    fn default() -> Self {
        CLASSIC_PALETTE
    }
}

impl Palette {
    /// Applies hex overrides from the settings file on top of the classic palette.
    pub fn from_file(file: &PaletteFile) -> Result<Self, ConfigError> {
        let mut palette = CLASSIC_PALETTE;

        let slots: [(&str, &Option<String>, &mut Color); 7] = [
            ("snake_head", &file.snake_head, &mut palette.snake_head),
            ("snake_body", &file.snake_body, &mut palette.snake_body),
            ("food", &file.food, &mut palette.food),
            ("board", &file.board, &mut palette.board),
            ("border", &file.border, &mut palette.border),
            ("text", &file.text, &mut palette.text),
            ("accent", &file.accent, &mut palette.accent),
        ];

        for (key, raw, slot) in slots {
            let Some(raw) = raw else {
                continue;
            };
            *slot = parse_hex_color(raw).ok_or_else(|| ConfigError::InvalidColor {
                key: key.to_owned(),
                value: raw.clone(),
            })?;
        }

        Ok(palette)
    }

    /// Board background for the given tint.
    #[must_use]
    pub fn board_color(&self, tint: Tint) -> Color {
        tint.rgb()
            .map_or(self.board, |(r, g, b)| Color::Rgb(r, g, b))
    }
}

/// Parses `#RRGGBB` (the leading `#` is optional).
#[must_use]
pub fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use crate::config::{ConfigError, PaletteFile};
    use crate::tint::Tint;

    use super::{CLASSIC_PALETTE, Palette, parse_hex_color};

    #[test]
    fn parses_hex_color() {
        assert_eq!(parse_hex_color("#AABBCC"), Some(Color::Rgb(170, 187, 204)));
        assert_eq!(parse_hex_color("2e8b57"), Some(Color::Rgb(46, 139, 87)));
        assert_eq!(parse_hex_color("#ABC"), None);
        assert_eq!(parse_hex_color("invalid"), None);
    }

    #[test]
    fn file_overrides_apply_on_top_of_classic() {
        let file = PaletteFile {
            food: Some("#112233".to_owned()),
            ..PaletteFile::default()
        };

        let palette = Palette::from_file(&file).expect("palette should parse");

        assert_eq!(palette.food, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(palette.snake_head, CLASSIC_PALETTE.snake_head);
    }

    #[test]
    fn bad_override_names_the_key() {
        let file = PaletteFile {
            board: Some("grey".to_owned()),
            ..PaletteFile::default()
        };

        let error = Palette::from_file(&file).expect_err("invalid colour should fail");
        assert!(matches!(error, ConfigError::InvalidColor { ref key, .. } if key == "board"));
    }

    #[test]
    fn board_colour_follows_tint() {
        let palette = Palette::default();

        assert_eq!(palette.board_color(Tint::Neutral), palette.board);
        assert_eq!(
            palette.board_color(Tint::Pastel { hue: 0 }),
            Color::Rgb(244, 190, 190)
        );
    }
}
