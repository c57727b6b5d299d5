use rand::Rng;

const PASTEL_SATURATION: f32 = 0.70;
const PASTEL_LIGHTNESS: f32 = 0.85;

/// Board background tint.
///
/// The board starts neutral and switches to a random light pastel each time
/// food is eaten.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Tint {
    #[default]
    Neutral,
    /// `hsl(hue, 70%, 85%)`, hue in degrees `0..360`.
    Pastel { hue: u16 },
}

impl Tint {
    /// Rolls a random pastel hue.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::Pastel {
            hue: rng.gen_range(0..360),
        }
    }

    /// Returns the RGB colour for a pastel tint, or `None` when neutral.
    #[must_use]
    pub fn rgb(self) -> Option<(u8, u8, u8)> {
        match self {
            Self::Neutral => None,
            Self::Pastel { hue } => Some(hsl_to_rgb(
                f32::from(hue % 360),
                PASTEL_SATURATION,
                PASTEL_LIGHTNESS,
            )),
        }
    }
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (u8, u8, u8) {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let second = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u8 {
        0 => (chroma, second, 0.0),
        1 => (second, chroma, 0.0),
        2 => (0.0, chroma, second),
        3 => (0.0, second, chroma),
        4 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };
    let offset = lightness - chroma / 2.0;

    (
        to_channel(r + offset),
        to_channel(g + offset),
        to_channel(b + offset),
    )
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
