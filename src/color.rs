use crate::error::CompositorError;
use log::warn;
use serde::{Deserialize, Serialize};

/// RGB color with a fractional alpha weight used for compositing.
///
/// Channels are stored as `u8`, so out-of-range channel values are
/// unrepresentable; alpha is validated at construction instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f32,
}

impl Color {
    /// Create a color, validating that alpha lies in `[0, 1]`.
    pub fn new(red: u8, green: u8, blue: u8, alpha: f32) -> Result<Self, CompositorError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(CompositorError::InvalidColorValue(alpha));
        }
        Ok(Self {
            red,
            green,
            blue,
            alpha,
        })
    }

    /// Opaque color from channel values.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Fully transparent color; blending it leaves the background unchanged.
    pub const fn transparent() -> Self {
        Self {
            red: 255,
            green: 255,
            blue: 255,
            alpha: 0.0,
        }
    }

    /// The RGB channels as a tuple, alpha dropped.
    pub const fn channels(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    pub fn set_channels(&mut self, (red, green, blue): (u8, u8, u8)) {
        self.red = red;
        self.green = green;
        self.blue = blue;
    }

    /// Composite `self` (foreground) over `other` (existing background).
    ///
    /// Each channel is `floor(fg * alpha + bg * (1 - alpha))` using the
    /// foreground's alpha. The result is opaque.
    pub fn blend(self, other: Color) -> Color {
        let mix = |fg: u8, bg: u8| (fg as f32 * self.alpha + bg as f32 * (1.0 - self.alpha)) as u8;

        Color {
            red: mix(self.red, other.red),
            green: mix(self.green, other.green),
            blue: mix(self.blue, other.blue),
            alpha: 1.0,
        }
    }

    /// Lowercase `#rrggbb` encoding of the current channels.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Decode an opaque color from `#rrggbb` or shorthand `#rgb`
    /// (each digit doubled, so `#0f0` means `#00ff00`).
    pub fn from_hex(s: &str) -> Result<Self, CompositorError> {
        let (red, green, blue) =
            parse_hex(s).ok_or_else(|| CompositorError::InvalidColorFormat(s.to_string()))?;
        Ok(Self::rgb(red, green, blue))
    }

    /// Overwrite the channels from a hex string, keeping alpha.
    ///
    /// A malformed string leaves the color unchanged; prefer [`Color::from_hex`]
    /// when the caller wants to hear about the failure.
    pub fn set_hex(&mut self, s: &str) {
        match parse_hex(s) {
            Some(channels) => self.set_channels(channels),
            None => warn!("ignoring malformed hex color {:?}", s),
        }
    }
}

impl Default for Color {
    /// Opaque white, the color a fresh canvas is filled with.
    fn default() -> Self {
        Self::rgb(255, 255, 255)
    }
}

fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let digits = s.strip_prefix('#')?;
    if !digits.is_ascii() {
        return None;
    }

    match digits.len() {
        6 => Some((
            u8::from_str_radix(&digits[0..2], 16).ok()?,
            u8::from_str_radix(&digits[2..4], 16).ok()?,
            u8::from_str_radix(&digits[4..6], 16).ok()?,
        )),
        3 => {
            let double = |d: &str| u8::from_str_radix(d, 16).ok().map(|v| v * 17);
            Some((
                double(&digits[0..1])?,
                double(&digits[1..2])?,
                double(&digits[2..3])?,
            ))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_truncates_toward_zero() {
        let fg = Color::new(255, 0, 0, 0.5).unwrap();
        let bg = Color::rgb(0, 0, 255);

        // 255 * 0.5 = 127.5 floors to 127
        assert_eq!(fg.blend(bg).channels(), (127, 0, 127));
    }

    #[test]
    fn blend_result_is_opaque() {
        let fg = Color::new(10, 20, 30, 0.25).unwrap();
        assert_eq!(fg.blend(Color::default()).alpha, 1.0);
    }

    #[test]
    fn alpha_is_validated() {
        assert!(Color::new(0, 0, 0, 1.0).is_ok());
        assert!(Color::new(0, 0, 0, 0.0).is_ok());
        assert_eq!(
            Color::new(0, 0, 0, 1.5),
            Err(CompositorError::InvalidColorValue(1.5))
        );
        assert!(Color::new(0, 0, 0, -0.1).is_err());
        assert!(Color::new(0, 0, 0, f32::NAN).is_err());
    }

    #[test]
    fn parse_hex_rejects_junk() {
        assert_eq!(parse_hex("#1a2b3c"), Some((0x1a, 0x2b, 0x3c)));
        assert_eq!(parse_hex("#0f0"), Some((0, 255, 0)));
        assert_eq!(parse_hex("#12"), None);
        assert_eq!(parse_hex("1a2b3c"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
        assert_eq!(parse_hex("#ééé"), None);
    }

    #[test]
    fn set_hex_ignores_malformed_input() {
        let mut color = Color::rgb(1, 2, 3);
        color.set_hex("#12");
        assert_eq!(color.channels(), (1, 2, 3));

        color.set_hex("#0f0");
        assert_eq!(color.channels(), (0, 255, 0));
    }
}
