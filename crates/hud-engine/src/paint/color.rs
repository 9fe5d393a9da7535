/// Straight-alpha sRGB color, one byte per channel.
///
/// Channels are passed to the renderer as-is; no clamping or premultiplication
/// is applied on the element side.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Linear, premultiplied `[r, g, b, a]` for blending on an sRGB target.
    pub fn to_linear_premul(self) -> [f32; 4] {
        let a = self.a as f32 / 255.0;
        [
            srgb_to_linear(self.r) * a,
            srgb_to_linear(self.g) * a,
            srgb_to_linear(self.b) * a,
            a,
        ]
    }
}

fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_transparent() {
        assert_eq!(Color::default(), Color::transparent());
        assert!(Color::default().is_transparent());
    }

    #[test]
    fn hex_parses_rgb_and_rgba() {
        assert_eq!(Color::from_hex("#ff8000"), Some(Color::rgb(255, 128, 0)));
        assert_eq!(Color::from_hex("10203040"), Some(Color::rgba(16, 32, 48, 64)));
    }

    #[test]
    fn hex_rejects_malformed() {
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("#ffé000"), None);
    }

    #[test]
    fn linear_premul_endpoints() {
        assert_eq!(Color::white().to_linear_premul(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Color::transparent().to_linear_premul(), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn linear_premul_scales_rgb_by_alpha() {
        let [r, g, b, a] = Color::rgba(255, 0, 0, 51).to_linear_premul();
        assert!((a - 0.2).abs() < 1e-6);
        assert!((r - 0.2).abs() < 1e-6);
        assert_eq!((g, b), (0.0, 0.0));
    }
}
