//! # Colors
//!
//! Pixels are 16-bit RGB565, the native format of the VGA pixel buffer:
//!
//! | Bits    | Channel | Range |
//! |---------|---------|-------|
//! | `15..11`| red     | 0-31  |
//! | `10..5` | green   | 0-63  |
//! | `4..0`  | blue    | 0-31  |
//!
//! ```ignore
//! let orange = Color::from_rgb888(255, 128, 0);
//! buffer.set_pixel(10, 10, orange);
//! ```

use bit_field::BitField;

/// A packed RGB565 pixel. Every bit pattern is a valid color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const BLUE: Color = Color(0x001F);
    pub const GRAY: Color = Color(0x8410);
    pub const MAGENTA: Color = Color(0xF81F);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const CYAN: Color = Color(0x07FF);

    /// Key color `spritegen` writes for transparent source pixels.
    /// Blits copy it like any other color.
    pub const TRANSPARENT_KEY: Color = Color(0xF8FF);

    /// Pack 8-bit channels, dropping the low bits of each.
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        let r5 = (r >> 3) as u16;
        let g6 = (g >> 2) as u16;
        let b5 = (b >> 3) as u16;
        Color((r5 << 11) | (g6 << 5) | b5)
    }

    #[inline]
    pub fn red(self) -> u8 {
        self.0.get_bits(11..16) as u8
    }

    #[inline]
    pub fn green(self) -> u8 {
        self.0.get_bits(5..11) as u8
    }

    #[inline]
    pub fn blue(self) -> u8 {
        self.0.get_bits(0..5) as u8
    }

    /// Expand to 8-bit channels by replicating the high bits into the low ones,
    /// so full-scale channels map to 255.
    pub fn to_rgb888(self) -> (u8, u8, u8) {
        let (r, g, b) = (self.red(), self.green(), self.blue());
        ((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2))
    }

    /// `0x00RRGGBB`, the layout host framebuffers expect.
    pub fn to_0rgb(self) -> u32 {
        let (r, g, b) = self.to_rgb888();
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Color(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}
