//! # Sprites
//!
//! Sprites are compiled-in bitmaps: a width, a height, and `width * height`
//! colors in row-major order (X fastest), the same layout as the logical frame.
//! They are declared as `static` items and borrowed by entities for the life
//! of the program; nothing mutates them.
//!
//! New sprites come from PNGs through `spritegen`, which prints a declaration
//! ready to paste into this module:
//!
//! ```ignore
//! pub static COIN: Sprite = Sprite::new(8, 8, &[ /* 64 colors */ ]);
//! ```
//!
//! Blits are opaque: every cell is copied, including black and
//! [`Color::TRANSPARENT_KEY`].

use crate::color::Color;

#[derive(Debug)]
pub struct Sprite {
    width: usize,
    height: usize,
    cells: &'static [Color],
}

impl Sprite {
    /// Panics (at compile time, for statics) if `cells` is not `width * height` long.
    pub const fn new(width: usize, height: usize, cells: &'static [Color]) -> Self {
        assert!(cells.len() == width * height, "sprite cell count must be width * height");
        Self { width, height, cells }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Color at column `i`, row `j`.
    #[inline]
    pub fn cell(&self, i: usize, j: usize) -> Option<Color> {
        if i >= self.width || j >= self.height {
            return None;
        }
        Some(self.cells[i + j * self.width])
    }

    pub fn cells(&self) -> &'static [Color] {
        self.cells
    }
}

const K: Color = Color::BLACK;
const Y: Color = Color::YELLOW;

/// The player: a 12×16 yellow figure on black, feet at row 11.
#[rustfmt::skip]
pub static PLAYER: Sprite = Sprite::new(12, 16, &[
    K, K, K, K, Y, Y, Y, Y, K, K, K, K,
    K, K, K, Y, Y, Y, Y, Y, Y, K, K, K,
    K, K, Y, Y, K, Y, Y, K, Y, Y, K, K,
    K, Y, Y, Y, Y, Y, Y, Y, Y, Y, Y, K,
    K, Y, Y, Y, Y, Y, Y, Y, Y, Y, Y, K,
    K, Y, Y, Y, Y, Y, Y, Y, Y, Y, Y, K,
    K, K, Y, Y, Y, Y, Y, Y, Y, Y, K, K,
    K, K, K, Y, Y, Y, Y, Y, Y, K, K, K,
    K, K, K, K, Y, Y, Y, Y, K, K, K, K,
    K, K, K, Y, Y, K, K, Y, Y, K, K, K,
    K, K, Y, Y, K, K, K, K, Y, Y, K, K,
    K, Y, Y, K, K, K, K, K, K, Y, Y, K,
    K, K, K, K, K, K, K, K, K, K, K, K,
    K, K, K, K, K, K, K, K, K, K, K, K,
    K, K, K, K, K, K, K, K, K, K, K, K,
    K, K, K, K, K, K, K, K, K, K, K, K,
]);
