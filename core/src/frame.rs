//! # Logical Frame
//!
//! The game never draws to the display directly. Each tick is composed in a
//! [`PixelBuffer`] owned by software, then handed to the
//! [`Presenter`](crate::Presenter) in one piece.
//!
//! The buffer is `WIDTH × HEIGHT` colors in row-major order, X varying fastest
//! (`index = x + y * WIDTH`). Every write is clipped: coordinates outside the
//! frame are dropped without complaint, so entities can wander off screen and
//! simply stop being drawn.

use crate::{
    color::Color,
    config::{HEIGHT, WIDTH},
};

pub const FRAME_LEN: usize = WIDTH * HEIGHT;

pub struct PixelBuffer {
    pixels: [Color; FRAME_LEN],
}

impl PixelBuffer {
    pub const fn new() -> Self {
        Self {
            pixels: [Color::BLACK; FRAME_LEN],
        }
    }

    pub const fn width(&self) -> usize {
        WIDTH
    }

    pub const fn height(&self) -> usize {
        HEIGHT
    }

    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= WIDTH as i32 {
            return None;
        }
        if y < 0 || y >= HEIGHT as i32 {
            return None;
        }
        Some(x as usize + y as usize * WIDTH)
    }

    /// Write one pixel. Out-of-range coordinates are a no-op.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = Self::index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Read one pixel, `None` outside the frame.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        Self::index(x, y).map(|i| self.pixels[i])
    }

    /// Fill the half-open rectangle `[x0, x1) × [y0, y1)`.
    ///
    /// Corners may be given in either order; they are swapped so the first is
    /// the top-left. The far edge is exclusive, so `fill_rect(0, 0, 4, 4, c)`
    /// covers 16 pixels.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (x0, x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        let (y0, y1) = if y0 > y1 { (y1, y0) } else { (y0, y1) };

        let (x0, x1) = (x0.max(0), x1.min(WIDTH as i32));
        let (y0, y1) = (y0.max(0), y1.min(HEIGHT as i32));

        for y in y0..y1 {
            for x in x0..x1 {
                self.set_pixel(x, y, color);
            }
        }
    }

    pub fn fill_all(&mut self, color: Color) {
        self.fill_rect(0, 0, WIDTH as i32, HEIGHT as i32, color);
    }

    /// The whole frame, row-major with a stride of `WIDTH`.
    pub fn as_slice(&self) -> &[Color] {
        &self.pixels
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}
