//! # Presenting
//!
//! The VGA pixel buffer is wider in memory than on screen: each row occupies
//! [`DEVICE_STRIDE`] 16-bit slots, of which only the first [`LOGICAL_STRIDE`]
//! are scanned out. The logical frame is packed at `LOGICAL_STRIDE`, so a
//! straight `memcpy` would shear every row after the first.
//!
//! [`Presenter::present`] is the one place that knows both strides. It copies
//! the whole frame every tick: at 320×240 a full copy is cheap enough that
//! dirty tracking isn't worth having.

use log::trace;

use crate::{
    color::Color,
    config::{HEIGHT, WIDTH},
    frame::PixelBuffer,
};

/// Elements per row of the logical frame.
pub const LOGICAL_STRIDE: usize = WIDTH;
/// Elements per row of the device pixel store.
pub const DEVICE_STRIDE: usize = 512;

/// Number of elements a device store must hold for a full frame.
pub const DEVICE_LEN: usize = DEVICE_STRIDE * HEIGHT;

/// A write-only pixel store addressed by flat offset.
///
/// Writes never fail; offsets are always below [`DEVICE_LEN`].
pub trait DisplayDevice {
    fn write(&mut self, offset: usize, color: Color);

    /// Called once after every full frame. Memory-mapped displays scan out
    /// continuously and have nothing to do here.
    fn flush(&mut self) {}
}

impl<D: DisplayDevice + ?Sized> DisplayDevice for &mut D {
    fn write(&mut self, offset: usize, color: Color) {
        (**self).write(offset, color)
    }

    fn flush(&mut self) {
        (**self).flush()
    }
}

pub struct Presenter<D: DisplayDevice> {
    device: D,
    frames: u32,
}

impl<D: DisplayDevice> Presenter<D> {
    pub const fn new(device: D) -> Self {
        Self { device, frames: 0 }
    }

    /// Copy every logical pixel `(x, y)` to device offset `x + y * DEVICE_STRIDE`.
    pub fn present(&mut self, frame: &PixelBuffer) {
        for (y, row) in frame.as_slice().chunks_exact(LOGICAL_STRIDE).enumerate() {
            let base = y * DEVICE_STRIDE;
            for (x, &color) in row.iter().enumerate() {
                self.device.write(base + x, color);
            }
        }
        self.device.flush();
        self.frames = self.frames.wrapping_add(1);
        trace!(target: "present", "frame {} presented", self.frames);
    }

    /// Frames presented so far, wrapping at `u32::MAX`.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }
}
