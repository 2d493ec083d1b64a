use pixelworld_core::{
    Color, DisplayDevice,
    present::DEVICE_LEN,
};
use volatile_register::RW;

/// The VGA controller's front pixel buffer at `$C800_0000`.
///
/// One RGB565 halfword per pixel, rows 512 halfwords apart; only the first
/// 320 of each row reach the screen.
#[repr(C)]
pub struct VgaPixelBuffer {
    pixels: [RW<u16>; DEVICE_LEN],
}

impl VgaPixelBuffer {
    pub unsafe fn new() -> &'static mut VgaPixelBuffer {
        unsafe { &mut *(0xC800_0000 as *mut VgaPixelBuffer) }
    }
}

impl DisplayDevice for VgaPixelBuffer {
    #[inline(always)]
    fn write(&mut self, offset: usize, color: Color) {
        unsafe { self.pixels[offset].write(color.0) }
    }
}
