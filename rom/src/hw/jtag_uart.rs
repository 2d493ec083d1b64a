use core::fmt;

use bit_field::BitField;
use volatile_register::RW;

/// JTAG UART at `$FF20_1000`, read by the host's terminal over the USB-Blaster.
#[repr(C)]
pub struct JtagUart {
    /// Bits 0-7: character. Writing queues it for the host.
    pub data: RW<u32>,
    /// Bits 16-31: free space in the write FIFO.
    pub control: RW<u32>,
}

impl JtagUart {
    pub unsafe fn new() -> &'static mut JtagUart {
        unsafe { &mut *(0xFF20_1000 as *mut JtagUart) }
    }

    #[inline]
    fn write_space(&self) -> u32 {
        self.control.read().get_bits(16..32)
    }

    /// Queue one byte for the host, or drop it if the write FIFO is full.
    /// With no host attached the FIFO never drains.
    pub fn write_byte(&mut self, byte: u8) {
        if self.write_space() > 0 {
            unsafe { self.data.write(byte as u32) }
        }
    }
}

impl fmt::Write for JtagUart {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            if byte == b'\n' {
                self.write_byte(b'\r');
            }
            self.write_byte(byte);
        }
        Ok(())
    }
}
