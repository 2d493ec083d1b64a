use bit_field::BitField;
use pixelworld_core::InputDevice;
use volatile_register::{RO, RW};

/// Push-button parallel port at `$FF20_0050`.
///
/// `data` holds the live level of KEY0-KEY3 in bits 0-3; a pressed key reads 1.
#[repr(C)]
pub struct PushButtons {
    pub data: RO<u32>,
    _reserved: RW<u32>,
    pub interrupt_mask: RW<u32>,
    pub edge_capture: RW<u32>,
}

impl PushButtons {
    pub unsafe fn new() -> &'static mut PushButtons {
        unsafe { &mut *(0xFF20_0050 as *mut PushButtons) }
    }
}

impl InputDevice for PushButtons {
    #[inline(always)]
    fn read_raw(&mut self) -> u8 {
        self.data.read().get_bits(0..8) as u8
    }
}
