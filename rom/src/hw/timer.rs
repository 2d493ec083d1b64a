use volatile_register::RW;

bitflags::bitflags! {
    /// Private timer control register.
    #[derive(Copy, Clone)]
    pub struct TimerControl: u32 {
        const ENABLE      = 0b0000_0001;
        const AUTO_RELOAD = 0b0000_0010;
        const IRQ_ENABLE  = 0b0000_0100;
    }
}

/// Cortex-A9 private timer at `$FFFE_C600`, a 32-bit down counter.
///
/// The game never takes its interrupt; it only reads the counter to seed the RNG.
#[repr(C)]
pub struct PrivateTimer {
    pub load: RW<u32>,
    pub counter: RW<u32>,
    pub control: RW<u32>,
    pub status: RW<u32>,
}

impl PrivateTimer {
    pub unsafe fn new() -> &'static mut PrivateTimer {
        unsafe { &mut *(0xFFFE_C600 as *mut PrivateTimer) }
    }

    pub fn is_running(&self) -> bool {
        TimerControl::from_bits_truncate(self.control.read()).contains(TimerControl::ENABLE)
    }

    /// Start free-running from `u32::MAX`, unless something already started it.
    pub fn ensure_running(&mut self) {
        if self.is_running() {
            return;
        }
        unsafe {
            self.load.write(u32::MAX);
            self.control
                .write((TimerControl::ENABLE | TimerControl::AUTO_RELOAD).bits());
        }
    }

    #[inline(always)]
    pub fn count(&self) -> u32 {
        self.counter.read()
    }
}
