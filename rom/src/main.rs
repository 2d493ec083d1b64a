#![no_std]
#![no_main]

use log::info;
use pixelworld_core::{PixelBuffer, RunLoop, World, config::ENTITY_CAPACITY};
use rand::{SeedableRng, rngs::SmallRng};

use crate::hw::{PrivateTimer, PushButtons, VgaPixelBuffer};

mod boot;
mod hw;
mod logger;

/// The logical frame. At 150 KiB it lives in .bss rather than on the stack.
static mut FRAME: PixelBuffer = PixelBuffer::new();

/// Timer count mixed with the button levels. Only varies between runs when the
/// timer was already running before boot.
fn seed(timer: &mut PrivateTimer, buttons: &PushButtons) -> u64 {
    timer.ensure_running();
    let count = timer.count() as u64;
    let levels = buttons.data.read() as u64;
    (count << 32) | (levels ^ count)
}

#[unsafe(no_mangle)]
fn main() -> ! {
    // SAFETY: the only reference to FRAME, taken once before the loop starts.
    let frame = unsafe { &mut *(&raw mut FRAME) };
    let timer = unsafe { PrivateTimer::new() };
    let buttons = unsafe { PushButtons::new() };
    let vga = unsafe { VgaPixelBuffer::new() };

    let rng_seed = seed(timer, buttons);
    info!("pixelworld booting, seed {:#018x}", rng_seed);

    let world = World::new(ENTITY_CAPACITY, &mut SmallRng::seed_from_u64(rng_seed));
    let game = RunLoop::new(frame, world, buttons, vga);

    #[cfg(feature = "paced")]
    let game = game.with_pacing(pixelworld_core::timing::FRAME_SPIN);

    let mut game = game;
    game.run()
}
