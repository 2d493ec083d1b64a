//! # Board Peripherals
//!
//! Memory-mapped devices the game touches, all on the lightweight HPS-to-FPGA
//! bridge except the private timer:
//!
//! | Base          | Device              | Used for                    |
//! |---------------|---------------------|-----------------------------|
//! | `$C800_0000`  | VGA pixel buffer    | [`VgaPixelBuffer`]          |
//! | `$FF20_0050`  | Push-button port    | [`PushButtons`]             |
//! | `$FF20_1000`  | JTAG UART           | [`JtagUart`], log output    |
//! | `$FFFE_C600`  | A9 private timer    | [`PrivateTimer`], RNG seed  |
//!
//! Each wrapper is created once with an `unsafe fn new()` that hands out the
//! `&'static mut` register block; creating two aliases the hardware.

pub mod buttons;
pub mod jtag_uart;
pub mod timer;
pub mod vga;

pub use buttons::PushButtons;
pub use jtag_uart::JtagUart;
pub use timer::PrivateTimer;
pub use vga::VgaPixelBuffer;
