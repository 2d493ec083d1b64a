//! Busy-wait pacing.
//!
//! There is no timer interrupt in the loop; when a build wants to slow the
//! game down it burns cycles here between frames. The wait is not calibrated
//! and is not part of what a tick does.

/// Spin length used by `paced` builds between frames.
pub const FRAME_SPIN: u32 = 1_000_000;

/// Spin for `iterations` loop turns without yielding.
#[inline(never)]
pub fn spin(iterations: u32) {
    let mut count = 0u32;
    while count < iterations {
        // black_box keeps the optimizer from deleting the loop
        count = core::hint::black_box(count + 1);
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_returns() {
        spin(0);
        spin(1_000);
    }
}
