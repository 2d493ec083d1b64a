//! # Input
//!
//! The board exposes its four push buttons as one parallel-port register. A
//! read returns the current level of every button at once; there are no
//! interrupts and no debouncing.
//!
//! | Bit | Mask   | Button  |
//! |-----|--------|---------|
//! | 0   | `0x01` | `RIGHT` |
//! | 1   | `0x02` | `UP`    |
//! | 2   | `0x04` | `DOWN`  |
//! | 3   | `0x08` | `LEFT`  |
//!
//! [`InputSampler::poll`] performs the only hardware read and reduces the
//! snapshot to an [`Intent`]. Opposing buttons cancel: holding LEFT and
//! RIGHT together gives `dx == 0`.

use bit_field::BitField;

bitflags::bitflags! {
    /// Button levels as read from the input register. Set means held.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct Buttons: u8 {
        const RIGHT = 0b0000_0001;
        const UP    = 0b0000_0010;
        const DOWN  = 0b0000_0100;
        const LEFT  = 0b0000_1000;
    }
}

/// Anything that can produce a raw button snapshot.
pub trait InputDevice {
    fn read_raw(&mut self) -> u8;
}

impl<D: InputDevice + ?Sized> InputDevice for &mut D {
    fn read_raw(&mut self) -> u8 {
        (**self).read_raw()
    }
}

/// Direction the player asked for, each axis in `-1..=1`.
/// Screen coordinates: `+dx` is right, `+dy` is down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Intent {
    pub dx: i8,
    pub dy: i8,
}

impl Intent {
    pub const NONE: Intent = Intent { dx: 0, dy: 0 };

    /// Each held button contributes its unit step, so opposing pairs sum to zero.
    pub const fn from_buttons(buttons: Buttons) -> Self {
        let mut dx = 0;
        let mut dy = 0;
        if buttons.contains(Buttons::RIGHT) {
            dx += 1;
        }
        if buttons.contains(Buttons::UP) {
            dy -= 1;
        }
        if buttons.contains(Buttons::DOWN) {
            dy += 1;
        }
        if buttons.contains(Buttons::LEFT) {
            dx -= 1;
        }
        Intent { dx, dy }
    }

    /// Decode a raw register value. Bits above bit 3 are ignored.
    pub fn from_raw(raw: u8) -> Self {
        Self::from_buttons(Buttons::from_bits_truncate(raw))
    }

    pub const fn is_idle(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// Polls an [`InputDevice`] once per tick and remembers the previous snapshot
/// for edge detection.
pub struct InputSampler<D: InputDevice> {
    device: D,
    pub buttons: Buttons,
    pub buttons_last: Buttons,
}

impl<D: InputDevice> InputSampler<D> {
    pub const fn new(device: D) -> Self {
        Self {
            device,
            buttons: Buttons::empty(),
            buttons_last: Buttons::empty(),
        }
    }

    /// Read the device and return this tick's intent.
    pub fn poll(&mut self) -> Intent {
        let raw = self.device.read_raw();
        self.buttons_last = self.buttons;
        // keep only the four button bits
        self.buttons = Buttons::from_bits_retain(raw.get_bits(0..4));
        Intent::from_buttons(self.buttons)
    }

    #[inline]
    pub fn is_pressed(&self, button: Buttons) -> bool {
        self.buttons.contains(button)
    }

    #[inline]
    pub fn was_pressed(&self, button: Buttons) -> bool {
        self.buttons_last.contains(button)
    }

    /// True only on the tick the button went down.
    #[inline]
    pub fn just_pressed(&self, button: Buttons) -> bool {
        self.is_pressed(button) && !self.was_pressed(button)
    }

    /// True only on the tick the button came back up.
    #[inline]
    pub fn just_released(&self, button: Buttons) -> bool {
        !self.is_pressed(button) && self.was_pressed(button)
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Script {
        samples: Vec<u8>,
        next: usize,
    }

    impl InputDevice for Script {
        fn read_raw(&mut self) -> u8 {
            let raw = self.samples.get(self.next).copied().unwrap_or(0);
            self.next += 1;
            raw
        }
    }

    #[test]
    fn right_and_down_decode_to_positive_diagonal() {
        assert_eq!(Intent::from_raw(0x05), Intent { dx: 1, dy: 1 });
    }

    #[test]
    fn single_buttons() {
        assert_eq!(Intent::from_raw(0x01), Intent { dx: 1, dy: 0 });
        assert_eq!(Intent::from_raw(0x02), Intent { dx: 0, dy: -1 });
        assert_eq!(Intent::from_raw(0x04), Intent { dx: 0, dy: 1 });
        assert_eq!(Intent::from_raw(0x08), Intent { dx: -1, dy: 0 });
        assert!(Intent::from_raw(0x00).is_idle());
    }

    #[test]
    fn opposing_buttons_cancel() {
        assert_eq!(Intent::from_raw(0x09), Intent { dx: 0, dy: 0 });
        assert_eq!(Intent::from_raw(0x06), Intent { dx: 0, dy: 0 });
        assert_eq!(Intent::from_raw(0x0F), Intent::NONE);
        assert_eq!(Intent::from_raw(0x0B), Intent { dx: 0, dy: -1 });
    }

    #[test]
    fn high_bits_are_ignored() {
        assert_eq!(Intent::from_raw(0xF1), Intent { dx: 1, dy: 0 });
        assert_eq!(Intent::from_raw(0xF0), Intent::NONE);
    }

    #[test]
    fn sampler_tracks_edges() {
        let mut sampler = InputSampler::new(Script {
            samples: vec![0x01, 0x01, 0x00, 0xF8],
            next: 0,
        });

        assert_eq!(sampler.poll(), Intent { dx: 1, dy: 0 });
        assert!(sampler.just_pressed(Buttons::RIGHT));

        assert_eq!(sampler.poll(), Intent { dx: 1, dy: 0 });
        assert!(sampler.is_pressed(Buttons::RIGHT));
        assert!(!sampler.just_pressed(Buttons::RIGHT));

        assert_eq!(sampler.poll(), Intent::NONE);
        assert!(sampler.just_released(Buttons::RIGHT));

        assert_eq!(sampler.poll(), Intent { dx: -1, dy: 0 });
        assert_eq!(sampler.buttons, Buttons::LEFT);
        assert_eq!(sampler.device().next, 4);
    }
}
