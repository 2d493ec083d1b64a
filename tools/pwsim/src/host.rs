//! Window-backed stand-ins for the board's button port and pixel buffer.
//!
//! The window is owned by [`WindowDisplay`], which pumps its events on every
//! flush and publishes the key levels and open/closed state through
//! [`HostState`]. [`KeyboardButtons`] reads those levels back as a raw button
//! register, so the core sees the same bit layout it sees on hardware.

use std::{cell::Cell, rc::Rc};

use anyhow::{Context, Result};
use minifb::{Key, Scale, Window, WindowOptions};
use pixelworld_core::{
    Buttons, Color, DisplayDevice, InputDevice,
    config::{HEIGHT, WIDTH},
    present::{DEVICE_LEN, DEVICE_STRIDE},
};
use tracing::warn;

#[derive(Default)]
pub struct HostState {
    keys: Cell<u8>,
    open: Cell<bool>,
}

impl HostState {
    pub fn is_open(&self) -> bool {
        self.open.get()
    }
}

/// Arrow keys and WASD, mapped onto the button register bits.
const KEYMAP: [(Key, Buttons); 8] = [
    (Key::Right, Buttons::RIGHT),
    (Key::D, Buttons::RIGHT),
    (Key::Up, Buttons::UP),
    (Key::W, Buttons::UP),
    (Key::Down, Buttons::DOWN),
    (Key::S, Buttons::DOWN),
    (Key::Left, Buttons::LEFT),
    (Key::A, Buttons::LEFT),
];

pub struct KeyboardButtons {
    state: Rc<HostState>,
}

impl KeyboardButtons {
    pub fn new(state: Rc<HostState>) -> Self {
        Self { state }
    }
}

impl InputDevice for KeyboardButtons {
    fn read_raw(&mut self) -> u8 {
        self.state.keys.get()
    }
}

/// A 512-stride pixel store shown in a `WIDTH × HEIGHT` window.
pub struct WindowDisplay {
    window: Window,
    store: Vec<Color>,
    rgb: Vec<u32>,
    state: Rc<HostState>,
}

impl WindowDisplay {
    pub fn open(title: &str, scale: Scale, state: Rc<HostState>) -> Result<Self> {
        let mut window = Window::new(
            title,
            WIDTH,
            HEIGHT,
            WindowOptions {
                scale,
                ..WindowOptions::default()
            },
        )
        .context("failed to open window")?;
        window.set_target_fps(60);
        state.open.set(true);

        Ok(Self {
            window,
            store: vec![Color::BLACK; DEVICE_LEN],
            rgb: vec![0; WIDTH * HEIGHT],
            state,
        })
    }

    fn poll_keys(&self) -> u8 {
        let mut buttons = Buttons::empty();
        for (key, button) in KEYMAP {
            if self.window.is_key_down(key) {
                buttons |= button;
            }
        }
        buttons.bits()
    }
}

impl DisplayDevice for WindowDisplay {
    fn write(&mut self, offset: usize, color: Color) {
        self.store[offset] = color;
    }

    fn flush(&mut self) {
        // Scan out only the visible part of each device row, like the VGA controller.
        for (dst, src) in self
            .rgb
            .chunks_exact_mut(WIDTH)
            .zip(self.store.chunks_exact(DEVICE_STRIDE))
        {
            for (d, s) in dst.iter_mut().zip(&src[..WIDTH]) {
                *d = s.to_0rgb();
            }
        }

        if let Err(e) = self.window.update_with_buffer(&self.rgb, WIDTH, HEIGHT) {
            warn!("window update failed: {}", e);
            self.state.open.set(false);
            return;
        }

        self.state.keys.set(self.poll_keys());
        self.state
            .open
            .set(self.window.is_open() && !self.window.is_key_down(Key::Escape));
    }
}
