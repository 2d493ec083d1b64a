#![cfg_attr(not(test), no_std)]
//! # pixelworld core
//!
//! Everything the game does between reading the buttons and writing the
//! display lives here, independent of the board it runs on:
//!
//! ```text
//! InputDevice -> InputSampler -> World (player, entities) -> PixelBuffer -> Presenter -> DisplayDevice
//! ```
//!
//! The hardware sits behind [`input::InputDevice`] and [`present::DisplayDevice`],
//! so the same loop drives the bare-metal binary, the desktop simulator and the tests.

pub mod color;
pub mod config;
pub mod entity;
pub mod frame;
pub mod input;
pub mod present;
pub mod run_loop;
pub mod sprite;
pub mod timing;
pub mod world;

pub use color::Color;
pub use entity::Entity;
pub use frame::PixelBuffer;
pub use input::{Buttons, InputDevice, InputSampler, Intent};
pub use present::{DisplayDevice, Presenter};
pub use run_loop::{RunLoop, TickReport};
pub use sprite::Sprite;
pub use world::World;
