//! Compile-time configuration.
//!
//! Resolution and capacities are fixed for the target board; nothing here is
//! read at runtime.

use crate::color::Color;

/// Logical frame width in pixels.
pub const WIDTH: usize = 320;
/// Logical frame height in pixels.
pub const HEIGHT: usize = 240;

/// Maximum number of autonomous entities a [`World`](crate::World) can hold.
pub const ENTITY_CAPACITY: usize = 10;

/// Where the player spawns: the middle of the logical frame.
pub const PLAYER_START: (i32, i32) = (WIDTH as i32 / 2, HEIGHT as i32 / 2);

/// Edge length of the square drawn for entities without a sprite.
pub const MARKER_SIZE: i32 = 10;
pub const MARKER_COLOR: Color = Color::RED;

pub const DEFAULT_BACKGROUND: Color = Color::WHITE;
