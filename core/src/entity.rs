use crate::{
    config::{MARKER_COLOR, MARKER_SIZE},
    frame::PixelBuffer,
    input::Intent,
    sprite::Sprite,
};

/// Anything that moves and draws itself: the player and the autonomous markers.
///
/// Position is the sprite's top-left corner, or the center of the marker square
/// for entities without a sprite.
#[derive(Copy, Clone, Debug)]
pub struct Entity {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
    pub sprite: Option<&'static Sprite>,
}

impl Entity {
    /// A stationary entity drawn as a marker square.
    pub const fn marker(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            vx: 0,
            vy: 0,
            sprite: None,
        }
    }

    pub const fn with_sprite(x: i32, y: i32, sprite: &'static Sprite) -> Self {
        Self {
            x,
            y,
            vx: 0,
            vy: 0,
            sprite: Some(sprite),
        }
    }

    pub const fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub const fn velocity(&self) -> (i32, i32) {
        (self.vx, self.vy)
    }

    /// Sprite dimensions, or the marker's for sprite-less entities.
    pub fn size(&self) -> (usize, usize) {
        match self.sprite {
            Some(sprite) => (sprite.width(), sprite.height()),
            None => (MARKER_SIZE as usize, MARKER_SIZE as usize),
        }
    }

    /// Replace the velocity with the intent; nothing is accumulated.
    #[inline]
    pub fn apply_input(&mut self, intent: Intent) {
        self.vx = intent.dx as i32;
        self.vy = intent.dy as i32;
    }

    /// No clamping: entities are free to leave the screen.
    #[inline]
    pub fn step_physics(&mut self) {
        self.x = self.x.wrapping_add(self.vx);
        self.y = self.y.wrapping_add(self.vy);
    }

    pub fn draw(&self, buffer: &mut PixelBuffer) {
        let Some(sprite) = self.sprite else {
            let half = MARKER_SIZE / 2;
            buffer.fill_rect(
                self.x.saturating_sub(half),
                self.y.saturating_sub(half),
                self.x.saturating_add(half),
                self.y.saturating_add(half),
                MARKER_COLOR,
            );
            return;
        };

        for j in 0..sprite.height() {
            for i in 0..sprite.width() {
                if let Some(color) = sprite.cell(i, j) {
                    // saturates to an off-screen coordinate near the i32 limits
                    let x = self.x.saturating_add(i as i32);
                    let y = self.y.saturating_add(j as i32);
                    buffer.set_pixel(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Color, sprite::PLAYER};

    fn blank() -> Box<PixelBuffer> {
        Box::new(PixelBuffer::new())
    }

    #[test]
    fn marker_matches_ten_by_ten_rect() {
        let mut drawn = blank();
        Entity::marker(100, 60).draw(&mut drawn);

        let mut expected = blank();
        expected.fill_rect(95, 55, 105, 65, Color::RED);

        assert_eq!(drawn.as_slice(), expected.as_slice());
        let red = drawn.as_slice().iter().filter(|&&c| c == Color::RED).count();
        assert_eq!(red, 100);
    }

    #[test]
    fn sprite_is_blitted_cell_for_cell() {
        let mut buffer = blank();
        buffer.fill_all(Color::BLUE);
        let entity = Entity::with_sprite(40, 30, &PLAYER);
        entity.draw(&mut buffer);

        for j in 0..PLAYER.height() {
            for i in 0..PLAYER.width() {
                assert_eq!(
                    buffer.pixel(40 + i as i32, 30 + j as i32),
                    PLAYER.cell(i, j),
                    "cell ({}, {})",
                    i,
                    j
                );
            }
        }
        // Just outside the sprite's footprint is untouched.
        assert_eq!(buffer.pixel(39, 30), Some(Color::BLUE));
        assert_eq!(buffer.pixel(52, 30), Some(Color::BLUE));
        assert_eq!(buffer.pixel(40, 46), Some(Color::BLUE));
    }

    #[test]
    fn sprite_is_clipped_at_the_edge() {
        let mut buffer = blank();
        buffer.fill_all(Color::BLUE);
        Entity::with_sprite(314, -4, &PLAYER).draw(&mut buffer);

        // Sprite column 0, row 4 lands on (314, 0).
        assert_eq!(buffer.pixel(314, 0), PLAYER.cell(0, 4));
        assert_eq!(buffer.pixel(319, 0), PLAYER.cell(5, 4));
        // Nothing wrapped around to the left edge.
        assert_eq!(buffer.pixel(0, 1), Some(Color::BLUE));
    }

    #[test]
    fn entity_far_off_screen_draws_nothing() {
        let mut buffer = blank();
        Entity::marker(-50, 500).draw(&mut buffer);
        Entity::with_sprite(1000, 1000, &PLAYER).draw(&mut buffer);
        assert!(buffer.as_slice().iter().all(|&c| c == Color::BLACK));
    }

    #[test]
    fn entities_at_the_i32_limits_draw_nothing() {
        let mut buffer = blank();
        Entity::marker(i32::MIN, 0).draw(&mut buffer);
        Entity::marker(0, i32::MAX).draw(&mut buffer);
        Entity::with_sprite(i32::MAX - 3, 0, &PLAYER).draw(&mut buffer);
        Entity::with_sprite(0, i32::MAX - 3, &PLAYER).draw(&mut buffer);
        assert!(buffer.as_slice().iter().all(|&c| c == Color::BLACK));
    }

    #[test]
    fn input_sets_velocity_and_physics_moves() {
        let mut entity = Entity::marker(160, 120);
        entity.apply_input(Intent { dx: 1, dy: -1 });
        assert_eq!(entity.velocity(), (1, -1));

        entity.step_physics();
        entity.step_physics();
        assert_eq!(entity.position(), (162, 118));

        entity.apply_input(Intent::NONE);
        entity.step_physics();
        assert_eq!(entity.position(), (162, 118));
    }

    #[test]
    fn size_follows_sprite() {
        assert_eq!(Entity::with_sprite(0, 0, &PLAYER).size(), (12, 16));
        assert_eq!(Entity::marker(0, 0).size(), (10, 10));
    }
}
