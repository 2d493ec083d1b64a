//! # World
//!
//! The world owns the player and up to [`ENTITY_CAPACITY`] autonomous entities.
//! Each [`World::tick`] runs the same fixed sequence:
//!
//! 1. apply the input intent to the player
//! 2. step the player's physics
//! 3. fill the background
//! 4. draw the autonomous entities, in storage order
//! 5. draw the player
//!
//! Drawing the player last keeps it on top wherever it overlaps a marker.
//!
//! Autonomous entities have velocity fields but nothing drives them yet; they
//! stay where they spawned.

use heapless::Vec;
use log::{debug, info, trace, warn};
use rand::Rng;

use crate::{
    color::Color,
    config::{DEFAULT_BACKGROUND, ENTITY_CAPACITY, HEIGHT, PLAYER_START, WIDTH},
    entity::Entity,
    frame::PixelBuffer,
    input::Intent,
    sprite,
};

pub struct World {
    player: Entity,
    entities: Vec<Entity, ENTITY_CAPACITY>,
    background: Color,
}

impl World {
    /// Spawn the player at the center and `count` markers at random positions.
    ///
    /// `count` is clamped to [`ENTITY_CAPACITY`].
    pub fn new<R: Rng>(count: usize, rng: &mut R) -> Self {
        if count > ENTITY_CAPACITY {
            warn!(
                "requested {} entities, world holds at most {}; clamping",
                count, ENTITY_CAPACITY
            );
        }

        let mut entities = Vec::new();
        for _ in 0..count.min(ENTITY_CAPACITY) {
            let x = rng.gen_range(0..WIDTH as i32);
            let y = rng.gen_range(0..HEIGHT as i32);
            if entities.push(Entity::marker(x, y)).is_err() {
                break;
            }
        }

        let (px, py) = PLAYER_START;
        let player = Entity::with_sprite(px, py, &sprite::PLAYER);

        info!(
            "world created: player at ({}, {}), {} entities",
            px,
            py,
            entities.len()
        );
        for (n, e) in entities.iter().enumerate() {
            debug!(target: "world", "entity {} at ({}, {})", n, e.x, e.y);
        }

        Self {
            player,
            entities,
            background: DEFAULT_BACKGROUND,
        }
    }

    /// Build a world from explicit parts, for scenarios that need exact placement.
    pub fn from_parts(player: Entity, entities: Vec<Entity, ENTITY_CAPACITY>) -> Self {
        Self {
            player,
            entities,
            background: DEFAULT_BACKGROUND,
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Entity {
        &mut self.player
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Advance one tick and compose the frame into `buffer`.
    pub fn tick(&mut self, intent: Intent, buffer: &mut PixelBuffer) {
        self.player.apply_input(intent);
        self.player.step_physics();
        trace!(target: "world", "player at ({}, {})", self.player.x, self.player.y);

        self.draw(buffer);
    }

    /// Compose the current state without advancing it.
    pub fn draw(&self, buffer: &mut PixelBuffer) {
        buffer.fill_all(self.background);
        for entity in &self.entities {
            entity.draw(buffer);
        }
        self.player.draw(buffer);
    }
}
