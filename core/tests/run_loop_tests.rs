//! Whole-tick scenarios driven through the run loop with scripted input and an
//! in-memory display.

use std::ops::ControlFlow;

use pixelworld_core::{
    config::{HEIGHT, WIDTH},
    entity::Entity,
    present::{DEVICE_LEN, DEVICE_STRIDE},
    sprite::PLAYER,
    Color, DisplayDevice, InputDevice, Intent, PixelBuffer, RunLoop, World,
};
use rand::{rngs::SmallRng, SeedableRng};

/// Replays a fixed list of raw samples, then reports no buttons.
struct ScriptedButtons {
    samples: Vec<u8>,
    reads: usize,
}

impl ScriptedButtons {
    fn new(samples: &[u8]) -> Self {
        Self {
            samples: samples.to_vec(),
            reads: 0,
        }
    }
}

impl InputDevice for ScriptedButtons {
    fn read_raw(&mut self) -> u8 {
        let raw = self.samples.get(self.reads).copied().unwrap_or(0);
        self.reads += 1;
        raw
    }
}

struct MemoryDisplay {
    store: Vec<Color>,
}

impl MemoryDisplay {
    fn new() -> Self {
        Self {
            store: vec![Color::BLACK; DEVICE_LEN],
        }
    }

    fn at(&self, x: usize, y: usize) -> Color {
        self.store[x + y * DEVICE_STRIDE]
    }
}

impl DisplayDevice for MemoryDisplay {
    fn write(&mut self, offset: usize, color: Color) {
        self.store[offset] = color;
    }
}

fn seeded_world() -> World {
    World::new(10, &mut SmallRng::seed_from_u64(42))
}

fn stop_after(n: u64) -> impl FnMut(&pixelworld_core::TickReport) -> ControlFlow<()> {
    move |report| {
        if report.tick >= n {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

#[test]
fn one_tick_moves_player_right() {
    let mut frame = Box::new(PixelBuffer::new());
    let mut game = RunLoop::new(
        &mut frame,
        seeded_world(),
        ScriptedButtons::new(&[0x01]),
        MemoryDisplay::new(),
    );

    let report = game.step();

    assert_eq!(report.tick, 1);
    assert_eq!(report.intent, Intent { dx: 1, dy: 0 });
    assert_eq!(report.player, (161, 120));
    assert_eq!(game.world().player().position(), (161, 120));
}

#[test]
fn diagonal_input_accumulates_over_ticks() {
    let mut frame = Box::new(PixelBuffer::new());
    let mut game = RunLoop::new(
        &mut frame,
        seeded_world(),
        ScriptedButtons::new(&[0x05, 0x05, 0x05, 0x0A]),
        MemoryDisplay::new(),
    );

    let ran = game.run_until(stop_after(4));

    assert_eq!(ran, 4);
    assert_eq!(game.ticks(), 4);
    // three ticks down-right, one up-left
    assert_eq!(game.world().player().position(), (162, 122));
}

#[test]
fn releasing_buttons_stops_the_player() {
    let mut frame = Box::new(PixelBuffer::new());
    let mut game = RunLoop::new(
        &mut frame,
        seeded_world(),
        ScriptedButtons::new(&[0x08, 0x08]),
        MemoryDisplay::new(),
    );

    game.run_until(stop_after(10));

    assert_eq!(game.world().player().position(), (158, 120));
    assert_eq!(game.world().player().velocity(), (0, 0));
}

#[test]
fn markers_never_move() {
    let mut frame = Box::new(PixelBuffer::new());
    let world = seeded_world();
    let spawned: Vec<_> = world.entities().iter().map(Entity::position).collect();

    let mut game = RunLoop::new(
        &mut frame,
        world,
        ScriptedButtons::new(&[0x0F; 30]),
        MemoryDisplay::new(),
    );
    game.run_until(stop_after(30));

    let now: Vec<_> = game.world().entities().iter().map(Entity::position).collect();
    assert_eq!(spawned, now);
}

#[test]
fn device_shows_player_on_top_of_marker() {
    let mut entities = heapless::Vec::new();
    entities.push(Entity::marker(160, 120)).unwrap();
    let world = World::from_parts(Entity::with_sprite(160, 120, &PLAYER), entities);

    let mut frame = Box::new(PixelBuffer::new());
    let mut game = RunLoop::new(
        &mut frame,
        world,
        ScriptedButtons::new(&[]),
        MemoryDisplay::new(),
    );
    game.step();

    let display = game.presenter().device();
    // Marker spans [155, 165) × [115, 125); the sprite starts at (160, 120).
    for y in 120..125 {
        for x in 160..165 {
            let cell = PLAYER.cell(x - 160, y - 120);
            assert_eq!(Some(display.at(x, y)), cell, "({}, {})", x, y);
        }
    }
    // The part of the marker the sprite doesn't cover is still red.
    assert_eq!(display.at(155, 115), Color::RED);
    // Background everywhere else.
    assert_eq!(display.at(0, 0), Color::WHITE);
    assert_eq!(display.at(WIDTH - 1, HEIGHT - 1), Color::WHITE);
}

#[test]
fn device_frame_matches_logical_frame() {
    let mut frame = Box::new(PixelBuffer::new());
    let mut game = RunLoop::new(
        &mut frame,
        seeded_world(),
        ScriptedButtons::new(&[0x02]),
        MemoryDisplay::new(),
    );
    game.step();

    let display = game.presenter().device();
    let logical = game.frame();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            assert_eq!(Some(display.at(x, y)), logical.pixel(x as i32, y as i32));
        }
    }
    assert_eq!(game.presenter().frames(), 1);
}

#[test]
fn player_can_walk_off_screen() {
    let mut frame = Box::new(PixelBuffer::new());
    let world = World::new(0, &mut SmallRng::seed_from_u64(7));
    let mut game = RunLoop::new(
        &mut frame,
        world,
        ScriptedButtons::new(&[0x01; 200]),
        MemoryDisplay::new(),
    );

    game.run_until(stop_after(200));

    assert_eq!(game.world().player().position(), (360, 120));
    assert!(game.frame().as_slice().iter().all(|&c| c == Color::WHITE));
}

#[test]
fn pacing_does_not_change_the_tick() {
    let mut frame = Box::new(PixelBuffer::new());
    let mut game = RunLoop::new(
        &mut frame,
        seeded_world(),
        ScriptedButtons::new(&[0x04]),
        MemoryDisplay::new(),
    )
    .with_pacing(100);

    let report = game.step();
    assert_eq!(report.player, (160, 121));
}
