mod host;

use std::{ops::ControlFlow, rc::Rc};

use anyhow::{Result, bail};
use clap::Parser;
use minifb::Scale;
use pixelworld_core::{PixelBuffer, RunLoop, World, config::ENTITY_CAPACITY};
use rand::{SeedableRng, rngs::SmallRng};
use tracing::{Level, info};
use tracing_subscriber::util::SubscriberInitExt;

use crate::host::{HostState, KeyboardButtons, WindowDisplay};

#[derive(Parser)]
#[command(name = "pwsim")]
#[command(version, about = "Run pixelworld in a desktop window", long_about = None)]
struct Cli {
    /// Autonomous entities to spawn (at most 10)
    #[arg(short, long, default_value_t = ENTITY_CAPACITY)]
    entities: usize,

    /// RNG seed for entity placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Window scale factor: 1, 2 or 4
    #[arg(long, default_value_t = 2)]
    scale: u8,

    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// Log level
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn window_scale(factor: u8) -> Result<Scale> {
    Ok(match factor {
        1 => Scale::X1,
        2 => Scale::X2,
        4 => Scale::X4,
        other => bail!("unsupported scale {other}; use 1, 2 or 4"),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .compact()
        .finish()
        .init();

    let scale = window_scale(cli.scale)?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("seed {}", seed);

    let state = Rc::new(HostState::default());
    let display = WindowDisplay::open("pixelworld", scale, state.clone())?;
    let buttons = KeyboardButtons::new(state.clone());

    let mut frame = Box::new(PixelBuffer::new());
    let world = World::new(cli.entities, &mut SmallRng::seed_from_u64(seed));
    let mut game = RunLoop::new(&mut frame, world, buttons, display);

    let limit = cli.ticks;
    let ran = game.run_until(|report| {
        let done = limit.is_some_and(|n| report.tick >= n);
        if done || !state.is_open() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    let (x, y) = game.world().player().position();
    info!("stopped after {} ticks, player at ({}, {})", ran, x, y);
    Ok(())
}
