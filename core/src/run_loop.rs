//! # Run Loop
//!
//! One tick is always the same sequence:
//!
//! ```text
//! poll input -> world.tick (move player, fill, draw markers, draw player) -> present -> pace
//! ```
//!
//! On the board the loop never ends ([`RunLoop::run`]). Tests and the
//! simulator use [`RunLoop::run_until`] with a stop condition instead:
//!
//! ```ignore
//! let ticks = game.run_until(|report| {
//!     if report.tick == 60 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
//! });
//! ```

use core::ops::ControlFlow;

use log::debug;

use crate::{
    frame::PixelBuffer,
    input::{InputDevice, InputSampler, Intent},
    present::{DisplayDevice, Presenter},
    timing,
    world::World,
};

/// What happened in the tick that just finished, handed to stop conditions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// 1 for the first tick.
    pub tick: u64,
    pub intent: Intent,
    pub player: (i32, i32),
}

pub struct RunLoop<'a, I: InputDevice, D: DisplayDevice> {
    frame: &'a mut PixelBuffer,
    world: World,
    input: InputSampler<I>,
    presenter: Presenter<D>,
    spin: Option<u32>,
    ticks: u64,
}

impl<'a, I: InputDevice, D: DisplayDevice> RunLoop<'a, I, D> {
    pub fn new(frame: &'a mut PixelBuffer, world: World, input: I, display: D) -> Self {
        Self {
            frame,
            world,
            input: InputSampler::new(input),
            presenter: Presenter::new(display),
            spin: None,
            ticks: 0,
        }
    }

    /// Busy-wait `iterations` after every present.
    pub fn with_pacing(mut self, iterations: u32) -> Self {
        self.spin = Some(iterations);
        self
    }

    /// Run exactly one tick.
    pub fn step(&mut self) -> TickReport {
        let intent = self.input.poll();
        self.world.tick(intent, self.frame);
        self.presenter.present(self.frame);

        if let Some(iterations) = self.spin {
            timing::spin(iterations);
        }

        self.ticks += 1;
        TickReport {
            tick: self.ticks,
            intent,
            player: self.world.player().position(),
        }
    }

    /// Tick until `stop` breaks, checking it after every tick.
    /// Returns the number of ticks run by this call (always at least one).
    pub fn run_until<F>(&mut self, mut stop: F) -> u64
    where
        F: FnMut(&TickReport) -> ControlFlow<()>,
    {
        let start = self.ticks;
        loop {
            let report = self.step();
            if stop(&report).is_break() {
                let ran = self.ticks - start;
                debug!("run loop stopped after {} ticks", ran);
                return ran;
            }
        }
    }

    /// Tick forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn frame(&self) -> &PixelBuffer {
        &*self.frame
    }

    pub fn input(&self) -> &InputSampler<I> {
        &self.input
    }

    pub fn presenter(&self) -> &Presenter<D> {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut Presenter<D> {
        &mut self.presenter
    }
}
