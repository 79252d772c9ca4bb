//! Frame driver
//!
//! Glues the fixed clock, key edge detection, the scene controller and the
//! audio sink into one `frame` call the host makes per display refresh.

use crate::audio::AudioSink;
use crate::error::AppError;
use crate::platform::{FixedClock, Key, KeyTracker};
use crate::renderer::DrawList;
use crate::resources::Resources;
use crate::scene::{FrameSnapshot, SceneController, SceneKind};
use crate::tuning::Tuning;

pub struct App {
    controller: SceneController,
    resources: Resources,
    audio: Box<dyn AudioSink>,
    keys: KeyTracker,
    clock: FixedClock,
    draw_list: DrawList,
    ticks: u64,
}

impl App {
    pub fn new(
        resources: Resources,
        tuning: Tuning,
        audio: Box<dyn AudioSink>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            controller: SceneController::new(tuning)?,
            resources,
            audio,
            keys: KeyTracker::new(),
            clock: FixedClock::default(),
            draw_list: DrawList::new(),
            ticks: 0,
        })
    }

    /// Advance by `dt` seconds of wall time with `held` keys down
    ///
    /// Returns the number of ticks run. Keys are sampled every frame; new
    /// presses wait for the next tick that runs, which may be frames later.
    pub fn frame(&mut self, dt: f64, held: &[Key]) -> Result<u32, AppError> {
        self.keys.sample(held);
        let ticks = self.clock.advance(dt);
        for _ in 0..ticks {
            self.run_tick()?;
        }
        Ok(ticks)
    }

    /// Run exactly one fixed tick, bypassing the clock
    pub fn tick(&mut self, held: &[Key]) -> Result<(), AppError> {
        self.keys.sample(held);
        self.run_tick()
    }

    fn run_tick(&mut self) -> Result<(), AppError> {
        let input = self.keys.take();
        self.controller.update(&input, self.audio.as_mut())?;
        self.ticks += 1;
        Ok(())
    }

    /// Rebuild and return this frame's draw commands
    pub fn draw(&mut self) -> &DrawList {
        self.draw_list.clear();
        self.controller.draw(&self.resources, &mut self.draw_list);
        &self.draw_list
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.controller.snapshot()
    }

    pub fn scene(&self) -> SceneKind {
        self.controller.kind()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
