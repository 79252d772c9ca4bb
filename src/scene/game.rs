//! Game scene
//!
//! Intro fade, then an endless loop: wait for Space, pull the car back to
//! the start line, count down, run for the configured time, show the
//! record and wait for Space again. The loop re-queues itself from its
//! last step, so the sequence never grows.

use glam::Vec2;

use super::{Fades, FrameSnapshot, GameSnapshot, Outbox, SceneKind};
use crate::all_of;
use crate::audio::SoundEffect;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TICKS_PER_SECOND};
use crate::error::StepError;
use crate::platform::{InputState, Key};
use crate::records::{RunRecord, SessionRecords};
use crate::renderer::text::{self, LOGO_LINES, PRESS_SPACE};
use crate::renderer::{Anchor, BackgroundUniforms, DrawCommand, DrawList, colors};
use crate::resources::{FontFace, Resources};
use crate::sequence::{AllStep, Sequence, StepResult, StepStatus, TimerStep};
use crate::sim::{GameState, TickInput};
use crate::tuning::Tuning;

/// Right edge of the gauge digits
const GAUGE_X: f32 = SCREEN_WIDTH as f32 - 288.0;
const GAUGE_UNITS: [&str; 2] = ["km/h", "m"];

/// Everything the game steps read and write
#[derive(Debug)]
pub struct GameContext {
    pub input: InputState,
    pub outbox: Outbox,
    pub state: GameState,
    pub records: SessionRecords,
    pub logo_alpha: f64,
    pub bg_alpha: f64,
    pub gauge_alpha: f64,
    /// Countdown digit, 0 when hidden
    pub countdown: u32,
    pub show_record: bool,
    pub show_press_space: bool,
    /// Copied from the state when a run ends
    pub top_velocity: i64,
    pub last_position: i64,
    pub new_best: bool,
}

impl GameContext {
    /// `tuning` must already be validated
    pub(crate) fn new(tuning: Tuning) -> Self {
        Self {
            input: InputState::default(),
            outbox: Outbox::default(),
            state: GameState::with_tuning(tuning),
            records: SessionRecords::new(),
            logo_alpha: 0.0,
            bg_alpha: 0.0,
            gauge_alpha: 0.0,
            countdown: 0,
            show_record: false,
            show_press_space: false,
            top_velocity: 0,
            last_position: 0,
            new_best: false,
        }
    }
}

pub struct GameScene {
    ctx: GameContext,
    sequence: Option<Sequence<GameContext>>,
}

impl GameScene {
    pub(crate) fn new(tuning: Tuning) -> Self {
        Self {
            ctx: GameContext::new(tuning),
            sequence: None,
        }
    }

    /// Run the sequence, then the simulation, for one tick
    pub fn update(&mut self, input: &InputState) -> Result<(), StepError> {
        self.ctx.input = *input;
        let ctx = &mut self.ctx;
        let sequence = self.sequence.get_or_insert_with(|| {
            ctx.outbox.play(SoundEffect::Bgm);
            build_sequence()
        });
        sequence.update(ctx)?;
        ctx.state.update(&TickInput::from_keys(&ctx.input));
        Ok(())
    }

    pub fn outbox(&mut self) -> &mut Outbox {
        &mut self.ctx.outbox
    }

    #[cfg(test)]
    pub(crate) fn context_mut(&mut self) -> &mut GameContext {
        &mut self.ctx
    }

    pub fn draw(&self, resources: &Resources, list: &mut DrawList) {
        let ctx = &self.ctx;
        let state = &ctx.state;

        if ctx.bg_alpha > 0.0 {
            list.push(DrawCommand::Background {
                shader: resources.bg_shader,
                uniforms: BackgroundUniforms::new(state.position(), state.velocity(), ctx.bg_alpha),
            });
        }

        if ctx.logo_alpha > 0.0 {
            let color = colors::white(ctx.logo_alpha);
            for (i, line) in LOGO_LINES.iter().enumerate() {
                let y = 144.0 + 144.0 * i as f32;
                list.text(*line, FontFace::Big, Anchor::CenterX { y }, color);
            }
        }

        if ctx.countdown > 0 {
            list.text(
                ctx.countdown.to_string(),
                FontFace::Big,
                Anchor::CenterX { y: 144.0 },
                colors::WHITE,
            );
        }

        if ctx.gauge_alpha > 0.0 {
            let color = colors::white(ctx.gauge_alpha);
            let values = [state.velocity(), state.position()];
            for (i, (unit, value)) in GAUGE_UNITS.iter().zip(values).enumerate() {
                let y = SCREEN_HEIGHT as f32 + 72.0 * i as f32 - 104.0;
                list.text(*unit, FontFace::Small, Anchor::At(Vec2::new(GAUGE_X + 24.0, y)), color);
                list.push(DrawCommand::Number {
                    text: text::milli(value),
                    origin: Vec2::new(GAUGE_X, y),
                    alpha: ctx.gauge_alpha as f32,
                });
            }
        }

        if state.counter() > 0 {
            list.push(DrawCommand::Number {
                text: text::seconds(state.counter()),
                origin: Vec2::new(480.0, 96.0),
                alpha: 1.0,
            });
        }

        if ctx.show_record {
            let mut lines = vec![
                "Record".to_string(),
                "Top Speed".to_string(),
                format!("{} km/h", text::milli(ctx.top_velocity)),
                "Distance".to_string(),
                format!("{} m", text::milli(ctx.last_position)),
            ];
            if ctx.new_best {
                lines.push("New Record".to_string());
            }
            for (i, line) in lines.into_iter().enumerate() {
                let y = 144.0 + 96.0 * i as f32;
                list.text(line, FontFace::Small, Anchor::CenterX { y }, colors::WHITE);
            }
        }

        let y = SCREEN_HEIGHT as f32 - 240.0;
        if ctx.show_press_space {
            list.text(PRESS_SPACE, FontFace::Small, Anchor::CenterX { y }, colors::PROMPT);
        } else if state.should_show_guide() {
            let guide = text::guide(state.pole());
            list.text(guide, FontFace::Small, Anchor::CenterX { y }, colors::PROMPT);
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let ctx = &self.ctx;
        let state = &ctx.state;
        let (top_velocity, last_position) = state.record();
        FrameSnapshot {
            scene: SceneKind::Game,
            fades: Fades {
                splash: 0.0,
                logo: ctx.logo_alpha,
                background: ctx.bg_alpha,
                gauge: ctx.gauge_alpha,
            },
            game: Some(GameSnapshot {
                mode: state.mode(),
                pole: state.pole(),
                position: state.position(),
                velocity: state.velocity(),
                counter: state.counter(),
                top_velocity,
                last_position,
                countdown: ctx.countdown,
                show_record: ctx.show_record,
                show_press_space: ctx.show_press_space,
            }),
        }
    }
}

fn build_sequence() -> Sequence<GameContext> {
    let mut seq = Sequence::new();
    seq.add_step(TimerStep::fade(
        TICKS_PER_SECOND / 2,
        |ctx: &mut GameContext, p| {
            ctx.bg_alpha = 0.0;
            ctx.logo_alpha = p.fraction();
        },
    ));
    seq.add_step(TimerStep::fade(
        TICKS_PER_SECOND,
        |ctx: &mut GameContext, p| {
            if p.is_first() {
                ctx.state.start_demo();
            }
            ctx.bg_alpha = p.fraction();
            ctx.gauge_alpha = p.fraction();
            ctx.logo_alpha = 1.0;
        },
    ));
    add_game_loop(&mut seq);
    seq
}

/// Queue one round, ending in a step that queues the next
fn add_game_loop(seq: &mut Sequence<GameContext>) {
    seq.add_step(wait_for_reset);
    let ready: AllStep<GameContext> = all_of![
        wait_until_startable,
        TimerStep::fade(TICKS_PER_SECOND / 2, |ctx: &mut GameContext, p| {
            ctx.bg_alpha = 1.0;
            ctx.logo_alpha = 1.0 - p.fraction();
        }),
    ];
    seq.add_step(ready);
    seq.add_step(TimerStep::fade(
        TICKS_PER_SECOND * 3,
        |ctx: &mut GameContext, p| {
            ctx.countdown = text::countdown_digit(p.remaining() + 1);
            ctx.logo_alpha = 0.0;
        },
    ));
    seq.add_step(start_run);
    seq.add_step(wait_for_run_end);
    seq.add_step(TimerStep::idle(TICKS_PER_SECOND));
    seq.add_step(dismiss_record);
    seq.add_step(TimerStep::fade(
        TICKS_PER_SECOND / 2,
        |ctx: &mut GameContext, p| ctx.logo_alpha = p.fraction(),
    ));
    seq.add_step(loop_back);
}

fn wait_for_reset(ctx: &mut GameContext, _: &mut Sequence<GameContext>) -> StepResult {
    ctx.show_press_space = true;
    if !ctx.input.just_pressed(Key::Space) {
        return Ok(StepStatus::Continue);
    }
    ctx.show_press_space = false;
    ctx.state.reset();
    Ok(StepStatus::Completed)
}

fn wait_until_startable(ctx: &mut GameContext, _: &mut Sequence<GameContext>) -> StepResult {
    if ctx.state.can_start() {
        Ok(StepStatus::Completed)
    } else {
        Ok(StepStatus::Continue)
    }
}

fn start_run(ctx: &mut GameContext, _: &mut Sequence<GameContext>) -> StepResult {
    ctx.countdown = 0;
    if !ctx.state.start() {
        return Err(StepError::failed(
            "start_run",
            format!("car not at the start line ({:?})", ctx.state.mode()),
        ));
    }
    ctx.outbox.play(SoundEffect::Start);
    Ok(StepStatus::Completed)
}

fn wait_for_run_end(ctx: &mut GameContext, _: &mut Sequence<GameContext>) -> StepResult {
    if ctx.state.is_playing() {
        return Ok(StepStatus::Continue);
    }
    let (top_velocity, last_position) = ctx.state.record();
    ctx.top_velocity = top_velocity;
    ctx.last_position = last_position;
    ctx.new_best = ctx.records.add(RunRecord {
        top_velocity,
        distance: last_position,
    }) == Some(1);
    ctx.show_record = true;
    ctx.state.start_demo();
    ctx.outbox.play(SoundEffect::End);
    Ok(StepStatus::Completed)
}

fn dismiss_record(ctx: &mut GameContext, _: &mut Sequence<GameContext>) -> StepResult {
    ctx.show_press_space = true;
    if !ctx.input.just_pressed(Key::Space) {
        return Ok(StepStatus::Continue);
    }
    ctx.show_press_space = false;
    ctx.show_record = false;
    Ok(StepStatus::Completed)
}

fn loop_back(_: &mut GameContext, seq: &mut Sequence<GameContext>) -> StepResult {
    add_game_loop(seq);
    Ok(StepStatus::CompletedAndAdvance)
}
