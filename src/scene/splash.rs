//! Splash screen: fade the studio image in, hold, fade out, go to title

use super::{Fades, FrameSnapshot, Outbox, SceneKind};
use crate::consts::TICKS_PER_SECOND;
use crate::error::StepError;
use crate::platform::{InputState, Key};
use crate::renderer::{DrawCommand, DrawList};
use crate::resources::Resources;
use crate::sequence::{Sequence, StepResult, StepStatus, TimerStep};

#[derive(Debug, Default)]
pub struct SplashContext {
    pub input: InputState,
    pub outbox: Outbox,
    pub alpha: f64,
}

#[derive(Default)]
pub struct SplashScene {
    ctx: SplashContext,
    sequence: Option<Sequence<SplashContext>>,
}

impl SplashScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, input: &InputState) -> Result<(), StepError> {
        self.ctx.input = *input;
        self.sequence
            .get_or_insert_with(build_sequence)
            .update(&mut self.ctx)
    }

    pub fn outbox(&mut self) -> &mut Outbox {
        &mut self.ctx.outbox
    }

    pub fn draw(&self, resources: &Resources, list: &mut DrawList) {
        if self.sequence.is_none() {
            return;
        }
        list.push(DrawCommand::Image {
            image: resources.splash,
            alpha: self.ctx.alpha as f32,
        });
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            scene: SceneKind::Splash,
            fades: Fades {
                splash: self.ctx.alpha,
                ..Fades::default()
            },
            game: None,
        }
    }
}

fn build_sequence() -> Sequence<SplashContext> {
    let mut seq = Sequence::new();
    seq.add_step(TimerStep::fade(
        TICKS_PER_SECOND / 2,
        |ctx: &mut SplashContext, p| ctx.alpha = p.fraction(),
    ));
    // any game key skips the hold
    seq.add_step(TimerStep::new(
        TICKS_PER_SECOND * 2,
        |ctx: &mut SplashContext, _| {
            ctx.alpha = 1.0;
            if ctx.input.any_just_pressed(&Key::ALL) {
                return Ok(StepStatus::Completed);
            }
            Ok(StepStatus::Continue)
        },
    ));
    seq.add_step(TimerStep::fade(
        TICKS_PER_SECOND / 2,
        |ctx: &mut SplashContext, p| ctx.alpha = 1.0 - p.fraction(),
    ));
    seq.add_step(
        |ctx: &mut SplashContext, _: &mut Sequence<SplashContext>| -> StepResult {
            ctx.alpha = 0.0;
            ctx.outbox.switch_to_title();
            Ok(StepStatus::CompletedAndAdvance)
        },
    );
    seq
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneRequest;

    fn tick(scene: &mut SplashScene, input: InputState) {
        scene.update(&input).unwrap();
    }

    #[test]
    fn test_fade_in() {
        let mut scene = SplashScene::new();
        tick(&mut scene, InputState::default());
        assert!((scene.ctx.alpha - 1.0 / 30.0).abs() < 1e-9);
        for _ in 1..TICKS_PER_SECOND / 2 {
            tick(&mut scene, InputState::default());
        }
        assert_eq!(scene.ctx.alpha, 1.0);
    }

    #[test]
    fn test_key_skips_hold() {
        let mut scene = SplashScene::new();
        for _ in 0..TICKS_PER_SECOND / 2 + 3 {
            tick(&mut scene, InputState::default());
        }
        tick(&mut scene, InputState::with_pressed(&[Key::Space]));
        // the next tick already fades out
        tick(&mut scene, InputState::default());
        assert!(scene.ctx.alpha < 1.0);
        assert_eq!(scene.outbox().take_switch(), None);
    }

    #[test]
    fn test_requests_title_once_faded() {
        let mut scene = SplashScene::new();
        let total = TICKS_PER_SECOND / 2 + TICKS_PER_SECOND * 2 + TICKS_PER_SECOND / 2;
        for _ in 0..total {
            tick(&mut scene, InputState::default());
        }
        assert_eq!(scene.outbox().take_switch(), None);
        // the final step runs on the tick after the fade out
        tick(&mut scene, InputState::default());
        assert_eq!(scene.outbox().take_switch(), Some(SceneRequest::SwitchToTitle));
        assert_eq!(scene.ctx.alpha, 0.0);
    }

    #[test]
    fn test_nothing_drawn_before_first_update() {
        let scene = SplashScene::new();
        let mut list = DrawList::new();
        scene.draw(&Resources::builtin(), &mut list);
        assert!(list.is_empty());
    }
}
