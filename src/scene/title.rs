//! Title screen: logo and a prompt, S or N starts the game

use super::{Fades, FrameSnapshot, Outbox, SceneKind};
use crate::consts::{SCREEN_HEIGHT, TICKS_PER_SECOND};
use crate::error::StepError;
use crate::platform::{InputState, Key};
use crate::renderer::text::{LOGO_LINES, TITLE_PROMPT};
use crate::renderer::{Anchor, DrawList, colors};
use crate::resources::FontFace;
use crate::sequence::{Sequence, StepResult, StepStatus, TimerStep};

#[derive(Debug, Default)]
pub struct TitleContext {
    pub input: InputState,
    pub outbox: Outbox,
    pub logo_alpha: f64,
    pub show_prompt: bool,
}

#[derive(Default)]
pub struct TitleScene {
    ctx: TitleContext,
    sequence: Option<Sequence<TitleContext>>,
}

impl TitleScene {
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

    pub fn draw(&self, list: &mut DrawList) {
        if self.ctx.logo_alpha > 0.0 {
            let color = colors::white(self.ctx.logo_alpha);
            for (i, line) in LOGO_LINES.iter().enumerate() {
                let y = 144.0 + 144.0 * i as f32;
                list.text(*line, FontFace::Big, Anchor::CenterX { y }, color);
            }
        }
        if self.ctx.show_prompt {
            let y = SCREEN_HEIGHT as f32 - 240.0;
            list.text(TITLE_PROMPT, FontFace::Small, Anchor::CenterX { y }, colors::PROMPT);
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            scene: SceneKind::Title,
            fades: Fades {
                logo: self.ctx.logo_alpha,
                ..Fades::default()
            },
            game: None,
        }
    }
}

fn build_sequence() -> Sequence<TitleContext> {
    let mut seq = Sequence::new();
    seq.add_step(TimerStep::fade(
        TICKS_PER_SECOND / 2,
        |ctx: &mut TitleContext, p| ctx.logo_alpha = p.fraction(),
    ));
    seq.add_step(wait_for_start);
    seq
}

fn wait_for_start(ctx: &mut TitleContext, _: &mut Sequence<TitleContext>) -> StepResult {
    ctx.show_prompt = true;
    if ctx.input.any_just_pressed(&[Key::S, Key::N]) {
        ctx.outbox.switch_to_game();
        return Ok(StepStatus::Completed);
    }
    Ok(StepStatus::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneRequest;

    fn faded_in() -> TitleScene {
        let mut scene = TitleScene::new();
        for _ in 0..=TICKS_PER_SECOND / 2 {
            scene.update(&InputState::default()).unwrap();
        }
        scene
    }

    #[test]
    fn test_prompt_after_fade() {
        let scene = faded_in();
        assert_eq!(scene.ctx.logo_alpha, 1.0);
        let mut list = DrawList::new();
        scene.draw(&mut list);
        let texts: Vec<_> = list.texts().collect();
        assert_eq!(texts, ["Manual", "Linear", "Motor", "Car", TITLE_PROMPT]);
    }

    #[test]
    fn test_space_does_not_start() {
        let mut scene = faded_in();
        scene.update(&InputState::with_pressed(&[Key::Space])).unwrap();
        assert_eq!(scene.outbox().take_switch(), None);
    }

    #[test]
    fn test_n_requests_game() {
        let mut scene = faded_in();
        scene.update(&InputState::with_pressed(&[Key::N])).unwrap();
        assert_eq!(scene.outbox().take_switch(), Some(SceneRequest::SwitchToGame));
    }
}
