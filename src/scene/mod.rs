//! Scene selection
//!
//! Exactly one scene is active. Scenes never switch themselves: their
//! steps post a [`SceneRequest`] into the scene's [`Outbox`], the
//! controller checks it against the transition table after the tick and
//! applies it at the start of the next one.

pub mod game;
pub mod splash;
pub mod title;

pub use game::{GameContext, GameScene};
pub use splash::{SplashContext, SplashScene};
pub use title::{TitleContext, TitleScene};

use serde::Serialize;

use crate::audio::{AudioSink, SoundEffect};
use crate::error::{StepError, TuningError};
use crate::platform::InputState;
use crate::renderer::DrawList;
use crate::resources::Resources;
use crate::sim::{Mode, Pole};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SceneKind {
    Splash,
    Title,
    Game,
}

/// Scene switch asked for by a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    SwitchToTitle,
    SwitchToGame,
}

/// Allowed scene edges; everything else is rejected
pub fn transition(from: SceneKind, request: SceneRequest) -> Option<SceneKind> {
    match (from, request) {
        (SceneKind::Splash, SceneRequest::SwitchToTitle) => Some(SceneKind::Title),
        (SceneKind::Title, SceneRequest::SwitchToGame) => Some(SceneKind::Game),
        _ => None,
    }
}

/// Messages steps post during a tick
#[derive(Debug, Default)]
pub struct Outbox {
    switch: Option<SceneRequest>,
    sounds: Vec<SoundEffect>,
}

impl Outbox {
    pub fn switch_to_title(&mut self) {
        self.request(SceneRequest::SwitchToTitle);
    }

    pub fn switch_to_game(&mut self) {
        self.request(SceneRequest::SwitchToGame);
    }

    /// First request of a tick wins
    fn request(&mut self, request: SceneRequest) {
        match self.switch {
            None => self.switch = Some(request),
            Some(first) => log::warn!("ignoring {:?}, {:?} already requested", request, first),
        }
    }

    /// Queue a one-shot audio cue
    pub fn play(&mut self, effect: SoundEffect) {
        self.sounds.push(effect);
    }

    pub fn take_switch(&mut self) -> Option<SceneRequest> {
        self.switch.take()
    }

    pub fn drain_sounds(&mut self) -> impl Iterator<Item = SoundEffect> + '_ {
        self.sounds.drain(..)
    }
}

/// Fade levels of every layer, `[0, 1]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Fades {
    pub splash: f64,
    pub logo: f64,
    pub background: f64,
    pub gauge: f64,
}

/// Gameplay values exposed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub mode: Mode,
    pub pole: Pole,
    pub position: i64,
    pub velocity: i64,
    pub counter: u32,
    pub top_velocity: i64,
    pub last_position: i64,
    pub countdown: u32,
    pub show_record: bool,
    pub show_press_space: bool,
}

/// Read-only view of the current tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub scene: SceneKind,
    pub fades: Fades,
    pub game: Option<GameSnapshot>,
}

/// The closed set of scenes
pub enum Scene {
    Splash(SplashScene),
    Title(TitleScene),
    Game(Box<GameScene>),
}

impl Scene {
    /// `tuning` must already be validated
    pub(crate) fn new(kind: SceneKind, tuning: Tuning) -> Self {
        match kind {
            SceneKind::Splash => Scene::Splash(SplashScene::new()),
            SceneKind::Title => Scene::Title(TitleScene::new()),
            SceneKind::Game => Scene::Game(Box::new(GameScene::new(tuning))),
        }
    }

    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::Splash(_) => SceneKind::Splash,
            Scene::Title(_) => SceneKind::Title,
            Scene::Game(_) => SceneKind::Game,
        }
    }

    fn update(&mut self, input: &InputState) -> Result<(), StepError> {
        match self {
            Scene::Splash(s) => s.update(input),
            Scene::Title(s) => s.update(input),
            Scene::Game(s) => s.update(input),
        }
    }

    fn outbox(&mut self) -> &mut Outbox {
        match self {
            Scene::Splash(s) => s.outbox(),
            Scene::Title(s) => s.outbox(),
            Scene::Game(s) => s.outbox(),
        }
    }

    pub fn draw(&self, resources: &Resources, list: &mut DrawList) {
        match self {
            Scene::Splash(s) => s.draw(resources, list),
            Scene::Title(s) => s.draw(list),
            Scene::Game(s) => s.draw(resources, list),
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        match self {
            Scene::Splash(s) => s.snapshot(),
            Scene::Title(s) => s.snapshot(),
            Scene::Game(s) => s.snapshot(),
        }
    }
}

/// Owns the active scene and applies latched switches at tick boundaries
pub struct SceneController {
    scene: Scene,
    pending: Option<SceneKind>,
    tuning: Tuning,
    ticks: u64,
}

impl SceneController {
    pub fn new(tuning: Tuning) -> Result<Self, TuningError> {
        Self::starting_at(SceneKind::Splash, tuning)
    }

    pub fn starting_at(kind: SceneKind, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            scene: Scene::new(kind, tuning),
            pending: None,
            tuning,
            ticks: 0,
        })
    }

    /// Run one tick of the active scene
    pub fn update(
        &mut self,
        input: &InputState,
        audio: &mut dyn AudioSink,
    ) -> Result<(), StepError> {
        if let Some(next) = self.pending.take() {
            log::info!("scene: {:?} -> {:?} at tick {}", self.scene.kind(), next, self.ticks);
            self.scene = Scene::new(next, self.tuning);
        }
        self.ticks += 1;

        self.scene.update(input)?;

        let from = self.scene.kind();
        let outbox = self.scene.outbox();
        for effect in outbox.drain_sounds() {
            audio.play(effect);
        }
        if let Some(request) = outbox.take_switch() {
            match transition(from, request) {
                Some(next) => self.pending = Some(next),
                None => log::warn!("rejected {:?} from {:?}", request, from),
            }
        }
        Ok(())
    }

    pub fn draw(&self, resources: &Resources, list: &mut DrawList) {
        self.scene.draw(resources, list);
    }

    pub fn kind(&self) -> SceneKind {
        self.scene.kind()
    }

    #[cfg(test)]
    pub(crate) fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Switch that will be applied at the start of the next tick
    #[cfg(test)]
    pub(crate) fn pending(&self) -> Option<SceneKind> {
        self.pending
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.scene.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::RecordingAudio;
    use crate::consts::TICKS_PER_SECOND;
    use crate::platform::Key;

    #[test]
    fn test_transition_table() {
        use SceneKind::*;
        use SceneRequest::*;
        assert_eq!(transition(Splash, SwitchToTitle), Some(Title));
        assert_eq!(transition(Splash, SwitchToGame), None);
        assert_eq!(transition(Title, SwitchToGame), Some(Game));
        assert_eq!(transition(Title, SwitchToTitle), None);
        assert_eq!(transition(Game, SwitchToTitle), None);
        assert_eq!(transition(Game, SwitchToGame), None);
    }

    #[test]
    fn test_rejects_invalid_tuning() {
        let tuning = Tuning {
            play_ticks: 0,
            ..Tuning::default()
        };
        assert!(matches!(
            SceneController::new(tuning),
            Err(TuningError::Zero("play_ticks"))
        ));
    }

    #[test]
    fn test_first_request_wins() {
        let mut outbox = Outbox::default();
        outbox.switch_to_title();
        outbox.switch_to_game();
        assert_eq!(outbox.take_switch(), Some(SceneRequest::SwitchToTitle));
        assert_eq!(outbox.take_switch(), None);
    }

    #[test]
    fn test_switch_applies_on_next_tick() {
        let mut controller =
            SceneController::starting_at(SceneKind::Title, Tuning::default()).unwrap();
        let mut audio = RecordingAudio::default();
        let idle = InputState::default();

        // let the title fade in
        for _ in 0..TICKS_PER_SECOND {
            controller.update(&idle, &mut audio).unwrap();
        }
        assert_eq!(controller.kind(), SceneKind::Title);

        controller
            .update(&InputState::with_pressed(&[Key::S]), &mut audio)
            .unwrap();
        // requested, but the title finishes its tick
        assert_eq!(controller.kind(), SceneKind::Title);
        assert_eq!(controller.pending(), Some(SceneKind::Game));

        controller.update(&idle, &mut audio).unwrap();
        assert_eq!(controller.kind(), SceneKind::Game);
        assert_eq!(controller.pending(), None);
        assert_eq!(audio.played, [SoundEffect::Bgm]);
    }

    #[test]
    fn test_splash_flows_to_title() {
        let mut controller = SceneController::new(Tuning::default()).unwrap();
        let mut audio = RecordingAudio::default();
        let idle = InputState::default();

        let mut ticks = 0;
        while controller.kind() == SceneKind::Splash {
            controller.update(&idle, &mut audio).unwrap();
            ticks += 1;
            assert!(ticks < 10 * TICKS_PER_SECOND, "splash never ended");
        }
        assert_eq!(controller.kind(), SceneKind::Title);
        // three timers, the request step, then the switch itself
        assert_eq!(ticks, TICKS_PER_SECOND / 2 + TICKS_PER_SECOND * 2 + TICKS_PER_SECOND / 2 + 2);
    }
}
