//! Linear Motor Car entry point
//!
//! Native builds have no window; the binary runs the game headless with an
//! autopilot at the controls and logs what happens. Pass an asset
//! directory as the first argument to verify the asset files.

use std::path::Path;

use linear_motor_car::audio::LogAudio;
use linear_motor_car::platform::Key;
use linear_motor_car::renderer::{DrawCommand, DrawList};
use linear_motor_car::resources::{DirSource, Resources};
use linear_motor_car::scene::{FrameSnapshot, SceneKind};
use linear_motor_car::sim::{Mode, Pole};
use linear_motor_car::{App, AppError, Settings, Tuning};

/// Simulated display refresh
const FRAME_DT: f64 = 1.0 / 144.0;
/// Give up after this much simulated time
const MAX_SECONDS: u32 = 180;
const RUNS: u32 = 3;

/// Presses keys the way a player would, one edge at a time
#[derive(Default)]
struct Autopilot {
    holding: bool,
    runs: u32,
    was_showing_record: bool,
}

impl Autopilot {
    fn keys(&mut self, snapshot: &FrameSnapshot) -> Vec<Key> {
        let wanted = match (snapshot.scene, snapshot.game) {
            (SceneKind::Splash, _) => None,
            (SceneKind::Title, _) => Some(Key::S),
            (SceneKind::Game, Some(game)) if game.show_press_space => Some(Key::Space),
            (SceneKind::Game, Some(game)) if game.mode == Mode::Play => match game.pole {
                Pole::N => Some(Key::S),
                Pole::S => Some(Key::N),
            },
            (SceneKind::Game, _) => None,
        };

        // release between presses so every press is a new edge
        self.holding = !self.holding && wanted.is_some();
        match wanted {
            Some(key) if self.holding => vec![key],
            _ => Vec::new(),
        }
    }

    fn observe(&mut self, snapshot: &FrameSnapshot) {
        let showing = snapshot.game.is_some_and(|g| g.show_record);
        if showing && !self.was_showing_record {
            self.runs += 1;
            if let Some(game) = snapshot.game {
                log::info!(
                    "autopilot run {}: top {} m/h, {} mm",
                    self.runs,
                    game.top_velocity,
                    game.last_position
                );
            }
        }
        self.was_showing_record = showing;
    }
}

/// One line per draw command, standing in for a real renderer
fn describe(list: &DrawList) -> String {
    list.commands()
        .iter()
        .map(|command| match command {
            DrawCommand::Image { image, alpha } => format!("image {} a={alpha:.2}", image.0),
            DrawCommand::Background { shader, uniforms } => {
                format!("shader {} ({} uniform bytes)", shader.0, uniforms.as_bytes().len())
            }
            DrawCommand::Text { text, face, .. } => format!("text {text:?} {}px", face.size()),
            DrawCommand::Number { text, .. } => format!("number {text}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn run() -> Result<(), AppError> {
    let settings = Settings::load(Path::new("settings.json"))?;
    let resources = match std::env::args().nth(1) {
        Some(dir) => Resources::load(&DirSource::new(dir))?,
        None => {
            log::warn!("No asset directory given, assets are not verified");
            Resources::builtin()
        }
    };
    log::debug!("assets verified: {}", resources.is_verified());

    let mut app = App::new(resources, Tuning::default(), Box::new(LogAudio::new(settings)))?;
    let mut pilot = Autopilot::default();

    let max_frames = (MAX_SECONDS as f64 / FRAME_DT) as u64;
    for _ in 0..max_frames {
        let snapshot = app.snapshot();
        pilot.observe(&snapshot);
        if pilot.runs >= RUNS {
            break;
        }
        let held = pilot.keys(&snapshot);
        app.frame(FRAME_DT, &held)?;
        app.draw();
    }

    log::info!("stopped after {} ticks, {} runs", app.ticks(), pilot.runs);
    log::debug!("last frame:\n{}", describe(app.draw()));
    log::info!("on screen: {}", app.draw().texts().collect::<Vec<_>>().join(" | "));
    match serde_json::to_string(&app.snapshot()) {
        Ok(json) => log::info!("final frame: {json}"),
        Err(e) => log::warn!("could not serialize final frame: {e}"),
    }
    Ok(())
}

fn main() -> Result<(), AppError> {
    env_logger::init();
    log::info!("Linear Motor Car (native, headless) starting...");
    run()
}
