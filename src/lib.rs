//! Manual Linear Motor Car - flip the pole in time to push the car down the rail
//!
//! Core modules:
//! - `sequence`: Cooperative per-tick step scheduler (timers, joins)
//! - `sim`: Deterministic gameplay state machine
//! - `scene`: Splash, title and game scenes and the controller switching them
//! - `renderer`: Draw list handed to the host renderer
//! - `platform`: Key edges and the fixed timestep clock
//! - `tuning`: Gameplay balance

pub mod app;
pub mod audio;
pub mod error;
pub mod platform;
pub mod records;
pub mod renderer;
pub mod resources;
pub mod scene;
pub mod sequence;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use app::App;
pub use error::{AppError, StepError};
pub use records::SessionRecords;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed update rate
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Logical screen size
    pub const SCREEN_WIDTH: u32 = 1920;
    pub const SCREEN_HEIGHT: u32 = 1080;
}
