//! Simulation module
//!
//! All gameplay logic lives here. Rules for this module:
//! - One call to `tick` = one frame, constants are per frame
//! - Seeded RNG only
//! - Entities draw through the `Canvas` trait, never a GPU or DOM type

pub mod autopilot;
pub mod cloud;
pub mod collision;
pub mod fish;
pub mod pipe;
pub mod random;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod water;

pub use cloud::Cloud;
pub use collision::Rect;
pub use fish::Fish;
pub use pipe::Pipe;
pub use spawner::Spawner;
pub use state::{GamePhase, GameState, Session, Trigger};
pub use tick::{FrameOutcome, tick};
pub use water::WaterSurface;
