//! Flappy Fish - a side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Simulation (fish physics, pipes, spawning, game loop)
//! - `canvas`: Fill-only 2D drawing abstraction the simulation paints through
//! - `renderer`: WebGPU pipeline that rasterizes recorded draw lists
//! - `platform`: Browser glue (DOM overlays)
//! - `tuning`: Data-driven game balance
//! - `ui`: Overlay collaborator trait

pub mod canvas;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::Tuning;

/// Host loop constants
pub mod consts {
    /// Fixed simulation step (the gameplay constants are tuned per 60 Hz frame)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Maximum steps per displayed frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Elapsed time is clamped to this after a stall (tab switch, debugger)
    pub const MAX_FRAME_DT_MS: f64 = 100.0;
}
