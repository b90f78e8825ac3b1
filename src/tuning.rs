//! Data-driven game balance
//!
//! Every gameplay constant lives here. Defaults reproduce the classic feel;
//! a JSON document may override any subset of fields.

use serde::{Deserialize, Serialize};

/// Gameplay constants, all in pixels / frames / milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Play field width (matches the host canvas)
    pub field_width: f32,
    /// Play field height (matches the host canvas)
    pub field_height: f32,

    /// Downward acceleration added to the fish velocity every frame
    pub gravity: f32,
    /// Velocity the fish is set to on flap (negative = up)
    pub flap_strength: f32,
    /// Fixed horizontal position of the fish
    pub fish_x: f32,
    pub fish_width: f32,
    pub fish_height: f32,
    /// Frames between idle fin flips
    pub flip_period: u32,

    /// Pixels a pipe moves left per frame
    pub pipe_speed: f32,
    /// Vertical opening between upper and lower pipe
    pub pipe_gap: f32,
    pub pipe_width: f32,
    /// Gap top is drawn from `[gap_top_min, gap_top_max)`
    pub gap_top_min: f32,
    pub gap_top_max: f32,
    pub pipe_interval_ms: f64,

    pub cloud_interval_ms: f64,
    /// Probability that a cloud spawner fire actually creates a cloud
    pub cloud_chance: f32,
    /// Clouds placed at session start
    pub initial_clouds: usize,

    /// Height of the water band at the bottom of the field
    pub water_height: f32,
    /// Wave phase advance per frame
    pub wave_step: f32,
    /// Wave phase wraps back to zero once it exceeds this
    pub wave_wrap: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: 400.0,
            field_height: 600.0,

            gravity: 0.25,
            flap_strength: -7.0,
            fish_x: 100.0,
            fish_width: 40.0,
            fish_height: 25.0,
            flip_period: 10,

            pipe_speed: 3.0,
            pipe_gap: 150.0,
            pipe_width: 60.0,
            gap_top_min: 100.0,
            gap_top_max: 400.0,
            pipe_interval_ms: 1800.0,

            cloud_interval_ms: 3000.0,
            cloud_chance: 0.5,
            initial_clouds: 3,

            water_height: 100.0,
            wave_step: 0.1,
            wave_wrap: 10.0,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Like [`Tuning::from_json`], but falls back to defaults on bad input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring invalid tuning JSON: {}", e);
                Self::default()
            }
        }
    }

    /// Parse overrides for a host-sized field. Field size fields in the JSON
    /// win over the host size; invalid JSON yields defaults.
    pub fn from_json_for_field(json: &str, width: f32, height: f32) -> Self {
        let mut value: serde_json::Value = match serde_json::from_str(json) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Ignoring invalid tuning JSON: {}", e);
                return Self::default().with_field_size(width, height);
            }
        };
        if let Some(obj) = value.as_object_mut() {
            obj.entry("field_width").or_insert(width.into());
            obj.entry("field_height").or_insert(height.into());
        }

        match serde_json::from_value(value) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring invalid tuning JSON: {}", e);
                Self::default().with_field_size(width, height)
            }
        }
    }

    /// Resize the play field, keeping everything else
    pub fn with_field_size(mut self, width: f32, height: f32) -> Self {
        self.field_width = width;
        self.field_height = height;
        self
    }

    /// Y coordinate of the water's top line
    pub fn water_line(&self) -> f32 {
        self.field_height - self.water_height
    }
}
