//! Simulation settings
//!
//! Loaded from a JSON file by the driver; every field has a default so a
//! partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::*;
use crate::error::{Error, Result};

/// Initial scene layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScenePreset {
    /// Randomly scattered disks plus one heavy disk
    #[default]
    Scatter,
    /// Two equal disks colliding head-on
    HeadOn,
    /// Three disks on a line, outer two closing on a slow middle one
    Trio,
    /// No disks
    Empty,
}

impl ScenePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenePreset::Scatter => "scatter",
            ScenePreset::HeadOn => "head_on",
            ScenePreset::Trio => "trio",
            ScenePreset::Empty => "empty",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "scatter" | "random" => Some(ScenePreset::Scatter),
            "head_on" | "headon" | "head-on" => Some(ScenePreset::HeadOn),
            "trio" => Some(ScenePreset::Trio),
            "empty" => Some(ScenePreset::Empty),
            _ => None,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Box ===
    pub width: f64,
    pub height: f64,

    // === Kernel ===
    /// Zero-time tolerance in seconds: roots in `[-time_tolerance, 0)` count as "now".
    ///
    /// Should be small compared with `min_radius / max_speed`, the shortest
    /// time in which a disk can cross a meaningful distance.
    pub time_tolerance: f64,
    /// Cap on resolved events per step
    pub max_events_per_step: u32,
    /// Multiplier applied to each frame's dt
    pub speed: f64,

    // === Scene ===
    pub scene: ScenePreset,
    /// Number of small disks in the scatter scene
    pub disk_count: usize,
    /// RNG seed for the scatter scene
    pub seed: u64,

    // === Driver ===
    pub frames: u32,
    pub frame_dt: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: BOX_WIDTH,
            height: BOX_HEIGHT,

            time_tolerance: TIME_TOLERANCE,
            max_events_per_step: MAX_EVENTS_PER_STEP,
            speed: 1.0,

            scene: ScenePreset::Scatter,
            disk_count: 100,
            seed: 0,

            frames: 600,
            frame_dt: FRAME_DT,
        }
    }
}

impl SimConfig {
    /// Defaults with a different scene
    pub fn from_preset(preset: ScenePreset) -> Self {
        Self {
            scene: preset,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Range-check every field
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "box must have positive finite extents, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.time_tolerance.is_finite() && self.time_tolerance >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "time_tolerance must be finite and >= 0, got {}",
                self.time_tolerance
            )));
        }
        if self.max_events_per_step == 0 {
            return Err(Error::InvalidConfig("max_events_per_step must be > 0".into()));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(Error::InvalidConfig(format!("speed must be > 0, got {}", self.speed)));
        }
        if !(self.frame_dt.is_finite() && self.frame_dt > 0.0) {
            return Err(Error::InvalidConfig(format!("frame_dt must be > 0, got {}", self.frame_dt)));
        }
        Ok(())
    }
}
