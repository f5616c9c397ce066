//! Game configuration resource.
//!
//! Manages simulation tunables loaded from an INI configuration file.
//! Provides defaults for safe startup and a loader that keeps defaults
//! for any missing key.
//!
//! # Configuration File Format
//!
//! ```ini
//! [board]
//! width = 28
//! height = 16
//!
//! [player]
//! acceleration_step = 0.25
//! max_velocity = 8.0
//! respawn_delay = 0.5
//! start_x = 1.0
//! start_y = 1.0
//!
//! [animation]
//! fps = 24
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_BOARD_WIDTH: u32 = 28;
const DEFAULT_BOARD_HEIGHT: u32 = 16;
const DEFAULT_ACCELERATION_STEP: f32 = 0.25;
const DEFAULT_MAX_VELOCITY: f32 = 8.0;
const DEFAULT_RESPAWN_DELAY: f32 = 0.5;
const DEFAULT_START_X: f32 = 1.0;
const DEFAULT_START_Y: f32 = 1.0;
const DEFAULT_ANIMATION_FPS: f32 = 24.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Simulation tunables.
///
/// The layout's spawn cell overrides `start_x`/`start_y` when present.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Board width in cells.
    pub board_width: u32,
    /// Board height in cells.
    pub board_height: u32,
    /// Velocity change per tick while a control is held.
    pub acceleration_step: f32,
    /// Per-axis velocity clamp in cells per second.
    pub max_velocity: f32,
    /// Seconds between death and respawn.
    pub respawn_delay: f32,
    /// Fallback spawn position.
    pub start_x: f32,
    pub start_y: f32,
    /// Animation playback rate in frames per second.
    pub animation_fps: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a configuration with safe default values.
    pub fn new() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            acceleration_step: DEFAULT_ACCELERATION_STEP,
            max_velocity: DEFAULT_MAX_VELOCITY,
            respawn_delay: DEFAULT_RESPAWN_DELAY,
            start_x: DEFAULT_START_X,
            start_y: DEFAULT_START_Y,
            animation_fps: DEFAULT_ANIMATION_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Milliseconds per animation frame.
    pub fn frame_duration_ms(&self) -> f64 {
        1000.0 / self.animation_fps as f64
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [board] section
        if let Some(width) = config.getuint("board", "width").ok().flatten() {
            self.board_width = width as u32;
        }
        if let Some(height) = config.getuint("board", "height").ok().flatten() {
            self.board_height = height as u32;
        }

        // [player] section
        if let Some(step) = config.getfloat("player", "acceleration_step").ok().flatten() {
            self.acceleration_step = step as f32;
        }
        if let Some(max) = config.getfloat("player", "max_velocity").ok().flatten() {
            self.max_velocity = max as f32;
        }
        if let Some(delay) = config.getfloat("player", "respawn_delay").ok().flatten() {
            self.respawn_delay = delay as f32;
        }
        if let Some(x) = config.getfloat("player", "start_x").ok().flatten() {
            self.start_x = x as f32;
        }
        if let Some(y) = config.getfloat("player", "start_y").ok().flatten() {
            self.start_y = y as f32;
        }

        // [animation] section
        if let Some(fps) = config.getfloat("animation", "fps").ok().flatten() {
            self.animation_fps = fps as f32;
        }

        info!(
            "Loaded config: {}x{} board, step={}, max_v={}, respawn={}s, fps={}",
            self.board_width,
            self.board_height,
            self.acceleration_step,
            self.max_velocity,
            self.respawn_delay,
            self.animation_fps
        );

        Ok(())
    }

    /// Sanity-check values that would corrupt the simulation.
    pub fn validate(&self) -> Result<(), String> {
        if self.board_width == 0 || self.board_height == 0 {
            return Err("board dimensions must be nonzero".to_string());
        }
        if self.acceleration_step <= 0.0 {
            return Err("acceleration_step must be positive".to_string());
        }
        if self.max_velocity <= 0.0 {
            return Err("max_velocity must be positive".to_string());
        }
        if self.animation_fps <= 0.0 {
            return Err("animation fps must be positive".to_string());
        }
        if self.respawn_delay < 0.0 {
            return Err("respawn_delay must not be negative".to_string());
        }
        Ok(())
    }
}
