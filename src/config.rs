//! Game configuration
//!
//! Tunables live in a RON file (`assets/config/game.ron`). Every field has a
//! default, so a partial file only overrides what it names and a missing file
//! just means "play with the defaults".

use serde::{Deserialize, Serialize};
use crate::input::key_from_name;

/// Where the host looks for the config file
pub const CONFIG_PATH: &str = "assets/config/game.ron";

/// Frame interval the per-frame constants were tuned at (60 Hz)
pub const REFERENCE_FRAME_MS: f32 = 1000.0 / 60.0;

/// Upper bound on the delta-scaled step, so a stalled tab can't teleport entities
pub const MAX_STEP_SCALE: f32 = 3.0;

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// How per-frame physics constants relate to measured frame time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PhysicsTiming {
    /// Constants apply once per frame, dt is ignored.
    /// Jump arcs and trap spacing depend on the display refresh rate.
    #[default]
    FrameLocked,
    /// Constants are scaled by dt relative to a 60 Hz frame.
    DeltaScaled,
}

impl PhysicsTiming {
    /// Multiplier for velocity/gravity/speed given the frame delta in ms
    pub fn step_scale(&self, dt_ms: f32) -> f32 {
        match self {
            PhysicsTiming::FrameLocked => 1.0,
            PhysicsTiming::DeltaScaled => (dt_ms / REFERENCE_FRAME_MS).clamp(0.0, MAX_STEP_SCALE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { width: 800.0, height: 300.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Gap between the player's feet and the bottom of the viewport
    pub foot_clearance: f32,
    /// Added to vertical velocity every step (positive = down)
    pub gravity: f32,
    /// Velocity set on jump (negative = up)
    pub jump_power: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            x: 10.0,
            width: 44.0,
            height: 62.67,
            foot_clearance: 5.0,
            gravity: 0.5,
            jump_power: -10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    /// Wider than the viewport so it can scroll later without gaps
    pub width: f32,
    pub height: f32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self { width: 2400.0, height: 24.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrapConfig {
    pub width: f32,
    pub height: f32,
    /// Leftward movement per step
    pub speed: f32,
    /// Distance from the bottom of the viewport to the trap's top edge
    pub bottom_offset: f32,
    /// Wall-clock time between spawns
    pub spawn_interval_ms: f64,
}

impl Default for TrapConfig {
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 40.0,
            speed: 5.0,
            bottom_offset: 50.0,
            spawn_interval_ms: 2000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Composite the trap sprite instead of the flat green box
    pub draw_trap_sprites: bool,
    pub sprite_path: String,
    /// Optional TTF for HUD text; macroquad's built-in font otherwise
    pub font_path: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            draw_trap_sprites: false,
            sprite_path: "assets/images/cactus.png".to_string(),
            font_path: None,
        }
    }
}

/// Key names per logical action (DOM-style names, e.g. "Space", "Enter")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    pub jump: Vec<String>,
    pub restart: Vec<String>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            jump: vec!["Space".to_string()],
            restart: vec!["Enter".to_string()],
        }
    }
}

/// All game tunables
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub viewport: ViewportConfig,
    pub player: PlayerConfig,
    pub ground: GroundConfig,
    pub trap: TrapConfig,
    pub physics: PhysicsTiming,
    pub render: RenderConfig,
    pub keys: KeyConfig,
}

impl GameConfig {
    /// Parse and validate a RON document
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from disk (native only, WASM goes through `load_config`)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    #[cfg(test)]
    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .indentor("    ".to_string());
        ron::ser::to_string_pretty(self, pretty)
    }

    /// Reject values that would make the game degenerate
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("viewport.width", self.viewport.width),
            ("viewport.height", self.viewport.height),
            ("player.width", self.player.width),
            ("player.height", self.player.height),
            ("ground.width", self.ground.width),
            ("ground.height", self.ground.height),
            ("trap.width", self.trap.width),
            ("trap.height", self.trap.height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if !self.trap.spawn_interval_ms.is_finite() || self.trap.spawn_interval_ms <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "trap.spawn_interval_ms must be positive, got {}",
                self.trap.spawn_interval_ms
            )));
        }

        for (name, value) in [
            ("player.gravity", self.player.gravity),
            ("player.jump_power", self.player.jump_power),
            ("trap.speed", self.trap.speed),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!("{} is not finite", name)));
            }
        }

        if self.trap.speed < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "trap.speed must not be negative, got {}",
                self.trap.speed
            )));
        }

        if self.player.height + self.player.foot_clearance > self.viewport.height {
            return Err(ConfigError::ValidationError(format!(
                "player ({} + {} clearance) does not fit in viewport height {}",
                self.player.height, self.player.foot_clearance, self.viewport.height
            )));
        }

        // A key bound to both actions could only ever jump
        for name in &self.keys.restart {
            let Some(code) = key_from_name(name) else { continue };
            if let Some(jump) = self.keys.jump.iter().find(|j| key_from_name(j) == Some(code)) {
                return Err(ConfigError::ValidationError(format!(
                    "key \"{}\" is bound to jump (as \"{}\") and restart",
                    name, jump
                )));
            }
        }

        Ok(())
    }

    /// Resting y of the player's top edge
    pub fn player_ground_y(&self) -> f32 {
        self.viewport.height - self.player.height - self.player.foot_clearance
    }
}

/// Load config for the current platform, falling back to defaults on any error
pub async fn load_config(path: &str) -> GameConfig {
    #[cfg(not(target_arch = "wasm32"))]
    let result = GameConfig::load_from_file(std::path::Path::new(path));

    #[cfg(target_arch = "wasm32")]
    let result = match macroquad::prelude::load_string(path).await {
        Ok(contents) => GameConfig::from_ron_str(&contents),
        Err(e) => Err(ConfigError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            e.to_string(),
        ))),
    };

    match result {
        Ok(config) => {
            println!("[config] Loaded {}", path);
            config
        }
        Err(e) => {
            eprintln!("[config] {} ({}), using defaults", path, e);
            GameConfig::default()
        }
    }
}
