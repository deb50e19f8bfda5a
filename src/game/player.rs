//! Player
//!
//! A box that stands on the ground and can jump. Physics is semi-implicit
//! Euler with position advanced *before* gravity, so the first step after a
//! jump moves by the full jump impulse.

use macroquad::prelude::{Color, BLACK};
use crate::config::{GameConfig, PlayerConfig};
use crate::surface::Surface;
use super::{Entity, Rect};

pub const PLAYER_COLOR: Color = BLACK;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity (positive = down)
    pub velocity: f32,
    pub gravity: f32,
    /// Velocity applied on jump (negative = up)
    pub jump_power: f32,
    /// Resting y; `y` never ends an update below this
    pub ground_y: f32,
    pub airborne: bool,
}

impl Player {
    /// Fresh player standing on the ground
    pub fn new(config: &GameConfig) -> Self {
        let PlayerConfig { x, width, height, gravity, jump_power, .. } = config.player;
        let ground_y = config.player_ground_y();
        Self {
            x,
            y: ground_y,
            width,
            height,
            velocity: 0.0,
            gravity,
            jump_power,
            ground_y,
            airborne: false,
        }
    }

    /// Start a jump. Ignored while already in the air.
    pub fn jump(&mut self) {
        if !self.airborne {
            self.velocity = self.jump_power;
            self.airborne = true;
        }
    }
}

impl Entity for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn update(&mut self, step: f32) {
        self.y += self.velocity * step;
        self.velocity += self.gravity * step;

        if self.y > self.ground_y {
            self.y = self.ground_y;
            self.airborne = false;
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.x, self.y, self.width, self.height, PLAYER_COLOR);
    }
}
