//! Ground strip along the bottom of the viewport

use macroquad::prelude::Color;
use crate::config::GameConfig;
use crate::surface::Surface;
use super::{Entity, Rect};

/// CSS "sandybrown"
pub const GROUND_COLOR: Color = Color::new(244.0 / 255.0, 164.0 / 255.0, 96.0 / 255.0, 1.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Ground {
    rect: Rect,
}

impl Ground {
    pub fn new(config: &GameConfig) -> Self {
        let height = config.ground.height;
        Self {
            rect: Rect::new(0.0, config.viewport.height - height, config.ground.width, height),
        }
    }
}

impl Entity for Ground {
    fn bounds(&self) -> Rect {
        self.rect
    }

    /// Static for now; the strip is wide enough to scroll later
    fn update(&mut self, _step: f32) {}

    fn draw(&self, surface: &mut dyn Surface) {
        let r = self.rect;
        surface.fill_rect(r.x, r.y, r.w, r.h, GROUND_COLOR);
    }
}
