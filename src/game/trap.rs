//! Trap (obstacle)
//!
//! Scrolls left at a constant speed. Holds the shared sprite handle, but only
//! composites it when sprite drawing is switched on; the default is a flat
//! green box.

use std::rc::Rc;
use macroquad::prelude::{Color, GREEN};
use crate::config::TrapConfig;
use crate::sprite::Sprite;
use crate::surface::Surface;
use super::{Entity, Rect};

pub const TRAP_COLOR: Color = GREEN;

#[derive(Debug, Clone)]
pub struct Trap {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Leftward movement per step
    pub speed: f32,
    sprite: Rc<Sprite>,
    draw_sprite: bool,
}

impl Trap {
    pub fn new(config: &TrapConfig, sprite: Rc<Sprite>, x: f32, y: f32, draw_sprite: bool) -> Self {
        Self {
            x,
            y,
            width: config.width,
            height: config.height,
            speed: config.speed,
            sprite,
            draw_sprite,
        }
    }

    /// Entirely past the left edge of the viewport
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width <= 0.0
    }

    #[cfg(test)]
    pub fn sprite(&self) -> &Rc<Sprite> {
        &self.sprite
    }
}

impl Entity for Trap {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn update(&mut self, step: f32) {
        self.x -= self.speed * step;
    }

    fn draw(&self, surface: &mut dyn Surface) {
        if self.draw_sprite && self.sprite.texture().is_some() {
            surface.draw_sprite(&self.sprite, self.x, self.y, self.width, self.height);
        } else {
            surface.fill_rect(self.x, self.y, self.width, self.height, TRAP_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCmd, RecordingSurface};

    fn trap(x: f32) -> Trap {
        Trap::new(&TrapConfig::default(), Rc::new(Sprite::placeholder()), x, 250.0, false)
    }

    #[test]
    fn test_moves_left() {
        let mut t = trap(800.0);
        t.update(1.0);
        assert!((t.x - 795.0).abs() < 0.001);
        t.update(2.0);
        assert!((t.x - 785.0).abs() < 0.001);
        assert!((t.y - 250.0).abs() < 0.001);
    }

    #[test]
    fn test_off_screen_boundary() {
        assert!(!trap(-19.0).is_off_screen());
        assert!(trap(-20.0).is_off_screen());
        assert!(trap(-25.0).is_off_screen());
    }

    #[test]
    fn test_draw_falls_back_to_box() {
        // Even with sprite drawing on, a placeholder has nothing to composite
        let t = Trap::new(&TrapConfig::default(), Rc::new(Sprite::placeholder()), 30.0, 250.0, true);
        let mut surface = RecordingSurface::new();
        t.draw(&mut surface);
        assert_eq!(
            surface.commands,
            vec![DrawCmd::Rect { x: 30.0, y: 250.0, w: 20.0, h: 40.0, color: TRAP_COLOR }]
        );
    }

    #[test]
    fn test_traps_share_sprite() {
        let sprite = Rc::new(Sprite::placeholder());
        let a = Trap::new(&TrapConfig::default(), sprite.clone(), 0.0, 0.0, false);
        let b = Trap::new(&TrapConfig::default(), sprite.clone(), 10.0, 0.0, false);
        assert!(Rc::ptr_eq(a.sprite(), b.sprite()));
        assert_eq!(Rc::strong_count(&sprite), 3);
    }
}
