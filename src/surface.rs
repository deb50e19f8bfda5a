//! Drawing surface
//!
//! Game code draws in logical viewport units through the `Surface` trait.
//! `MacroquadSurface` maps that viewport onto the real window, scaling
//! uniformly and letterboxing whatever is left over.

use macroquad::prelude::*;
use crate::sprite::Sprite;

/// Canvas background inside the viewport
pub const CANVAS_COLOR: Color = WHITE;
/// Letterbox bars outside the viewport
pub const LETTERBOX_COLOR: Color = Color::new(0.12, 0.12, 0.12, 1.0);

/// 2D fill/text capability with a fixed logical size
pub trait Surface {
    /// Wipe the whole viewport
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    /// `y` is the text baseline, as with canvas `fillText`
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color);
    fn draw_sprite(&mut self, sprite: &Sprite, x: f32, y: f32, w: f32, h: f32);
}

/// Surface backed by macroquad's immediate-mode drawing
pub struct MacroquadSurface {
    width: f32,
    height: f32,
    font: Option<Font>,
    scale: f32,
    offset: Vec2,
}

impl MacroquadSurface {
    pub fn new(width: f32, height: f32, font: Option<Font>) -> Self {
        Self {
            width,
            height,
            font,
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }

    /// Recompute the viewport transform for the current window size.
    /// Call once per frame before drawing.
    pub fn begin_frame(&mut self) {
        let (scale, offset) = fit_viewport(self.width, self.height, screen_width(), screen_height());
        self.scale = scale;
        self.offset = offset;
    }

    fn to_screen(&self, x: f32, y: f32) -> Vec2 {
        vec2(self.offset.x + x * self.scale, self.offset.y + y * self.scale)
    }
}

/// Uniform scale and centring offset that fit a `w`x`h` viewport into a screen
pub fn fit_viewport(w: f32, h: f32, screen_w: f32, screen_h: f32) -> (f32, Vec2) {
    let scale = (screen_w / w).min(screen_h / h).max(0.0);
    let offset = vec2((screen_w - w * scale) * 0.5, (screen_h - h * scale) * 0.5);
    (scale, offset)
}

impl Surface for MacroquadSurface {
    fn clear(&mut self) {
        clear_background(LETTERBOX_COLOR);
        draw_rectangle(
            self.offset.x,
            self.offset.y,
            self.width * self.scale,
            self.height * self.scale,
            CANVAS_COLOR,
        );
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        // Clip to the viewport so the oversized ground doesn't spill into the letterbox
        let x0 = x.max(0.0);
        let y0 = y.max(0.0);
        let x1 = (x + w).min(self.width);
        let y1 = (y + h).min(self.height);
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let p = self.to_screen(x0, y0);
        draw_rectangle(p.x, p.y, (x1 - x0) * self.scale, (y1 - y0) * self.scale, color);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        let p = self.to_screen(x, y);
        draw_text_ex(
            text,
            p.x,
            p.y,
            TextParams {
                font: self.font.as_ref(),
                font_size: (font_size * self.scale).round().max(1.0) as u16,
                color,
                ..Default::default()
            },
        );
    }

    fn draw_sprite(&mut self, sprite: &Sprite, x: f32, y: f32, w: f32, h: f32) {
        let Some(texture) = sprite.texture() else {
            return;
        };
        let p = self.to_screen(x, y);
        draw_texture_ex(
            texture,
            p.x,
            p.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(w * self.scale, h * self.scale)),
                ..Default::default()
            },
        );
    }
}

/// Recorded draw call, for asserting on what a frame produced
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear,
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
    Text { text: String, x: f32, y: f32, font_size: f32, color: Color },
    Sprite { x: f32, y: f32, w: f32, h: f32 },
}

/// Surface that records instead of drawing; needs no GL context
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCmd>,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rects(&self) -> Vec<&DrawCmd> {
        self.commands.iter().filter(|c| matches!(c, DrawCmd::Rect { .. })).collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCmd::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCmd::Rect { x, y, w, h, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
    }

    fn draw_sprite(&mut self, _sprite: &Sprite, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCmd::Sprite { x, y, w, h });
    }
}
