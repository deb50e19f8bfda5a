//! Trap artwork
//!
//! The sprite is loaded once and shared read-only by every trap through an
//! `Rc`. Loading is fire-and-forget: failures are logged and a placeholder
//! without a texture takes its place, which draws as the flat-colour box.

use image::RgbaImage;
use macroquad::prelude::{FilterMode, Texture2D};
use std::rc::Rc;

/// Largest side we accept for the trap image
pub const MAX_SPRITE_SIZE: u32 = 1024;

#[derive(Debug)]
pub enum SpriteError {
    IoError(String),
    DecodeError(image::ImageError),
    /// Zero-sized or oversized image
    BadSize { width: u32, height: u32 },
}

impl From<image::ImageError> for SpriteError {
    fn from(e: image::ImageError) -> Self {
        SpriteError::DecodeError(e)
    }
}

impl std::fmt::Display for SpriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpriteError::IoError(e) => write!(f, "IO error: {}", e),
            SpriteError::DecodeError(e) => write!(f, "Decode error: {}", e),
            SpriteError::BadSize { width, height } => {
                write!(f, "Bad sprite size {}x{} (max {})", width, height, MAX_SPRITE_SIZE)
            }
        }
    }
}

impl std::error::Error for SpriteError {}

/// Opaque handle to trap artwork
pub struct Sprite {
    width: u32,
    height: u32,
    texture: Option<Texture2D>,
}

impl std::fmt::Debug for Sprite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sprite")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("uploaded", &self.texture.is_some())
            .finish()
    }
}

impl Sprite {
    /// Stand-in used when the image could not be loaded (and in tests)
    pub fn placeholder() -> Self {
        Self { width: 0, height: 0, texture: None }
    }

    /// Upload decoded pixels to the GPU. Needs a live macroquad context.
    pub fn upload(image: &RgbaImage) -> Self {
        let texture = Texture2D::from_rgba8(image.width() as u16, image.height() as u16, image.as_raw());
        texture.set_filter(FilterMode::Nearest);
        Self {
            width: image.width(),
            height: image.height(),
            texture: Some(texture),
        }
    }

    pub fn texture(&self) -> Option<&Texture2D> {
        self.texture.as_ref()
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Decode image bytes (PNG/JPEG/BMP via `image`) into RGBA8
pub fn decode_sprite(bytes: &[u8]) -> Result<RgbaImage, SpriteError> {
    let image = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || width > MAX_SPRITE_SIZE || height > MAX_SPRITE_SIZE {
        return Err(SpriteError::BadSize { width, height });
    }
    Ok(image)
}

/// Load and upload the trap sprite, falling back to the placeholder
pub async fn load_sprite(path: &str) -> Rc<Sprite> {
    let result = match macroquad::prelude::load_file(path).await {
        Ok(bytes) => decode_sprite(&bytes),
        Err(e) => Err(SpriteError::IoError(e.to_string())),
    };

    match result {
        Ok(image) => {
            let sprite = Sprite::upload(&image);
            let (width, height) = sprite.size();
            println!("[sprite] Loaded {} ({}x{})", path, width, height);
            Rc::new(sprite)
        }
        Err(e) => {
            eprintln!("[sprite] {}: {}, traps will draw as boxes", path, e);
            Rc::new(Sprite::placeholder())
        }
    }
}
