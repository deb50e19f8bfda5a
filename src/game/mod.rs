//! Game Module
//!
//! One run of the game: a player that jumps, a static ground strip, and a
//! trap controller that spawns traps from the right edge and scrolls them
//! left. `Game` owns all of it and is driven one frame at a time by the host.
//!
//! Entities are plain structs, no hierarchy. They share a small `Entity`
//! shape (bounds, update, draw) so the frame code reads uniformly.

pub mod rect;
pub mod player;
pub mod ground;
pub mod trap;
pub mod traps;
pub mod controller;

pub use rect::Rect;
pub use player::Player;
pub use ground::Ground;
pub use trap::Trap;
pub use traps::TrapsController;
pub use controller::{FrameOutcome, Game};

use crate::surface::Surface;

/// Shared shape of everything drawn in the world
pub trait Entity {
    /// Current axis-aligned bounding box
    fn bounds(&self) -> Rect;

    /// Advance one frame. `step` is the physics step scale (1.0 when frame-locked).
    fn update(&mut self, step: f32);

    fn draw(&self, surface: &mut dyn Surface);
}
