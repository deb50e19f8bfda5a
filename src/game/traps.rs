//! Trap controller
//!
//! Spawns a trap at the right edge every `spawn_interval_ms` of wall-clock
//! time, drops traps once they are fully past the left edge, and answers the
//! collision query for the frame.
//!
//! Spawn timing reads the clock instead of summing frame deltas, so the
//! cadence holds at any refresh rate. The only way to pause it is to stop
//! calling `update`.

use std::rc::Rc;
use crate::clock::Clock;
use crate::config::{GameConfig, TrapConfig};
use crate::sprite::Sprite;
use crate::surface::Surface;
use super::{Entity, Player, Trap};

#[derive(Debug, Clone)]
pub struct TrapsController {
    /// Spawn order, front = oldest
    traps: Vec<Trap>,
    config: TrapConfig,
    spawn_x: f32,
    spawn_y: f32,
    last_spawn_ms: f64,
    sprite: Rc<Sprite>,
    draw_sprites: bool,
}

impl TrapsController {
    /// Empty controller with no prior spawn. Against a clock that has been
    /// running longer than one interval the first update spawns at once.
    pub fn new(config: &GameConfig, sprite: Rc<Sprite>) -> Self {
        Self {
            traps: Vec::new(),
            config: config.trap.clone(),
            spawn_x: config.viewport.width,
            spawn_y: config.viewport.height - config.trap.bottom_offset,
            last_spawn_ms: 0.0,
            sprite,
            draw_sprites: config.render.draw_trap_sprites,
        }
    }

    #[cfg(test)]
    pub fn traps(&self) -> &[Trap] {
        &self.traps
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.traps.is_empty()
    }

    #[cfg(test)]
    pub fn last_spawn_ms(&self) -> f64 {
        self.last_spawn_ms
    }

    /// Place a trap directly, bypassing the spawn timer
    #[cfg(test)]
    pub fn push(&mut self, trap: Trap) {
        self.traps.push(trap);
    }

    /// Spawn if due, move every trap, then drop the ones fully past the left edge.
    /// Pruning last means no update ever returns with an off-screen trap held.
    pub fn update(&mut self, step: f32, clock: &dyn Clock) {
        let now = clock.now_ms();
        if now - self.last_spawn_ms > self.config.spawn_interval_ms {
            self.traps.push(Trap::new(
                &self.config,
                self.sprite.clone(),
                self.spawn_x,
                self.spawn_y,
                self.draw_sprites,
            ));
            self.last_spawn_ms = now;
        }

        for trap in &mut self.traps {
            trap.update(step);
        }

        self.traps.retain(|trap| !trap.is_off_screen());
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        for trap in &self.traps {
            trap.draw(surface);
        }
    }

    /// Does any trap strictly overlap the player?
    pub fn collide_with(&self, player: &Player) -> bool {
        let player_box = player.bounds();
        self.traps.iter().any(|trap| trap.bounds().overlaps(&player_box))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::surface::RecordingSurface;

    fn controller() -> TrapsController {
        TrapsController::new(&GameConfig::default(), Rc::new(Sprite::placeholder()))
    }

    fn trap_at(x: f32, y: f32) -> Trap {
        Trap::new(&TrapConfig::default(), Rc::new(Sprite::placeholder()), x, y, false)
    }

    #[test]
    fn test_no_spawn_before_interval() {
        let clock = ManualClock::new(0.0);
        let mut traps = controller();
        for t in [16.0, 1000.0, 2000.0] {
            clock.set(t);
            traps.update(1.0, &clock);
        }
        // Exactly 2000 ms is not "more than" the interval
        assert!(traps.is_empty());
    }

    #[test]
    fn test_spawn_after_interval() {
        let clock = ManualClock::new(0.0);
        let mut traps = controller();

        clock.set(2001.0);
        traps.update(1.0, &clock);
        assert_eq!(traps.traps().len(), 1);
        // Spawned at the right edge, then moved once in the same update
        let t = &traps.traps()[0];
        assert!((t.x - (800.0 - 5.0)).abs() < 0.001);
        assert!((t.y - 250.0).abs() < 0.001);
        assert_eq!(traps.last_spawn_ms(), 2001.0);

        clock.set(2002.0);
        traps.update(1.0, &clock);
        assert_eq!(traps.traps().len(), 1);
    }

    #[test]
    fn test_spawn_position_before_move() {
        let clock = ManualClock::new(0.0);
        let mut traps = controller();
        clock.set(2001.0);
        // Zero step: spawn position is observable unchanged
        traps.update(0.0, &clock);
        let t = &traps.traps()[0];
        assert_eq!((t.x, t.y), (800.0, 300.0 - 50.0));
    }

    #[test]
    fn test_first_update_spawns_on_a_late_clock() {
        // A controller built long after the clock started has no prior
        // spawn, so its first update spawns at once
        let clock = ManualClock::new(60_000.0);
        let mut traps = controller();
        traps.update(0.0, &clock);
        assert_eq!(traps.traps().len(), 1);
        assert_eq!(traps.last_spawn_ms(), 60_000.0);

        clock.advance(16.0);
        traps.update(0.0, &clock);
        assert_eq!(traps.traps().len(), 1);
    }

    #[test]
    fn test_spawn_cadence_follows_wall_clock() {
        let clock = ManualClock::new(0.0);
        let mut traps = controller();
        // 60 fps for 7 seconds
        for _ in 0..420 {
            clock.advance(1000.0 / 60.0);
            traps.update(0.0, &clock);
        }
        assert_eq!(traps.traps().len(), 3);
    }

    #[test]
    fn test_prune_invariant() {
        let clock = ManualClock::new(0.0);
        let mut traps = controller();
        for _ in 0..2000 {
            clock.advance(1000.0 / 60.0);
            traps.update(1.0, &clock);
            assert!(traps.traps().iter().all(|t| t.x + t.width > 0.0));
        }
        assert!(!traps.is_empty());
    }

    #[test]
    fn test_prune_removes_only_fully_off_screen() {
        let clock = ManualClock::new(0.0);
        let mut traps = controller();
        traps.push(trap_at(-20.0, 0.0)); // right edge at 0 -> gone
        traps.push(trap_at(-30.0, 0.0)); // gone
        traps.push(trap_at(-19.0, 0.0)); // right edge at 1 -> kept
        traps.push(trap_at(400.0, 0.0));
        traps.update(0.0, &clock);

        let xs: Vec<f32> = traps.traps().iter().map(|t| t.x).collect();
        assert_eq!(xs, vec![-19.0, 400.0]);
        assert!(traps.traps().iter().all(|t| t.x + t.width > 0.0));
    }

    #[test]
    fn test_trap_leaving_this_update_is_dropped() {
        let clock = ManualClock::new(0.0);
        let mut traps = controller();
        // Right edge at 3, one step of 5 takes it to -2
        traps.push(trap_at(-17.0, 0.0));
        traps.update(1.0, &clock);
        assert!(traps.is_empty());
    }

    #[test]
    fn test_keeps_spawn_order() {
        let clock = ManualClock::new(0.0);
        let mut traps = controller();
        for t in [2001.0, 4002.0, 6003.0] {
            clock.set(t);
            traps.update(1.0, &clock);
        }
        let xs: Vec<f32> = traps.traps().iter().map(|t| t.x).collect();
        assert_eq!(xs.len(), 3);
        assert!(xs[0] < xs[1] && xs[1] < xs[2]);
    }

    #[test]
    fn test_collide_with() {
        let config = GameConfig::default();
        let player = Player::new(&config);

        let mut traps = controller();
        assert!(!traps.collide_with(&player));

        traps.push(trap_at(20.0, player.y));
        assert!(traps.collide_with(&player));

        let mut traps = controller();
        traps.push(trap_at(100.0, player.y));
        assert!(!traps.collide_with(&player));
    }

    #[test]
    fn test_edge_contact_does_not_collide() {
        let config = GameConfig::default();
        let player = Player::new(&config);

        let mut traps = controller();
        // Left edge exactly on the player's right edge
        traps.push(trap_at(player.x + player.width, player.y));
        // Bottom edge exactly on the player's top edge
        traps.push(trap_at(player.x, player.y - 40.0));
        assert!(!traps.collide_with(&player));
    }

    #[test]
    fn test_spawned_trap_hits_grounded_player() {
        let config = GameConfig::default();
        let clock = ManualClock::new(0.0);
        let player = Player::new(&config);
        let mut traps = controller();

        clock.set(2001.0);
        traps.update(1.0, &clock);
        let mut frames = 0;
        while !traps.collide_with(&player) {
            traps.update(1.0, &clock);
            frames += 1;
            assert!(frames < 1000);
        }
        // Right edge of the player is at 54; trap starts at 795 after its first move
        assert_eq!(frames, ((795.0 - 54.0) / 5.0) as usize + 1);
    }

    #[test]
    fn test_draw_all() {
        let mut traps = controller();
        traps.push(trap_at(10.0, 0.0));
        traps.push(trap_at(50.0, 0.0));
        let mut surface = RecordingSurface::new();
        traps.draw(&mut surface);
        assert_eq!(surface.rects().len(), 2);
    }
}
