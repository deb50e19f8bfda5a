//! Game controller
//!
//! Owns one run: the player, the ground, the trap controller and the run
//! state (score, phase, last frame time). The host calls `frame` once per
//! scheduled frame while the last `FrameOutcome` it got back was `Continue`,
//! and `present` to repaint the frozen scene otherwise. Input arrives as
//! `Action`s through `handle_action`, on the same thread, between frames.
//!
//! Frame order is fixed: ground, player, traps (update then draw each), then
//! the collision check that decides between scoring and game over.

use std::rc::Rc;
use macroquad::prelude::{Color, BLACK, DARKGRAY, RED};
use crate::clock::Clock;
use crate::config::GameConfig;
use crate::input::Action;
use crate::sprite::Sprite;
use crate::surface::Surface;
use super::{Entity, Ground, Player, TrapsController};

pub const GAME_OVER_TEXT: &str = "Game Over!";
const GAME_OVER_POS: (f32, f32) = (150.0, 100.0);
const GAME_OVER_SIZE: f32 = 30.0;
const GAME_OVER_COLOR: Color = RED;
const HINT_SIZE: f32 = 12.0;
const HINT_COLOR: Color = DARKGRAY;
const SCORE_POS: (f32, f32) = (10.0, 20.0);
const SCORE_SIZE: f32 = 16.0;
const SCORE_COLOR: Color = BLACK;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    GameOver,
}

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Schedule another frame
    Continue,
    /// The run ended; stop scheduling until restart
    Stop,
}

/// Per-run counters, reset on restart
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunState {
    pub score: u64,
    pub phase: Phase,
    /// Timestamp of the previous frame (0 at the start of a run)
    pub last_frame_ms: f64,
}

pub struct Game {
    config: GameConfig,
    sprite: Rc<Sprite>,
    clock: Box<dyn Clock>,
    run: RunState,
    player: Player,
    ground: Ground,
    traps: TrapsController,
}

impl Game {
    pub fn new(config: GameConfig, sprite: Rc<Sprite>, clock: Box<dyn Clock>) -> Self {
        let player = Player::new(&config);
        let ground = Ground::new(&config);
        let traps = TrapsController::new(&config, sprite.clone());
        println!(
            "[game] Run started ({}x{}, {:?})",
            config.viewport.width, config.viewport.height, config.physics
        );
        Self {
            config,
            sprite,
            clock,
            run: RunState::default(),
            player,
            ground,
            traps,
        }
    }

    #[cfg(test)]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn run(&self) -> &RunState {
        &self.run
    }

    #[cfg(test)]
    pub fn score(&self) -> u64 {
        self.run.score
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.run.phase
    }

    #[cfg(test)]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[cfg(test)]
    pub fn traps(&self) -> &TrapsController {
        &self.traps
    }

    #[cfg(test)]
    pub fn traps_mut(&mut self) -> &mut TrapsController {
        &mut self.traps
    }

    /// Whether the host should keep delivering frames
    pub fn is_scheduled(&self) -> bool {
        self.run.phase == Phase::Running
    }

    /// Advance and draw one frame. Inert once the run is over.
    pub fn frame(&mut self, timestamp_ms: f64, surface: &mut dyn Surface) -> FrameOutcome {
        if self.run.phase == Phase::GameOver {
            return FrameOutcome::Stop;
        }

        let dt = (timestamp_ms - self.run.last_frame_ms) as f32;
        self.run.last_frame_ms = timestamp_ms;
        let step = self.config.physics.step_scale(dt);

        surface.clear();
        self.ground.update(step);
        self.ground.draw(surface);
        self.player.update(step);
        self.player.draw(surface);
        self.traps.update(step, self.clock.as_ref());
        self.traps.draw(surface);

        if self.traps.collide_with(&self.player) {
            self.run.phase = Phase::GameOver;
            self.draw_hud(surface);
            self.draw_game_over(surface);
            println!("[game] Game over, score {}", self.run.score);
            FrameOutcome::Stop
        } else {
            self.run.score += 1;
            self.draw_hud(surface);
            FrameOutcome::Continue
        }
    }

    /// Repaint the current scene without advancing anything
    pub fn present(&self, surface: &mut dyn Surface) {
        surface.clear();
        self.ground.draw(surface);
        self.player.draw(surface);
        self.traps.draw(surface);
        self.draw_hud(surface);
        if self.run.phase == Phase::GameOver {
            self.draw_game_over(surface);
        }
    }

    /// Apply one input action. Returns whether frames should be scheduled
    /// afterwards, so a restart hands the host a `Continue`.
    pub fn handle_action(&mut self, action: Action) -> FrameOutcome {
        match (action, self.run.phase) {
            (Action::Jump, Phase::Running) => self.player.jump(),
            (Action::Restart, Phase::GameOver) => self.restart_game(),
            _ => {}
        }
        if self.is_scheduled() {
            FrameOutcome::Continue
        } else {
            FrameOutcome::Stop
        }
    }

    /// Fresh run: score 0, running, new player and trap controller.
    /// The ground is immutable and carries over. The new controller has no
    /// prior spawn, so the first frame of the run spawns a trap.
    pub fn restart_game(&mut self) {
        self.run = RunState::default();
        self.traps = TrapsController::new(&self.config, self.sprite.clone());
        self.player = Player::new(&self.config);
        println!("[game] Restarted");
    }

    fn draw_hud(&self, surface: &mut dyn Surface) {
        let (x, y) = SCORE_POS;
        surface.fill_text(&format!("Score: {}", self.run.score), x, y, SCORE_SIZE, SCORE_COLOR);
    }

    fn draw_game_over(&self, surface: &mut dyn Surface) {
        let (x, y) = GAME_OVER_POS;
        surface.fill_text(GAME_OVER_TEXT, x, y, GAME_OVER_SIZE, GAME_OVER_COLOR);
        let key = self.config.keys.restart.first().map(String::as_str).unwrap_or("Enter");
        surface.fill_text(
            &format!("Press {} to restart", key),
            x,
            y + GAME_OVER_SIZE,
            HINT_SIZE,
            HINT_COLOR,
        );
    }
}
