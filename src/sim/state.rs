//! Game state and core simulation types
//!
//! `GameState` is the single source of truth for a run. Fields that the
//! simulation mutates are only writable from inside `sim`; everything outside
//! reads them through accessors.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::{max_car_x, player_start};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Obstacle is falling, input is accepted
    Running,
    /// The cars collided; everything is frozen until restart
    GameOver,
}

/// A car on the track, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Car {
    pub pos: Vec2,
}

impl Car {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    /// Bounding box used for collision and drawing
    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_car(self.pos)
    }
}

/// Complete game state (deterministic for a given seed and event sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    seed: u64,
    /// Source of obstacle lane positions
    rng: Pcg32,
    pub(super) player: Car,
    pub(super) obstacle: Car,
    pub(super) score: u32,
    pub(super) phase: GamePhase,
    /// Ticks advanced since the last (re)start
    pub(super) time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Car::new(player_start()),
            obstacle: Car::new(Vec2::ZERO),
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
        };
        state.obstacle.pos = Vec2::new(state.random_lane_x(), 0.0);
        state
    }

    /// Place the obstacle at a given position (clamped onto the track).
    ///
    /// Used to set up scenarios; the rng is left untouched.
    pub fn with_obstacle(mut self, pos: Vec2) -> Self {
        self.obstacle.pos = Vec2::new(
            pos.x.clamp(0.0, max_car_x()),
            pos.y.clamp(0.0, crate::consts::TRACK_HEIGHT),
        );
        self
    }

    /// Place the player at a given x (clamped onto the track)
    pub fn with_player_x(mut self, x: f32) -> Self {
        self.player.pos.x = x.clamp(0.0, max_car_x());
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn player(&self) -> &Car {
        &self.player
    }

    pub fn obstacle(&self) -> &Car {
        &self.obstacle
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Uniform x in `[0, TRACK_WIDTH - CAR_WIDTH]`
    pub(super) fn random_lane_x(&mut self) -> f32 {
        self.rng.random_range(0.0..=max_car_x())
    }

    /// Put every entity back to its initial value. The rng keeps its stream,
    /// so the new obstacle lane differs from the previous run's.
    pub(super) fn reset(&mut self) {
        self.player = Car::new(player_start());
        self.obstacle = Car::new(Vec2::new(self.random_lane_x(), 0.0));
        self.score = 0;
        self.phase = GamePhase::Running;
        self.time_ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(42);
        assert_eq!(state.seed(), 42);
        assert_eq!(state.player().pos, Vec2::new(175.0, 530.0));
        assert_eq!(state.obstacle().pos.y, 0.0);
        assert!(state.obstacle().pos.x >= 0.0);
        assert!(state.obstacle().pos.x <= TRACK_WIDTH - CAR_WIDTH);
        assert_eq!(state.score(), 0);
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.time_ticks(), 0);
    }

    #[test]
    fn test_same_seed_same_lane() {
        let a = GameState::new(7);
        let b = GameState::new(7);
        assert_eq!(a.obstacle().pos, b.obstacle().pos);
    }

    #[test]
    fn test_random_lane_stays_on_track() {
        let mut state = GameState::new(1234);
        for _ in 0..1000 {
            let x = state.random_lane_x();
            assert!((0.0..=max_car_x()).contains(&x));
        }
    }

    #[test]
    fn test_scenario_builders_clamp() {
        let state = GameState::new(1)
            .with_obstacle(Vec2::new(-20.0, 900.0))
            .with_player_x(1000.0);
        assert_eq!(state.obstacle().pos, Vec2::new(0.0, TRACK_HEIGHT));
        assert_eq!(state.player().pos.x, max_car_x());
        assert_eq!(state.player().pos.y, TRACK_HEIGHT - CAR_HEIGHT);
    }

    #[test]
    fn test_reset_restores_initial_entities() {
        let mut state = GameState::new(5).with_player_x(0.0);
        state.score = 12;
        state.phase = GamePhase::GameOver;
        state.time_ticks = 400;

        state.reset();

        assert_eq!(state.player().pos, player_start());
        assert_eq!(state.obstacle().pos.y, 0.0);
        assert_eq!(state.score(), 0);
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.time_ticks(), 0);
    }

    #[test]
    fn test_car_bounds() {
        let car = Car::new(Vec2::new(175.0, 530.0));
        let bounds = car.bounds();
        assert_eq!(bounds.min, Vec2::new(175.0, 530.0));
        assert_eq!(bounds.max, Vec2::new(225.0, 600.0));
    }
}
