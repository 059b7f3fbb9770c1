//! Fixed-step simulation transitions
//!
//! Three mutators act on `GameState`, each owning its own fields:
//! - `tick` moves the obstacle, scores recycles and detects crashes
//! - `steer` moves the player car
//! - `restart` resets everything after a crash

use super::collision::cars_collide;
use super::state::{GamePhase, GameState};
use crate::consts::*;
use crate::max_car_x;

/// Horizontal steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// What a single tick did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Obstacle moved down, nothing else happened
    Advanced,
    /// Obstacle left the bottom of the track and respawned at the top
    Recycled,
    /// Obstacle hit the player; the run is over
    Crashed,
    /// State was already game over; nothing changed
    Frozen,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) -> TickOutcome {
    if state.is_game_over() {
        return TickOutcome::Frozen;
    }

    state.time_ticks += 1;

    let next_y = state.obstacle.pos.y + OBSTACLE_SPEED;
    let recycled = if next_y > TRACK_HEIGHT {
        state.score += 1;
        let x = state.random_lane_x();
        state.obstacle.pos.x = x;
        state.obstacle.pos.y = 0.0;
        true
    } else {
        state.obstacle.pos.y = next_y;
        false
    };

    // Collision uses the freshly advanced obstacle
    if cars_collide(state.player.pos, state.obstacle.pos) {
        state.phase = GamePhase::GameOver;
        return TickOutcome::Crashed;
    }

    if recycled {
        TickOutcome::Recycled
    } else {
        TickOutcome::Advanced
    }
}

/// Move the player one step, clamped to the track.
///
/// Returns false when the input was ignored (game over) or the car was
/// already against the wall.
pub fn steer(state: &mut GameState, direction: Direction) -> bool {
    if state.is_game_over() {
        return false;
    }

    let x = state.player.pos.x;
    let next_x = match direction {
        Direction::Left => (x - PLAYER_STEP).max(0.0),
        Direction::Right => (x + PLAYER_STEP).min(max_car_x()),
    };
    state.player.pos.x = next_x;
    next_x != x
}

/// Reset the run after a crash. Returns false (and changes nothing) while
/// the game is still running.
pub fn restart(state: &mut GameState) -> bool {
    if state.phase != GamePhase::GameOver {
        return false;
    }
    state.reset();
    true
}
