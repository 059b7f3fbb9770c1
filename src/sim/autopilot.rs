//! Demo-mode steering
//!
//! Picks a direction that takes the player out of the obstacle's column once
//! the obstacle gets close.
//! The suggestion is fed back through the normal input path, so it obeys the
//! same clamping and game-over freeze as a human player.

use super::state::GameState;
use super::tick::Direction;
use crate::consts::{CAR_HEIGHT, CAR_WIDTH, PLAYER_STEP};
use crate::max_car_x;

/// Horizontal clearance the autopilot keeps from the obstacle
pub const SAFE_GAP: f32 = PLAYER_STEP;

/// Vertical distance (obstacle bottom to player top) at which the autopilot
/// starts reacting. Leaves 40 ticks to dodge; the longest dodge takes 13 steps.
pub const APPROACH_DISTANCE: f32 = 200.0;

/// Whether the obstacle's bottom edge is within `APPROACH_DISTANCE` of the
/// player's top edge
fn is_approaching(state: &GameState) -> bool {
    let obstacle_bottom = state.obstacle().pos.y + CAR_HEIGHT;
    state.player().pos.y - obstacle_bottom <= APPROACH_DISTANCE
}

/// Horizontal gap between the two cars (negative when their columns overlap)
fn horizontal_gap(player_x: f32, obstacle_x: f32) -> f32 {
    if player_x + CAR_WIDTH < obstacle_x {
        obstacle_x - (player_x + CAR_WIDTH)
    } else if player_x > obstacle_x + CAR_WIDTH {
        player_x - (obstacle_x + CAR_WIDTH)
    } else {
        -1.0
    }
}

/// Suggest a steering input for the current state, or `None` when the player
/// is already clear of the obstacle's column, the obstacle is still far up
/// the track, or the run is over.
pub fn suggest(state: &GameState) -> Option<Direction> {
    if state.is_game_over() || !is_approaching(state) {
        return None;
    }

    let px = state.player().pos.x;
    let ox = state.obstacle().pos.x;
    if horizontal_gap(px, ox) > SAFE_GAP {
        return None;
    }

    // A lane is usable if a car hugging that wall would be clear of the obstacle
    let left_open = ox > CAR_WIDTH + SAFE_GAP;
    let right_open = max_car_x() > ox + CAR_WIDTH + SAFE_GAP;

    let preferred = if px <= ox {
        Direction::Left
    } else {
        Direction::Right
    };

    match preferred {
        Direction::Left if left_open => Some(Direction::Left),
        Direction::Right if right_open => Some(Direction::Right),
        Direction::Left => Some(Direction::Right),
        Direction::Right => Some(Direction::Left),
    }
}
