//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - No rendering, timer or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, cars_collide};
pub use state::{Car, GamePhase, GameState};
pub use tick::{Direction, TickOutcome, restart, steer, tick};
