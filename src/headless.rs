//! Headless sessions
//!
//! Drives the controller with synthetic timer ticks, no window or timer
//! required. Used by the native binary and by tests.

use crate::controller::{Controller, GameEvent, TimerCommand};

/// Result of a headless session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessSummary {
    pub seed: u64,
    /// Ticks the simulation actually advanced
    pub ticks: u64,
    pub score: u32,
    pub crashed: bool,
}

/// Run a session for up to `max_ticks` ticks, stopping early on a crash
pub fn run(seed: u64, max_ticks: u64, demo_mode: bool) -> HeadlessSummary {
    let mut controller = Controller::new(seed);
    controller.set_demo_mode(demo_mode);
    controller.mount();

    for _ in 0..max_ticks {
        controller.push(GameEvent::Tick);
        if controller.process().contains(&TimerCommand::Stop) {
            break;
        }
    }

    let state = controller.state();
    let summary = HeadlessSummary {
        seed,
        ticks: state.time_ticks(),
        score: state.score(),
        crashed: state.is_game_over(),
    };
    controller.unmount();
    summary
}
