//! Event-driven game controller
//!
//! Platform callbacks (timer, keyboard, restart button) never touch the game
//! state directly. They push `GameEvent`s into the controller's inbox and ask
//! it to `process` them; events are applied one at a time in FIFO order
//! against the current state. Timer changes come back as `TimerCommand`s for
//! the platform layer to carry out.

use std::collections::VecDeque;

use crate::consts::{RESTART_TICK_INTERVAL_MS, TICK_INTERVAL_MS};
use crate::sim::{self, Direction, GameState, TickOutcome, autopilot};

/// Discrete inputs consumed by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The tick timer fired
    Tick,
    KeyLeft,
    KeyRight,
    /// Restart button pressed
    Restart,
}

impl GameEvent {
    /// Map a DOM `KeyboardEvent.key` value to a game event. Only the two
    /// arrow keys mean anything; restart comes from the button.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::KeyLeft),
            "ArrowRight" => Some(Self::KeyRight),
            _ => None,
        }
    }
}

/// Instruction for the platform timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// (Re)start the recurring tick timer with the given period
    Start { interval_ms: u32 },
    /// Cancel the recurring tick timer
    Stop,
}

/// Owns the game state and the event inbox
#[derive(Debug)]
pub struct Controller {
    state: GameState,
    inbox: VecDeque<GameEvent>,
    /// Period of the running tick timer, `None` when stopped
    timer_interval_ms: Option<u32>,
    /// Period the timer was last started with; a remount resumes at it
    resume_interval_ms: u32,
    mounted: bool,
    demo_mode: bool,
}

impl Controller {
    pub fn new(seed: u64) -> Self {
        Self::with_state(GameState::new(seed))
    }

    /// Take over an existing state (scenario setup)
    pub fn with_state(state: GameState) -> Self {
        Self {
            state,
            inbox: VecDeque::new(),
            timer_interval_ms: None,
            resume_interval_ms: TICK_INTERVAL_MS,
            mounted: false,
            demo_mode: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn timer_interval_ms(&self) -> Option<u32> {
        self.timer_interval_ms
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    pub fn set_demo_mode(&mut self, enabled: bool) {
        if self.demo_mode != enabled {
            log::info!("Demo mode: {}", enabled);
        }
        self.demo_mode = enabled;
    }

    /// Number of events waiting to be processed
    pub fn pending(&self) -> usize {
        self.inbox.len()
    }

    /// Start accepting events and start the tick timer at the interval it
    /// last ran with (the initial interval on first mount)
    pub fn mount(&mut self) -> Option<TimerCommand> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        log::info!("Game mounted (seed {})", self.state.seed());

        if self.state.is_game_over() {
            return None;
        }
        Some(self.start_timer(self.resume_interval_ms))
    }

    /// Stop the timer and drop any queued events
    pub fn unmount(&mut self) -> Option<TimerCommand> {
        if !self.mounted {
            return None;
        }
        self.mounted = false;
        self.inbox.clear();
        log::info!("Game unmounted");
        self.stop_timer()
    }

    /// Queue an event. Events arriving while unmounted are dropped.
    pub fn push(&mut self, event: GameEvent) {
        if !self.mounted {
            log::trace!("Dropping {:?}: not mounted", event);
            return;
        }
        self.inbox.push_back(event);
    }

    /// Drain the inbox, returning timer commands in the order they were issued
    pub fn process(&mut self) -> Vec<TimerCommand> {
        let mut commands = Vec::new();
        while let Some(event) = self.inbox.pop_front() {
            if let Some(command) = self.dispatch(event) {
                commands.push(command);
            }
        }
        commands
    }

    /// Apply a single event to the state
    pub fn dispatch(&mut self, event: GameEvent) -> Option<TimerCommand> {
        match event {
            GameEvent::Tick => self.on_tick(),
            GameEvent::KeyLeft => {
                self.on_steer(Direction::Left);
                None
            }
            GameEvent::KeyRight => {
                self.on_steer(Direction::Right);
                None
            }
            GameEvent::Restart => self.on_restart(),
        }
    }

    fn on_tick(&mut self) -> Option<TimerCommand> {
        if self.demo_mode {
            if let Some(direction) = autopilot::suggest(&self.state) {
                self.on_steer(direction);
            }
        }

        match sim::tick(&mut self.state) {
            TickOutcome::Advanced => None,
            TickOutcome::Recycled => {
                log::debug!("Obstacle recycled, score {}", self.state.score());
                None
            }
            TickOutcome::Crashed => {
                log::info!(
                    "Game over: score {} after {} ticks",
                    self.state.score(),
                    self.state.time_ticks()
                );
                self.stop_timer()
            }
            TickOutcome::Frozen => {
                log::trace!("Tick ignored: game over");
                None
            }
        }
    }

    fn on_steer(&mut self, direction: Direction) {
        if !sim::steer(&mut self.state, direction) {
            log::trace!("Steer {:?} had no effect", direction);
        }
    }

    fn on_restart(&mut self) -> Option<TimerCommand> {
        if !sim::restart(&mut self.state) {
            log::trace!("Restart ignored: game still running");
            return None;
        }
        log::info!("Game restarted");
        Some(self.start_timer(RESTART_TICK_INTERVAL_MS))
    }

    fn start_timer(&mut self, interval_ms: u32) -> TimerCommand {
        log::debug!("Tick timer started ({} ms)", interval_ms);
        self.timer_interval_ms = Some(interval_ms);
        self.resume_interval_ms = interval_ms;
        TimerCommand::Start { interval_ms }
    }

    fn stop_timer(&mut self) -> Option<TimerCommand> {
        self.timer_interval_ms.take().map(|_| {
            log::debug!("Tick timer stopped");
            TimerCommand::Stop
        })
    }
}
