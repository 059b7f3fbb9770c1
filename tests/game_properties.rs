//! End-to-end behavior of the controller driven through its event inbox

use car_racer::consts::*;
use car_racer::sim::{GameState, tick};
use car_racer::{Controller, GameEvent, TimerCommand};
use glam::Vec2;
use proptest::prelude::*;

fn any_event() -> impl Strategy<Value = GameEvent> {
    prop_oneof![
        4 => Just(GameEvent::Tick),
        2 => Just(GameEvent::KeyLeft),
        2 => Just(GameEvent::KeyRight),
        1 => Just(GameEvent::Restart),
    ]
}

fn input_event() -> impl Strategy<Value = GameEvent> {
    prop_oneof![
        Just(GameEvent::Tick),
        Just(GameEvent::KeyLeft),
        Just(GameEvent::KeyRight),
    ]
}

/// Controller whose obstacle lands on the player with the next tick
fn about_to_crash(seed: u64, player_x: f32) -> Controller {
    let state = GameState::new(seed)
        .with_player_x(player_x)
        .with_obstacle(Vec2::new(player_x, 500.0));
    let mut controller = Controller::with_state(state);
    controller.mount();
    controller
}

#[test]
fn fifty_left_presses_stop_at_the_wall() {
    let mut controller = Controller::new(1);
    controller.mount();
    for _ in 0..50 {
        controller.push(GameEvent::KeyLeft);
    }
    controller.process();
    assert_eq!(controller.state().player().pos.x, 0.0);
}

#[test]
fn collision_example_positions() {
    let mut controller = about_to_crash(9, 175.0);
    controller.push(GameEvent::Tick);
    assert_eq!(controller.process(), vec![TimerCommand::Stop]);
    assert!(controller.state().is_game_over());

    let state = GameState::new(9).with_obstacle(Vec2::new(175.0, 300.0));
    let mut controller = Controller::with_state(state);
    controller.mount();
    controller.push(GameEvent::Tick);
    assert!(controller.process().is_empty());
    assert!(!controller.state().is_game_over());
}

#[test]
fn keyboard_cannot_restart_after_crash() {
    let mut controller = about_to_crash(4, 175.0);
    controller.push(GameEvent::Tick);
    controller.process();

    for key in ["Enter", " ", "r", "R", "d", "Escape"] {
        assert_eq!(GameEvent::from_key(key), None, "{key:?}");
    }
    controller.push(GameEvent::Tick);
    assert!(controller.process().is_empty());
    assert!(controller.state().is_game_over());
}

#[test]
fn full_lifecycle() {
    let mut controller = about_to_crash(11, 40.0);
    assert_eq!(
        controller.timer_interval_ms(),
        Some(TICK_INTERVAL_MS),
        "mount starts the fast timer"
    );

    controller.push(GameEvent::Tick);
    controller.push(GameEvent::Restart);
    controller.push(GameEvent::KeyRight);
    let commands = controller.process();

    // Crash, then restart at the slower interval, then the key moves the fresh car
    assert_eq!(
        commands,
        vec![
            TimerCommand::Stop,
            TimerCommand::Start {
                interval_ms: RESTART_TICK_INTERVAL_MS
            }
        ]
    );
    assert_eq!(controller.state().player().pos.x, 185.0);
    assert_eq!(controller.unmount(), Some(TimerCommand::Stop));
}

proptest! {
    #[test]
    fn player_stays_on_track(seed in any::<u64>(), events in prop::collection::vec(any_event(), 0..400)) {
        let mut controller = Controller::new(seed);
        controller.mount();
        for event in events {
            controller.push(event);
            controller.process();
            let state = controller.state();
            let x = state.player().pos.x;
            prop_assert!((0.0..=TRACK_WIDTH - CAR_WIDTH).contains(&x));
            prop_assert_eq!(state.player().pos.y, TRACK_HEIGHT - CAR_HEIGHT);
            let obstacle = state.obstacle().pos;
            prop_assert!((0.0..=TRACK_HEIGHT).contains(&obstacle.y));
            prop_assert!((0.0..=TRACK_WIDTH - CAR_WIDTH).contains(&obstacle.x));
        }
    }

    #[test]
    fn score_only_drops_on_restart(seed in any::<u64>(), events in prop::collection::vec(any_event(), 0..600)) {
        let mut controller = Controller::new(seed);
        controller.set_demo_mode(true);
        controller.mount();
        let mut previous = 0;
        for event in events {
            let was_over = controller.state().is_game_over();
            controller.push(event);
            controller.process();
            let score = controller.state().score();
            if event == GameEvent::Restart && was_over {
                prop_assert_eq!(score, 0);
            } else {
                prop_assert!(score >= previous);
                prop_assert!(score <= previous + 1);
            }
            previous = score;
        }
    }

    #[test]
    fn game_over_freezes_everything(
        seed in any::<u64>(),
        player_x in 0.0f32..=350.0,
        events in prop::collection::vec(input_event(), 1..200),
    ) {
        let mut controller = about_to_crash(seed, player_x);
        controller.push(GameEvent::Tick);
        controller.process();
        prop_assert!(controller.state().is_game_over());

        let player = *controller.state().player();
        let obstacle = *controller.state().obstacle();
        let score = controller.state().score();

        for event in events {
            controller.push(event);
        }
        prop_assert!(controller.process().is_empty());
        prop_assert_eq!(*controller.state().player(), player);
        prop_assert_eq!(*controller.state().obstacle(), obstacle);
        prop_assert_eq!(controller.state().score(), score);
    }

    #[test]
    fn only_arrow_keys_map_to_events(key in "\\PC{0,12}") {
        let expected = match key.as_str() {
            "ArrowLeft" => Some(GameEvent::KeyLeft),
            "ArrowRight" => Some(GameEvent::KeyRight),
            _ => None,
        };
        prop_assert_eq!(GameEvent::from_key(&key), expected);
    }

    #[test]
    fn restart_always_resets(seed in any::<u64>(), player_x in 0.0f32..=350.0, score_ticks in 0usize..400) {
        // Rack up some score in a lane that never meets the player, then crash
        let mut state = GameState::new(seed).with_player_x(player_x);
        for _ in 0..score_ticks {
            if state.obstacle().pos.y < 1.0 {
                let clear_x = if player_x > 175.0 { 0.0 } else { TRACK_WIDTH - CAR_WIDTH };
                state = state.with_obstacle(Vec2::new(clear_x, 0.0));
            }
            tick(&mut state);
        }
        let state = state.with_obstacle(Vec2::new(player_x, 500.0));
        let mut controller = Controller::with_state(state);
        controller.mount();
        controller.push(GameEvent::Tick);
        controller.push(GameEvent::Restart);
        controller.process();

        let state = controller.state();
        prop_assert_eq!(state.player().pos, Vec2::new(175.0, 530.0));
        prop_assert_eq!(state.score(), 0);
        prop_assert!(!state.is_game_over());
        prop_assert_eq!(state.obstacle().pos.y, 0.0);
    }
}
