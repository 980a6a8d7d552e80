//! Frame driver invariants, exercised through the public facade.

use tui_snake::core::{SnakeSim, StepError};
use tui_snake::driver::{FrameDriver, FrameOutcome};
use tui_snake::term::{BoardView, FrameBuffer, Viewport};
use tui_snake::types::Direction;

fn harness() -> (SnakeSim, BoardView, Viewport, FrameBuffer) {
    (
        SnakeSim::new(7),
        BoardView::default(),
        Viewport::new(60, 30),
        FrameBuffer::new(0, 0),
    )
}

#[test]
fn at_most_one_handle_is_outstanding() {
    let (mut sim, view, viewport, mut fb) = harness();
    let mut driver = FrameDriver::new();

    let mut seen = Vec::new();
    seen.push(driver.start(None));
    seen.push(driver.start(Some(Direction::Up)));
    driver.run_frame(&mut sim, &view, viewport, &mut fb).unwrap();
    seen.push(driver.pending().unwrap());
    driver.stop();
    seen.push(driver.start(Some(Direction::Left)));

    // Every recorded handle is distinct, and only the newest is pending.
    for (i, a) in seen.iter().enumerate() {
        for b in &seen[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(driver.pending(), seen.last().copied());
}

#[test]
fn stop_prevents_the_next_frame() {
    let (mut sim, view, viewport, mut fb) = harness();
    let mut driver = FrameDriver::new();

    driver.start(Some(Direction::Right));
    driver.stop();

    let outcome = driver.run_frame(&mut sim, &view, viewport, &mut fb);
    assert_eq!(outcome, Ok(FrameOutcome::Idle));
    assert_eq!(sim.score(), 0);
    assert_eq!(sim.meat_position(), (0, 0)); // no tick ever ran
}

#[test]
fn advance_rate_is_half_the_frame_rate() {
    let (mut sim, view, viewport, mut fb) = harness();
    let mut driver = FrameDriver::new();
    driver.start(Some(Direction::Right));

    let mut advances = 0;
    for _ in 0..10 {
        match driver.run_frame(&mut sim, &view, viewport, &mut fb).unwrap() {
            FrameOutcome::Drawn { advanced: true } => advances += 1,
            FrameOutcome::Drawn { advanced: false } => {}
            FrameOutcome::Idle => panic!("chain should stay armed"),
        }
    }
    assert_eq!(advances, 5);
}

#[test]
fn restart_mid_chain_preserves_the_skip_phase() {
    let (mut sim, view, viewport, mut fb) = harness();
    let mut driver = FrameDriver::new();

    // Consume the active phase with one gated frame.
    driver.start(Some(Direction::Right));
    let first = driver.run_frame(&mut sim, &view, viewport, &mut fb).unwrap();
    assert_eq!(first, FrameOutcome::Drawn { advanced: true });

    // Restarting does not hand the new chain an extra active phase.
    driver.stop();
    driver.start(Some(Direction::Down));
    let next = driver.run_frame(&mut sim, &view, viewport, &mut fb).unwrap();
    assert_eq!(next, FrameOutcome::Drawn { advanced: false });
}

#[test]
fn engine_failure_disarms_and_stays_disarmed() {
    let (mut sim, view, viewport, mut fb) = harness();
    let mut driver = FrameDriver::new();
    driver.start(Some(Direction::Left));

    let mut result = Ok(FrameOutcome::Idle);
    for _ in 0..300 {
        result = driver.run_frame(&mut sim, &view, viewport, &mut fb);
        if result.is_err() {
            break;
        }
    }

    assert_eq!(result, Err(StepError::HitWall));
    assert!(!driver.is_running());
    assert!(sim.game_over());
    assert_eq!(
        driver.run_frame(&mut sim, &view, viewport, &mut fb),
        Ok(FrameOutcome::Idle)
    );
}
