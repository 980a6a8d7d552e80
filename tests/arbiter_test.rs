//! Input arbitration scenarios.

use tui_snake::input::InputArbiter;
use tui_snake::types::Direction;

#[test]
fn first_direction_is_always_accepted() {
    for dir in Direction::ALL {
        let mut arbiter = InputArbiter::new();
        assert_eq!(arbiter.accept(dir), Some(dir));
    }
}

#[test]
fn reversal_is_rejected_and_state_kept() {
    let mut arbiter = InputArbiter::new();

    assert_eq!(arbiter.accept(Direction::Up), Some(Direction::Up));
    assert_eq!(arbiter.accept(Direction::Down), None);
    assert_eq!(arbiter.current(), Some(Direction::Up));
    assert_eq!(arbiter.accept(Direction::Left), Some(Direction::Left));
    assert_eq!(arbiter.current(), Some(Direction::Left));
}

#[test]
fn acceptance_is_exactly_not_opposite() {
    for current in Direction::ALL {
        for requested in Direction::ALL {
            let mut arbiter = InputArbiter::new();
            arbiter.accept(current);

            let accepted = arbiter.accept(requested).is_some();
            assert_eq!(
                accepted,
                requested != current.opposite(),
                "from {current:?}, requesting {requested:?}"
            );
        }
    }
}

#[test]
fn double_press_of_same_direction_is_accepted_twice() {
    let mut arbiter = InputArbiter::new();
    assert_eq!(arbiter.accept(Direction::Right), Some(Direction::Right));
    assert_eq!(arbiter.accept(Direction::Right), Some(Direction::Right));
}

#[test]
fn unknown_direction_codes_are_ignored() {
    let mut arbiter = InputArbiter::new();

    assert_eq!(arbiter.accept_code(4), None);
    assert_eq!(arbiter.accept_code(200), None);
    assert_eq!(arbiter.current(), None);

    assert_eq!(arbiter.accept_code(0), Some(Direction::Left));
    assert_eq!(arbiter.current(), Some(Direction::Left));
}

#[test]
fn rejection_does_not_leak_into_later_decisions() {
    let mut arbiter = InputArbiter::new();
    arbiter.accept(Direction::Up);

    // A burst of rejected reversals leaves the gate exactly as before.
    for _ in 0..5 {
        assert_eq!(arbiter.accept(Direction::Down), None);
    }
    assert_eq!(arbiter.accept(Direction::Right), Some(Direction::Right));
    // Down is legal again now that the current direction is Right.
    assert_eq!(arbiter.accept(Direction::Down), Some(Direction::Down));
}
