//! Search space size, ordering, and boundary behavior

use busy_beaver::*;
use test_case::test_case;
use test_helpers::*;

#[test_case(1, 64 ; "one state")]
#[test_case(2, 20_736 ; "two states")]
#[test_case(3, 16_777_216 ; "three states")]
#[test_case(4, 25_600_000_000 ; "four states")]
#[test_case(6, 28u64.pow(12) ; "six states")]
fn space_size(states: usize, expected: u64) {
    let space = SearchSpace::new(states).unwrap();
    assert_eq!(space.size(), expected);
    assert_eq!(space.radix(), 4 * (states as u64 + 1));
}

#[test_case(0 ; "zero states")]
#[test_case(7 ; "seven states overflow")]
#[test_case(64 ; "far too many states")]
fn space_rejected(states: usize) {
    assert!(SearchSpace::new(states).is_err());
}

#[test_case(1, 0 ; "one state writing zero")]
#[test_case(1, 1 ; "one state writing one")]
#[test_case(3, 0 ; "three states writing zero")]
#[test_case(4, 1 ; "four states writing one")]
fn immediate_halt_takes_one_step(states: usize, write: u8) {
    let machine = create_immediate_halt_machine(states, write);
    let outcome = run(&machine, 1_000_000);
    assert!(outcome.halted);
    assert_eq!(outcome.steps, 1);
    assert_eq!(outcome.ones, u64::from(write));
}

#[test]
fn every_decoded_halt_first_machine_halts_in_one_step() {
    // Slot (0, 0) is the most significant digit; digits with next = HALT
    // are those divisible by n + 1.
    let space = SearchSpace::new(2).unwrap();
    let per_digit = space.size() / space.radix();
    for digit in (0..space.radix()).step_by(3) {
        let machine = space.descriptor(digit * per_digit + 17).unwrap();
        let rule = *machine.transition(0, 0);
        assert!(rule.halts());
        let outcome = run(&machine, 10);
        assert_eq!((outcome.steps, outcome.halted), (1, true));
        assert_eq!(outcome.ones, u64::from(rule.write));
    }
}

#[test]
fn decoded_machines_are_total() {
    let space = SearchSpace::new(3).unwrap();
    for index in [0, 1, 12_345, 8_000_000, space.size() - 1] {
        let machine = space.descriptor(index).unwrap();
        assert_eq!(machine.rules().len(), 6);
        for rule in machine.rules() {
            assert!(rule.write <= 1);
            if let NextState::Goto(next) = rule.next {
                assert!(next < 3);
            }
        }
        assert_eq!(space.index_of(&machine).unwrap(), index);
    }
}

#[test]
fn last_index_is_all_right_moving_ones_to_last_state() {
    let space = SearchSpace::new(2).unwrap();
    let last = space.descriptor(space.size() - 1).unwrap();
    assert_eq!(last.to_string(), "1RB1RB_1RB1RB");
    assert!(matches!(
        space.descriptor(space.size()),
        Err(SearchError::IndexOutOfRange { .. })
    ));
}
