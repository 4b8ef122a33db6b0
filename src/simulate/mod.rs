//! Bounded single-machine simulation
//!
//! A run starts on a blank tape with the head at 0 in state 0 and stops when
//! HALT is entered or the step bound is reached. Hitting the bound only means
//! "presumed non-halting"; nothing here decides halting.

use crate::machine::{Configuration, MachineDescriptor};

/// Result of one bounded run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunOutcome {
    /// Transitions executed, including the one entering HALT
    pub steps: u64,

    /// Whether HALT was entered within the bound
    pub halted: bool,

    /// Number of cells holding 1 when the run stopped
    pub ones: u64,
}

/// Simulate `machine` for at most `max_steps` steps
///
/// Pure: the same machine and bound always give the same outcome. The tape is
/// created here and dropped before returning.
pub fn run(machine: &MachineDescriptor, max_steps: u64) -> RunOutcome {
    let config = run_to_configuration(machine, max_steps);
    let steps = config.steps();
    let halted = config.is_halted();
    let ones = config.into_tape().count_ones();

    RunOutcome {
        steps,
        halted,
        ones,
    }
}

/// Simulate and hand back the final configuration for inspection
pub fn run_to_configuration(machine: &MachineDescriptor, max_steps: u64) -> Configuration {
    let mut config = Configuration::initial();
    while config.steps() < max_steps && machine.step(&mut config) {}
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{Move, NextState};

    fn machine(text: &str) -> MachineDescriptor {
        text.parse().expect("valid machine text")
    }

    #[test]
    fn test_immediate_halt() {
        let writes_one = machine("1RZ0LA");
        assert_eq!(
            run(&writes_one, 1_000),
            RunOutcome {
                steps: 1,
                halted: true,
                ones: 1
            }
        );

        let writes_zero = machine("0LZ1RA");
        assert_eq!(
            run(&writes_zero, 1_000),
            RunOutcome {
                steps: 1,
                halted: true,
                ones: 0
            }
        );
    }

    #[test]
    fn test_bound_reached_is_not_halting() {
        // Runs right forever writing 1s
        let runaway = machine("1RA1RA");
        let outcome = run(&runaway, 500);
        assert!(!outcome.halted);
        assert_eq!(outcome.steps, 500);
        assert_eq!(outcome.ones, 500);
    }

    #[test]
    fn test_zero_step_bound() {
        let outcome = run(&machine("1RZ1RZ"), 0);
        assert_eq!(
            outcome,
            RunOutcome {
                steps: 0,
                halted: false,
                ones: 0
            }
        );
    }

    #[test]
    fn test_halting_exactly_at_bound_counts_as_halted() {
        // 2 steps: A0 -> write 1, R, B; B0 -> write 1, L, HALT
        let two_step = MachineDescriptor::builder(2)
            .add_transition(0, 0, 1, Move::Right, NextState::Goto(1))
            .add_transition(0, 1, 1, Move::Right, NextState::Goto(1))
            .add_transition(1, 0, 1, Move::Left, NextState::Halt)
            .add_transition(1, 1, 1, Move::Left, NextState::Halt)
            .build()
            .unwrap();

        assert_eq!(
            run(&two_step, 2),
            RunOutcome {
                steps: 2,
                halted: true,
                ones: 2
            }
        );
        assert!(!run(&two_step, 1).halted);
    }

    #[test]
    fn test_overwritten_ones_do_not_count() {
        // Writes 1, steps left, bounces back and erases it, then halts on the blank
        let eraser = machine("1LB0LZ_1RC1RC_0RZ0RZ");
        let config = run_to_configuration(&eraser, 100);
        assert!(config.is_halted());
        assert_eq!(config.steps(), 3);
        assert_eq!(config.tape().read(0), 0);
        assert_eq!(config.tape().read(-1), 1);
        assert_eq!(run(&eraser, 100).ones, 1);
    }

    #[test]
    fn test_three_state_champion() {
        let champion = machine("1RB1RZ_1LB0RC_1LC1LA");
        let outcome = run(&champion, 1_000);
        assert!(outcome.halted);
        assert_eq!(outcome.steps, 21);
        assert_eq!(outcome.ones, 5);
    }

    #[test]
    fn test_tape_storage_tracks_visited_cells() {
        // Every visited cell holds a 1: one stored cell per step
        let config = run_to_configuration(&machine("1LA1LA"), 1_000);
        assert_eq!(config.head(), -1_000);
        assert_eq!(config.tape().space_usage(), 1_000);
        assert_eq!(config.tape().bounds(), (-999, 0));

        // Blanks written past the stored region take no space
        let config = run_to_configuration(&machine("0RA0RA"), 1_000);
        assert_eq!(config.head(), 1_000);
        assert_eq!(config.tape().space_usage(), 0);
    }
}
