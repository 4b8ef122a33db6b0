//! Exhaustive machine enumeration
//!
//! Every n-state machine has 2n slots, each choosing one of 4(n+1) rules,
//! so SearchSpace(n) has (4(n+1))^(2n) members. Members are addressed by a
//! linear index read as a mixed-radix number: slot 0 is the most significant
//! digit, and within a digit the write symbol varies slowest, then the move,
//! then the next state (HALT first, then 0..n-1).
//!
//! Decoding is stateless, so any contiguous index range can be scanned on its
//! own without materializing the space.

mod shard;

pub use shard::IndexRange;

use crate::machine::{MachineDescriptor, Move, NextState, State, Symbol, Transition, SYMBOLS};
use crate::SearchError;

/// The implicit set of all n-state, 2-symbol machines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSpace {
    num_states: usize,
    radix: u64,
    size: u64,
}

impl SearchSpace {
    /// Search space for `num_states` states
    ///
    /// Fails for n = 0 and for n whose space size does not fit in `u64` (n ≥ 7).
    pub fn new(num_states: usize) -> Result<Self, SearchError> {
        if num_states == 0 {
            return Err(SearchError::InvalidStateCount(num_states));
        }
        let too_large = || SearchError::SearchSpaceTooLarge { states: num_states };

        let radix = (num_states as u64 + 1)
            .checked_mul(4)
            .ok_or_else(too_large)?;
        let slots = u32::try_from(num_states * SYMBOLS).map_err(|_| too_large())?;
        let size = radix.checked_pow(slots).ok_or_else(too_large)?;

        Ok(Self {
            num_states,
            radix,
            size,
        })
    }

    /// Number of states n
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Number of choices per slot: 4(n+1)
    pub fn radix(&self) -> u64 {
        self.radix
    }

    /// |SearchSpace(n)|
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The whole index range `[0, size)`
    pub fn full_range(&self) -> IndexRange {
        IndexRange::new(0, self.size)
    }

    /// Decode a linear index into its machine
    pub fn descriptor(&self, index: u64) -> Result<MachineDescriptor, SearchError> {
        if index >= self.size {
            return Err(SearchError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(self.decode(index))
    }

    /// Linear index of a machine (inverse of [`SearchSpace::descriptor`])
    pub fn index_of(&self, machine: &MachineDescriptor) -> Result<u64, SearchError> {
        if machine.num_states() != self.num_states {
            return Err(SearchError::InvalidMachine(format!(
                "{}-state machine is not in the {}-state search space",
                machine.num_states(),
                self.num_states
            )));
        }
        Ok(machine
            .rules()
            .iter()
            .fold(0u64, |acc, rule| acc * self.radix + self.encode_rule(rule)))
    }

    /// Machines in `range`, in canonical order, paired with their indices
    ///
    /// `range` is clamped to the space.
    pub fn iter_range(
        &self,
        range: IndexRange,
    ) -> impl Iterator<Item = (u64, MachineDescriptor)> + '_ {
        let end = range.end.min(self.size);
        (range.start.min(end)..end).map(move |index| (index, self.decode(index)))
    }

    /// All machines in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (u64, MachineDescriptor)> + '_ {
        self.iter_range(self.full_range())
    }

    /// Split the space into at most `parts` contiguous, disjoint ranges
    pub fn shards(&self, parts: usize) -> Vec<IndexRange> {
        self.full_range().split(parts)
    }

    fn decode(&self, mut index: u64) -> MachineDescriptor {
        let slots = self.num_states * SYMBOLS;
        let mut rules = vec![Transition::new(0, Move::Left, NextState::Halt); slots];
        for slot in (0..slots).rev() {
            rules[slot] = self.decode_rule(index % self.radix);
            index /= self.radix;
        }
        MachineDescriptor::from_rules_unchecked(self.num_states, rules)
    }

    /// Digit → rule: write outermost, move middle, next state innermost
    fn decode_rule(&self, digit: u64) -> Transition {
        let targets = self.num_states as u64 + 1;
        let write = (digit / (2 * targets)) as Symbol;
        let movement = if (digit / targets) % 2 == 0 {
            Move::Left
        } else {
            Move::Right
        };
        let next = match digit % targets {
            0 => NextState::Halt,
            k => NextState::Goto((k - 1) as State),
        };
        Transition::new(write, movement, next)
    }

    fn encode_rule(&self, rule: &Transition) -> u64 {
        let targets = self.num_states as u64 + 1;
        let movement = match rule.movement {
            Move::Left => 0,
            Move::Right => 1,
        };
        let next = match rule.next {
            NextState::Halt => 0,
            NextState::Goto(state) => state as u64 + 1,
        };
        rule.write as u64 * 2 * targets + movement * targets + next
    }
}
