//! Turing machine representation and execution
//!
//! Provides abstractions for n-state, 2-symbol Busy Beaver machines:
//! - Single bi-infinite tape over {0, 1}, blank = 0
//! - Finite state set Q = {0, .., n-1} plus the HALT pseudo-state
//! - Total deterministic transition table: exactly 2n rules

mod config;
mod transition;

pub use config::{Configuration, Tape};
pub use transition::{Move, NextState, Transition};

use crate::SearchError;
use std::fmt;
use std::str::FromStr;

/// Tape symbol (0 or 1)
pub type Symbol = u8;

/// Machine state (element of Q)
pub type State = u32;

/// Number of tape symbols
pub const SYMBOLS: usize = 2;

/// Blank symbol
pub const BLANK: Symbol = 0;

/// Largest state count a descriptor may have: states are lettered `A`..`Y`
/// and `Z` is HALT in the text format.
pub const MAX_STATES: usize = 25;

/// Complete transition table for one machine
///
/// Rules are stored state-major, symbol-minor: slot `2 * state + symbol`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MachineDescriptor {
    /// Number of states n
    num_states: usize,

    /// δ as a flat table of 2n rules
    rules: Vec<Transition>,
}

impl MachineDescriptor {
    /// Create fluent builder for an `num_states`-state machine
    pub fn builder(num_states: usize) -> MachineDescriptorBuilder {
        MachineDescriptorBuilder::new(num_states)
    }

    /// Wrap a table already known to be total and in range.
    pub(crate) fn from_rules_unchecked(num_states: usize, rules: Vec<Transition>) -> Self {
        debug_assert_eq!(rules.len(), num_states * SYMBOLS);
        Self { num_states, rules }
    }

    /// Get number of states
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// All rules in slot order
    pub fn rules(&self) -> &[Transition] {
        &self.rules
    }

    /// Look up transition for (state, symbol)
    #[inline]
    pub fn transition(&self, state: State, symbol: Symbol) -> &Transition {
        &self.rules[state as usize * SYMBOLS + symbol as usize]
    }

    /// Execute one step from configuration
    ///
    /// Returns `false` without touching the configuration if it already halted.
    #[inline]
    pub fn step(&self, config: &mut Configuration) -> bool {
        let Some(state) = config.state() else {
            return false;
        };
        let transition = *self.transition(state, config.read());
        config.apply_transition(&transition);
        true
    }
}

impl fmt::Display for MachineDescriptor {
    /// Standard text format, e.g. `1RB1RZ_1LB0RC_1LC1LA`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (state, row) in self.rules.chunks(SYMBOLS).enumerate() {
            if state > 0 {
                write!(f, "_")?;
            }
            for rule in row {
                write!(
                    f,
                    "{}{}{}",
                    rule.write,
                    rule.movement.letter(),
                    rule.next.letter().ok_or(fmt::Error)?
                )?;
            }
        }
        Ok(())
    }
}

impl FromStr for MachineDescriptor {
    type Err = SearchError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = text.trim().split('_').collect();
        let mut builder = MachineDescriptor::builder(rows.len());

        for (state, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != 3 * SYMBOLS {
                return Err(SearchError::InvalidMachine(format!(
                    "row {} of '{}' must have {} characters",
                    state,
                    text,
                    3 * SYMBOLS
                )));
            }
            for (symbol, cell) in chars.chunks(3).enumerate() {
                let write = match cell[0] {
                    '0' => 0,
                    '1' => 1,
                    other => {
                        return Err(SearchError::InvalidMachine(format!(
                            "bad write symbol '{}' in '{}'",
                            other, text
                        )))
                    }
                };
                let movement = match cell[1] {
                    'L' => Move::Left,
                    'R' => Move::Right,
                    other => {
                        return Err(SearchError::InvalidMachine(format!(
                            "bad direction '{}' in '{}'",
                            other, text
                        )))
                    }
                };
                let next = match cell[2] {
                    'Z' => NextState::Halt,
                    c @ 'A'..='Y' => NextState::Goto((c as u8 - b'A') as State),
                    other => {
                        return Err(SearchError::InvalidMachine(format!(
                            "bad next state '{}' in '{}'",
                            other, text
                        )))
                    }
                };
                builder = builder.add_transition(state as State, symbol as Symbol, write, movement, next);
            }
        }

        builder.build()
    }
}

/// Builder for machine descriptors (fluent API)
#[derive(Debug)]
pub struct MachineDescriptorBuilder {
    num_states: usize,
    transitions: Vec<(State, Symbol, Transition)>,
}

impl MachineDescriptorBuilder {
    /// Create new builder
    pub fn new(num_states: usize) -> Self {
        Self {
            num_states,
            transitions: Vec::new(),
        }
    }

    /// Add a transition rule
    pub fn add_transition(
        mut self,
        from_state: State,
        read: Symbol,
        write: Symbol,
        movement: Move,
        next: NextState,
    ) -> Self {
        self.transitions
            .push((from_state, read, Transition::new(write, movement, next)));
        self
    }

    /// Build the descriptor, rejecting partial or out-of-range tables
    pub fn build(self) -> Result<MachineDescriptor, SearchError> {
        if self.num_states == 0 {
            return Err(SearchError::InvalidStateCount(0));
        }
        if self.num_states > MAX_STATES {
            return Err(SearchError::InvalidMachine(format!(
                "{} states exceeds the maximum of {}",
                self.num_states, MAX_STATES
            )));
        }

        let mut slots: Vec<Option<Transition>> = vec![None; self.num_states * SYMBOLS];
        for (from_state, read, transition) in self.transitions {
            if from_state as usize >= self.num_states {
                return Err(SearchError::InvalidMachine(format!(
                    "State {} out of range for {}-state machine",
                    from_state, self.num_states
                )));
            }
            if read as usize >= SYMBOLS || transition.write as usize >= SYMBOLS {
                return Err(SearchError::InvalidMachine(format!(
                    "Symbol out of range in rule for state {}",
                    from_state
                )));
            }
            if let NextState::Goto(next) = transition.next {
                if next as usize >= self.num_states {
                    return Err(SearchError::InvalidMachine(format!(
                        "Next state {} out of range for {}-state machine",
                        next, self.num_states
                    )));
                }
            }

            let slot = &mut slots[from_state as usize * SYMBOLS + read as usize];
            if slot.is_some() {
                return Err(SearchError::InvalidMachine(format!(
                    "Duplicate transition for state {} and symbol {}",
                    from_state, read
                )));
            }
            *slot = Some(transition);
        }

        let rules = slots
            .into_iter()
            .enumerate()
            .map(|(idx, slot)| {
                slot.ok_or_else(|| {
                    SearchError::InvalidMachine(format!(
                        "No transition for state {} and symbol {}",
                        idx / SYMBOLS,
                        idx % SYMBOLS
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MachineDescriptor::from_rules_unchecked(self.num_states, rules))
    }
}
