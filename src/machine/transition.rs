//! Transition rules δ: Q × {0,1} → {0,1} × {L,R} × (Q ∪ {HALT})

use super::{State, Symbol, MAX_STATES};

/// Single transition rule
///
/// Immutable once built; the descriptor owns one per (state, symbol) slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// Symbol written under the head
    pub write: Symbol,

    /// Head movement after writing
    pub movement: Move,

    /// Successor state (or HALT)
    pub next: NextState,
}

impl Transition {
    /// Create a rule
    pub const fn new(write: Symbol, movement: Move, next: NextState) -> Self {
        Self {
            write,
            movement,
            next,
        }
    }

    /// Whether taking this rule halts the machine
    pub fn halts(&self) -> bool {
        self.next == NextState::Halt
    }
}

/// Head movement direction
///
/// Busy Beaver machines always move; there is no `Stay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    /// Move left (decrement position)
    Left,

    /// Move right (increment position)
    Right,
}

impl Move {
    /// Apply move to position
    pub fn apply(&self, position: i64) -> i64 {
        match self {
            Move::Left => position - 1,
            Move::Right => position + 1,
        }
    }

    /// Letter used in the text format
    pub fn letter(&self) -> char {
        match self {
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }
}

/// Target of a transition: another state or the absorbing HALT pseudo-state
///
/// HALT is never indexed into the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NextState {
    /// Stop the machine
    Halt,

    /// Continue in the given state
    Goto(State),
}

impl NextState {
    /// State id, if not halting
    pub fn state(&self) -> Option<State> {
        match self {
            NextState::Halt => None,
            NextState::Goto(state) => Some(*state),
        }
    }

    /// Letter used in the text format (`A` = state 0, `Z` = HALT)
    ///
    /// `None` for states past `Y`, which the text format cannot name.
    pub fn letter(&self) -> Option<char> {
        match self {
            NextState::Halt => Some('Z'),
            NextState::Goto(state) if (*state as usize) < MAX_STATES => {
                Some((b'A' + *state as u8) as char)
            }
            NextState::Goto(_) => None,
        }
    }
}
