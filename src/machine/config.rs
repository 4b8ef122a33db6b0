//! Configuration (instantaneous description) of a running machine
//!
//! Represents complete state at a point in time:
//! - Control state q ∈ Q, or HALT
//! - Head position (may go negative)
//! - Tape contents (grown on demand, blank = 0)

use super::{State, Symbol, Transition, BLANK};

/// Complete instantaneous description of one run
///
/// Owned exclusively by a single simulation and dropped when it finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Current control state (`None` once HALT has been entered)
    state: Option<State>,

    /// Head position
    head: i64,

    /// Tape contents
    tape: Tape,

    /// Steps applied so far
    steps: u64,
}

impl Configuration {
    /// Blank tape, head at 0, state 0
    pub fn initial() -> Self {
        Self {
            state: Some(0),
            head: 0,
            tape: Tape::blank(),
            steps: 0,
        }
    }

    /// Get current state (`None` if halted)
    pub fn state(&self) -> Option<State> {
        self.state
    }

    /// Whether HALT has been entered
    pub fn is_halted(&self) -> bool {
        self.state.is_none()
    }

    /// Get head position
    pub fn head(&self) -> i64 {
        self.head
    }

    /// Number of transitions applied
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Read symbol under the head
    pub fn read(&self) -> Symbol {
        self.tape.read(self.head)
    }

    /// Apply transition to this configuration
    pub fn apply_transition(&mut self, transition: &Transition) {
        self.tape.write(self.head, transition.write);
        self.head = transition.movement.apply(self.head);
        self.state = transition.next.state();
        self.steps += 1;
    }

    /// Get tape
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Consume the configuration, keeping only the tape
    pub fn into_tape(self) -> Tape {
        self.tape
    }
}

/// Bi-infinite binary tape
///
/// Cells are stored in two buffers growing away from the origin: `right[i]`
/// holds position `i`, `left[i]` holds position `-(i + 1)`. A run only ever
/// moves one cell per step, so the visited positions form one contiguous
/// interval around 0 and storage equals the number of distinct cells visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tape {
    /// Positions 0, 1, 2, ...
    right: Vec<Symbol>,

    /// Positions -1, -2, -3, ...
    left: Vec<Symbol>,
}

impl Tape {
    /// Create blank tape
    pub fn blank() -> Self {
        Self::default()
    }

    /// Read symbol at position (blank if never written)
    pub fn read(&self, position: i64) -> Symbol {
        let (half, idx) = self.locate(position);
        half.get(idx).copied().unwrap_or(BLANK)
    }

    /// Write symbol at position
    ///
    /// Storage grows out to `position`, so callers must reach cells one at a
    /// time from the origin, as a moving head does.
    pub(crate) fn write(&mut self, position: i64, symbol: Symbol) {
        let (half, idx) = if position >= 0 {
            (&mut self.right, position as usize)
        } else {
            (&mut self.left, (-(position + 1)) as usize)
        };
        if idx >= half.len() {
            if symbol == BLANK {
                // Unwritten cells already read as blank
                return;
            }
            half.resize(idx + 1, BLANK);
        }
        half[idx] = symbol;
    }

    /// Count of cells holding 1
    pub fn count_ones(&self) -> u64 {
        self.right
            .iter()
            .chain(self.left.iter())
            .filter(|&&symbol| symbol == 1)
            .count() as u64
    }

    /// Get bounds of stored region (inclusive)
    pub fn bounds(&self) -> (i64, i64) {
        if self.right.is_empty() && self.left.is_empty() {
            return (0, 0);
        }
        let min_pos = -(self.left.len() as i64);
        let max_pos = (self.right.len() as i64 - 1).max(min_pos);
        (min_pos, max_pos)
    }

    /// Space usage: number of stored cells
    pub fn space_usage(&self) -> usize {
        self.right.len() + self.left.len()
    }

    fn locate(&self, position: i64) -> (&[Symbol], usize) {
        if position >= 0 {
            (self.right.as_slice(), position as usize)
        } else {
            (self.left.as_slice(), (-(position + 1)) as usize)
        }
    }
}
