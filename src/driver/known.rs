//! Published Busy Beaver values used to check search results

/// Known BB(n) and Sigma(n) for one state count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownValues {
    /// Number of states n
    pub states: usize,
    /// Maximum steps of a halting machine
    pub bb: u64,
    /// Maximum ones left by a halting machine
    pub sigma: u64,
}

/// BB(1..=5) and Sigma(1..=5)
pub const KNOWN_VALUES: [KnownValues; 5] = [
    KnownValues { states: 1, bb: 1, sigma: 1 },
    KnownValues { states: 2, bb: 6, sigma: 4 },
    KnownValues { states: 3, bb: 21, sigma: 6 },
    KnownValues { states: 4, bb: 107, sigma: 13 },
    KnownValues { states: 5, bb: 47_176_870, sigma: 4_098 },
];

/// Look up known values for `states`
pub fn known_values(states: usize) -> Option<KnownValues> {
    KNOWN_VALUES.iter().copied().find(|known| known.states == states)
}

/// Outcome of checking a computed pair against the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// The values compared against
    pub known: KnownValues,
    /// Computed BB equals the known value
    pub bb_matches: bool,
    /// Computed Sigma equals the known value
    pub sigma_matches: bool,
}

impl Comparison {
    /// Compare computed values with the table, if `states` is listed
    pub fn check(states: usize, bb: u64, sigma: u64) -> Option<Self> {
        known_values(states).map(|known| Self {
            known,
            bb_matches: bb == known.bb,
            sigma_matches: sigma == known.sigma,
        })
    }

    /// Both values match
    pub fn matches(&self) -> bool {
        self.bb_matches && self.sigma_matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(known_values(4).map(|k| (k.bb, k.sigma)), Some((107, 13)));
        assert_eq!(known_values(0), None);
        assert_eq!(known_values(6), None);
    }

    #[test]
    fn test_check() {
        let hit = Comparison::check(2, 6, 4).unwrap();
        assert!(hit.matches());

        let miss = Comparison::check(3, 21, 5).unwrap();
        assert!(miss.bb_matches);
        assert!(!miss.sigma_matches);
        assert!(!miss.matches());

        assert!(Comparison::check(9, 1, 1).is_none());
    }
}
