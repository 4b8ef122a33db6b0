//! Contiguous index ranges for splitting a search across workers

/// Half-open range of linear machine indices `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexRange {
    /// First index (inclusive)
    pub start: u64,
    /// One past the last index
    pub end: u64,
}

impl IndexRange {
    /// Create range; an inverted range is treated as empty
    pub fn new(start: u64, end: u64) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Number of indices covered
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Whether the range covers nothing
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Split at an absolute index (clamped into the range)
    pub fn split_at(&self, mid: u64) -> (IndexRange, IndexRange) {
        let mid = mid.clamp(self.start, self.end);
        (
            IndexRange::new(self.start, mid),
            IndexRange::new(mid, self.end),
        )
    }

    /// Split into at most `parts` non-empty ranges of near-equal length
    ///
    /// The pieces are in order, disjoint, and cover the range exactly. The
    /// first `len % parts` pieces are one index longer than the rest.
    pub fn split(&self, parts: usize) -> Vec<IndexRange> {
        let len = self.len();
        if len == 0 {
            return Vec::new();
        }
        let parts = (parts.max(1) as u64).min(len);
        let base = len / parts;
        let extra = len % parts;

        let mut shards = Vec::with_capacity(parts as usize);
        let mut start = self.start;
        for i in 0..parts {
            let width = base + u64::from(i < extra);
            shards.push(IndexRange::new(start, start + width));
            start += width;
        }
        debug_assert_eq!(start, self.end);
        shards
    }
}
