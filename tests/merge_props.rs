use proptest::prelude::*;
use busy_beaver::driver::scan_range;
use busy_beaver::{IndexRange, SearchSpace, SearchStats};

const BOUND: u64 = 20;

fn full_scan() -> SearchStats {
    let space = SearchSpace::new(2).unwrap();
    scan_range(&space, space.full_range(), BOUND)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn two_way_split_merges_to_full_scan(mid in 0u64..=20_736) {
        let space = SearchSpace::new(2).unwrap();
        let (left, right) = space.full_range().split_at(mid);

        let a = scan_range(&space, left, BOUND);
        let b = scan_range(&space, right, BOUND);
        let expected = full_scan();

        prop_assert_eq!(a.merge(b), expected);
        prop_assert_eq!(b.merge(a), expected);
    }

    #[test]
    fn three_way_merge_is_associative(
        first in 0u64..=20_736,
        second in 0u64..=20_736,
    ) {
        let space = SearchSpace::new(2).unwrap();
        let (lo, hi) = (first.min(second), first.max(second));
        let a = scan_range(&space, IndexRange::new(0, lo), BOUND);
        let b = scan_range(&space, IndexRange::new(lo, hi), BOUND);
        let c = scan_range(&space, IndexRange::new(hi, space.size()), BOUND);

        prop_assert_eq!(a.merge(b).merge(c), a.merge(b.merge(c)));
        prop_assert_eq!(a.merge(b).merge(c), c.merge(a).merge(b));
        prop_assert_eq!(a.merge(b).merge(c), full_scan());
    }

    #[test]
    fn interleaved_subsets_merge_to_full_scan(stride in 2u64..7) {
        // Arbitrary (non-contiguous) partition: indices by residue class
        let space = SearchSpace::new(2).unwrap();
        let merged = (0..stride)
            .map(|residue| {
                space
                    .iter()
                    .filter(|(index, _)| index % stride == residue)
                    .map(|(index, machine)| (index, busy_beaver::run(&machine, BOUND)))
                    .collect::<SearchStats>()
            })
            .fold(SearchStats::new(), SearchStats::merge);

        prop_assert_eq!(merged, full_scan());
    }
}
