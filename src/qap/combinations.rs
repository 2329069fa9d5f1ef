//! The swap neighborhood: every unordered pair of facilities.

use super::types::{FacilityId, FACILITIES};
use crate::math::choose;

/// Number of facility pairs, `C(FACILITIES, 2)`.
pub const COMBINATION_COUNT: usize = choose(FACILITIES, 2);

const _: () = assert!(COMBINATION_COUNT == 190);

/// All pairs `(i, j)` with `j < i`, outer index `i` ascending, inner `j`
/// ascending.
pub static COMBINATIONS: [(FacilityId, FacilityId); COMBINATION_COUNT] = build();

const fn build() -> [(FacilityId, FacilityId); COMBINATION_COUNT] {
    let mut pairs = [(0, 0); COMBINATION_COUNT];
    let mut k = 0;
    let mut i = 0;
    while i < FACILITIES {
        let mut j = 0;
        while j < i {
            pairs[k] = (i, j);
            k += 1;
            j += 1;
        }
        i += 1;
    }
    assert!(k == COMBINATION_COUNT);
    pairs
}

/// The full move set, identical on every call.
pub fn combinations() -> &'static [(FacilityId, FacilityId)] {
    &COMBINATIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_count() {
        assert_eq!(combinations().len(), 190);
    }

    #[test]
    fn test_order() {
        let pairs = combinations();
        assert_eq!(pairs[0], (1, 0));
        assert_eq!(pairs[1], (2, 0));
        assert_eq!(pairs[2], (2, 1));
        assert_eq!(pairs[3], (3, 0));
        assert_eq!(pairs[189], (19, 18));
    }

    #[test]
    fn test_pairs_are_distinct_and_in_range() {
        let mut seen = HashSet::new();
        for &(i, j) in combinations() {
            assert!(j < i && i < FACILITIES);
            assert!(seen.insert((j, i)));
        }
        assert_eq!(seen.len(), COMBINATION_COUNT);
    }

    #[test]
    fn test_restartable() {
        assert_eq!(combinations(), combinations());
        assert!(std::ptr::eq(combinations(), combinations()));
    }
}
