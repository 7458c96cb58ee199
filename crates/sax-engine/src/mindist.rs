//! Lower-bounding distance between symbolic words
//!
//! `mindist` never exceeds the Euclidean distance between the
//! z-normalized raw series the words were derived from; that bound is
//! what makes symbolic pruning safe. Structurally incompatible words
//! (different symbol counts, unsupported cardinality) yield NaN rather
//! than an error, since callers routinely probe compatibility.
//!
//! Words of differing cardinality are compared on the finer of the two
//! breakpoint tables. A coarser symbol is projected onto the contiguous
//! range of finer regions its own region intersects; the lower bound
//! takes the closest pair of projected regions, the upper bracket the
//! farthest.

use crate::breakpoints::Breakpoints;
use crate::word::{Symbol, Word};

/// Result of [`mindist_bounds`].
///
/// `below` is the single-resolution lower bound and always equals
/// `distance`; `above` brackets from the other side the distance a
/// re-encoding of both words at the shared cardinality could produce.
/// For equal cardinalities all three coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinDistBounds {
    pub distance: f64,
    pub above: f64,
    pub below: f64,
}

impl MinDistBounds {
    /// False when the inputs were structurally incompatible.
    pub fn is_defined(&self) -> bool {
        !self.distance.is_nan()
    }

    fn undefined() -> Self {
        Self {
            distance: f64::NAN,
            above: f64::NAN,
            below: f64::NAN,
        }
    }
}

/// Lower bound on the true normalized Euclidean distance between the
/// series underlying `a` and `b`.
///
/// NaN when the words' symbol counts differ or a cardinality is
/// unsupported.
pub fn mindist(a: &Word, b: &Word) -> f64 {
    mindist_bounds(a, b).distance
}

/// As [`mindist`], additionally bracketing the distance from above when
/// the cardinalities differ.
pub fn mindist_bounds(a: &Word, b: &Word) -> MinDistBounds {
    if a.symbol_count() != b.symbol_count() {
        return MinDistBounds::undefined();
    }
    let (table_a, table_b) = match (
        Breakpoints::for_cardinality(a.cardinality()),
        Breakpoints::for_cardinality(b.cardinality()),
    ) {
        (Ok(ta), Ok(tb)) => (ta, tb),
        _ => return MinDistBounds::undefined(),
    };
    let fine = if table_a.cardinality() >= table_b.cardinality() {
        table_a
    } else {
        table_b
    };

    let mut sum_below = 0.0;
    let mut sum_above = 0.0;
    for (&sa, &sb) in a.symbols().iter().zip(b.symbols()) {
        let (a_lo, a_hi) = project(sa, &table_a, &fine);
        let (b_lo, b_hi) = project(sb, &table_b, &fine);

        // Closest pair of projected regions; zero when the ranges overlap
        let below = if a_lo <= b_hi && b_lo <= a_hi {
            0.0
        } else if a_lo > b_hi {
            fine.region_distance(b_hi, a_lo)
        } else {
            fine.region_distance(a_hi, b_lo)
        };
        // Farthest pair
        let above = fine
            .region_distance(a_lo, b_hi)
            .max(fine.region_distance(a_hi, b_lo));

        sum_below += below * below;
        sum_above += above * above;
    }

    let scale = (a.source_length() as f64 / a.symbol_count() as f64).sqrt();
    MinDistBounds {
        distance: scale * sum_below.sqrt(),
        above: scale * sum_above.sqrt(),
        below: scale * sum_below.sqrt(),
    }
}

/// Range of `to`-table symbols whose regions intersect the region of
/// symbol `s` on the `from` table; inclusive on both ends.
fn project(s: Symbol, from: &Breakpoints, to: &Breakpoints) -> (Symbol, Symbol) {
    if from.cardinality() == to.cardinality() {
        return (s, s);
    }
    let cuts = from.cuts();
    let lower = if s == 0 {
        f64::NEG_INFINITY
    } else {
        cuts[s as usize - 1]
    };
    let upper = if s as usize == from.cardinality() - 1 {
        f64::INFINITY
    } else {
        cuts[s as usize]
    };
    // Finer region containing each edge; the upper edge is exclusive, so
    // a shared cut value belongs to the region below it
    let lo = to.cuts().iter().take_while(|cut| **cut <= lower).count();
    let hi = to.cuts().iter().take_while(|cut| **cut < upper).count();
    (lo as Symbol, hi as Symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn test_self_distance_is_zero() {
        let a = Word::from_values(&ramp(16), 4, 8).unwrap();
        assert_eq!(mindist(&a, &a), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let a = Word::from_values(&ramp(16), 4, 8).unwrap();
        let rev: Vec<f64> = ramp(16).into_iter().rev().collect();
        let b = Word::from_values(&rev, 4, 8).unwrap();
        assert_relative_eq!(mindist(&a, &b), mindist(&b, &a));
        assert!(mindist(&a, &b) > 0.0);
    }

    #[test]
    fn test_incompatible_words_are_nan() {
        let a = Word::from_values(&ramp(16), 4, 8).unwrap();
        let b = Word::from_values(&ramp(16), 8, 8).unwrap();
        assert!(mindist(&a, &b).is_nan());
        assert!(!mindist_bounds(&a, &b).is_defined());
    }

    #[test]
    fn test_known_distance() {
        // Words [0,1,2,3] and [3,2,1,0] at c=4, n=8: positions 0 and 3
        // pair symbols (0,3), the middle positions are adjacent pairs
        let up = Word::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], 4, 4).unwrap();
        let down = Word::from_values(&[8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0], 4, 4).unwrap();
        assert_eq!(up.symbols(), &[0, 1, 2, 3]);
        assert_eq!(down.symbols(), &[3, 2, 1, 0]);

        let gap: f64 = 2.0 * 0.6744897502; // cuts[2] - cuts[0] at c=4
        let expected = (8.0f64 / 4.0).sqrt() * (2.0 * gap * gap).sqrt();
        assert_relative_eq!(mindist(&up, &down), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_equal_cardinality_bounds_coincide() {
        let a = Word::from_values(&ramp(16), 4, 8).unwrap();
        let rev: Vec<f64> = ramp(16).into_iter().rev().collect();
        let b = Word::from_values(&rev, 4, 8).unwrap();
        let bounds = mindist_bounds(&a, &b);
        assert_eq!(bounds.distance, bounds.below);
        assert_eq!(bounds.distance, bounds.above);
    }

    #[test]
    fn test_mixed_cardinality_brackets() {
        let series: Vec<f64> = (0..16).map(|i| (i as f64 * 0.7).sin() * 3.0 + i as f64).collect();
        let rev: Vec<f64> = series.iter().rev().copied().collect();
        let coarse = Word::from_values(&series, 4, 4).unwrap();
        let fine = Word::from_values(&rev, 4, 16).unwrap();

        let bounds = mindist_bounds(&coarse, &fine);
        assert!(bounds.is_defined());
        assert_eq!(bounds.distance, bounds.below);
        assert!(bounds.above >= bounds.below);

        // The coarse word's symbols cover wider regions, so the mixed
        // lower bound cannot exceed the bound at the fine cardinality
        let both_fine = mindist(
            &Word::from_values(&series, 4, 16).unwrap(),
            &Word::from_values(&rev, 4, 16).unwrap(),
        );
        assert!(bounds.below <= both_fine + 1e-12);
        // And the upper bracket must cover that re-encoded distance
        assert!(bounds.above >= both_fine - 1e-12);
    }

    #[test]
    fn test_mixed_cardinality_is_symmetric() {
        let series: Vec<f64> = (0..16).map(|i| ((i * i) % 7) as f64).collect();
        let rev: Vec<f64> = series.iter().rev().copied().collect();
        let a = Word::from_values(&series, 4, 4).unwrap();
        let b = Word::from_values(&rev, 4, 16).unwrap();
        assert_relative_eq!(mindist(&a, &b), mindist(&b, &a), epsilon = 1e-12);
    }

    #[test]
    fn test_projection_ranges() {
        let c2 = Breakpoints::for_cardinality(2).unwrap();
        let c4 = Breakpoints::for_cardinality(4).unwrap();
        // (-inf, 0) at c=2 covers the two lower quartile regions
        assert_eq!(project(0, &c2, &c4), (0, 1));
        // [0, inf) covers the two upper ones
        assert_eq!(project(1, &c2, &c4), (2, 3));

        let c3 = Breakpoints::for_cardinality(3).unwrap();
        // c=3 regions straddle the c=4 cuts
        assert_eq!(project(0, &c3, &c4), (0, 1));
        assert_eq!(project(1, &c3, &c4), (1, 2));
        assert_eq!(project(2, &c3, &c4), (2, 3));
    }

    #[test]
    fn test_string_decoded_words_scale_by_symbol_count() {
        // Decoded words carry no raw length: scale factor is 1
        let a = Word::from_sax_string("ad", 4).unwrap();
        let b = Word::from_sax_string("da", 4).unwrap();
        let gap: f64 = 2.0 * 0.6744897502;
        assert_relative_eq!(mindist(&a, &b), (2.0 * gap * gap).sqrt(), epsilon = 1e-9);
    }
}
