//! The to-SAX pipeline: z-normalize, piecewise-aggregate, quantize
//!
//! A pure function of its input: no global state beyond the const
//! breakpoint tables, no side effects. Windows and direct word
//! construction both funnel through [`to_sax`].

use crate::breakpoints::Breakpoints;
use crate::word::{Symbol, Word};
use sax_core::{math, Error, Result};

/// Encode `values` into a word of `w` symbols at the given cardinality.
///
/// Preconditions, each rejected with `InvalidParameter`: the series is
/// longer than one value, `w > 1`, cardinality in (1, 16], and `w`
/// divides the series length exactly.
///
/// A series whose population standard deviation falls below
/// [`math::STAT_EPS`] is treated as constant: every segment takes the
/// midpoint symbol `c / 2` and no normalized values are computed, so a
/// near-zero scale never divides anything.
pub fn to_sax(values: &[f64], w: usize, cardinality: usize) -> Result<Word> {
    let n = values.len();
    if n <= 1 {
        return Err(Error::InvalidParameter(
            "series length must be > 1".to_string(),
        ));
    }
    if w <= 1 {
        return Err(Error::InvalidParameter(
            "word length must be > 1".to_string(),
        ));
    }
    let breakpoints = Breakpoints::for_cardinality(cardinality)?;
    if n % w != 0 {
        return Err(Error::non_dividing(n, w));
    }

    let mut symbols = Vec::new();
    symbols
        .try_reserve_exact(w)
        .map_err(|_| Error::allocation("symbol buffer", w))?;

    // Step 1: moments of the raw series
    let mean = math::mean(values);
    let std = math::population_std(values, mean);

    // Step 2: constant series take the alphabet midpoint
    if std < math::STAT_EPS {
        symbols.resize(w, (cardinality / 2) as Symbol);
        return Ok(Word::from_parts(n, cardinality, symbols));
    }

    // Steps 3-5: normalize, segment means, quantize
    let segment_len = n / w;
    for segment in values.chunks_exact(segment_len) {
        let segment_mean = segment
            .iter()
            .map(|v| (v - mean) / std)
            .sum::<f64>()
            / segment_len as f64;
        symbols.push(breakpoints.symbol_for(segment_mean));
    }

    Ok(Word::from_parts(n, cardinality, symbols))
}

/// Piecewise aggregate approximation: the mean of each of the `w` equal
/// segments of `values`.
///
/// Same divisibility requirement as [`to_sax`]; no normalization is
/// applied here.
pub fn paa(values: &[f64], w: usize) -> Result<Vec<f64>> {
    if values.is_empty() || w == 0 {
        return Err(Error::InvalidParameter(
            "series and segment count must be non-empty".to_string(),
        ));
    }
    if values.len() % w != 0 {
        return Err(Error::non_dividing(values.len(), w));
    }
    let segment_len = values.len() / w;
    let mut out = Vec::new();
    out.try_reserve_exact(w)
        .map_err(|_| Error::allocation("segment buffer", w))?;
    for segment in values.chunks_exact(segment_len) {
        out.push(math::mean(segment));
    }
    Ok(out)
}
