//! Symbolic words: the immutable result of encoding a series
//!
//! A [`Word`] holds the ordered symbols plus the dimensional metadata
//! needed to scale distances: the alphabet size it was quantized with and
//! the number of raw values it summarizes. Words are plain owned values;
//! handing one out of a window always clones, so callers never alias live
//! window state.

use crate::{codec, encoder};
use sax_core::Result;
use std::fmt;

/// One quantized position of a word, always below the cardinality.
pub type Symbol = u8;

/// Symbolic representation of a series segment.
///
/// Equality is full value equality: symbol count, cardinality, source
/// length, and every symbol pairwise. It never fails, so it doubles as the
/// compatibility probe callers use before distance computations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    source_len: usize,
    cardinality: usize,
    symbols: Vec<Symbol>,
}

impl Word {
    /// Assemble a word whose invariants the caller has already upheld:
    /// every symbol below `cardinality`, `symbols` non-empty,
    /// `source_len >= symbols.len()`.
    pub(crate) fn from_parts(source_len: usize, cardinality: usize, symbols: Vec<Symbol>) -> Self {
        debug_assert!(!symbols.is_empty());
        debug_assert!(source_len >= symbols.len());
        debug_assert!(symbols.iter().all(|s| (*s as usize) < cardinality));
        Self {
            source_len,
            cardinality,
            symbols,
        }
    }

    /// Encode a raw series directly into a word.
    ///
    /// Same preconditions as [`encoder::to_sax`]: more than one value,
    /// `w > 1`, cardinality in (1, 16], and `w` dividing the length.
    pub fn from_values(values: &[f64], w: usize, cardinality: usize) -> Result<Self> {
        encoder::to_sax(values, w, cardinality)
    }

    /// Rebuild a word from its codec string and the cardinality it was
    /// encoded with.
    ///
    /// The raw length is not recoverable from a string, so the decoded
    /// word's `source_length` equals its `symbol_count`; callers that
    /// need the true raw length for distance scaling carry it
    /// out-of-band.
    pub fn from_sax_string(s: &str, cardinality: usize) -> Result<Self> {
        codec::decode(s, cardinality)
    }

    /// Render the canonical codec string for this word.
    pub fn to_sax_string(&self) -> Result<String> {
        codec::encode(self)
    }

    /// Number of symbols (PAA segments), `w`.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Alphabet size this word was quantized with, `c`.
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// Number of raw values the word summarizes, `n`.
    pub fn source_length(&self) -> usize {
        self.source_len
    }

    /// The ordered symbols, each below `cardinality()`.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_sax_string().map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_accessors() {
        let word = Word::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], 4, 4).unwrap();
        assert_eq!(word.symbol_count(), 4);
        assert_eq!(word.cardinality(), 4);
        assert_eq!(word.source_length(), 8);
        assert!(word.symbols().iter().all(|s| (*s as usize) < 4));
    }

    #[test]
    fn test_equality_is_full_value_equality() {
        let a = Word::from_values(&[1.0, 2.0, 3.0, 4.0], 2, 4).unwrap();
        let b = Word::from_values(&[1.0, 2.0, 3.0, 4.0], 2, 4).unwrap();
        assert_eq!(a, b);

        // Same symbols but different source length are distinct words
        let c = Word::from_parts(2, a.cardinality(), a.symbols().to_vec());
        assert_ne!(a, c);
    }

    #[test]
    fn test_clone_is_independent() {
        let a = Word::from_values(&[1.0, 2.0, 3.0, 4.0], 2, 4).unwrap();
        let b = a.clone();
        drop(a);
        assert_eq!(b.symbol_count(), 2);
    }

    #[test]
    fn test_display_renders_codec_string() {
        let word = Word::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], 4, 4).unwrap();
        assert_eq!(word.to_string(), word.to_sax_string().unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let word = Word::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], 4, 8).unwrap();
        let json = serde_json::to_string(&word).unwrap();
        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(word, back);
    }
}
