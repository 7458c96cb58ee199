//! Canonical string form of a word
//!
//! Symbols map to lowercase ASCII letters by direct indexing, a fixed
//! alphabet independent of cardinality. The string alone cannot carry the
//! source length, so decoding sets `source_length = symbol_count`; the
//! cardinality travels out-of-band.

use crate::breakpoints::Breakpoints;
use crate::word::{Symbol, Word};
use sax_core::{Error, Result};

/// Fixed codec alphabet; comfortably larger than the maximum cardinality.
const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Render `word` as its canonical alphabet string.
///
/// One character per symbol, output length equals the symbol count.
/// A symbol outside the alphabet is rejected with `InvalidParameter`;
/// well-formed words cannot trigger this.
pub fn encode(word: &Word) -> Result<String> {
    let mut out = String::new();
    out.try_reserve_exact(word.symbol_count())
        .map_err(|_| Error::allocation("codec string", word.symbol_count()))?;
    for &symbol in word.symbols() {
        let ch = ALPHABET
            .get(symbol as usize)
            .copied()
            .ok_or_else(|| {
                Error::InvalidParameter(format!("symbol {symbol} exceeds the codec alphabet"))
            })?;
        out.push(ch as char);
    }
    Ok(out)
}

/// Rebuild a word from its alphabet string and cardinality.
///
/// Fails with `InvalidParameter` when the string is shorter than two
/// characters, the cardinality is outside [2, 16], a character is outside
/// the alphabet, or a character's index is illegal for the requested
/// cardinality.
pub fn decode(s: &str, cardinality: usize) -> Result<Word> {
    Breakpoints::for_cardinality(cardinality)?;
    if s.len() <= 1 {
        return Err(Error::InvalidParameter(
            "SAX string length must be > 1".to_string(),
        ));
    }

    let mut symbols = Vec::new();
    symbols
        .try_reserve_exact(s.len())
        .map_err(|_| Error::allocation("symbol buffer", s.len()))?;
    for byte in s.bytes() {
        if !byte.is_ascii_lowercase() {
            return Err(Error::InvalidParameter(format!(
                "character '{}' is outside the codec alphabet",
                byte as char
            )));
        }
        let index = (byte - b'a') as usize;
        if index >= cardinality {
            return Err(Error::InvalidParameter(format!(
                "symbol '{}' is illegal for cardinality {cardinality}",
                byte as char
            )));
        }
        symbols.push(index as Symbol);
    }

    Ok(Word::from_parts(symbols.len(), cardinality, symbols))
}
