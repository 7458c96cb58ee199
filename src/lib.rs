//! # sax-series
//!
//! Symbolic aggregate approximation (SAX) for streaming and batch time
//! series: encode real-valued series into compact words over a bounded
//! alphabet, slide a fixed-capacity window over a live stream, and
//! compare words with a distance that provably never exceeds the true
//! distance between the underlying normalized series.
//!
//! This crate re-exports the public API of the workspace members:
//!
//! - [`sax_core`] — error taxonomy, normalization helpers, ring buffer
//! - [`sax_engine`] — breakpoint tables, encoder, words, windows,
//!   mindist, string codec
//!
//! ## Batch encoding
//!
//! ```rust
//! use sax_series::{mindist, Word};
//!
//! let up = Word::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], 4, 4).unwrap();
//! let down = Word::from_values(&[8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0], 4, 4).unwrap();
//!
//! assert_eq!(up.to_sax_string().unwrap(), "abcd");
//! assert_eq!(mindist(&up, &up), 0.0);
//! assert!(mindist(&up, &down) > 0.0);
//! ```
//!
//! ## Streaming
//!
//! ```rust
//! use sax_series::Window;
//!
//! let mut window = Window::new(8, 4, 4).unwrap();
//! assert!(window.append_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]).unwrap().is_none());
//!
//! // The 8th sample fills the window; from here on every sample slides it
//! let word = window.append_value(8.0).unwrap().expect("window full");
//! assert_eq!(word.symbol_count(), 4);
//! ```
//!
//! ## Persistence
//!
//! The canonical persistence format is the codec string plus the
//! cardinality carried out-of-band:
//!
//! ```rust
//! use sax_series::Word;
//!
//! let word = Word::from_values(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0], 4, 8).unwrap();
//! let stored = word.to_sax_string().unwrap();
//! let restored = Word::from_sax_string(&stored, 8).unwrap();
//! assert_eq!(restored.symbols(), word.symbols());
//! ```

pub use sax_core::{mean, population_std, Error, Result, RingBuffer, STAT_EPS};
pub use sax_engine::{
    mindist, mindist_bounds, paa, to_sax, version, Breakpoints, MinDistBounds, Symbol, Window,
    Word, MAX_CARDINALITY, MAX_WINDOW_LEN, MAX_WORD_LEN, MIN_CARDINALITY,
};
