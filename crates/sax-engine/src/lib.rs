//! Symbolic aggregate approximation for numeric time series
//!
//! Converts real-valued series into short words over a bounded alphabet
//! while preserving enough shape for provably lower-bounded distance
//! comparisons. The pieces compose in dependency order:
//!
//! - [`breakpoints`] — const standard-normal quantile tables, cardinality
//!   2 through 16
//! - [`encoder`] — z-normalization, piecewise aggregate approximation,
//!   symbol assignment
//! - [`word`] — the immutable symbolic result
//! - [`window`] — sliding re-encoding of the most recent `n` samples
//! - [`mindist`] — lower-bounding distance between words, including words
//!   of differing cardinality
//! - [`codec`] — canonical string form
//!
//! ## Usage
//!
//! ```rust
//! use sax_engine::{mindist, Window, Word};
//!
//! // Stream samples through a sliding window of 8, encoded as 4 symbols
//! // over a 4-letter alphabet
//! let mut window = Window::new(8, 4, 4).unwrap();
//! let word = window
//!     .append_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0])
//!     .unwrap()
//!     .expect("window just filled");
//! assert_eq!(word.to_sax_string().unwrap(), "abcd");
//!
//! // Compare against a batch-encoded series; the result never exceeds
//! // the true distance between the normalized series
//! let other = Word::from_values(&[8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0], 4, 4).unwrap();
//! assert!(mindist(&word, &other) > 0.0);
//! ```

pub mod breakpoints;
pub mod codec;
pub mod encoder;
pub mod mindist;
pub mod window;
pub mod word;

pub use breakpoints::{Breakpoints, MAX_CARDINALITY, MIN_CARDINALITY};
pub use encoder::{paa, to_sax};
pub use mindist::{mindist, mindist_bounds, MinDistBounds};
pub use window::{Window, MAX_WINDOW_LEN, MAX_WORD_LEN};
pub use word::{Symbol, Word};

// Re-exported so downstream crates share one error taxonomy
pub use sax_core::{Error, Result};

/// Crate version, for callers that surface it alongside encoded words.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
