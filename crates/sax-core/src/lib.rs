//! Core building blocks for the sax-series workspace
//!
//! This crate carries the pieces shared by every sax-series crate: the
//! unified [`Error`] taxonomy, scalar normalization helpers, and the
//! fixed-capacity [`RingBuffer`] that backs sliding windows.
//!
//! ## Usage
//!
//! ```rust
//! use sax_core::RingBuffer;
//!
//! let mut buf = RingBuffer::with_capacity(3).unwrap();
//! for v in [1.0, 2.0, 3.0, 4.0] {
//!     buf.push(v);
//! }
//! // Oldest sample was evicted; contents are chronological
//! assert_eq!(buf.iter().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0]);
//! ```

pub mod error;
pub mod math;
pub mod ring;

pub use error::{Error, Result};
pub use math::{mean, population_std, STAT_EPS};
pub use ring::RingBuffer;
