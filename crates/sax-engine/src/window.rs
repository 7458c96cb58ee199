//! Sliding windows: continuous re-encoding of the most recent samples
//!
//! A [`Window`] owns a ring buffer of capacity `n` and a cached word. It
//! moves through two observable states: *filling*, while fewer than `n`
//! samples have been accepted since creation or the last reset, and
//! *full*, once the n-th sample lands. From then on every accepted sample
//! slides the buffer and refreshes the cached word, until an explicit
//! [`Window::reset`] returns the window to filling.
//!
//! Windows are exclusively owned: the mutating API takes `&mut self`, and
//! words handed to callers are always independent clones of the cache.

use crate::breakpoints::Breakpoints;
use crate::encoder;
use crate::word::Word;
use sax_core::{Error, Result, RingBuffer};
use tracing::debug;

/// Largest supported window capacity.
pub const MAX_WINDOW_LEN: usize = 4096;
/// Largest supported word length.
pub const MAX_WORD_LEN: usize = 2048;

/// Fixed-capacity sliding buffer plus its current symbolic encoding.
#[derive(Debug, Clone)]
pub struct Window {
    word_len: usize,
    cardinality: usize,
    ring: RingBuffer,
    /// Chronological copy of the ring contents, reused across encodes.
    scratch: Vec<f64>,
    current: Option<Word>,
}

impl Window {
    /// Create a window over the `n` most recent samples, encoded as `w`
    /// symbols at the given cardinality.
    ///
    /// Fails with `InvalidParameter` when n ∉ (1, 4096], w ∉ (1, 2048],
    /// `w` does not divide `n`, or the cardinality is outside (1, 16].
    pub fn new(n: usize, w: usize, cardinality: usize) -> Result<Self> {
        if n <= 1 || n > MAX_WINDOW_LEN {
            return Err(Error::length_out_of_range("Window length", n, MAX_WINDOW_LEN));
        }
        if w <= 1 || w > MAX_WORD_LEN {
            return Err(Error::length_out_of_range("Word length", w, MAX_WORD_LEN));
        }
        if n % w != 0 {
            return Err(Error::non_dividing(n, w));
        }
        Breakpoints::for_cardinality(cardinality)?;

        let ring = RingBuffer::with_capacity(n)?;
        let mut scratch = Vec::new();
        scratch
            .try_reserve_exact(n)
            .map_err(|_| Error::allocation("window scratch buffer", n))?;

        Ok(Self {
            word_len: w,
            cardinality,
            ring,
            scratch,
            current: None,
        })
    }

    /// Accept one sample.
    ///
    /// While filling, returns `Ok(None)`; once the window is full, the
    /// buffer contents are re-encoded and an independent copy of the
    /// refreshed word is returned.
    pub fn append_value(&mut self, value: f64) -> Result<Option<Word>> {
        self.ring.push(value);
        if !self.ring.is_full() {
            return Ok(None);
        }

        self.scratch.clear();
        self.scratch.extend(self.ring.iter());
        let word = encoder::to_sax(&self.scratch, self.word_len, self.cardinality)?;

        if self.current.is_none() {
            debug!(
                n = self.ring.capacity(),
                w = self.word_len,
                c = self.cardinality,
                "window full, symbolic word available"
            );
        }
        self.current = Some(word.clone());
        Ok(Some(word))
    }

    /// Accept a batch of samples in order.
    ///
    /// Equivalent to appending each value individually; only the word
    /// resulting from the final append is returned. An empty batch
    /// returns `Ok(None)`.
    pub fn append_slice(&mut self, values: &[f64]) -> Result<Option<Word>> {
        let mut last = None;
        for &value in values {
            last = self.append_value(value)?;
        }
        Ok(last)
    }

    /// Independent copy of the cached word, or `None` while filling.
    pub fn current_word(&self) -> Option<Word> {
        self.current.clone()
    }

    /// Drop all samples and invalidate the cached word, returning to the
    /// filling state. The buffer storage is retained for reuse.
    pub fn reset(&mut self) {
        self.ring.reset();
        self.current = None;
        debug!(n = self.ring.capacity(), "window reset");
    }

    /// Number of samples currently held, at most `capacity()`.
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// True while no samples are held.
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// The window capacity `n`.
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// The word length `w`.
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// The alphabet size `c`.
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// True once a word is available, i.e. the window has been full at
    /// least once since creation or the last reset.
    pub fn is_ready(&self) -> bool {
        self.current.is_some()
    }
}
