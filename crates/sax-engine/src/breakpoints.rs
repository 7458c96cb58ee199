//! Standard-normal quantile breakpoints driving symbol assignment
//!
//! For every cardinality c in [2, 16] the table holds the c − 1 ascending
//! quantiles that split the standard normal distribution into c
//! equal-probability regions. The values are compile-time constants, never
//! computed at runtime, so two processes always quantize identically and
//! words stay comparable across instances. The same table must be used for
//! encoding and for distance estimation; [`Breakpoints`] ties both to one
//! cardinality.
//!
//! Symbol regions are lower-closed/upper-open: symbol s covers
//! [cut[s−1], cut[s]), with the outermost regions unbounded.

use crate::word::Symbol;
use sax_core::{Error, Result};

/// Smallest supported alphabet size.
pub const MIN_CARDINALITY: usize = 2;
/// Largest supported alphabet size.
pub const MAX_CARDINALITY: usize = 16;

static CUTS_2: [f64; 1] = [0.0];
static CUTS_3: [f64; 2] = [-0.4307272993, 0.4307272993];
static CUTS_4: [f64; 3] = [-0.6744897502, 0.0, 0.6744897502];
static CUTS_5: [f64; 4] = [-0.8416212336, -0.2533471031, 0.2533471031, 0.8416212336];
static CUTS_6: [f64; 5] = [
    -0.9674215661,
    -0.4307272993,
    0.0,
    0.4307272993,
    0.9674215661,
];
static CUTS_7: [f64; 6] = [
    -1.0675705239,
    -0.5659488219,
    -0.1800123698,
    0.1800123698,
    0.5659488219,
    1.0675705239,
];
static CUTS_8: [f64; 7] = [
    -1.1503493804,
    -0.6744897502,
    -0.3186393640,
    0.0,
    0.3186393640,
    0.6744897502,
    1.1503493804,
];
static CUTS_9: [f64; 8] = [
    -1.2206403488,
    -0.7647096738,
    -0.4307272993,
    -0.1397102989,
    0.1397102989,
    0.4307272993,
    0.7647096738,
    1.2206403488,
];
static CUTS_10: [f64; 9] = [
    -1.2815515655,
    -0.8416212336,
    -0.5244005127,
    -0.2533471031,
    0.0,
    0.2533471031,
    0.5244005127,
    0.8416212336,
    1.2815515655,
];
static CUTS_11: [f64; 10] = [
    -1.3351777361,
    -0.9084578685,
    -0.6045853466,
    -0.3487556955,
    -0.1141852943,
    0.1141852943,
    0.3487556955,
    0.6045853466,
    0.9084578685,
    1.3351777361,
];
static CUTS_12: [f64; 11] = [
    -1.3829941271,
    -0.9674215661,
    -0.6744897502,
    -0.4307272993,
    -0.2104283942,
    0.0,
    0.2104283942,
    0.4307272993,
    0.6744897502,
    0.9674215661,
    1.3829941271,
];
static CUTS_13: [f64; 12] = [
    -1.4260768723,
    -1.0200762328,
    -0.7363159174,
    -0.5024022234,
    -0.2933812321,
    -0.0965586153,
    0.0965586153,
    0.2933812321,
    0.5024022234,
    0.7363159174,
    1.0200762328,
    1.4260768723,
];
static CUTS_14: [f64; 13] = [
    -1.4652337927,
    -1.0675705239,
    -0.7916386077,
    -0.5659488219,
    -0.3661063568,
    -0.1800123698,
    0.0,
    0.1800123698,
    0.3661063568,
    0.5659488219,
    0.7916386077,
    1.0675705239,
    1.4652337927,
];
static CUTS_15: [f64; 14] = [
    -1.5010859460,
    -1.1107716166,
    -0.8416212336,
    -0.6229257232,
    -0.4307272993,
    -0.2533471031,
    -0.0836517339,
    0.0836517339,
    0.2533471031,
    0.4307272993,
    0.6229257232,
    0.8416212336,
    1.1107716166,
    1.5010859460,
];
static CUTS_16: [f64; 15] = [
    -1.5341205444,
    -1.1503493804,
    -0.8871465590,
    -0.6744897502,
    -0.4887764111,
    -0.3186393640,
    -0.1573106846,
    0.0,
    0.1573106846,
    0.3186393640,
    0.4887764111,
    0.6744897502,
    0.8871465590,
    1.1503493804,
    1.5341205444,
];

static TABLES: [&[f64]; 15] = [
    &CUTS_2, &CUTS_3, &CUTS_4, &CUTS_5, &CUTS_6, &CUTS_7, &CUTS_8, &CUTS_9, &CUTS_10, &CUTS_11,
    &CUTS_12, &CUTS_13, &CUTS_14, &CUTS_15, &CUTS_16,
];

/// Breakpoint table bound to one cardinality.
///
/// Cheap to copy; borrows the process-wide static tables.
#[derive(Debug, Clone, Copy)]
pub struct Breakpoints {
    cardinality: usize,
    cuts: &'static [f64],
}

impl Breakpoints {
    /// Look up the table for `cardinality`.
    ///
    /// Fails with `InvalidParameter` outside [2, 16]. The returned handle
    /// is deterministic across calls and across processes.
    pub fn for_cardinality(cardinality: usize) -> Result<Self> {
        if !(MIN_CARDINALITY..=MAX_CARDINALITY).contains(&cardinality) {
            return Err(Error::invalid_cardinality(cardinality));
        }
        Ok(Self {
            cardinality,
            cuts: TABLES[cardinality - MIN_CARDINALITY],
        })
    }

    /// The alphabet size this table quantizes for.
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// The cardinality − 1 ascending quantile cuts.
    pub fn cuts(&self) -> &'static [f64] {
        self.cuts
    }

    /// Symbol for a z-normalized value: the count of cuts ≤ value.
    ///
    /// Always in [0, cardinality).
    pub fn symbol_for(&self, value: f64) -> Symbol {
        self.cuts.iter().take_while(|cut| **cut <= value).count() as Symbol
    }

    /// Minimum possible distance between any two normalized values that
    /// quantize to `a` and `b`.
    ///
    /// Zero for equal or adjacent symbols; otherwise the gap between the
    /// cut just above the lower symbol and the cut just below the higher
    /// one. Symmetric in its arguments.
    pub fn region_distance(&self, a: Symbol, b: Symbol) -> f64 {
        debug_assert!((a as usize) < self.cardinality && (b as usize) < self.cardinality);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if hi - lo <= 1 {
            return 0.0;
        }
        self.cuts[hi as usize - 1] - self.cuts[lo as usize]
    }
}
