// SPDX-License-Identifier: MIT
//! Edit-distance and alignment metrics over sequences of any element type.
//!
//! Every metric takes two slices and, through its `_by` variant, a caller
//! supplied equality `Fn(&T, &T) -> bool`. That closure must be an
//! equivalence relation; it is trusted, not checked. All computations are
//! synchronous and call-local, so independent pairs may be scored from any
//! number of threads.
//!
//! ```
//! use seqmetrics::algorithms::{damerau_levenshtein, levenshtein, lcs_length};
//!
//! let kitten: Vec<char> = "kitten".chars().collect();
//! let sitting: Vec<char> = "sitting".chars().collect();
//! assert_eq!(levenshtein(&kitten, &sitting), 3);
//! assert_eq!(damerau_levenshtein(b"ca", b"ac"), 1);
//! assert_eq!(lcs_length(b"ABCBDAB", b"BDCABA"), 4);
//! ```

pub mod algorithms;
pub mod distance;
pub mod error;
pub mod types;

#[cfg(feature = "python")]
mod python;

pub use algorithms::LevenshteinWeights;
pub use distance::{
    DamerauLevenshtein, DistanceMetric, Hamming, Indel, LengthMetric, Levenshtein,
    LongestCommonSubsequence, LongestCommonSubstring, OptimalStringAlignment, ScoreCutoff,
};
pub use error::{MetricError, Result};
pub use types::{CommonRun, EditTag, Editop, Editops, MatchingBlock, Trimmed};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn _seqmetrics(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register(m)
}
