// SPDX-License-Identifier: MIT
// Distance submodule structure
pub mod cutoff;
pub mod metrics;
pub mod ngram;

pub use cutoff::ScoreCutoff;
pub use metrics::{
    DamerauLevenshtein, DistanceMetric, Hamming, Indel, LengthMetric, Levenshtein,
    LongestCommonSubsequence, LongestCommonSubstring, OptimalStringAlignment,
};
