// SPDX-License-Identifier: MIT
// Metric-level API over the DP cores: distance and length metrics,
// normalization and simple-matching coefficients.

use crate::algorithms as alg;
use crate::algorithms::LevenshteinWeights;
use crate::error::Result;

pub fn normalized_distance(dist: usize, max_dist: usize) -> f64 {
    if max_dist == 0 {
        0.0
    } else {
        dist as f64 / max_dist as f64
    }
}

pub fn normalized_similarity(dist: usize, max_dist: usize) -> f64 {
    1.0 - normalized_distance(dist, max_dist)
}

// ===========================================================================
// DISTANCE METRICS
// ===========================================================================

/// A metric measured as a count of edits; smaller means more alike.
///
/// Implementors provide [`distance_by`](DistanceMetric::distance_by); every
/// derived score is computed from that one number and the input lengths.
pub trait DistanceMetric {
    fn name(&self) -> &'static str;

    fn distance_by<T, F>(&self, s1: &[T], s2: &[T], eq: F) -> Result<usize>
    where
        F: Fn(&T, &T) -> bool;

    /// Largest distance this metric can report for inputs of these lengths.
    fn maximum(&self, len1: usize, len2: usize) -> usize {
        len1.max(len2)
    }

    fn distance<T: PartialEq>(&self, s1: &[T], s2: &[T]) -> Result<usize> {
        self.distance_by(s1, s2, |a: &T, b: &T| a == b)
    }

    fn similarity_by<T, F>(&self, s1: &[T], s2: &[T], eq: F) -> Result<usize>
    where
        F: Fn(&T, &T) -> bool,
    {
        let dist = self.distance_by(s1, s2, eq)?;
        Ok(self.maximum(s1.len(), s2.len()).saturating_sub(dist))
    }

    fn similarity<T: PartialEq>(&self, s1: &[T], s2: &[T]) -> Result<usize> {
        self.similarity_by(s1, s2, |a: &T, b: &T| a == b)
    }

    fn normalized_distance_by<T, F>(&self, s1: &[T], s2: &[T], eq: F) -> Result<f64>
    where
        F: Fn(&T, &T) -> bool,
    {
        let dist = self.distance_by(s1, s2, eq)?;
        Ok(normalized_distance(dist, self.maximum(s1.len(), s2.len())))
    }

    fn normalized_distance<T: PartialEq>(&self, s1: &[T], s2: &[T]) -> Result<f64> {
        self.normalized_distance_by(s1, s2, |a: &T, b: &T| a == b)
    }

    fn normalized_similarity_by<T, F>(&self, s1: &[T], s2: &[T], eq: F) -> Result<f64>
    where
        F: Fn(&T, &T) -> bool,
    {
        Ok(1.0 - self.normalized_distance_by(s1, s2, eq)?)
    }

    fn normalized_similarity<T: PartialEq>(&self, s1: &[T], s2: &[T]) -> Result<f64> {
        self.normalized_similarity_by(s1, s2, |a: &T, b: &T| a == b)
    }

    /// `1 - distance / max(|s1|, |s2|)` for the unit-cost metrics; weighted
    /// and indel variants divide by their own maximum instead. Two empty
    /// inputs score 1.
    fn simple_matching_coefficient_by<T, F>(&self, s1: &[T], s2: &[T], eq: F) -> Result<f64>
    where
        F: Fn(&T, &T) -> bool,
    {
        self.normalized_similarity_by(s1, s2, eq)
    }

    fn simple_matching_coefficient<T: PartialEq>(&self, s1: &[T], s2: &[T]) -> Result<f64> {
        self.simple_matching_coefficient_by(s1, s2, |a: &T, b: &T| a == b)
    }

    fn simple_matching_distance_by<T, F>(&self, s1: &[T], s2: &[T], eq: F) -> Result<f64>
    where
        F: Fn(&T, &T) -> bool,
    {
        Ok(1.0 - self.simple_matching_coefficient_by(s1, s2, eq)?)
    }

    fn simple_matching_distance<T: PartialEq>(&self, s1: &[T], s2: &[T]) -> Result<f64> {
        self.simple_matching_distance_by(s1, s2, |a: &T, b: &T| a == b)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Levenshtein {
    pub weights: LevenshteinWeights,
}

impl Levenshtein {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: LevenshteinWeights) -> Self {
        Levenshtein { weights }
    }
}

impl DistanceMetric for Levenshtein {
    fn name(&self) -> &'static str {
        "levenshtein"
    }

    fn distance_by<T, F>(&self, s1: &[T], s2: &[T], eq: F) -> Result<usize>
    where
        F: Fn(&T, &T) -> bool,
    {
        Ok(alg::levenshtein_weighted_by(s1, s2, self.weights, eq))
    }

    fn maximum(&self, len1: usize, len2: usize) -> usize {
        self.weights.maximum(len1, len2)
    }
}

/// True Damerau-Levenshtein. Goes through the scanning last-occurrence
/// table; [`alg::damerau_levenshtein`] is faster for hashable elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamerauLevenshtein;

impl DistanceMetric for DamerauLevenshtein {
    fn name(&self) -> &'static str {
        "damerau_levenshtein"
    }

    fn distance_by<T, F>(&self, s1: &[T], s2: &[T], eq: F) -> Result<usize>
    where
        F: Fn(&T, &T) -> bool,
    {
        Ok(alg::damerau_levenshtein_by(s1, s2, eq))
    }
}

/// Restricted edit distance. Not a metric in the strict sense: the triangle
/// inequality can fail, e.g. `ca -> ac -> abc` costs 2 while `ca -> abc` costs 3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptimalStringAlignment;

impl DistanceMetric for OptimalStringAlignment {
    fn name(&self) -> &'static str {
        "osa"
    }

    fn distance_by<T, F>(&self, s1: &[T], s2: &[T], eq: F) -> Result<usize>
    where
        F: Fn(&T, &T) -> bool,
    {
        Ok(alg::osa_distance_by(s1, s2, eq))
    }
}

/// Insertions and deletions only, `|s1| + |s2| - 2 * lcs`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Indel;

impl DistanceMetric for Indel {
    fn name(&self) -> &'static str {
        "indel"
    }

    fn distance_by<T, F>(&self, s1: &[T], s2: &[T], eq: F) -> Result<usize>
    where
        F: Fn(&T, &T) -> bool,
    {
        Ok(alg::indel_distance_by(s1, s2, eq))
    }

    fn maximum(&self, len1: usize, len2: usize) -> usize {
        len1 + len2
    }
}

/// Positional mismatches. Strict by default: inputs of different lengths fail
/// with `LengthMismatch`. With `pad` the surplus counts as mismatches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hamming {
    pub pad: bool,
}

impl Hamming {
    pub fn strict() -> Self {
        Hamming { pad: false }
    }

    pub fn padded() -> Self {
        Hamming { pad: true }
    }
}

impl DistanceMetric for Hamming {
    fn name(&self) -> &'static str {
        "hamming"
    }

    fn distance_by<T, F>(&self, s1: &[T], s2: &[T], eq: F) -> Result<usize>
    where
        F: Fn(&T, &T) -> bool,
    {
        if self.pad {
            Ok(alg::hamming_padded_by(s1, s2, eq))
        } else {
            alg::hamming_by(s1, s2, eq)
        }
    }
}

// ===========================================================================
// LENGTH METRICS
// ===========================================================================

/// A metric measured as the size of a shared structure; larger means more alike.
pub trait LengthMetric {
    fn name(&self) -> &'static str;

    fn length_by<T, F>(&self, s1: &[T], s2: &[T], eq: F) -> usize
    where
        F: Fn(&T, &T) -> bool;

    fn length<T: PartialEq>(&self, s1: &[T], s2: &[T]) -> usize {
        self.length_by(s1, s2, |a: &T, b: &T| a == b)
    }

    /// `length / max(|s1|, |s2|)`; two empty inputs score 1.
    fn simple_matching_coefficient_by<T, F>(&self, s1: &[T], s2: &[T], eq: F) -> f64
    where
        F: Fn(&T, &T) -> bool,
    {
        let max_len = s1.len().max(s2.len());
        if max_len == 0 {
            return 1.0;
        }
        self.length_by(s1, s2, eq) as f64 / max_len as f64
    }

    fn simple_matching_coefficient<T: PartialEq>(&self, s1: &[T], s2: &[T]) -> f64 {
        self.simple_matching_coefficient_by(s1, s2, |a: &T, b: &T| a == b)
    }

    fn simple_matching_distance_by<T, F>(&self, s1: &[T], s2: &[T], eq: F) -> f64
    where
        F: Fn(&T, &T) -> bool,
    {
        1.0 - self.simple_matching_coefficient_by(s1, s2, eq)
    }

    fn simple_matching_distance<T: PartialEq>(&self, s1: &[T], s2: &[T]) -> f64 {
        self.simple_matching_distance_by(s1, s2, |a: &T, b: &T| a == b)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LongestCommonSubsequence;

impl LengthMetric for LongestCommonSubsequence {
    fn name(&self) -> &'static str {
        "lcs_seq"
    }

    fn length_by<T, F>(&self, s1: &[T], s2: &[T], eq: F) -> usize
    where
        F: Fn(&T, &T) -> bool,
    {
        alg::lcs_length_by(s1, s2, eq)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LongestCommonSubstring;

impl LengthMetric for LongestCommonSubstring {
    fn name(&self) -> &'static str {
        "lcs_str"
    }

    fn length_by<T, F>(&self, s1: &[T], s2: &[T], eq: F) -> usize
    where
        F: Fn(&T, &T) -> bool,
    {
        alg::longest_common_substring_length_by(s1, s2, eq)
    }
}
