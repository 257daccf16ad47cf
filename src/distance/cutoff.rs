// SPDX-License-Identifier: MIT
// Per-call score cutoffs, applied after a metric has been computed.

use crate::error::{MetricError, Result};

/// Caps a reported score.
///
/// A distance above `Distance(max)` is reported as `max + 1`, a similarity
/// below `Similarity(min)` is reported as `0.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScoreCutoff {
    Distance(usize),
    Similarity(f64),
}

impl ScoreCutoff {
    pub fn distance(max: usize) -> Self {
        ScoreCutoff::Distance(max)
    }

    /// Fails unless `min` lies in `[0, 1]`.
    pub fn similarity(min: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&min) {
            return Err(MetricError::InvalidScoreCutoff(min));
        }
        Ok(ScoreCutoff::Similarity(min))
    }

    pub fn apply_distance(&self, dist: usize) -> usize {
        match *self {
            ScoreCutoff::Distance(max) if dist > max => max + 1,
            _ => dist,
        }
    }

    pub fn apply_similarity(&self, sim: f64) -> f64 {
        match *self {
            ScoreCutoff::Similarity(min) if sim < min => 0.0,
            _ => sim,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_cutoff() {
        let c = ScoreCutoff::distance(2);
        assert_eq!(c.apply_distance(1), 1);
        assert_eq!(c.apply_distance(2), 2);
        assert_eq!(c.apply_distance(7), 3);
        assert_eq!(c.apply_similarity(0.1), 0.1);
    }

    #[test]
    fn similarity_cutoff() {
        let c = ScoreCutoff::similarity(0.5).unwrap();
        assert_eq!(c.apply_similarity(0.75), 0.75);
        assert_eq!(c.apply_similarity(0.25), 0.0);
        assert_eq!(c.apply_distance(9), 9);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(ScoreCutoff::similarity(1.5), Err(MetricError::InvalidScoreCutoff(1.5)));
        assert!(ScoreCutoff::similarity(-0.1).is_err());
        assert!(ScoreCutoff::similarity(f64::NAN).is_err());
    }
}
