// SPDX-License-Identifier: MIT
//! Error types for the metric engine.
//!
//! Every metric is a total function over pairs of finite sequences except
//! Hamming distance, which is only defined for inputs of equal length. That
//! precondition, plus validation of user supplied cutoffs, is all that can
//! fail here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    /// The metric requires both sequences to have the same length.
    #[error("sequences are not the same length ({left} != {right})")]
    LengthMismatch { left: usize, right: usize },

    /// A normalized score cutoff outside of `[0, 1]`.
    #[error("score cutoff must lie in [0, 1], got {0}")]
    InvalidScoreCutoff(f64),
}

pub type Result<T> = std::result::Result<T, MetricError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = MetricError::LengthMismatch { left: 3, right: 2 };
        assert_eq!(err.to_string(), "sequences are not the same length (3 != 2)");
        let err = MetricError::InvalidScoreCutoff(1.5);
        assert_eq!(err.to_string(), "score cutoff must lie in [0, 1], got 1.5");
    }
}
