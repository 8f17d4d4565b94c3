//! Core types for lag analysis

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Alignment mode governing which lags a correlation sweep emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Every partial-overlap lag, from the first leading sample of overlap
    /// through the trailing shrink
    Full,
    /// Lags from the first full overlap onward, including the trailing
    /// partial overlaps
    Right,
    /// Only the lags where the shorter signal overlaps completely
    Valid,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Full => "full",
            Mode::Right => "right",
            Mode::Valid => "valid",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CorrelateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Mode::Full),
            "right" => Ok(Mode::Right),
            "valid" => Ok(Mode::Valid),
            other => Err(CorrelateError::InvalidMode(other.to_string())),
        }
    }
}

/// A correlation result: values paired with their time/lag coordinates
///
/// For cross-correlation the coordinate is the external lag value; for
/// moving correlation it is the window start time. The two vectors always
/// have equal length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LagSeries {
    /// Time/lag coordinate per value
    pub lags: Vec<f64>,
    /// Correlation/covariance value per coordinate
    pub values: Vec<f64>,
}

impl LagSeries {
    /// Pair values with their coordinate axis, truncating both to the
    /// shorter length
    pub fn new(mut lags: Vec<f64>, mut values: Vec<f64>) -> Self {
        let len = lags.len().min(values.len());
        lags.truncate(len);
        values.truncate(len);
        Self { lags, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over (lag, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.lags.iter().copied().zip(self.values.iter().copied())
    }
}

/// Error types for correlation operations
#[derive(Error, Debug)]
pub enum CorrelateError {
    #[error("invalid correlation mode {0:?} (expected \"full\", \"right\", or \"valid\")")]
    InvalidMode(String),

    #[error("signal length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("step must be positive")]
    InvalidStep,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trips_through_str() {
        for mode in [Mode::Full, Mode::Right, Mode::Valid] {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = "centered".parse::<Mode>().unwrap_err();
        assert!(matches!(err, CorrelateError::InvalidMode(s) if s == "centered"));
    }

    #[test]
    fn test_lag_series_truncates_to_common_length() {
        let series = LagSeries::new(vec![0.0, 1.0, 2.0], vec![5.0, 6.0]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.lags, vec![0.0, 1.0]);
        assert_eq!(series.iter().collect::<Vec<_>>(), vec![(0.0, 5.0), (1.0, 6.0)]);
    }
}
