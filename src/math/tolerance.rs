use super::{Point2, DEFAULT_TOLERANCE};
use crate::error::ConfigError;

/// Epsilon used for every approximate comparison during one clipping run.
///
/// Two values are considered equal when they differ by at most the
/// tolerance. The relation is not transitive: values drifting by less than
/// the tolerance at each step can end up further apart than the tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Creates a tolerance of `epsilon` document units.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTolerance` if `epsilon` is negative or not finite.
    pub fn new(epsilon: f64) -> Result<Self, ConfigError> {
        if epsilon.is_finite() && epsilon >= 0.0 {
            Ok(Self(epsilon))
        } else {
            Err(ConfigError::InvalidTolerance(epsilon))
        }
    }

    /// Returns the raw epsilon.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` if `|a - b| <= epsilon`.
    #[must_use]
    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.0
    }

    /// Returns `true` if both coordinates of `a` and `b` are approximately equal.
    #[must_use]
    pub fn points_coincide(self, a: &Point2, b: &Point2) -> bool {
        self.approx_eq(a.x, b.x) && self.approx_eq(a.y, b.y)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(DEFAULT_TOLERANCE)
    }
}
