use crate::math::Tolerance;

/// Settings fixed for the duration of one clipping run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClipOptions {
    tolerance: Tolerance,
}

impl ClipOptions {
    /// Creates options with the default tolerance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tolerance used for every approximate comparison.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }
}
