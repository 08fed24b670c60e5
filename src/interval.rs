//! Interval arithmetic for ray parameter ranges.
//!
//! Provides intervals [min, max] used for ray t-values and bounds checking.
//! Hit tests use [`Interval::surrounds`], i.e. the open interval (min, max).

/// Interval [min, max] for range checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f64,
    /// Maximum value of the interval
    pub max: f64,
}

impl Interval {
    /// Empty interval (min > max)
    pub const EMPTY: Interval = Interval {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// Interval containing all real numbers
    pub const UNIVERSE: Interval = Interval {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    /// Create a new interval with given min and max values
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the interval
    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Copy of this interval with its upper bound replaced.
    ///
    /// Traversals use this to shrink the search range to the closest hit so far.
    pub fn with_max(&self, max: f64) -> Self {
        Self { min: self.min, max }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::EMPTY
    }
}
