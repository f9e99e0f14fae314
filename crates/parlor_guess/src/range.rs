//! Inclusive bounds for the secret number.

use parlor_console::ErrorKind;
use rand::Rng;
use tracing::instrument;

/// Inclusive range `min..=max` the secret number is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessRange {
    min: i32,
    max: i32,
}

/// Bounds that do not form a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RangeError {
    /// The lower bound exceeds the upper bound.
    #[display("minimum {} exceeds maximum {}", min, max)]
    Inverted {
        /// Requested lower bound.
        min: i32,
        /// Requested upper bound.
        max: i32,
    },
}

impl RangeError {
    /// Returns the taxonomy category of this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::OutOfRange
    }
}

impl std::error::Error for RangeError {}

impl GuessRange {
    /// The range used unless the player picks another: 1 to 100.
    pub const DEFAULT: GuessRange = GuessRange { min: 1, max: 100 };

    /// Creates a range; a single-value range is allowed.
    #[instrument]
    pub fn new(min: i32, max: i32) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lowest value in the range.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Highest value in the range.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Checks whether `value` lies in the range.
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Draws a uniformly distributed value from the range.
    pub fn draw(&self, rng: &mut impl Rng) -> i32 {
        rng.random_range(self.min..=self.max)
    }
}

impl Default for GuessRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_inverted_range_rejected() {
        assert_eq!(GuessRange::new(10, 1), Err(RangeError::Inverted { min: 10, max: 1 }));
        assert!(GuessRange::new(5, 5).is_ok());
        let err = GuessRange::new(2, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_draw_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = GuessRange::new(-3, 3).unwrap();
        for _ in 0..500 {
            assert!(range.contains(range.draw(&mut rng)));
        }
    }

    #[test]
    fn test_single_value_range_always_draws_it() {
        let mut rng = StdRng::seed_from_u64(1);
        let range = GuessRange::new(1, 1).unwrap();
        assert_eq!(range.draw(&mut rng), 1);
    }

    #[test]
    fn test_full_i32_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let range = GuessRange::new(i32::MIN, i32::MAX).unwrap();
        let value = range.draw(&mut rng);
        assert!(range.contains(value));
    }
}
