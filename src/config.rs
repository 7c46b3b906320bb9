//! Grille configuration: dimension bounds and generator limits.

use serde::{Deserialize, Serialize};

use crate::error::{GrilleError, Result};
use crate::geometry::Dimensions;

/// Default smallest allowed row/column count.
pub const DEFAULT_MIN_DIMENSION: usize = 2;

/// Default largest allowed row/column count.
pub const DEFAULT_MAX_DIMENSION: usize = 20;

/// Default cap on candidate cells tried by the random hole generator.
pub const DEFAULT_MAX_RANDOM_ATTEMPTS: usize = 10_000;

/// Tunable limits of a [`Grille`](crate::Grille).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrilleConfig {
    /// Smallest allowed row and column count (inclusive).
    pub min_dimension: usize,
    /// Largest allowed row and column count (inclusive).
    pub max_dimension: usize,
    /// Upper bound on insertion attempts during random generation.
    pub max_random_attempts: usize,
}

impl Default for GrilleConfig {
    fn default() -> Self {
        GrilleConfig {
            min_dimension: DEFAULT_MIN_DIMENSION,
            max_dimension: DEFAULT_MAX_DIMENSION,
            max_random_attempts: DEFAULT_MAX_RANDOM_ATTEMPTS,
        }
    }
}

impl GrilleConfig {
    /// Creates a configuration with custom dimension bounds.
    ///
    /// # Errors
    /// Returns [`GrilleError::InvalidBounds`] if `min` is zero or exceeds `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// use turning_grille::GrilleConfig;
    ///
    /// let config = GrilleConfig::with_bounds(4, 12).unwrap();
    /// assert!(config.validate_dimensions(4, 12).is_ok());
    /// assert!(config.validate_dimensions(3, 12).is_err());
    /// assert!(GrilleConfig::with_bounds(0, 5).is_err());
    /// ```
    pub fn with_bounds(min: usize, max: usize) -> Result<Self> {
        let config = GrilleConfig {
            min_dimension: min,
            max_dimension: max,
            ..Self::default()
        };
        config.check_bounds()?;
        Ok(config)
    }

    /// Sets the attempt cap for random hole generation.
    pub fn max_random_attempts(mut self, attempts: usize) -> Self {
        self.max_random_attempts = attempts;
        self
    }

    /// Checks the bounds themselves, e.g. after deserialization.
    pub fn check_bounds(&self) -> Result<()> {
        if self.min_dimension == 0 || self.min_dimension > self.max_dimension {
            return Err(GrilleError::InvalidBounds {
                min: self.min_dimension,
                max: self.max_dimension,
            });
        }
        Ok(())
    }

    /// Validates `rows` and `cols` against the configured range.
    ///
    /// # Errors
    /// Returns [`GrilleError::InvalidDimensions`] if either is out of range.
    pub fn validate_dimensions(&self, rows: usize, cols: usize) -> Result<Dimensions> {
        let range = self.min_dimension..=self.max_dimension;
        if !range.contains(&rows) || !range.contains(&cols) {
            return Err(GrilleError::InvalidDimensions {
                rows,
                cols,
                min: self.min_dimension,
                max: self.max_dimension,
            });
        }
        Ok(Dimensions::new(rows, cols))
    }
}
