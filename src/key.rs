//! Serializable grille key: dimensions plus hole positions.
//!
//! The library never touches disk; hosts persist keys however they like,
//! typically as the JSON produced here.

use serde::{Deserialize, Serialize};

use crate::error::{GrilleError, Result};
use crate::geometry::{Cell, Dimensions};
use crate::hole_set::HoleSet;

/// Portable description of a grille.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrilleKey {
    pub rows: usize,
    pub cols: usize,
    pub holes: Vec<Cell>,
}

impl GrilleKey {
    /// Captures the holes of `set` in row-major order.
    pub fn from_hole_set(set: &HoleSet) -> Self {
        let dims = set.dimensions();
        GrilleKey {
            rows: dims.rows,
            cols: dims.cols,
            holes: set.to_vec(),
        }
    }

    /// Grid dimensions of the key.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows, self.cols)
    }

    /// Rebuilds the hole set, re-checking every hole.
    ///
    /// # Errors
    /// Returns [`GrilleError::MalformedKey`] if a hole is outside the grid or
    /// collides with another hole.
    pub fn to_hole_set(&self) -> Result<HoleSet> {
        HoleSet::from_holes(self.dimensions(), self.holes.iter().map(|h| (h.row, h.col)))
            .map_err(|err| GrilleError::MalformedKey(err.to_string()))
    }

    /// Serializes the key as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| GrilleError::MalformedKey(err.to_string()))
    }

    /// Parses a key from JSON.
    ///
    /// # Errors
    /// Returns [`GrilleError::MalformedKey`] on invalid JSON or shape.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| GrilleError::MalformedKey(err.to_string()))
    }
}
