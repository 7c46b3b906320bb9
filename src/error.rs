//! Error types for the turning grille library.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GrilleError>;

/// Errors produced by the turning grille library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrilleError {
    /// Requested grid dimensions fall outside the configured bounds.
    #[error("Grid dimensions {rows}x{cols} are outside the allowed range [{min}, {max}]")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        min: usize,
        max: usize,
    },
    /// Configured dimension bounds are inconsistent.
    #[error("Dimension bounds [{min}, {max}] are invalid")]
    InvalidBounds { min: usize, max: usize },
    /// The candidate hole's orbit intersects a cell reserved by another hole.
    #[error("Hole ({row}, {col}) overlaps cell ({clash_row}, {clash_col}) reserved by hole ({owner_row}, {owner_col})")]
    Collision {
        row: usize,
        col: usize,
        clash_row: usize,
        clash_col: usize,
        owner_row: usize,
        owner_col: usize,
    },
    /// The cell lies outside the grid.
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Encode or decode was attempted without any holes.
    #[error("Grille has no holes")]
    EmptyGrille,
    /// A padding alphabet must contain at least one character.
    #[error("Padding alphabet is empty")]
    EmptyAlphabet,
    /// The ciphertext holds fewer recoverable characters than requested.
    #[error("Expected {expected} characters but only {recovered} could be recovered")]
    InsufficientLength { expected: usize, recovered: usize },
    /// A serialized grille key could not be parsed or is not a valid grille.
    #[error("Malformed grille key: {0}")]
    MalformedKey(String),
}
