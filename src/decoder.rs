//! GrilleDecoder: replays the hole passes to gather plaintext back.

use log::debug;

use crate::chunker::split_into;
use crate::error::{GrilleError, Result};
use crate::geometry::CANONICAL_PASSES;
use crate::grid::Grid;
use crate::hole_set::HoleSet;

/// Decoder bound to one hole set.
#[derive(Debug, Clone, Copy)]
pub struct GrilleDecoder<'a> {
    holes: &'a HoleSet,
}

impl<'a> GrilleDecoder<'a> {
    /// Creates a decoder over `holes`.
    pub fn new(holes: &'a HoleSet) -> Self {
        GrilleDecoder { holes }
    }

    /// Ciphertext characters per grid.
    pub fn unit_size(&self) -> usize {
        self.holes.dimensions().area()
    }

    /// Reads up to `remaining_needed` characters out of one grid.
    ///
    /// The chunk is loaded row-major (a short chunk leaves trailing cells
    /// vacant). Passes and holes are replayed in the encoder's order; each
    /// occupied image is taken and cleared, and reading stops as soon as
    /// `remaining_needed` characters were produced.
    ///
    /// # Returns
    /// The recovered characters and their count.
    pub fn decode_chunk(&self, chunk: &str, remaining_needed: usize) -> (String, usize) {
        let dims = self.holes.dimensions();
        let mut grid = Grid::from_row_major(dims, chunk.chars());
        let mut recovered = String::new();
        let mut count = 0;

        'passes: for transform in CANONICAL_PASSES {
            for hole in self.holes.ordered_holes() {
                if count >= remaining_needed {
                    break 'passes;
                }
                if let Some(ch) = grid.take(transform.apply(dims, hole)) {
                    recovered.push(ch);
                    count += 1;
                }
            }
        }
        (recovered, count)
    }

    /// Decodes a whole message of `original_length` characters.
    ///
    /// If the ciphertext holds fewer recoverable characters, whatever was
    /// recovered is returned.
    ///
    /// # Errors
    /// Returns [`GrilleError::EmptyGrille`] if the hole set is empty.
    pub fn decode(&self, ciphertext: &str, original_length: usize) -> Result<String> {
        if self.holes.is_empty() {
            return Err(GrilleError::EmptyGrille);
        }
        let mut plaintext = String::new();
        let mut produced = 0;
        let mut grids = 0;
        for chunk in split_into(ciphertext, self.unit_size()) {
            if produced >= original_length {
                break;
            }
            let (text, count) = self.decode_chunk(chunk, original_length - produced);
            plaintext.push_str(&text);
            produced += count;
            grids += 1;
        }
        debug!(
            "Decoded {} of {} characters from {} grid(s)",
            produced, original_length, grids
        );
        Ok(plaintext)
    }
}
