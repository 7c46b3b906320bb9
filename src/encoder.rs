//! GrilleEncoder: scatters plaintext across grids through the hole passes.

use log::debug;
use rand::Rng;

use crate::alphabet::Alphabet;
use crate::chunker::{chunk_count, split_into};
use crate::error::{GrilleError, Result};
use crate::geometry::CANONICAL_PASSES;
use crate::grid::Grid;
use crate::hole_set::HoleSet;

/// Encoder bound to one hole set.
///
/// Borrowing the hole set keeps it immutable for the duration of a message,
/// so every chunk sees the same write sequence.
#[derive(Debug, Clone, Copy)]
pub struct GrilleEncoder<'a> {
    holes: &'a HoleSet,
}

impl<'a> GrilleEncoder<'a> {
    /// Creates an encoder over `holes`.
    pub fn new(holes: &'a HoleSet) -> Self {
        GrilleEncoder { holes }
    }

    /// Plaintext characters consumed per grid.
    pub fn chunk_size(&self) -> usize {
        self.holes.effective_capacity()
    }

    /// Encodes one chunk into a fresh grid.
    ///
    /// For each pass in canonical order and each hole in row-major order, the
    /// next character goes into the hole's image if that cell is vacant.
    /// Remaining vacant cells are padded with characters drawn uniformly from
    /// `alphabet`. Characters beyond the grid's capacity are not written.
    ///
    /// # Returns
    /// The filled grid and its row-major serialization.
    pub fn encode_chunk<R: Rng + ?Sized>(
        &self,
        chunk: &str,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> (Grid, String) {
        let dims = self.holes.dimensions();
        let mut grid = Grid::new(dims);
        let mut pending = chunk.chars().peekable();

        'passes: for transform in CANONICAL_PASSES {
            for hole in self.holes.ordered_holes() {
                let Some(&ch) = pending.peek() else {
                    break 'passes;
                };
                if grid.place(transform.apply(dims, hole), ch) {
                    pending.next();
                }
            }
        }

        grid.fill_vacant(|| alphabet.pick(rng));
        let ciphertext = grid.to_row_major();
        (grid, ciphertext)
    }

    /// Encodes a whole message, returning the ciphertext and every grid.
    ///
    /// # Errors
    /// Returns [`GrilleError::EmptyGrille`] if the hole set is empty.
    pub fn encode_grids<R: Rng + ?Sized>(
        &self,
        plaintext: &str,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Result<(String, Vec<Grid>)> {
        if self.holes.is_empty() {
            return Err(GrilleError::EmptyGrille);
        }
        let unit = self.chunk_size();
        let expected = chunk_count(plaintext.chars().count(), unit);
        debug!(
            "Encoding {} chunk(s) of up to {} characters on {}x{} grille",
            expected,
            unit,
            self.holes.dimensions().rows,
            self.holes.dimensions().cols
        );

        let mut ciphertext = String::new();
        let mut grids = Vec::with_capacity(expected);
        for chunk in split_into(plaintext, unit) {
            let (grid, encoded) = self.encode_chunk(chunk, alphabet, rng);
            ciphertext.push_str(&encoded);
            grids.push(grid);
        }
        Ok((ciphertext, grids))
    }

    /// Encodes a whole message.
    ///
    /// # Errors
    /// Returns [`GrilleError::EmptyGrille`] if the hole set is empty.
    pub fn encode<R: Rng + ?Sized>(
        &self,
        plaintext: &str,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Result<String> {
        self.encode_grids(plaintext, alphabet, rng)
            .map(|(ciphertext, _)| ciphertext)
    }
}
