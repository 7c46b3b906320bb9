//! Grid: a transient `rows x cols` array of optional characters.
//!
//! One grid is created per chunk. The encoder fills it and serializes it
//! row-major; the decoder loads ciphertext into it and drains it.

use std::fmt;

use crate::geometry::{Cell, Dimensions};

/// Cell store for one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates a grid with every cell unfilled.
    pub fn new(dims: Dimensions) -> Self {
        Grid {
            dims,
            cells: vec![None; dims.area()],
        }
    }

    /// Loads characters row-major; cells beyond the input stay unfilled and
    /// characters beyond the grid are ignored.
    pub fn from_row_major<I: IntoIterator<Item = char>>(dims: Dimensions, chars: I) -> Self {
        let mut grid = Self::new(dims);
        for (slot, ch) in grid.cells.iter_mut().zip(chars) {
            *slot = Some(ch);
        }
        grid
    }

    /// Grid dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Character at `cell`, or `None` if unfilled or outside the grid.
    pub fn get(&self, cell: Cell) -> Option<char> {
        if !self.dims.contains(cell) {
            return None;
        }
        self.cells[self.dims.index_of(cell)]
    }

    /// Returns true if `cell` is inside the grid and unfilled.
    pub fn is_vacant(&self, cell: Cell) -> bool {
        self.dims.contains(cell) && self.cells[self.dims.index_of(cell)].is_none()
    }

    /// Writes `ch` into `cell` if it is vacant. Returns whether it was written.
    pub fn place(&mut self, cell: Cell, ch: char) -> bool {
        if !self.is_vacant(cell) {
            return false;
        }
        self.cells[self.dims.index_of(cell)] = Some(ch);
        true
    }

    /// Removes and returns the character at `cell`.
    pub fn take(&mut self, cell: Cell) -> Option<char> {
        if !self.dims.contains(cell) {
            return None;
        }
        self.cells[self.dims.index_of(cell)].take()
    }

    /// Fills every vacant cell with characters produced by `fill`.
    pub fn fill_vacant<F: FnMut() -> char>(&mut self, mut fill: F) {
        for slot in self.cells.iter_mut().filter(|slot| slot.is_none()) {
            *slot = Some(fill());
        }
    }

    /// Number of filled cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_some()).count()
    }

    /// Serializes filled cells row-major.
    pub fn to_row_major(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    /// Iterates rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.dims.cols.max(1))
    }
}

impl fmt::Display for Grid {
    /// Renders one line per row, cells separated by spaces, `.` for unfilled.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, slot) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", slot.unwrap_or('.'))?;
            }
        }
        Ok(())
    }
}
