//! Symmetry group of a rectangular grid.
//!
//! A `rows x cols` rectangle is preserved by four transforms (the Klein
//! four-group): identity, the half turn, and the two mid-line reflections.
//! Every transform is its own inverse and composing two distinct
//! non-identity transforms yields the third.

use serde::{Deserialize, Serialize};

/// A cell coordinate, 0-indexed.
///
/// The derived ordering is row-major (row first, then column), which is the
/// canonical write/read order of a grille.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Creates a cell at `(row, col)`.
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }
}

/// Grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    /// Creates dimensions without range validation.
    ///
    /// Bounds are enforced by [`GrilleConfig`](crate::config::GrilleConfig).
    pub const fn new(rows: usize, cols: usize) -> Self {
        Dimensions { rows, cols }
    }

    /// Total number of cells.
    pub const fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if `cell` lies inside the grid.
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Row-major linear index of `cell`.
    pub(crate) const fn index_of(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Cell { row, col }))
    }

    /// Number of orbits whose four images are pairwise distinct.
    pub const fn full_orbit_count(&self) -> usize {
        (self.rows / 2) * (self.cols / 2)
    }
}

/// One of the four symmetries of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// `(r, c) -> (r, c)`
    Identity,
    /// `(r, c) -> (rows-1-r, cols-1-c)`
    Rotate180,
    /// Reflection across the horizontal mid-line: `(r, c) -> (rows-1-r, c)`
    FlipVertical,
    /// Reflection across the vertical mid-line: `(r, c) -> (r, cols-1-c)`
    FlipHorizontal,
}

/// The only pass order encode and decode accept.
pub const CANONICAL_PASSES: [Symmetry; 4] = [
    Symmetry::Identity,
    Symmetry::Rotate180,
    Symmetry::FlipVertical,
    Symmetry::FlipHorizontal,
];

impl Symmetry {
    /// Maps `cell` under this symmetry of a grid with `dims`.
    ///
    /// `cell` must lie inside `dims`.
    pub const fn apply(self, dims: Dimensions, cell: Cell) -> Cell {
        let mirrored_row = dims.rows - 1 - cell.row;
        let mirrored_col = dims.cols - 1 - cell.col;
        match self {
            Symmetry::Identity => cell,
            Symmetry::Rotate180 => Cell::new(mirrored_row, mirrored_col),
            Symmetry::FlipVertical => Cell::new(mirrored_row, cell.col),
            Symmetry::FlipHorizontal => Cell::new(cell.row, mirrored_col),
        }
    }

    /// Group product: applying `self` after `other`.
    pub const fn compose(self, other: Symmetry) -> Symmetry {
        use Symmetry::*;
        match (self, other) {
            (Identity, s) | (s, Identity) => s,
            (Rotate180, Rotate180)
            | (FlipVertical, FlipVertical)
            | (FlipHorizontal, FlipHorizontal) => Identity,
            (Rotate180, FlipVertical) | (FlipVertical, Rotate180) => FlipHorizontal,
            (Rotate180, FlipHorizontal) | (FlipHorizontal, Rotate180) => FlipVertical,
            (FlipVertical, FlipHorizontal) | (FlipHorizontal, FlipVertical) => Rotate180,
        }
    }

    /// Every symmetry is an involution.
    pub const fn inverse(self) -> Symmetry {
        self
    }
}

/// The images of `cell` under the canonical passes, in pass order.
pub fn orbit(dims: Dimensions, cell: Cell) -> [Cell; 4] {
    CANONICAL_PASSES.map(|t| t.apply(dims, cell))
}

/// The orbit of `cell` with fixed-point duplicates removed, in pass order.
///
/// Holds four cells unless `cell` sits on the mid-line of an odd dimension.
pub fn distinct_orbit(dims: Dimensions, cell: Cell) -> Vec<Cell> {
    let mut images = Vec::with_capacity(4);
    for image in orbit(dims, cell) {
        if !images.contains(&image) {
            images.push(image);
        }
    }
    images
}

/// Applies `transform` to every hole, returning a new row-major sorted list.
///
/// The input is left untouched.
pub fn apply_transform(dims: Dimensions, holes: &[Cell], transform: Symmetry) -> Vec<Cell> {
    let mut moved: Vec<Cell> = holes.iter().map(|&h| transform.apply(dims, h)).collect();
    moved.sort_unstable();
    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Symmetry; 4] = CANONICAL_PASSES;

    #[test]
    fn test_transforms_on_known_cell() {
        let dims = Dimensions::new(3, 5);
        let cell = Cell::new(0, 1);
        assert_eq!(Symmetry::Identity.apply(dims, cell), Cell::new(0, 1));
        assert_eq!(Symmetry::Rotate180.apply(dims, cell), Cell::new(2, 3));
        assert_eq!(Symmetry::FlipVertical.apply(dims, cell), Cell::new(2, 1));
        assert_eq!(Symmetry::FlipHorizontal.apply(dims, cell), Cell::new(0, 3));
    }

    #[test]
    fn test_each_transform_is_involution() {
        let dims = Dimensions::new(4, 7);
        for t in ALL {
            for cell in dims.cells() {
                assert_eq!(t.apply(dims, t.apply(dims, cell)), cell, "{:?}", t);
            }
        }
    }

    #[test]
    fn test_compose_matches_application() {
        let dims = Dimensions::new(5, 6);
        for a in ALL {
            for b in ALL {
                let product = a.compose(b);
                for cell in dims.cells() {
                    assert_eq!(
                        a.apply(dims, b.apply(dims, cell)),
                        product.apply(dims, cell),
                        "{:?} after {:?}",
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_klein_four_structure() {
        assert_eq!(
            Symmetry::FlipVertical.compose(Symmetry::FlipHorizontal),
            Symmetry::Rotate180
        );
        assert_eq!(
            Symmetry::Rotate180.compose(Symmetry::FlipVertical),
            Symmetry::FlipHorizontal
        );
        for t in ALL {
            assert_eq!(t.compose(t), Symmetry::Identity);
            assert_eq!(t.inverse(), t);
        }
    }

    #[test]
    fn test_orbit_order_2x2() {
        let dims = Dimensions::new(2, 2);
        assert_eq!(
            orbit(dims, Cell::new(0, 0)),
            [
                Cell::new(0, 0),
                Cell::new(1, 1),
                Cell::new(1, 0),
                Cell::new(0, 1)
            ]
        );
    }

    #[test]
    fn test_distinct_orbit_fixed_points() {
        let dims = Dimensions::new(3, 3);
        assert_eq!(distinct_orbit(dims, Cell::new(1, 1)), vec![Cell::new(1, 1)]);
        assert_eq!(
            distinct_orbit(dims, Cell::new(0, 1)),
            vec![Cell::new(0, 1), Cell::new(2, 1)]
        );
        assert_eq!(distinct_orbit(dims, Cell::new(0, 0)).len(), 4);
    }

    #[test]
    fn test_apply_transform_is_pure_and_sorted() {
        let dims = Dimensions::new(4, 4);
        let holes = vec![Cell::new(0, 0), Cell::new(0, 3), Cell::new(1, 2)];
        let moved = apply_transform(dims, &holes, Symmetry::FlipVertical);
        assert_eq!(
            moved,
            vec![Cell::new(2, 2), Cell::new(3, 0), Cell::new(3, 3)]
        );
        assert_eq!(holes, vec![Cell::new(0, 0), Cell::new(0, 3), Cell::new(1, 2)]);
    }

    #[test]
    fn test_cells_row_major() {
        let dims = Dimensions::new(2, 3);
        let cells: Vec<Cell> = dims.cells().collect();
        assert_eq!(cells.len(), 6);
        assert!(cells.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(dims.index_of(Cell::new(1, 2)), 5);
    }

    #[test]
    fn test_full_orbit_count() {
        assert_eq!(Dimensions::new(2, 2).full_orbit_count(), 1);
        assert_eq!(Dimensions::new(3, 3).full_orbit_count(), 1);
        assert_eq!(Dimensions::new(20, 20).full_orbit_count(), 100);
        assert_eq!(Dimensions::new(5, 4).full_orbit_count(), 4);
    }
}
