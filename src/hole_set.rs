//! HoleSet: the ordered holes of a grille plus the collision-free placement rule.
//!
//! Every accepted hole reserves the cells of its symmetry orbit. A candidate
//! is rejected if any of its orbit cells is already reserved, which keeps the
//! union of all orbits injective: each physical cell is reached by at most one
//! hole across the four passes.

use std::collections::{BTreeSet, HashMap};

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{GrilleError, Result};
use crate::geometry::{distinct_orbit, Cell, Dimensions};

/// Ordered set of holes for a fixed grid size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoleSet {
    dims: Dimensions,
    holes: BTreeSet<Cell>,
    /// Orbit cell -> hole that currently owns it.
    reserved: HashMap<Cell, Cell>,
}

impl HoleSet {
    /// Creates an empty hole set for a grid of `dims`.
    pub fn new(dims: Dimensions) -> Self {
        HoleSet {
            dims,
            holes: BTreeSet::new(),
            reserved: HashMap::new(),
        }
    }

    /// Builds a hole set by inserting `holes` in the given order.
    ///
    /// # Errors
    /// Propagates the first [`GrilleError::OutOfBounds`] or
    /// [`GrilleError::Collision`] encountered.
    pub fn from_holes<I>(dims: Dimensions, holes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut set = Self::new(dims);
        for (row, col) in holes {
            set.try_insert(row, col)?;
        }
        Ok(set)
    }

    /// Grid dimensions this set is bound to.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Number of holes.
    pub fn len(&self) -> usize {
        self.holes.len()
    }

    /// Returns true if there are no holes.
    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// Returns true if `(row, col)` is a hole.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.holes.contains(&Cell::new(row, col))
    }

    /// Returns the hole whose orbit covers `(row, col)`, if any.
    pub fn owner_of(&self, row: usize, col: usize) -> Option<Cell> {
        self.reserved.get(&Cell::new(row, col)).copied()
    }

    /// Holes in row-major order: the canonical write/read sequence.
    pub fn ordered_holes(&self) -> impl Iterator<Item = Cell> + '_ {
        self.holes.iter().copied()
    }

    /// Holes in row-major order, collected.
    pub fn to_vec(&self) -> Vec<Cell> {
        self.holes.iter().copied().collect()
    }

    /// Theoretical characters per grid: four per hole.
    pub fn capacity_per_chunk(&self) -> usize {
        4 * self.holes.len()
    }

    /// Distinct cells covered by all orbits.
    ///
    /// Equal to [`capacity_per_chunk`](Self::capacity_per_chunk) unless a hole
    /// sits on the mid-line of an odd dimension, where orbit images coincide.
    pub fn effective_capacity(&self) -> usize {
        self.reserved.len()
    }

    /// Inserts a hole at `(row, col)` if its orbit is free.
    ///
    /// # Errors
    /// - [`GrilleError::OutOfBounds`] if the cell is outside the grid.
    /// - [`GrilleError::Collision`] if an orbit cell is already reserved
    ///   (this includes re-inserting an existing hole).
    ///
    /// The set is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use turning_grille::{Dimensions, GrilleError, HoleSet};
    ///
    /// let mut holes = HoleSet::new(Dimensions::new(2, 2));
    /// holes.try_insert(0, 0).unwrap();
    /// assert!(matches!(holes.try_insert(1, 1), Err(GrilleError::Collision { .. })));
    /// assert_eq!(holes.len(), 1);
    /// ```
    pub fn try_insert(&mut self, row: usize, col: usize) -> Result<()> {
        let cell = Cell::new(row, col);
        if !self.dims.contains(cell) {
            return Err(GrilleError::OutOfBounds {
                row,
                col,
                rows: self.dims.rows,
                cols: self.dims.cols,
            });
        }
        let images = distinct_orbit(self.dims, cell);
        if let Some((clash, owner)) = images
            .iter()
            .find_map(|image| self.reserved.get(image).map(|owner| (*image, *owner)))
        {
            return Err(GrilleError::Collision {
                row,
                col,
                clash_row: clash.row,
                clash_col: clash.col,
                owner_row: owner.row,
                owner_col: owner.col,
            });
        }
        for image in images {
            self.reserved.insert(image, cell);
        }
        self.holes.insert(cell);
        Ok(())
    }

    /// Removes the hole at `(row, col)` and releases its orbit.
    ///
    /// Returns false if there was no hole there.
    pub fn remove(&mut self, row: usize, col: usize) -> bool {
        let cell = Cell::new(row, col);
        if !self.holes.remove(&cell) {
            return false;
        }
        self.reserved.retain(|_, owner| *owner != cell);
        true
    }

    /// Removes every hole and all reservations.
    pub fn clear(&mut self) {
        self.holes.clear();
        self.reserved.clear();
    }

    /// Generates a random valid hole set for `dims`.
    ///
    /// Candidates are visited in uniformly shuffled order and inserted with
    /// [`try_insert`](Self::try_insert); collisions are discarded. The loop
    /// stops once the target count is reached, the candidates run out, or
    /// `max_attempts` insertions were tried.
    ///
    /// The target is one hole per full four-cell orbit,
    /// `(rows / 2) * (cols / 2)`. Mid-line cells of odd dimensions are only
    /// proposed when the grid has no full orbit at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use turning_grille::{Dimensions, HoleSet};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let holes = HoleSet::random(Dimensions::new(6, 6), 10_000, &mut rng);
    /// assert_eq!(holes.len(), 9);
    /// assert_eq!(holes.effective_capacity(), 36);
    /// ```
    pub fn random<R: Rng + ?Sized>(dims: Dimensions, max_attempts: usize, rng: &mut R) -> Self {
        let mut set = Self::new(dims);
        let full_orbits = dims.full_orbit_count();
        let target = full_orbits.max(1);

        let mut candidates: Vec<Cell> = dims
            .cells()
            .filter(|&c| full_orbits == 0 || distinct_orbit(dims, c).len() == 4)
            .collect();
        candidates.shuffle(rng);

        let mut attempts = 0;
        for cell in candidates {
            if set.len() >= target || attempts >= max_attempts {
                break;
            }
            attempts += 1;
            if let Err(err) = set.try_insert(cell.row, cell.col) {
                trace!("Rejected random hole candidate: {}", err);
            }
        }

        debug!(
            "Generated {} random holes on {}x{} grid ({} attempts, target {})",
            set.len(),
            dims.rows,
            dims.cols,
            attempts,
            target
        );
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_insert_and_order() {
        let mut set = HoleSet::new(Dimensions::new(4, 4));
        set.try_insert(1, 1).unwrap();
        set.try_insert(0, 1).unwrap();
        set.try_insert(0, 0).unwrap();
        assert_eq!(
            set.to_vec(),
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
        assert_eq!(set.capacity_per_chunk(), 12);
        assert_eq!(set.effective_capacity(), 12);
    }

    #[test]
    fn test_collision_on_rotated_image() {
        let mut set = HoleSet::new(Dimensions::new(2, 2));
        set.try_insert(0, 0).unwrap();
        let before = set.clone();
        assert_eq!(
            set.try_insert(1, 1),
            Err(GrilleError::Collision {
                row: 1,
                col: 1,
                clash_row: 1,
                clash_col: 1,
                owner_row: 0,
                owner_col: 0,
            })
        );
        assert_eq!(set, before);
    }

    #[test]
    fn test_duplicate_insert_is_collision() {
        let mut set = HoleSet::new(Dimensions::new(4, 4));
        set.try_insert(0, 2).unwrap();
        assert!(matches!(
            set.try_insert(0, 2),
            Err(GrilleError::Collision { .. })
        ));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut set = HoleSet::new(Dimensions::new(3, 4));
        assert_eq!(
            set.try_insert(3, 0),
            Err(GrilleError::OutOfBounds {
                row: 3,
                col: 0,
                rows: 3,
                cols: 4
            })
        );
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_releases_orbit() {
        let mut set = HoleSet::new(Dimensions::new(2, 2));
        set.try_insert(0, 0).unwrap();
        assert!(set.remove(0, 0));
        assert_eq!(set.effective_capacity(), 0);
        // A cell of the released orbit is accepted again.
        set.try_insert(1, 1).unwrap();
        assert_eq!(set.owner_of(0, 0), Some(Cell::new(1, 1)));
    }

    #[test]
    fn test_remove_missing_hole() {
        let mut set = HoleSet::new(Dimensions::new(2, 2));
        assert!(!set.remove(0, 0));
        set.try_insert(0, 0).unwrap();
        // (1, 1) is reserved but is not a hole.
        assert!(!set.remove(1, 1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_keeps_other_reservations() {
        let mut set = HoleSet::new(Dimensions::new(4, 4));
        set.try_insert(0, 0).unwrap();
        set.try_insert(0, 1).unwrap();
        set.remove(0, 0);
        assert_eq!(set.effective_capacity(), 4);
        assert!(set.try_insert(3, 2).is_err());
        assert!(set.try_insert(3, 3).is_ok());
    }

    #[test]
    fn test_mid_line_hole_capacity() {
        let mut set = HoleSet::new(Dimensions::new(3, 3));
        set.try_insert(1, 1).unwrap();
        assert_eq!(set.capacity_per_chunk(), 4);
        assert_eq!(set.effective_capacity(), 1);
        set.try_insert(0, 1).unwrap();
        assert_eq!(set.effective_capacity(), 3);
    }

    #[test]
    fn test_clear() {
        let mut set = HoleSet::from_holes(Dimensions::new(4, 4), [(0, 0), (0, 1)]).unwrap();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.owner_of(3, 3), None);
        assert!(set.try_insert(3, 3).is_ok());
    }

    #[test]
    fn test_from_holes_rejects_collision() {
        let result = HoleSet::from_holes(Dimensions::new(4, 4), [(0, 0), (3, 0)]);
        assert!(matches!(result, Err(GrilleError::Collision { .. })));
    }

    #[test]
    fn test_random_orbits_are_injective() {
        let mut rng = StdRng::seed_from_u64(2024);
        for rows in 2..=9 {
            for cols in 2..=9 {
                let dims = Dimensions::new(rows, cols);
                let set = HoleSet::random(dims, 10_000, &mut rng);
                assert_eq!(set.len(), dims.full_orbit_count());

                let mut covered = HashSet::new();
                for hole in set.ordered_holes() {
                    for image in distinct_orbit(dims, hole) {
                        assert!(covered.insert(image), "{}x{} overlap at {:?}", rows, cols, image);
                    }
                }
                assert_eq!(covered.len(), set.capacity_per_chunk());
            }
        }
    }

    #[test]
    fn test_random_respects_attempt_cap() {
        let mut rng = StdRng::seed_from_u64(1);
        let set = HoleSet::random(Dimensions::new(10, 10), 3, &mut rng);
        assert!(set.len() <= 3);
    }

    #[test]
    fn test_random_single_row_uses_degenerate_orbits() {
        let mut rng = StdRng::seed_from_u64(5);
        let set = HoleSet::random(Dimensions::new(1, 5), 100, &mut rng);
        assert_eq!(set.len(), 1);
    }
}
