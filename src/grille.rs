//! Grille: the in-process API a presentation layer drives.
//!
//! Owns the configuration, the current hole set and the padding randomness
//! source. Grid editing, random generation, encryption and decryption all go
//! through here.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::alphabet::AlphabetSelector;
use crate::config::GrilleConfig;
use crate::decoder::GrilleDecoder;
use crate::encoder::GrilleEncoder;
use crate::error::{GrilleError, Result};
use crate::geometry::Dimensions;
use crate::grid::Grid;
use crate::hole_set::HoleSet;
use crate::key::GrilleKey;

/// Side length of a freshly created grille, clamped into the configured bounds.
const DEFAULT_SIDE: usize = 20;

/// What [`Grille::toggle_hole`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Inserted,
    Removed,
}

/// Turning grille cipher.
///
/// # Examples
///
/// ```
/// use turning_grille::{Grille, PreferScript, Script};
///
/// let mut grille = Grille::new().with_seed(42);
/// grille.generate_random_holes(6, 6).unwrap();
///
/// let message = "Meet me at the old mill";
/// let ciphertext = grille
///     .encrypt(message, &mut PreferScript(Script::Latin))
///     .unwrap();
/// assert_eq!(ciphertext.chars().count(), 36);
///
/// let length = message.chars().count();
/// assert_eq!(grille.decrypt(&ciphertext, length).unwrap(), message);
/// ```
#[derive(Debug, Clone)]
pub struct Grille {
    config: GrilleConfig,
    holes: HoleSet,
    rng: StdRng,
}

impl Default for Grille {
    fn default() -> Self {
        Self::new()
    }
}

impl Grille {
    /// Creates a 20x20 grille with no holes and the default configuration.
    pub fn new() -> Self {
        Self::build(GrilleConfig::default())
    }

    /// Creates a grille with custom bounds.
    ///
    /// The initial size is 20x20 clamped into the configured range.
    ///
    /// # Errors
    /// Returns [`GrilleError::InvalidBounds`] if the configuration is inconsistent.
    pub fn with_config(config: GrilleConfig) -> Result<Self> {
        config.check_bounds()?;
        Ok(Self::build(config))
    }

    fn build(config: GrilleConfig) -> Self {
        let side = DEFAULT_SIDE.clamp(config.min_dimension, config.max_dimension);
        Grille {
            config,
            holes: HoleSet::new(Dimensions::new(side, side)),
            rng: StdRng::from_entropy(),
        }
    }

    /// Restores a grille from a key under the default configuration.
    ///
    /// # Errors
    /// [`GrilleError::InvalidDimensions`] if the key's size is out of range,
    /// [`GrilleError::MalformedKey`] if its holes are not a valid grille.
    pub fn from_key(key: &GrilleKey) -> Result<Self> {
        Self::from_key_with_config(key, GrilleConfig::default())
    }

    /// Restores a grille from a key under `config`.
    pub fn from_key_with_config(key: &GrilleKey, config: GrilleConfig) -> Result<Self> {
        let mut grille = Self::with_config(config)?;
        config.validate_dimensions(key.rows, key.cols)?;
        grille.holes = key.to_hole_set()?;
        Ok(grille)
    }

    /// Reseeds the padding and generator randomness for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &GrilleConfig {
        &self.config
    }

    /// Current grid dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.holes.dimensions()
    }

    /// Current hole set.
    pub fn holes(&self) -> &HoleSet {
        &self.holes
    }

    /// Exports the current grille as a key.
    pub fn key(&self) -> GrilleKey {
        GrilleKey::from_hole_set(&self.holes)
    }

    /// Resizes the grid, clearing all holes.
    ///
    /// # Errors
    /// Returns [`GrilleError::InvalidDimensions`] outside the configured
    /// bounds; the grille is left unchanged.
    pub fn set_dimensions(&mut self, rows: usize, cols: usize) -> Result<()> {
        let dims = self.config.validate_dimensions(rows, cols)?;
        self.holes = HoleSet::new(dims);
        debug!("Grid resized to {}x{}", rows, cols);
        Ok(())
    }

    /// Inserts a hole if absent, removes it if present.
    ///
    /// # Errors
    /// [`GrilleError::Collision`] or [`GrilleError::OutOfBounds`] on a failed
    /// insertion; the hole set is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use turning_grille::{Grille, Toggle};
    ///
    /// let mut grille = Grille::new();
    /// grille.set_dimensions(2, 2).unwrap();
    /// assert_eq!(grille.toggle_hole(0, 0).unwrap(), Toggle::Inserted);
    /// assert!(grille.toggle_hole(1, 1).is_err());
    /// assert_eq!(grille.toggle_hole(0, 0).unwrap(), Toggle::Removed);
    /// ```
    pub fn toggle_hole(&mut self, row: usize, col: usize) -> Result<Toggle> {
        if self.holes.remove(row, col) {
            return Ok(Toggle::Removed);
        }
        self.holes.try_insert(row, col)?;
        Ok(Toggle::Inserted)
    }

    /// Resizes the grid and fills it with a random valid hole set.
    ///
    /// # Returns
    /// The number of holes generated.
    ///
    /// # Errors
    /// Returns [`GrilleError::InvalidDimensions`] outside the configured bounds.
    pub fn generate_random_holes(&mut self, rows: usize, cols: usize) -> Result<usize> {
        let dims = self.config.validate_dimensions(rows, cols)?;
        self.holes = HoleSet::random(dims, self.config.max_random_attempts, &mut self.rng);
        Ok(self.holes.len())
    }

    /// Removes every hole, keeping the dimensions.
    pub fn clear_holes(&mut self) {
        self.holes.clear();
    }

    /// Encrypts `plaintext`, padding with the alphabet `selector` picks.
    ///
    /// # Errors
    /// Returns [`GrilleError::EmptyGrille`] if no holes are set.
    pub fn encrypt<S: AlphabetSelector + ?Sized>(
        &mut self,
        plaintext: &str,
        selector: &mut S,
    ) -> Result<String> {
        self.encrypt_grids(plaintext, selector)
            .map(|(ciphertext, _)| ciphertext)
    }

    /// Encrypts `plaintext` and also returns every filled grid.
    ///
    /// # Errors
    /// Returns [`GrilleError::EmptyGrille`] if no holes are set.
    pub fn encrypt_grids<S: AlphabetSelector + ?Sized>(
        &mut self,
        plaintext: &str,
        selector: &mut S,
    ) -> Result<(String, Vec<Grid>)> {
        if self.holes.is_empty() {
            return Err(GrilleError::EmptyGrille);
        }
        let alphabet = selector.select(plaintext);
        GrilleEncoder::new(&self.holes).encode_grids(plaintext, &alphabet, &mut self.rng)
    }

    /// Decrypts `ciphertext` into at most `original_length` characters.
    ///
    /// A ciphertext too short for `original_length` yields whatever could
    /// be recovered.
    ///
    /// # Errors
    /// Returns [`GrilleError::EmptyGrille`] if no holes are set.
    pub fn decrypt(&self, ciphertext: &str, original_length: usize) -> Result<String> {
        let plaintext = GrilleDecoder::new(&self.holes).decode(ciphertext, original_length)?;
        let recovered = plaintext.chars().count();
        if recovered < original_length {
            warn!(
                "Recovered {} of {} requested characters",
                recovered, original_length
            );
        }
        Ok(plaintext)
    }

    /// Like [`decrypt`](Self::decrypt) but fails if fewer than
    /// `original_length` characters are recoverable.
    ///
    /// # Errors
    /// [`GrilleError::EmptyGrille`] or [`GrilleError::InsufficientLength`].
    pub fn decrypt_exact(&self, ciphertext: &str, original_length: usize) -> Result<String> {
        let plaintext = GrilleDecoder::new(&self.holes).decode(ciphertext, original_length)?;
        let recovered = plaintext.chars().count();
        if recovered < original_length {
            return Err(GrilleError::InsufficientLength {
                expected: original_length,
                recovered,
            });
        }
        Ok(plaintext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{Alphabet, PreferScript, Script};
    use crate::geometry::Cell;

    fn two_by_two() -> Grille {
        let mut grille = Grille::new().with_seed(1);
        grille.set_dimensions(2, 2).unwrap();
        grille.toggle_hole(0, 0).unwrap();
        grille
    }

    #[test]
    fn test_default_construction() {
        let grille = Grille::new();
        assert_eq!(grille.dimensions(), Dimensions::new(20, 20));
        assert!(grille.holes().is_empty());
    }

    #[test]
    fn test_config_clamps_default_side() {
        let grille = Grille::with_config(GrilleConfig::with_bounds(2, 8).unwrap()).unwrap();
        assert_eq!(grille.dimensions(), Dimensions::new(8, 8));
    }

    #[test]
    fn test_set_dimensions_invalid_keeps_state() {
        let mut grille = two_by_two();
        let err = grille.set_dimensions(21, 4).unwrap_err();
        assert!(matches!(err, GrilleError::InvalidDimensions { .. }));
        assert_eq!(grille.dimensions(), Dimensions::new(2, 2));
        assert_eq!(grille.holes().len(), 1);
    }

    #[test]
    fn test_set_dimensions_clears_holes() {
        let mut grille = two_by_two();
        grille.set_dimensions(4, 4).unwrap();
        assert!(grille.holes().is_empty());
        assert!(grille.toggle_hole(3, 3).is_ok());
    }

    #[test]
    fn test_toggle_collision_leaves_state() {
        let mut grille = two_by_two();
        let before = grille.holes().clone();
        assert!(matches!(
            grille.toggle_hole(1, 1),
            Err(GrilleError::Collision { .. })
        ));
        assert_eq!(grille.holes(), &before);
    }

    #[test]
    fn test_toggle_remove_then_reinsert_orbit_cell() {
        let mut grille = two_by_two();
        assert_eq!(grille.toggle_hole(0, 0).unwrap(), Toggle::Removed);
        assert_eq!(grille.toggle_hole(1, 1).unwrap(), Toggle::Inserted);
    }

    #[test]
    fn test_scenario_ab() {
        let mut grille = two_by_two();
        let (ciphertext, grids) = grille
            .encrypt_grids("AB", &mut Alphabet::new("z".chars()).unwrap())
            .unwrap();
        assert_eq!(ciphertext, "AzzB");
        assert_eq!(grids[0].get(Cell::new(1, 1)), Some('B'));
        assert_eq!(grille.decrypt(&ciphertext, 2).unwrap(), "AB");
    }

    #[test]
    fn test_encrypt_empty_grille() {
        let mut grille = Grille::new();
        assert_eq!(
            grille.encrypt("text", &mut PreferScript(Script::Latin)),
            Err(GrilleError::EmptyGrille)
        );
        assert_eq!(grille.decrypt("text", 4), Err(GrilleError::EmptyGrille));
    }

    #[test]
    fn test_clear_holes() {
        let mut grille = two_by_two();
        grille.clear_holes();
        assert!(grille.holes().is_empty());
        assert_eq!(grille.dimensions(), Dimensions::new(2, 2));
    }

    #[test]
    fn test_decrypt_lenient_vs_exact() {
        let grille = two_by_two();
        // Padding is read back in pass order once the real text runs out.
        assert_eq!(grille.decrypt("AzzB", 5).unwrap(), "ABzz");
        assert_eq!(
            grille.decrypt_exact("AzzB", 5),
            Err(GrilleError::InsufficientLength {
                expected: 5,
                recovered: 4
            })
        );
        assert_eq!(grille.decrypt_exact("AzzB", 2).unwrap(), "AB");
    }

    #[test]
    fn test_generate_random_holes() {
        let mut grille = Grille::new().with_seed(77);
        assert_eq!(grille.generate_random_holes(5, 7).unwrap(), 6);
        assert_eq!(grille.dimensions(), Dimensions::new(5, 7));
        assert!(grille.generate_random_holes(1, 7).is_err());
        assert_eq!(grille.dimensions(), Dimensions::new(5, 7));
    }

    #[test]
    fn test_key_roundtrip() {
        let mut grille = Grille::new().with_seed(5);
        grille.generate_random_holes(8, 6).unwrap();
        let restored = Grille::from_key(&grille.key()).unwrap();
        assert_eq!(restored.holes(), grille.holes());
    }

    #[test]
    fn test_key_out_of_config_range() {
        let key = GrilleKey {
            rows: 30,
            cols: 30,
            holes: vec![Cell::new(0, 0)],
        };
        assert!(matches!(
            Grille::from_key(&key),
            Err(GrilleError::InvalidDimensions { .. })
        ));
    }
}
