//! Turning grille transposition cipher.
//!
//! A grille is a `rows x cols` grid with a set of holes. Plaintext is written
//! through the holes in four passes, one per symmetry of the rectangle
//! (identity, half turn, vertical flip, horizontal flip), and every cell the
//! text does not reach is padded with noise from an alphabet matching the
//! message's script. Reading the same passes back recovers the plaintext.
//!
//! This is a historical scrambling transform, not a secure cipher.
//!
//! # Architecture
//!
//! ```text
//! geometry   (Klein-four symmetries, orbits)
//!     ↓
//! HoleSet    (ordered holes + collision-free orbit reservation)
//!     ↓
//! chunker ─→ GrilleEncoder / GrilleDecoder  (one Grid per chunk)
//!     ↓
//! Grille     (configuration, editing, random generation, encrypt/decrypt)
//! ```
//!
//! # Examples
//!
//! Build a grille by hand and round-trip a message:
//!
//! ```
//! use turning_grille::{Grille, PreferScript, Script};
//!
//! let mut grille = Grille::new().with_seed(7);
//! grille.set_dimensions(4, 4).unwrap();
//! for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
//!     grille.toggle_hole(row, col).unwrap();
//! }
//!
//! let ciphertext = grille
//!     .encrypt("ATTACK AT DAWN!", &mut PreferScript(Script::Latin))
//!     .unwrap();
//! assert_eq!(ciphertext.chars().count(), 16);
//! assert_eq!(grille.decrypt(&ciphertext, 15).unwrap(), "ATTACK AT DAWN!");
//! ```
//!
//! Messages longer than one grid spill into further grids:
//!
//! ```
//! use turning_grille::{Alphabet, Grille};
//!
//! let mut grille = Grille::new().with_seed(3);
//! grille.set_dimensions(2, 2).unwrap();
//! grille.toggle_hole(0, 0).unwrap();
//!
//! let ciphertext = grille
//!     .encrypt("abcdef", &mut Alphabet::new("#".chars()).unwrap())
//!     .unwrap();
//! assert_eq!(ciphertext, "adcbe##f");
//! assert_eq!(grille.decrypt(&ciphertext, 6).unwrap(), "abcdef");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod chunker;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod hole_set;
pub mod key;

mod grille;

pub use alphabet::{Alphabet, AlphabetSelector, Classification, PreferScript, Script};
pub use config::GrilleConfig;
pub use decoder::GrilleDecoder;
pub use encoder::GrilleEncoder;
pub use error::{GrilleError, Result};
pub use geometry::{Cell, Dimensions, Symmetry, CANONICAL_PASSES};
pub use grid::Grid;
pub use grille::{Grille, Toggle};
pub use hole_set::HoleSet;
pub use key::GrilleKey;
