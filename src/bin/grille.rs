//! Command-line host for the turning grille cipher.
//!
//! Keys are stored as JSON files. Text arguments fall back to stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter};
use turning_grille::config::DEFAULT_MIN_DIMENSION;
use turning_grille::geometry::apply_transform;
use turning_grille::{
    Alphabet, AlphabetSelector, Cell, Dimensions, Grid, Grille, GrilleConfig, GrilleKey,
    PreferScript, Script, CANONICAL_PASSES,
};

#[derive(Parser, Debug)]
#[command(name = "grille", version, about = "Turning grille transposition cipher")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Largest allowed row/column count
    #[arg(long, global = true, default_value_t = 20)]
    max_dimension: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random key
    Generate {
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        cols: usize,
        /// Seed for reproducible keys
        #[arg(long)]
        seed: Option<u64>,
        /// Write the key here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a key's hole mask
    Show {
        #[arg(long)]
        key: PathBuf,
        /// Print the mask as seen in each of the four passes
        #[arg(long)]
        passes: bool,
    },
    /// Encrypt text with a key
    Encrypt {
        #[arg(long)]
        key: PathBuf,
        /// Padding alphabet
        #[arg(long, value_enum, default_value_t = AlphabetArg::Auto)]
        alphabet: AlphabetArg,
        /// Seed for reproducible padding
        #[arg(long)]
        seed: Option<u64>,
        /// Also print every filled grid
        #[arg(long)]
        grids: bool,
        text: Option<String>,
    },
    /// Decrypt text with a key
    Decrypt {
        #[arg(long)]
        key: PathBuf,
        /// Character count of the original plaintext
        #[arg(long)]
        length: usize,
        /// Fail instead of returning a partial plaintext
        #[arg(long)]
        exact: bool,
        text: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum AlphabetArg {
    /// Detect the script, preferring Cyrillic for mixed text
    Auto,
    Latin,
    Cyrillic,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = GrilleConfig::with_bounds(DEFAULT_MIN_DIMENSION, cli.max_dimension)?;

    match cli.command {
        Command::Generate {
            rows,
            cols,
            seed,
            out,
        } => {
            let mut grille = seeded(Grille::with_config(config)?, seed);
            let count = grille.generate_random_holes(rows, cols)?;
            info!("Generated {} holes", count);
            let json = grille.key().to_json()?;
            match out {
                Some(path) => fs::write(&path, json)
                    .with_context(|| format!("writing key to {}", path.display()))?,
                None => println!("{}", json),
            }
        }
        Command::Show { key, passes } => {
            let grille = load_grille(&key, config)?;
            if passes {
                let holes = grille.holes().to_vec();
                for transform in CANONICAL_PASSES {
                    let moved = apply_transform(grille.dimensions(), &holes, transform);
                    println!("{:?}:", transform);
                    println!("{}\n", render_mask(grille.dimensions(), &moved));
                }
            } else {
                println!("{}", render_mask(grille.dimensions(), &grille.holes().to_vec()));
            }
            println!(
                "{} holes, {} characters per grid",
                grille.holes().len(),
                grille.holes().effective_capacity()
            );
        }
        Command::Encrypt {
            key,
            alphabet,
            seed,
            grids,
            text,
        } => {
            let mut grille = seeded(load_grille(&key, config)?, seed);
            let plaintext = text_or_stdin(text)?;
            let mut selector: Box<dyn AlphabetSelector> = match alphabet {
                AlphabetArg::Auto => Box::new(PreferScript(Script::Cyrillic)),
                AlphabetArg::Latin => Box::new(Alphabet::for_script(Script::Latin)),
                AlphabetArg::Cyrillic => Box::new(Alphabet::for_script(Script::Cyrillic)),
            };
            let (ciphertext, filled) = grille.encrypt_grids(&plaintext, selector.as_mut())?;
            if grids {
                print_grids(&filled);
            }
            println!("{}", ciphertext);
            eprintln!("length: {}", plaintext.chars().count());
        }
        Command::Decrypt {
            key,
            length,
            exact,
            text,
        } => {
            let grille = load_grille(&key, config)?;
            let ciphertext = text_or_stdin(text)?;
            let plaintext = if exact {
                grille.decrypt_exact(&ciphertext, length)?
            } else {
                grille.decrypt(&ciphertext, length)?
            };
            println!("{}", plaintext);
        }
    }
    Ok(())
}

fn seeded(grille: Grille, seed: Option<u64>) -> Grille {
    match seed {
        Some(seed) => grille.with_seed(seed),
        None => grille,
    }
}

fn load_grille(path: &Path, config: GrilleConfig) -> Result<Grille> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading key from {}", path.display()))?;
    let key = GrilleKey::from_json(&json)?;
    let grille = Grille::from_key_with_config(&key, config)?;
    if grille.holes().is_empty() {
        bail!("key {} has no holes", path.display());
    }
    Ok(grille)
}

fn text_or_stdin(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("reading text from stdin")?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

/// `#` for holes, `.` for everything else.
fn render_mask(dims: Dimensions, holes: &[Cell]) -> String {
    (0..dims.rows)
        .map(|row| {
            (0..dims.cols)
                .map(|col| {
                    if holes.contains(&Cell::new(row, col)) {
                        "#"
                    } else {
                        "."
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_grids(grids: &[Grid]) {
    for (i, grid) in grids.iter().enumerate() {
        println!("grid {}:", i + 1);
        println!("{}", grid);
        println!();
    }
}
