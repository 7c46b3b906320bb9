//! Padding alphabets and the script detection that picks one.
//!
//! Cells the plaintext does not reach are filled with noise drawn from an
//! alphabet matching the dominant script of the message, so the padding
//! blends in with the real characters.

use rand::Rng;

use crate::error::{GrilleError, Result};

const CYRILLIC: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯабвгдеёжзийклмнопрстуфхцчшщъыьэюя";
const LATIN: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// A script the user can pick when a message mixes both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Cyrillic,
    Latin,
}

/// Result of scanning a text for Cyrillic and Latin letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Cyrillic,
    Latin,
    Mixed,
    Other,
}

/// Classifies `text` by the letters it contains.
///
/// Cyrillic means any character in `А..=Я` or `а..=я`; Latin means any ASCII
/// letter.
///
/// # Examples
///
/// ```
/// use turning_grille::alphabet::{classify, Classification};
///
/// assert_eq!(classify("Привет"), Classification::Cyrillic);
/// assert_eq!(classify("Hello"), Classification::Latin);
/// assert_eq!(classify("Hello, Мир"), Classification::Mixed);
/// assert_eq!(classify("42!"), Classification::Other);
/// ```
pub fn classify(text: &str) -> Classification {
    let has_cyrillic = text
        .chars()
        .any(|c| ('А'..='Я').contains(&c) || ('а'..='я').contains(&c));
    let has_latin = text.chars().any(|c| c.is_ascii_alphabetic());
    match (has_cyrillic, has_latin) {
        (true, true) => Classification::Mixed,
        (true, false) => Classification::Cyrillic,
        (false, true) => Classification::Latin,
        (false, false) => Classification::Other,
    }
}

/// Maps a classification to its padding alphabet.
///
/// `choice_if_mixed` is only consulted for [`Classification::Mixed`]; when it
/// is `None` the Cyrillic alphabet is used.
pub fn resolve(classification: Classification, choice_if_mixed: Option<Script>) -> Alphabet {
    match classification {
        Classification::Cyrillic => Alphabet::cyrillic(),
        Classification::Latin => Alphabet::latin(),
        Classification::Mixed => match choice_if_mixed {
            Some(Script::Latin) => Alphabet::latin(),
            Some(Script::Cyrillic) | None => Alphabet::cyrillic(),
        },
        Classification::Other => Alphabet::fallback(),
    }
}

/// Non-empty ordered set of padding characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Creates an alphabet from arbitrary characters.
    ///
    /// # Errors
    /// Returns [`GrilleError::EmptyAlphabet`] if `chars` yields nothing.
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Result<Self> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(GrilleError::EmptyAlphabet);
        }
        Ok(Alphabet { chars })
    }

    /// Russian upper and lower case letters, including `Ё`/`ё`.
    pub fn cyrillic() -> Self {
        Alphabet {
            chars: CYRILLIC.chars().collect(),
        }
    }

    /// ASCII letters, lower case first.
    pub fn latin() -> Self {
        Alphabet {
            chars: LATIN.chars().collect(),
        }
    }

    /// ASCII letters, digits and punctuation.
    pub fn fallback() -> Self {
        Alphabet {
            chars: LATIN.chars().chain(DIGITS.chars()).chain(PUNCTUATION.chars()).collect(),
        }
    }

    /// Alphabet for a script.
    pub fn for_script(script: Script) -> Self {
        match script {
            Script::Cyrillic => Self::cyrillic(),
            Script::Latin => Self::latin(),
        }
    }

    /// Characters in order.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; alphabets are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Draws one character uniformly.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.chars[rng.gen_range(0..self.chars.len())]
    }
}

/// Supplies the padding alphabet for a plaintext.
///
/// The default pipeline classifies the text and, for mixed scripts, asks
/// [`choose_mixed`](Self::choose_mixed). Any `FnMut(&str) -> Script` closure
/// is a selector whose body answers that question synchronously.
pub trait AlphabetSelector {
    /// Asked once when the text mixes Cyrillic and Latin letters.
    fn choose_mixed(&mut self, _text: &str) -> Script {
        Script::Cyrillic
    }

    /// Returns the padding alphabet for `text`.
    fn select(&mut self, text: &str) -> Alphabet {
        let classification = classify(text);
        let choice = match classification {
            Classification::Mixed => Some(self.choose_mixed(text)),
            _ => None,
        };
        resolve(classification, choice)
    }
}

/// Detects the script and resolves mixed text to a fixed choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferScript(pub Script);

impl AlphabetSelector for PreferScript {
    fn choose_mixed(&mut self, _text: &str) -> Script {
        self.0
    }
}

/// An explicit alphabet is used regardless of the text.
impl AlphabetSelector for Alphabet {
    fn select(&mut self, _text: &str) -> Alphabet {
        self.clone()
    }
}

impl<F> AlphabetSelector for F
where
    F: FnMut(&str) -> Script,
{
    fn choose_mixed(&mut self, text: &str) -> Script {
        self(text)
    }
}
