//! Splits text into grid-sized units, counting characters rather than bytes.

/// Iterator over consecutive `unit_size`-character slices of a string.
///
/// Every slice holds exactly `unit_size` characters except possibly the
/// last, which holds the remainder.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    rest: &'a str,
    unit_size: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() || self.unit_size == 0 {
            return None;
        }
        let split = self
            .rest
            .char_indices()
            .nth(self.unit_size)
            .map_or(self.rest.len(), |(idx, _)| idx);
        let (head, tail) = self.rest.split_at(split);
        self.rest = tail;
        Some(head)
    }
}

/// Splits `text` into units of `unit_size` characters.
///
/// Empty text or a zero unit size yields no chunks.
///
/// # Examples
///
/// ```
/// use turning_grille::chunker::split_into;
///
/// let chunks: Vec<&str> = split_into("абвгд", 2).collect();
/// assert_eq!(chunks, vec!["аб", "вг", "д"]);
/// ```
pub fn split_into(text: &str, unit_size: usize) -> Chunks<'_> {
    Chunks {
        rest: text,
        unit_size,
    }
}

/// Number of chunks `split_into` yields for `len` characters.
pub fn chunk_count(len: usize, unit_size: usize) -> usize {
    if unit_size == 0 {
        return 0;
    }
    len.div_ceil(unit_size)
}
