mod pgp;

use std::fmt;

use crate::error::{Error, Result};
use pgp::PGP_WORDS;

/// Number of rows in a word table, one per byte value.
pub const WORD_TABLE_ROWS: usize = 256;

/// Number of words per row.
pub const WORD_TABLE_COLUMNS: usize = 2;

/// Immutable mapping from a byte value and a column to a word.
///
/// A `WordTable` has exactly 256 rows of exactly 2 non-empty words. It is
/// validated once on construction and never mutated afterwards, so it can be
/// shared between endpoints behind an `Arc`.
///
/// The short authentication string picks column `position % 2` for the byte at
/// `position`, which makes swapped adjacent words audible when two people read
/// the string to each other.
///
/// # Examples
///
/// ```
/// use rtc_sas::word_table::WordTable;
///
/// let table = WordTable::pgp();
/// assert_eq!(table.word(0x00, 0), "aardvark");
/// assert_eq!(table.word(0xFF, 1), "yesteryear");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct WordTable {
    rows: Vec<[String; WORD_TABLE_COLUMNS]>,
}

impl Default for WordTable {
    fn default() -> Self {
        Self::pgp()
    }
}

impl fmt::Debug for WordTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordTable")
            .field("first", &self.rows.first())
            .field("rows", &self.rows.len())
            .finish()
    }
}

impl WordTable {
    /// Returns the built-in table backed by the PGP word list.
    pub fn pgp() -> Self {
        Self {
            rows: PGP_WORDS
                .iter()
                .map(|[even, odd]| [(*even).to_owned(), (*odd).to_owned()])
                .collect(),
        }
    }

    /// Builds a table from rows, checking the 256 × 2 non-empty shape.
    pub fn new(rows: Vec<[String; WORD_TABLE_COLUMNS]>) -> Result<Self> {
        if rows.len() != WORD_TABLE_ROWS {
            return Err(Error::ErrWordTableRowCount(rows.len()));
        }
        for (index, row) in rows.iter().enumerate() {
            if row.iter().any(|word| word.trim().is_empty()) {
                return Err(Error::ErrWordTableMalformedRow(index));
            }
        }

        Ok(Self { rows })
    }

    /// Parses a table from text holding one row per line, two
    /// whitespace-separated words per row. Blank lines and lines starting
    /// with `#` are skipped.
    ///
    /// ```
    /// use rtc_sas::word_table::WordTable;
    ///
    /// let text: String = (0..256).map(|i| format!("even{i} odd{i}\n")).collect();
    /// let table = WordTable::parse(&text).unwrap();
    /// assert_eq!(table.word(7, 1), "odd7");
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = Vec::with_capacity(WORD_TABLE_ROWS);
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let words: Vec<&str> = line.split_whitespace().collect();
            if words.len() != WORD_TABLE_COLUMNS {
                return Err(Error::ErrWordTableMalformedRow(rows.len()));
            }
            rows.push([words[0].to_owned(), words[1].to_owned()]);
        }

        Self::new(rows)
    }

    /// Returns the word for `value` in `column`. Columns wrap modulo 2.
    pub fn word(&self, value: u8, column: usize) -> &str {
        &self.rows[value as usize][column % WORD_TABLE_COLUMNS]
    }

    /// Returns both words of the row for `value`.
    pub fn row(&self, value: u8) -> &[String; WORD_TABLE_COLUMNS] {
        &self.rows[value as usize]
    }
}
