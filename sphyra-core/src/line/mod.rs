//! Print line model and input normalization
//!
//! A print line holds at most [`MAX_COLUMNS`] symbols. Raw caller input
//! is normalized before scheduling: truncated to the first eight
//! characters, with anything outside {'0', '1', ' '} replaced by a
//! blank. Normalization never rejects input; only an empty line is an
//! error, and that is checked at the printer boundary.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of hammer columns on the print head
pub const MAX_COLUMNS: usize = 8;

/// One printable symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    /// The '0' bit mark
    Zero,
    /// The '1' bit mark
    One,
    /// Empty column, never struck
    Blank,
}

impl Symbol {
    /// Map a raw input character to a symbol
    ///
    /// Unsupported characters normalize to [`Symbol::Blank`].
    pub fn from_char(c: char) -> Self {
        match c {
            '0' => Symbol::Zero,
            '1' => Symbol::One,
            _ => Symbol::Blank,
        }
    }

    /// Check whether a raw character has a symbol of its own
    pub fn is_supported(c: char) -> bool {
        matches!(c, '0' | '1' | ' ')
    }

    /// The character this symbol prints as
    pub fn as_char(self) -> char {
        match self {
            Symbol::Zero => '0',
            Symbol::One => '1',
            Symbol::Blank => ' ',
        }
    }

    /// Check whether this symbol requires a hammer strike
    pub fn strikes(self) -> bool {
        !matches!(self, Symbol::Blank)
    }
}

/// A normalized print line
///
/// Index = physical column, 0 through [`MAX_COLUMNS`] - 1.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    symbols: Vec<Symbol, MAX_COLUMNS>,
}

impl Line {
    /// Normalize raw input into a line
    ///
    /// Takes the first [`MAX_COLUMNS`] characters and maps each through
    /// [`Symbol::from_char`]. Idempotent: normalizing an already
    /// normalized line changes nothing.
    pub fn normalize(raw: &str) -> Self {
        let mut symbols = Vec::new();
        for c in raw.chars().take(MAX_COLUMNS) {
            let _ = symbols.push(Symbol::from_char(c));
        }
        Self { symbols }
    }

    /// Build a line from a symbol slice
    ///
    /// Entries beyond [`MAX_COLUMNS`] are dropped.
    pub fn from_symbols(symbols: &[Symbol]) -> Self {
        let mut line = Vec::new();
        for &s in symbols.iter().take(MAX_COLUMNS) {
            let _ = line.push(s);
        }
        Self { symbols: line }
    }

    /// An all-blank line of the given width
    pub fn blank(columns: usize) -> Self {
        let mut symbols = Vec::new();
        for _ in 0..columns.min(MAX_COLUMNS) {
            let _ = symbols.push(Symbol::Blank);
        }
        Self { symbols }
    }

    /// Number of columns in this line
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check whether the line has no columns
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at a column, if within the line
    pub fn get(&self, column: usize) -> Option<Symbol> {
        self.symbols.get(column).copied()
    }

    /// Overwrite the symbol at a column
    ///
    /// Columns beyond the line are ignored.
    pub fn set(&mut self, column: usize, symbol: Symbol) {
        if let Some(slot) = self.symbols.get_mut(column) {
            *slot = symbol;
        }
    }

    /// Iterate the line's symbols in column order
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }

    /// Number of hammer strikes this line requires
    ///
    /// Blank columns never fire and never count.
    pub fn required_actuations(&self) -> usize {
        self.symbols.iter().filter(|s| s.strikes()).count()
    }
}

/// Bitmask of unsupported characters in the raw first-eight-column view
///
/// Bit `i` is set when character `i` of the raw input (before
/// normalization) is outside the supported set. The debug overlay
/// overstrikes these columns so they stand out on paper.
pub fn unsupported_mask(raw: &str) -> u8 {
    let mut mask = 0;
    for (i, c) in raw.chars().take(MAX_COLUMNS).enumerate() {
        if !Symbol::is_supported(c) {
            mask |= 1 << i;
        }
    }
    mask
}
