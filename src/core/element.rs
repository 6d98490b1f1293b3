//! Tile symbols, grid elements, and alphabets.
//!
//! ## Element
//!
//! A cell is either [`Element::Empty`] or holds a [`Symbol`]. The empty
//! sentinel renders as `'0'`, so `'0'` is never accepted as a symbol.
//!
//! ## Alphabet
//!
//! The set of symbols refills draw from. Always non-empty and free of
//! duplicates; order is preserved so seeded draws are reproducible.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{EngineError, Result};

/// A single non-empty tile symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Symbol(char);

impl Symbol {
    /// Create a symbol, rejecting the empty glyph and whitespace.
    pub fn new(glyph: char) -> Result<Self> {
        if glyph == Element::EMPTY_GLYPH || glyph.is_whitespace() || glyph.is_control() {
            return Err(EngineError::InvalidSymbol(glyph));
        }
        Ok(Self(glyph))
    }

    /// Get the underlying glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Symbol {
    type Error = EngineError;

    fn try_from(glyph: char) -> Result<Self> {
        Self::new(glyph)
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contents of one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// No tile. Never part of a match.
    #[default]
    Empty,
    /// A tile carrying a symbol.
    Tile(Symbol),
}

impl Element {
    /// Glyph used to render and parse empty cells.
    pub const EMPTY_GLYPH: char = '0';

    /// Parse a single glyph: `'0'` is empty, anything else must be a valid symbol.
    pub fn from_glyph(glyph: char) -> Result<Self> {
        if glyph == Self::EMPTY_GLYPH {
            Ok(Self::Empty)
        } else {
            Symbol::new(glyph).map(Self::Tile)
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The symbol, if this cell holds a tile.
    #[must_use]
    pub const fn symbol(self) -> Option<Symbol> {
        match self {
            Self::Tile(symbol) => Some(symbol),
            Self::Empty => None,
        }
    }

    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Tile(symbol) => symbol.glyph(),
            Self::Empty => Self::EMPTY_GLYPH,
        }
    }
}

impl From<Symbol> for Element {
    fn from(symbol: Symbol) -> Self {
        Self::Tile(symbol)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Non-empty, de-duplicated set of symbols used for refills.
///
/// Most alphabets hold a handful of symbols, so they live inline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct Alphabet {
    symbols: SmallVec<[Symbol; 8]>,
}

impl Alphabet {
    /// Build an alphabet, dropping duplicates but keeping first-seen order.
    ///
    /// Fails with [`EngineError::EmptyAlphabet`] when no symbols are given.
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Result<Self> {
        let mut unique: SmallVec<[Symbol; 8]> = SmallVec::new();
        for symbol in symbols {
            if !unique.contains(&symbol) {
                unique.push(symbol);
            }
        }

        if unique.is_empty() {
            return Err(EngineError::EmptyAlphabet);
        }

        Ok(Self { symbols: unique })
    }

    /// Build an alphabet from the glyphs of a string, ignoring whitespace.
    pub fn from_glyphs(glyphs: &str) -> Result<Self> {
        let symbols = glyphs
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Symbol::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(symbols)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if the alphabet holds no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Symbol at `index`, in insertion order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.symbols.get(index).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }
}

impl Default for Alphabet {
    /// The six-symbol `A`..`F` alphabet.
    fn default() -> Self {
        Self {
            symbols: ['A', 'B', 'C', 'D', 'E', 'F'].into_iter().map(Symbol).collect(),
        }
    }
}

impl TryFrom<Vec<Symbol>> for Alphabet {
    type Error = EngineError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self> {
        Self::new(symbols)
    }
}

impl From<Alphabet> for Vec<Symbol> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols.into_vec()
    }
}
