//! The symbol-draw seam used by refills.
//!
//! Refilling is the only random step in a cascade. Everything that draws a
//! new tile goes through [`SymbolSource`], so tests can swap the RNG for a
//! fixed sequence and get fully reproducible cascades.

use super::element::{Alphabet, Symbol};
use super::error::{EngineError, Result};

/// Supplies one symbol per refilled cell.
pub trait SymbolSource {
    /// Draw one symbol for an empty cell.
    ///
    /// Implementations are expected to return a member of `alphabet`.
    fn draw_symbol(&mut self, alphabet: &Alphabet) -> Symbol;
}

impl<F> SymbolSource for F
where
    F: FnMut(&Alphabet) -> Symbol,
{
    fn draw_symbol(&mut self, alphabet: &Alphabet) -> Symbol {
        self(alphabet)
    }
}

/// Replays a fixed sequence of symbols, wrapping around at the end.
///
/// Ignores the alphabet it is given.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    script: Vec<Symbol>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source from a non-empty script.
    pub fn new(script: impl IntoIterator<Item = Symbol>) -> Result<Self> {
        let script: Vec<Symbol> = script.into_iter().collect();
        if script.is_empty() {
            return Err(EngineError::EmptyAlphabet);
        }
        Ok(Self { script, cursor: 0 })
    }

    /// Create a source from the glyphs of a string, ignoring whitespace.
    pub fn from_glyphs(glyphs: &str) -> Result<Self> {
        let script = glyphs
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Symbol::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(script)
    }

    /// Total symbols handed out so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl SymbolSource for ScriptedSource {
    fn draw_symbol(&mut self, _alphabet: &Alphabet) -> Symbol {
        let symbol = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        symbol
    }
}
