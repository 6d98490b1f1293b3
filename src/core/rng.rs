//! Deterministic random symbol draws for refills.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical refills
//! - **Forkable**: Independent branches for "what if" lookahead
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use tile_cascade::core::{Alphabet, SymbolSource, TileRng};
//!
//! let alphabet = Alphabet::default();
//! let mut a = TileRng::new(7);
//! let mut b = TileRng::new(7);
//!
//! for _ in 0..20 {
//!     assert_eq!(a.draw_symbol(&alphabet), b.draw_symbol(&alphabet));
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::element::{Alphabet, Symbol};
use super::source::SymbolSource;

/// Seeded RNG that draws refill symbols uniformly from an alphabet.
///
/// Uses ChaCha8 for speed with good statistical quality.
#[derive(Clone, Debug)]
pub struct TileRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl TileRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> TileRngState {
        TileRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &TileRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl SymbolSource for TileRng {
    fn draw_symbol(&mut self, alphabet: &Alphabet) -> Symbol {
        let slice = alphabet.as_slice();
        slice[self.gen_index(slice.len())]
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture is O(1) no matter how many
/// symbols have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut TileRng, alphabet: &Alphabet, n: usize) -> Vec<Symbol> {
        (0..n).map(|_| rng.draw_symbol(alphabet)).collect()
    }

    #[test]
    fn test_determinism() {
        let alphabet = Alphabet::default();
        let mut rng1 = TileRng::new(42);
        let mut rng2 = TileRng::new(42);

        assert_eq!(draws(&mut rng1, &alphabet, 100), draws(&mut rng2, &alphabet, 100));
    }

    #[test]
    fn test_different_seeds() {
        let alphabet = Alphabet::default();
        let mut rng1 = TileRng::new(1);
        let mut rng2 = TileRng::new(2);

        assert_ne!(draws(&mut rng1, &alphabet, 32), draws(&mut rng2, &alphabet, 32));
    }

    #[test]
    fn test_draws_stay_in_alphabet() {
        let alphabet = Alphabet::from_glyphs("XYZ").unwrap();
        let mut rng = TileRng::new(9);

        for symbol in draws(&mut rng, &alphabet, 500) {
            assert!(alphabet.contains(symbol));
        }
    }

    #[test]
    fn test_draws_cover_alphabet() {
        let alphabet = Alphabet::default();
        let mut rng = TileRng::new(3);
        let seen = draws(&mut rng, &alphabet, 600);

        for symbol in alphabet.iter() {
            assert!(seen.contains(&symbol), "{symbol} never drawn");
        }
    }

    #[test]
    fn test_single_symbol_alphabet() {
        let alphabet = Alphabet::from_glyphs("Q").unwrap();
        let mut rng = TileRng::new(0);
        assert!(draws(&mut rng, &alphabet, 10).iter().all(|s| s.glyph() == 'Q'));
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let alphabet = Alphabet::default();
        let mut rng = TileRng::new(42);
        let mut forked = rng.fork();

        assert_ne!(draws(&mut rng, &alphabet, 32), draws(&mut forked, &alphabet, 32));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = TileRng::new(42);
        let mut rng2 = TileRng::new(42);

        assert_eq!(rng1.fork().seed(), rng2.fork().seed());
    }

    #[test]
    fn test_state_restore() {
        let alphabet = Alphabet::default();
        let mut rng = TileRng::new(42);
        draws(&mut rng, &alphabet, 100);

        let state = rng.state();
        let expected = draws(&mut rng, &alphabet, 10);

        let mut restored = TileRng::from_state(&state);
        assert_eq!(draws(&mut restored, &alphabet, 10), expected);
    }

    #[test]
    fn test_state_serde() {
        let state = TileRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TileRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
