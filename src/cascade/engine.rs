//! Cascade engine: detect, resolve, refill, repeat until stable.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};

use crate::core::config::DEFAULT_MAX_CASCADE_ROUNDS;
use crate::core::{
    Alphabet, BoardState, EngineConfig, EngineError, Grid, Position, Result, SymbolSource,
    TileRng,
};
use crate::matching::{find_matches, Match};
use crate::resolve::{fill_empty, remove_matches, score_delta};

/// Where a board sits in the cascade loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CascadeStatus {
    /// Matches remain and must be resolved.
    Unstable(Vec<Match>),
    /// No matches; the cascade is over.
    Stable,
}

impl CascadeStatus {
    /// Classify `grid` by running detection on it.
    #[must_use]
    pub fn of(grid: &Grid) -> Self {
        let matches = find_matches(grid);
        if matches.is_empty() {
            Self::Stable
        } else {
            Self::Unstable(matches)
        }
    }

    #[must_use]
    pub fn is_stable(&self) -> bool {
        matches!(self, Self::Stable)
    }
}

/// One resolve + refill step of a cascade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeRound {
    /// 1-based round number.
    pub round: u32,
    /// Matches consumed this round, in detection order.
    pub matches: Vec<Match>,
    /// Distinct cells cleared (shared cells count once).
    pub tiles_cleared: usize,
    /// Score earned this round.
    pub score_delta: u64,
}

/// Outcome of a full cascade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeReport {
    /// Final, stable state.
    pub state: BoardState,
    /// Every round that ran, in order. Empty if the board was already stable.
    pub rounds: Vec<CascadeRound>,
}

impl CascadeReport {
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Total score earned across all rounds.
    #[must_use]
    pub fn score_gained(&self) -> u64 {
        self.rounds.iter().map(|r| r.score_delta).sum()
    }
}

/// Drive `state` to a stable board.
///
/// Equivalent to [`run_cascade`] without the per-round report.
pub fn process_cascade<S>(
    state: BoardState,
    alphabet: &Alphabet,
    source: &mut S,
    max_rounds: Option<u32>,
) -> Result<BoardState>
where
    S: SymbolSource + ?Sized,
{
    run_cascade(state, alphabet, source, max_rounds).map(|report| report.state)
}

/// Drive `state` to a stable board, recording each round.
///
/// Fails with [`EngineError::NonTerminatingCascade`] if the board is still
/// unstable after `max_rounds` rounds. `None` never gives up.
#[instrument(level = "debug", skip_all, fields(size = state.grid().size(), score = state.score()))]
pub fn run_cascade<S>(
    state: BoardState,
    alphabet: &Alphabet,
    source: &mut S,
    max_rounds: Option<u32>,
) -> Result<CascadeReport>
where
    S: SymbolSource + ?Sized,
{
    let mut state = state;
    let mut rounds: Vec<CascadeRound> = Vec::new();

    loop {
        let matches = match CascadeStatus::of(state.grid()) {
            CascadeStatus::Stable => {
                let report = CascadeReport { state, rounds };
                if report.round_count() > 0 {
                    info!(
                        rounds = report.round_count(),
                        gained = report.score_gained(),
                        score = report.state.score(),
                        "cascade settled"
                    );
                }
                return Ok(report);
            }
            CascadeStatus::Unstable(matches) => matches,
        };

        let round = rounds.len() as u32 + 1;
        if let Some(limit) = max_rounds {
            if round > limit {
                warn!(limit, "cascade exceeded round cap");
                return Err(EngineError::NonTerminatingCascade { rounds: limit });
            }
        }

        let tiles_cleared = matches
            .iter()
            .flat_map(Match::cells)
            .collect::<FxHashSet<Position>>()
            .len();
        let delta = score_delta(&matches);

        let resolved = remove_matches(&state, &matches);
        trace!(grid = %resolved.grid(), "after gravity");

        let refilled = fill_empty(resolved.grid(), alphabet, source);
        trace!(grid = %refilled, "after refill");

        debug!(
            round,
            matches = matches.len(),
            tiles_cleared,
            score_delta = delta,
            "round resolved"
        );

        state = resolved.with_grid(refilled);
        rounds.push(CascadeRound {
            round,
            matches,
            tiles_cleared,
            score_delta: delta,
        });
    }
}

/// Cascade engine bound to an alphabet and a symbol source.
///
/// ## Example
///
/// ```
/// use tile_cascade::cascade::CascadeEngine;
/// use tile_cascade::core::{Alphabet, BoardState, ScriptedSource};
///
/// let source = ScriptedSource::from_glyphs("ABCD").unwrap();
/// let mut engine = CascadeEngine::new(Alphabet::default(), source);
///
/// let state = BoardState::with_zero_score("AAA\nBCD\nCDB".parse().unwrap());
/// let settled = engine.resolve_after_swap(state).unwrap();
///
/// assert_eq!(settled.score(), 30);
/// assert!(settled.grid().is_full());
/// ```
#[derive(Clone, Debug)]
pub struct CascadeEngine<S = TileRng> {
    alphabet: Alphabet,
    source: S,
    max_rounds: Option<u32>,
}

impl CascadeEngine<TileRng> {
    /// Build a seeded engine from a config.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.alphabet.clone(), TileRng::new(config.seed))
            .with_max_rounds(config.max_cascade_rounds))
    }
}

impl<S: SymbolSource> CascadeEngine<S> {
    /// Create an engine with the default round cap.
    pub fn new(alphabet: Alphabet, source: S) -> Self {
        Self {
            alphabet,
            source,
            max_rounds: Some(DEFAULT_MAX_CASCADE_ROUNDS),
        }
    }

    /// Set the round cap. `None` lets a cascade run forever.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: Option<u32>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[must_use]
    pub fn max_rounds(&self) -> Option<u32> {
        self.max_rounds
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Give back the symbol source, e.g. to checkpoint an RNG.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Run a full cascade and report every round.
    pub fn run(&mut self, state: BoardState) -> Result<CascadeReport> {
        run_cascade(state, &self.alphabet, &mut self.source, self.max_rounds)
    }

    /// Run a full cascade and return the stable state.
    pub fn process_cascade(&mut self, state: BoardState) -> Result<BoardState> {
        process_cascade(state, &self.alphabet, &mut self.source, self.max_rounds)
    }

    /// Stabilize the board a player just swapped.
    pub fn resolve_after_swap(&mut self, state: BoardState) -> Result<BoardState> {
        self.process_cascade(state)
    }

    /// Swap two cells, then stabilize.
    ///
    /// Only bounds are checked. The swap goes ahead even if it is not
    /// adjacent or creates no match.
    pub fn swap_and_resolve(
        &mut self,
        state: &BoardState,
        a: Position,
        b: Position,
    ) -> Result<BoardState> {
        let swapped = state.grid().swap(a, b)?;
        debug!(%a, %b, "swap");
        self.resolve_after_swap(state.with_grid(swapped))
    }

    /// Deal a random stable board with a score of zero.
    ///
    /// Any matches in the initial deal are cascaded away first; points
    /// earned while settling are discarded.
    pub fn new_board(&mut self, size: usize) -> Result<BoardState> {
        let empty = Grid::new(size)?;
        let dealt = fill_empty(&empty, &self.alphabet, &mut self.source);
        let settled = self.process_cascade(BoardState::with_zero_score(dealt))?;
        Ok(settled.with_score(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedSource;

    fn state(text: &str, score: u64) -> BoardState {
        BoardState::new(text.parse().unwrap(), score)
    }

    fn scripted(glyphs: &str) -> CascadeEngine<ScriptedSource> {
        CascadeEngine::new(Alphabet::default(), ScriptedSource::from_glyphs(glyphs).unwrap())
    }

    #[test]
    fn test_status_of() {
        assert!(CascadeStatus::of(&"AB\nBA".parse().unwrap()).is_stable());
        let status = CascadeStatus::of(&"AAA\nBCD\nCDB".parse().unwrap());
        assert_eq!(status, CascadeStatus::Unstable(vec![Match::horizontal(0, 0, 3)]));
    }

    #[test]
    fn test_stable_board_is_identity() {
        let mut engine = scripted("A");
        let start = state("ABA\nBAB\nABA", 50);

        let report = engine.run(start.clone()).unwrap();
        assert_eq!(report.state, start);
        assert_eq!(report.round_count(), 0);
        assert_eq!(engine.source().drawn(), 0);
    }

    #[test]
    fn test_single_round() {
        let mut engine = scripted("BCD");
        let report = engine.run(state("AAA\nBCD\nCDB", 0)).unwrap();

        assert_eq!(report.round_count(), 1);
        assert_eq!(report.state.score(), 30);
        assert_eq!(report.state.grid(), &"BCD\nBCD\nCDB".parse::<Grid>().unwrap());
        assert_eq!(report.rounds[0].tiles_cleared, 3);
    }

    #[test]
    fn test_chained_rounds() {
        // The first refill lines up "EEE" in the top row.
        let mut engine = scripted("EEEBCD");
        let report = engine.run(state("AAA\nBCD\nCDB", 0)).unwrap();

        assert_eq!(report.round_count(), 2);
        assert_eq!(report.score_gained(), 60);
        assert_eq!(report.state.score(), 60);
        assert!(CascadeStatus::of(report.state.grid()).is_stable());
    }

    #[test]
    fn test_round_cap() {
        let alphabet = Alphabet::from_glyphs("A").unwrap();
        let mut engine = CascadeEngine::new(alphabet, TileRng::new(1)).with_max_rounds(Some(5));

        let err = engine.run(state("AAA\nAAA\nAAA", 0)).unwrap_err();
        assert_eq!(err, EngineError::NonTerminatingCascade { rounds: 5 });
    }

    #[test]
    fn test_swap_and_resolve() {
        let mut engine = scripted("BCD");
        let start = state("BAA\nACD\nCDB", 20);

        let next = engine
            .swap_and_resolve(&start, Position::new(0, 0), Position::new(1, 0))
            .unwrap();
        assert_eq!(next.score(), 50);
        assert_eq!(next.grid(), &"BCD\nBCD\nCDB".parse::<Grid>().unwrap());
        assert_eq!(start.score(), 20);
    }

    #[test]
    fn test_swap_out_of_bounds() {
        let mut engine = scripted("A");
        let start = state("AB\nBA", 0);
        let err = engine
            .swap_and_resolve(&start, Position::new(0, 0), Position::new(0, 2))
            .unwrap_err();
        assert!(matches!(err, EngineError::OutOfBounds { .. }));
    }

    #[test]
    fn test_new_board_is_stable_with_zero_score() {
        let config = EngineConfig::default().with_seed(11);
        let mut engine = CascadeEngine::from_config(&config).unwrap();
        let board = engine.new_board(8).unwrap();

        assert_eq!(board.score(), 0);
        assert!(board.grid().is_full());
        assert!(CascadeStatus::of(board.grid()).is_stable());
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = EngineConfig::default().with_max_cascade_rounds(Some(0));
        assert!(matches!(
            CascadeEngine::from_config(&config),
            Err(EngineError::InvalidConfig(_))
        ));
    }
}
