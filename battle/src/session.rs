//! BattleSession - owns the battle between review events

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::engine::{
    Catalog, CombatantRecord, Localizer, Oracle, ResetMode, SessionConfig, TurnRequest, TurnResult,
    on_turn,
};
use crate::state::BattleState;

/// A running battle driven by review events
///
/// The session is the only place a [`BattleState`] lives between turns. It
/// counts reviews, runs a turn every `cards_per_round` of them, and decides
/// from each turn's result how much state the next turn keeps.
pub struct BattleSession<O, R = StdRng> {
    oracle: O,
    localizer: Box<dyn Localizer>,
    config: SessionConfig,
    rng: R,

    state: Option<BattleState>,
    mode: ResetMode,
    cards: u32,
}

impl<O: Oracle> BattleSession<O, StdRng> {
    /// Create a session with English transcripts and an entropy-seeded rng
    pub fn new(oracle: O, config: SessionConfig) -> Self {
        Self::with_rng(oracle, config, StdRng::from_entropy())
    }
}

impl<O: Oracle, R: rand::Rng> BattleSession<O, R> {
    pub fn with_rng(oracle: O, config: SessionConfig, rng: R) -> Self {
        Self {
            oracle,
            localizer: Box::new(Catalog::english()),
            config,
            rng,
            state: None,
            mode: ResetMode::Full,
            cards: 0,
        }
    }

    /// Use a different localizer for transcripts
    pub fn with_localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.localizer = Box::new(localizer);
        self
    }

    /// Count one review; every `cards_per_round` reviews a turn is fought
    pub fn on_review(
        &mut self,
        user: &CombatantRecord,
        opponent: &CombatantRecord,
    ) -> Option<TurnResult> {
        self.cards += 1;
        if self.cards < self.config.cards_per_round.max(1) {
            return None;
        }
        self.cards = 0;
        Some(self.run_turn(user, opponent, None, None))
    }

    /// Fight one turn now, regardless of the review counter
    pub fn run_turn(
        &mut self,
        user: &CombatantRecord,
        opponent: &CombatantRecord,
        user_move: Option<&str>,
        opponent_move: Option<&str>,
    ) -> TurnResult {
        let request = TurnRequest::new(user, opponent)
            .with_prior(self.state.as_ref(), self.mode)
            .with_moves(user_move, opponent_move);

        let result = on_turn(
            request,
            &self.oracle,
            self.localizer.as_ref(),
            &self.config.turn,
            &mut self.rng,
        );

        // A failed turn never replaces the checked-in state
        if !result.failed {
            self.state = Some(result.new_state.clone());
        }

        let next = result.next_mode();
        tracing::debug!(used = %result.mode, next = %next, failed = result.failed, "Turn resolved");
        self.mode = next;

        result
    }

    /// The user swapped their combatant: the next turn starts over
    pub fn replace_user(&mut self) {
        self.mode = ResetMode::Full;
    }

    /// A new opponent appeared: the next turn keeps only the user side
    pub fn replace_opponent(&mut self) {
        if self.mode != ResetMode::Full {
            self.mode = ResetMode::CarryUser;
        }
    }

    /// Drop the battle entirely
    pub fn reset(&mut self) {
        self.state = None;
        self.mode = ResetMode::Full;
        self.cards = 0;
    }

    pub fn state(&self) -> Option<&BattleState> {
        self.state.as_ref()
    }

    /// Reset mode the next turn will request
    pub fn pending_mode(&self) -> ResetMode {
        self.mode
    }

    /// Reviews left before the next turn
    pub fn cards_until_turn(&self) -> u32 {
        self.config.cards_per_round.max(1) - self.cards
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
