//! One end-to-end turn: continuity, snapshot, oracle, sample, apply, extract, translate

use rand::Rng;
use rand::seq::SliceRandom;

use tallgrass_protocol::{Instruction, OutcomeBranch, SideId, to_id};

use super::applier::apply;
use super::config::TurnConfig;
use super::continuity::{ResetMode, resolve};
use super::delta::{TurnDelta, extract};
use super::oracle::{Environment, Oracle, enumerate_or_noop};
use super::sampler::{is_degenerate, sample};
use super::snapshot::{CombatantRecord, to_oracle_format};
use super::transcript::{BattleHeader, Localizer, render, render_failure};
use crate::error::TurnError;
use crate::state::BattleState;
use crate::types::Combatant;

/// Input for one turn
#[derive(Debug, Clone)]
pub struct TurnRequest<'a> {
    pub user: &'a CombatantRecord,
    pub opponent: &'a CombatantRecord,
    /// Chosen move; `None` picks a random known move
    pub user_move: Option<&'a str>,
    pub opponent_move: Option<&'a str>,
    /// State checked in after the previous turn
    pub prior: Option<&'a BattleState>,
    pub mode: ResetMode,
}

impl<'a> TurnRequest<'a> {
    pub fn new(user: &'a CombatantRecord, opponent: &'a CombatantRecord) -> Self {
        Self {
            user,
            opponent,
            user_move: None,
            opponent_move: None,
            prior: None,
            mode: ResetMode::Full,
        }
    }

    pub fn with_prior(mut self, prior: Option<&'a BattleState>, mode: ResetMode) -> Self {
        self.prior = prior;
        self.mode = mode;
        self
    }

    pub fn with_moves(
        mut self,
        user_move: Option<&'a str>,
        opponent_move: Option<&'a str>,
    ) -> Self {
        self.user_move = user_move;
        self.opponent_move = opponent_move;
        self
    }
}

/// Outcome of one turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnResult {
    pub transcript: Vec<String>,
    /// State to check in. Equal to the prior (or default) when `failed`.
    pub new_state: BattleState,
    /// HP the user lost this turn (negative when healed)
    pub user_hp_delta: i64,
    /// HP the opponent lost this turn (negative when healed)
    pub opponent_hp_delta: i64,
    pub user_missed: bool,
    pub opponent_missed: bool,
    /// The turn aborted before any mutation
    pub failed: bool,
    /// Probability in percent of the branch that was drawn
    pub chosen_percentage: f64,
    /// Instructions of the drawn branch, in application order
    pub applied: Vec<Instruction>,
    /// Reset mode actually used after identity checks
    pub mode: ResetMode,
    pub user_move: String,
    pub opponent_move: String,
}

impl TurnResult {
    pub fn user_fainted(&self) -> bool {
        !self.failed && self.new_state.user.active.is_fainted()
    }

    pub fn opponent_fainted(&self) -> bool {
        !self.failed && self.new_state.opponent.active.is_fainted()
    }

    /// Reset mode the next turn should use given what happened in this one
    pub fn next_mode(&self) -> ResetMode {
        if self.failed || self.user_fainted() {
            ResetMode::Full
        } else if self.opponent_fainted() {
            ResetMode::CarryUser
        } else {
            ResetMode::Continue
        }
    }

    pub fn delta(&self) -> TurnDelta {
        TurnDelta {
            user_hp_delta: self.user_hp_delta,
            opponent_hp_delta: self.opponent_hp_delta,
            user_missed: self.user_missed,
            opponent_missed: self.opponent_missed,
        }
    }

    fn failure(
        request: &TurnRequest<'_>,
        error: &TurnError,
        localizer: &dyn Localizer,
    ) -> Self {
        Self {
            transcript: render_failure(error, localizer),
            new_state: request.prior.cloned().unwrap_or_default(),
            user_hp_delta: 0,
            opponent_hp_delta: 0,
            user_missed: false,
            opponent_missed: false,
            failed: true,
            chosen_percentage: 0.0,
            applied: Vec::new(),
            mode: request.mode,
            user_move: String::new(),
            opponent_move: String::new(),
        }
    }
}

/// Resolve one turn. Never panics and never returns an error: failures are
/// logged and reported through [`TurnResult::failed`] and the transcript.
pub fn on_turn<O, R>(
    request: TurnRequest<'_>,
    oracle: &O,
    localizer: &dyn Localizer,
    config: &TurnConfig,
    rng: &mut R,
) -> TurnResult
where
    O: Oracle + ?Sized,
    R: Rng + ?Sized,
{
    let snapshots = to_oracle_format(request.user, &config.snapshot)
        .map_err(|e| e.for_side(SideId::User))
        .and_then(|user| {
            to_oracle_format(request.opponent, &config.snapshot)
                .map_err(|e| e.for_side(SideId::Opponent))
                .map(|opponent| (user, opponent))
        });

    let (fresh_user, fresh_opponent) = match snapshots {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!(error = %e, mode = %request.mode, "Turn failed before any mutation");
            return TurnResult::failure(&request, &e, localizer);
        }
    };

    let mode = guard_identity(request.prior, request.mode, &fresh_user, &fresh_opponent);
    let state = resolve(
        request.prior,
        mode,
        fresh_user,
        fresh_opponent,
        &config.default_conditions,
    );

    let (user_move, opponent_move) = if state.opponent.active.is_fainted() {
        (config.idle_move.clone(), config.idle_move.clone())
    } else {
        (
            choose_move(request.user_move, &state.user.active, &config.fallback_move, rng),
            choose_move(request.opponent_move, &state.opponent.active, &config.fallback_move, rng),
        )
    };

    let (branches, oracle_error) = enumerate_or_noop(
        oracle,
        &state.user.active,
        &state.opponent.active,
        &user_move,
        &opponent_move,
        &Environment::of(&state),
    );
    if let Some(e) = oracle_error {
        let e = TurnError::from(e);
        tracing::warn!(error = %e, "Continuing turn with no-op outcome");
    }
    if is_degenerate(&branches) {
        let e = TurnError::DegenerateProbabilities(format!(
            "{} branches without weight",
            branches.len()
        ));
        tracing::warn!(error = %e, "Continuing turn with uniform sampling");
    }

    let chosen = sample(&branches, rng)
        .cloned()
        .unwrap_or_else(OutcomeBranch::noop);
    tracing::debug!(
        percentage = chosen.percentage,
        instructions = chosen.instructions.len(),
        branches = branches.len(),
        "Sampled outcome branch"
    );

    let new_state = apply(&state, &chosen.instructions);
    let delta = extract(&state, &new_state, &branches, &chosen);

    let header = BattleHeader {
        user_name: state.user.active.name().to_string(),
        user_level: state.user.active.identity.level,
        user_move: user_move.clone(),
        opponent_name: state.opponent.active.name().to_string(),
        opponent_level: state.opponent.active.identity.level,
        opponent_move: opponent_move.clone(),
    };
    let transcript = render(&header, &chosen.instructions, &delta, localizer);

    TurnResult {
        transcript,
        new_state,
        user_hp_delta: delta.user_hp_delta,
        opponent_hp_delta: delta.opponent_hp_delta,
        user_missed: delta.user_missed,
        opponent_missed: delta.opponent_missed,
        failed: false,
        chosen_percentage: chosen.percentage,
        applied: chosen.instructions,
        mode,
        user_move,
        opponent_move,
    }
}

/// Escalate the requested mode when the carried state belongs to someone else.
///
/// A different user combatant forces a full reset; a different opponent
/// turns a continue into a carry-user.
pub fn guard_identity(
    prior: Option<&BattleState>,
    mode: ResetMode,
    fresh_user: &Combatant,
    fresh_opponent: &Combatant,
) -> ResetMode {
    let Some(prior) = prior else {
        return mode;
    };
    if mode == ResetMode::Full {
        return mode;
    }

    let prior_user = &prior.user.active.identity.species;
    if *prior_user != fresh_user.identity.species {
        tracing::warn!(
            requested = %mode,
            prior = %prior_user,
            fresh = %fresh_user.identity.species,
            "User combatant changed, forcing full reset"
        );
        return ResetMode::Full;
    }

    let prior_opponent = &prior.opponent.active.identity.species;
    if mode == ResetMode::Continue && *prior_opponent != fresh_opponent.identity.species {
        tracing::warn!(
            prior = %prior_opponent,
            fresh = %fresh_opponent.identity.species,
            "Opponent combatant changed, bringing in a fresh opponent"
        );
        return ResetMode::CarryUser;
    }

    mode
}

/// The requested move as an id, else a random known move, else `fallback`
pub fn choose_move<R: Rng + ?Sized>(
    requested: Option<&str>,
    combatant: &Combatant,
    fallback: &str,
    rng: &mut R,
) -> String {
    if let Some(id) = requested.map(to_id).filter(|id| !id.is_empty()) {
        return id;
    }

    combatant
        .moves
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}
