//! Game session: owns the state aggregate and drives progression.
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

use crate::config::RulesConfig;
use crate::data::{Scenario, ScenarioCatalog};
use crate::outcome::{Feedback, OutcomeResolution, evaluate};
use crate::selector::select_scenario;
use crate::state::{ChatEntry, GameState, PendingTransition, Screen};

/// Errors raised by session operations.
///
/// All of these are programming or integration errors: the presentation
/// layer gates input so none should be reachable in normal play, but the
/// engine rejects the call rather than silently corrupting state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("scenario catalog is empty")]
    EmptyCatalog,
    #[error("no scenario is currently loaded")]
    NoActiveScenario,
    #[error("current scenario has already been resolved")]
    ScenarioAlreadyResolved,
    #[error("current scenario has not been resolved yet")]
    ScenarioNotResolved,
    #[error("option `{0}` does not belong to the current scenario")]
    UnknownOption(String),
}

/// Read-only view of the state handed to the presentation layer on every
/// state change.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub screen: Screen,
    pub wallet: i32,
    pub reputation: i32,
    pub level: u32,
    pub current_scenario: Option<&'a Scenario>,
    pub chat_history: &'a [ChatEntry],
    pub feedback: Option<&'a Feedback>,
    pub scenario_complete: bool,
    pub hint_visible: bool,
}

/// A single play session binding the scenario catalog, the tuning rules,
/// a seedable random source, and the mutable game state.
///
/// There is exactly one writer to the state: every mutation goes through
/// the operations below, synchronously, in response to a discrete player
/// action or a `tick` of the logical clock.
#[derive(Debug, Clone)]
pub struct GameSession {
    catalog: ScenarioCatalog,
    rules: RulesConfig,
    rng: ChaCha20Rng,
    state: GameState,
}

impl GameSession {
    /// Construct a session from a catalog, rules, and a deterministic seed.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyCatalog`] if the catalog holds no
    /// scenarios; an empty catalog is fatal to session start.
    pub fn new(
        catalog: ScenarioCatalog,
        rules: RulesConfig,
        seed: u64,
    ) -> Result<Self, EngineError> {
        if catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        Ok(Self {
            catalog,
            rules,
            rng: ChaCha20Rng::seed_from_u64(seed),
            state: GameState::default(),
        })
    }

    /// Reset all resources and begin a fresh session on the `game` screen.
    ///
    /// Bumping the generation first invalidates any transition still pending
    /// from the previous session, so a stale timer can never force a screen
    /// change after a restart. The selector runs before the screen flips to
    /// `game`, keeping `current_scenario` populated for the whole time the
    /// session is on that screen.
    pub fn start_session(&mut self) {
        self.state.generation += 1;
        self.state.pending_transition = None;
        self.state.wallet = self.rules.wallet_start;
        self.state.reputation = 0;
        self.state.level = crate::constants::LEVEL_START;
        self.state.used_scenario_ids.clear();
        self.load_next_scenario();
        self.state.screen = Screen::Game;
        log::debug!("session started (generation {})", self.state.generation);
    }

    /// Install the next scenario and reset the per-scenario state: chat
    /// history becomes a single bot entry, feedback and the completion flag
    /// clear, and any open hint collapses.
    pub fn load_next_scenario(&mut self) {
        let picked = select_scenario(&self.catalog, &self.state.used_scenario_ids, &mut self.rng);
        self.state.used_scenario_ids = picked.used_ids;
        self.state.chat_history = vec![ChatEntry::bot(&picked.scenario)];
        self.state.current_scenario = Some(picked.scenario);
        self.state.feedback = None;
        self.state.scenario_complete = false;
        self.state.hint_visible = false;
    }

    /// Resolve the player's choice for the current scenario.
    ///
    /// Applies the outcome deltas, records feedback, and evaluates the
    /// win/loss conditions. The win check runs first and uses the pre-commit
    /// reputation; the loss check uses the pre-clamp wallet. Either schedules
    /// a deferred screen change; otherwise the screen stays on `game` and the
    /// presentation layer waits for the player's explicit continue.
    ///
    /// # Errors
    ///
    /// Fails if no scenario is loaded, the scenario is already resolved, or
    /// `option_id` is not among the current scenario's options.
    pub fn submit_choice(&mut self, option_id: &str) -> Result<OutcomeResolution, EngineError> {
        let scenario = self
            .state
            .current_scenario
            .as_ref()
            .ok_or(EngineError::NoActiveScenario)?;
        if self.state.scenario_complete {
            return Err(EngineError::ScenarioAlreadyResolved);
        }
        let option = scenario
            .options
            .iter()
            .find(|option| option.id == option_id)
            .ok_or_else(|| EngineError::UnknownOption(option_id.to_string()))?
            .clone();

        self.state.chat_history.push(ChatEntry::player(&option.text));

        let resolution = evaluate(&option, &self.rules);
        self.state.feedback = Some(resolution.feedback.clone());
        self.state.scenario_complete = true;

        let wallet_before = self.state.wallet;
        let reputation_before = self.state.reputation;
        self.state.wallet = (wallet_before + resolution.wallet_delta)
            .clamp(crate::constants::WALLET_MIN, self.rules.wallet_max);
        self.state.reputation = reputation_before + resolution.reputation_delta;

        // Win first, on pre-commit reputation; loss on pre-clamp wallet.
        if reputation_before + resolution.reputation_delta >= self.rules.win_threshold {
            self.schedule_transition(Screen::Victory);
        } else if wallet_before + resolution.wallet_delta <= 0 {
            self.schedule_transition(Screen::Result);
        }

        Ok(resolution)
    }

    /// Advance to the next scenario after a resolved one.
    ///
    /// Increments the level and loads a new scenario while the wallet holds
    /// out; at wallet zero this is a no-op since the `result` transition is
    /// already scheduled or applied. Never changes the screen.
    ///
    /// # Errors
    ///
    /// Fails with [`EngineError::ScenarioNotResolved`] if the current
    /// scenario has not been answered yet.
    pub fn continue_to_next(&mut self) -> Result<(), EngineError> {
        if !self.state.scenario_complete {
            return Err(EngineError::ScenarioNotResolved);
        }
        if self.state.wallet > 0 {
            self.state.level += 1;
            self.load_next_scenario();
        }
        Ok(())
    }

    /// Flip the hint display flag; no effect on scoring or the state machine.
    pub fn toggle_hint(&mut self) {
        self.state.hint_visible = !self.state.hint_visible;
    }

    /// Advance the logical clock by one unit and apply a due transition.
    ///
    /// A pending transition fires only when its generation matches the
    /// current session; anything scheduled by an earlier generation is
    /// discarded unapplied.
    pub fn tick(&mut self) {
        self.state.clock += 1;
        let Some(pending) = self.state.pending_transition else {
            return;
        };
        if pending.generation != self.state.generation {
            log::debug!(
                "dropping stale transition to {} from generation {}",
                pending.screen,
                pending.generation
            );
            self.state.pending_transition = None;
            return;
        }
        if self.state.clock >= pending.due_tick {
            log::debug!("applying scheduled transition to {}", pending.screen);
            self.state.screen = pending.screen;
            self.state.pending_transition = None;
        }
    }

    fn schedule_transition(&mut self, screen: Screen) {
        self.state.pending_transition = Some(PendingTransition {
            screen,
            due_tick: self.state.clock + self.rules.transition_delay,
            generation: self.state.generation,
        });
        log::debug!(
            "scheduled transition to {} at tick {}",
            screen,
            self.state.clock + self.rules.transition_delay
        );
    }

    /// Read-only snapshot for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            screen: self.state.screen,
            wallet: self.state.wallet,
            reputation: self.state.reputation,
            level: self.state.level,
            current_scenario: self.state.current_scenario.as_ref(),
            chat_history: &self.state.chat_history,
            feedback: self.state.feedback.as_ref(),
            scenario_complete: self.state.scenario_complete,
            hint_visible: self.state.hint_visible,
        }
    }

    /// Borrow the underlying game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Rules the session was built with.
    #[must_use]
    pub const fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Consume the session, returning the underlying game state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}
