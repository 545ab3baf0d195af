//! CyberGuard Game Engine
//!
//! Platform-agnostic core game logic for the CyberGuard phishing-awareness
//! simulation. This crate provides scenario selection, outcome scoring, and
//! session progression without UI or platform-specific dependencies; a
//! presentation layer consumes read-only snapshots and submits player events.

pub mod config;
pub mod constants;
pub mod data;
pub mod outcome;
pub mod selector;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use config::RulesConfig;
pub use data::{OutcomeKind, Scenario, ScenarioCatalog, ScenarioOption};
pub use outcome::{CosmeticEvent, Feedback, FeedbackKind, OutcomeResolution, evaluate};
pub use selector::{SelectedScenario, select_scenario};
pub use session::{EngineError, GameSession, Snapshot};
pub use state::{ChatEntry, ChatRole, GameState, PendingTransition, Screen};

/// Trait for abstracting catalog loading operations
/// Platform-specific implementations should provide this
pub trait CatalogLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the scenario catalog from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    fn load_catalog(&self) -> Result<ScenarioCatalog, Self::Error>;
}

/// Main game engine for constructing play sessions
pub struct GameEngine<L>
where
    L: CatalogLoader,
{
    loader: L,
}

impl<L> GameEngine<L>
where
    L: CatalogLoader,
{
    /// Create a new game engine with the provided catalog loader
    pub const fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Create a new session with the specified seed and default rules
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or is empty.
    pub fn create_session(&self, seed: u64) -> Result<GameSession, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
    {
        self.create_session_with_rules(seed, RulesConfig::default())
    }

    /// Create a new session with the specified seed and tuning rules
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or is empty.
    pub fn create_session_with_rules(
        &self,
        seed: u64,
        rules: RulesConfig,
    ) -> Result<GameSession, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
    {
        let catalog = self.loader.load_catalog().map_err(Into::into)?;
        GameSession::new(catalog, rules, seed).map_err(anyhow::Error::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{OutcomeKind, ScenarioOption};
    use std::convert::Infallible;

    #[derive(Clone, Copy, Default)]
    struct FixtureLoader;

    impl CatalogLoader for FixtureLoader {
        type Error = Infallible;

        fn load_catalog(&self) -> Result<ScenarioCatalog, Self::Error> {
            Ok(ScenarioCatalog::from_scenarios(vec![Scenario {
                id: "lottery".to_string(),
                sender: "MegaLotto".to_string(),
                avatar: "coin".to_string(),
                initial_message: "You won! Send a fee to claim.".to_string(),
                clue: None,
                options: vec![ScenarioOption {
                    id: "ignore".to_string(),
                    text: "Delete the message".to_string(),
                    outcome: OutcomeKind::Success,
                    feedback: "No lottery charges a claiming fee.".to_string(),
                }],
            }]))
        }
    }

    #[derive(Clone, Copy, Default)]
    struct EmptyLoader;

    impl CatalogLoader for EmptyLoader {
        type Error = Infallible;

        fn load_catalog(&self) -> Result<ScenarioCatalog, Self::Error> {
            Ok(ScenarioCatalog::empty())
        }
    }

    #[test]
    fn engine_builds_a_playable_session() {
        let engine = GameEngine::new(FixtureLoader);
        let mut session = engine.create_session(0xABCD).unwrap();
        session.start_session();
        assert_eq!(session.snapshot().screen, Screen::Game);
        let resolution = session.submit_choice("ignore").unwrap();
        assert_eq!(resolution.reputation_delta, 500);
    }

    #[test]
    fn engine_surfaces_empty_catalog() {
        let engine = GameEngine::new(EmptyLoader);
        let error = engine.create_session(1).unwrap_err();
        assert_eq!(
            error.downcast_ref::<EngineError>(),
            Some(&EngineError::EmptyCatalog)
        );
    }

    #[test]
    fn engine_applies_rule_overrides() {
        let engine = GameEngine::new(FixtureLoader);
        let rules = RulesConfig {
            wallet_start: 50,
            ..RulesConfig::default()
        };
        let mut session = engine.create_session_with_rules(2, rules).unwrap();
        session.start_session();
        assert_eq!(session.snapshot().wallet, 50);
    }
}
