use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::constants::{LEVEL_START, WALLET_START};
use crate::data::Scenario;
use crate::outcome::Feedback;

/// Screens the presentation layer can be on.
///
/// `Result` and `Victory` are terminal per session; a restart re-enters at
/// `Game` through `start_session`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Game,
    Result,
    Victory,
}

impl Screen {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Game => "game",
            Self::Result => "result",
            Self::Victory => "victory",
        }
    }

    /// Whether the session has ended on this screen.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Result | Self::Victory)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "game" => Ok(Self::Game),
            "result" => Ok(Self::Result),
            "victory" => Ok(Self::Victory),
            _ => Err(()),
        }
    }
}

/// Who authored a chat entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    Bot,
    Player,
}

/// Append-only chat log entry: either the scenario's incoming message or the
/// text of the option the player picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl ChatEntry {
    /// Bot-originated entry derived from a scenario's incoming message.
    #[must_use]
    pub fn bot(scenario: &Scenario) -> Self {
        Self {
            role: ChatRole::Bot,
            text: scenario.initial_message.clone(),
            sender: Some(scenario.sender.clone()),
            avatar: Some(scenario.avatar.clone()),
        }
    }

    /// Player-originated entry carrying the chosen option's text.
    #[must_use]
    pub fn player(text: &str) -> Self {
        Self {
            role: ChatRole::Player,
            text: text.to_string(),
            sender: None,
            avatar: None,
        }
    }
}

/// A scheduled deferred screen change, tagged with the session generation so
/// a restart invalidates timers left over from the previous session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransition {
    pub screen: Screen,
    pub due_tick: u64,
    pub generation: u64,
}

/// Single mutable aggregate owned by the game session.
///
/// All mutation funnels through the session's public operations; the
/// presentation layer only reads snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub wallet: i32,
    pub reputation: i32,
    pub level: u32,
    #[serde(default)]
    pub used_scenario_ids: HashSet<String>,
    #[serde(default)]
    pub screen: Screen,
    #[serde(default)]
    pub current_scenario: Option<Scenario>,
    #[serde(default)]
    pub chat_history: Vec<ChatEntry>,
    #[serde(default)]
    pub feedback: Option<Feedback>,
    #[serde(default)]
    pub scenario_complete: bool,
    #[serde(default)]
    pub hint_visible: bool,
    /// Session generation; incremented on every `start_session`.
    #[serde(default)]
    pub generation: u64,
    /// Logical clock advanced by `tick`.
    #[serde(default)]
    pub clock: u64,
    #[serde(default)]
    pub pending_transition: Option<PendingTransition>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            wallet: WALLET_START,
            reputation: 0,
            level: LEVEL_START,
            used_scenario_ids: HashSet::new(),
            screen: Screen::Home,
            current_scenario: None,
            chat_history: Vec::new(),
            feedback: None,
            scenario_complete: false,
            hint_visible: false,
            generation: 0,
            clock: 0,
            pending_transition: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_starts_on_home() {
        let state = GameState::default();
        assert_eq!(state.screen, Screen::Home);
        assert_eq!(state.wallet, 100);
        assert_eq!(state.reputation, 0);
        assert_eq!(state.level, 1);
        assert!(state.current_scenario.is_none());
        assert!(state.used_scenario_ids.is_empty());
    }

    #[test]
    fn screen_labels_round_trip() {
        for screen in [Screen::Home, Screen::Game, Screen::Result, Screen::Victory] {
            assert_eq!(screen.as_str().parse::<Screen>(), Ok(screen));
        }
        assert!("lobby".parse::<Screen>().is_err());
    }

    #[test]
    fn terminal_screens() {
        assert!(Screen::Result.is_terminal());
        assert!(Screen::Victory.is_terminal());
        assert!(!Screen::Home.is_terminal());
        assert!(!Screen::Game.is_terminal());
    }

    #[test]
    fn chat_entry_constructors() {
        let scenario = Scenario {
            id: "scen".to_string(),
            sender: "Courier".to_string(),
            avatar: "parcel".to_string(),
            initial_message: "Your package is held".to_string(),
            clue: None,
            options: Vec::new(),
        };
        let bot = ChatEntry::bot(&scenario);
        assert_eq!(bot.role, ChatRole::Bot);
        assert_eq!(bot.sender.as_deref(), Some("Courier"));
        assert_eq!(bot.avatar.as_deref(), Some("parcel"));

        let player = ChatEntry::player("Ignore it");
        assert_eq!(player.role, ChatRole::Player);
        assert!(player.sender.is_none());
    }
}
