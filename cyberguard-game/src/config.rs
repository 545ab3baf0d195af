//! Tuning overlay for the progression rules.
use serde::{Deserialize, Serialize};

use crate::constants::{
    DANGER_WALLET_COST, NEUTRAL_WALLET_COST, SUCCESS_REPUTATION_GAIN, TRANSITION_DELAY_TICKS,
    WALLET_MAX, WALLET_START, WIN_THRESHOLD,
};

/// Configuration for scoring and win/loss evaluation.
///
/// Every value the progression math depends on lives here so a deployment
/// can retune pacing without touching logic. Defaults mirror
/// [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Reputation total that ends the session in victory.
    #[serde(default = "default_win_threshold")]
    pub win_threshold: i32,
    /// Reputation granted for a `success` option.
    #[serde(default = "default_success_reputation")]
    pub success_reputation: i32,
    /// Wallet cost of a `neutral` option.
    #[serde(default = "default_neutral_wallet_cost")]
    pub neutral_wallet_cost: i32,
    /// Wallet cost of a `danger` option.
    #[serde(default = "default_danger_wallet_cost")]
    pub danger_wallet_cost: i32,
    /// Wallet value at session start.
    #[serde(default = "default_wallet_start")]
    pub wallet_start: i32,
    /// Upper clamp for the wallet.
    #[serde(default = "default_wallet_max")]
    pub wallet_max: i32,
    /// Ticks between a resolved choice and its scheduled screen change.
    #[serde(default = "default_transition_delay")]
    pub transition_delay: u64,
}

const fn default_win_threshold() -> i32 {
    WIN_THRESHOLD
}

const fn default_success_reputation() -> i32 {
    SUCCESS_REPUTATION_GAIN
}

const fn default_neutral_wallet_cost() -> i32 {
    NEUTRAL_WALLET_COST
}

const fn default_danger_wallet_cost() -> i32 {
    DANGER_WALLET_COST
}

const fn default_wallet_start() -> i32 {
    WALLET_START
}

const fn default_wallet_max() -> i32 {
    WALLET_MAX
}

const fn default_transition_delay() -> u64 {
    TRANSITION_DELAY_TICKS
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            win_threshold: default_win_threshold(),
            success_reputation: default_success_reputation(),
            neutral_wallet_cost: default_neutral_wallet_cost(),
            danger_wallet_cost: default_danger_wallet_cost(),
            wallet_start: default_wallet_start(),
            wallet_max: default_wallet_max(),
            transition_delay: default_transition_delay(),
        }
    }
}
