//! Centralized balance and tuning constants for CyberGuard game logic.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control, rather than through scattered
//! inline literals.

// Wallet tuning ------------------------------------------------------------
pub(crate) const WALLET_START: i32 = 100;
pub(crate) const WALLET_MAX: i32 = 100;
pub(crate) const WALLET_MIN: i32 = 0;
pub(crate) const NEUTRAL_WALLET_COST: i32 = 10;
pub(crate) const DANGER_WALLET_COST: i32 = 30;

// Reputation tuning --------------------------------------------------------
// 500 per success with a 2000 threshold means four clean answers win a
// session; tuned for fast demo pacing.
pub(crate) const SUCCESS_REPUTATION_GAIN: i32 = 500;
pub(crate) const WIN_THRESHOLD: i32 = 2_000;

// Progression --------------------------------------------------------------
pub(crate) const LEVEL_START: u32 = 1;

// Screen transitions -------------------------------------------------------
// Logical time units between a resolved choice and the scheduled
// victory/result screen change.
pub(crate) const TRANSITION_DELAY_TICKS: u64 = 2;
