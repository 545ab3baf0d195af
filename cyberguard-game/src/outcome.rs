//! Deterministic outcome evaluation for a chosen option.
use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;
use crate::data::{OutcomeKind, ScenarioOption};

/// Presentation classification of the feedback shown after a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Warning,
    Danger,
}

/// Feedback produced by the most recent choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

/// Transient cosmetic event for the presentation layer to animate.
///
/// These carry no gameplay truth and may be dropped without affecting
/// correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "amount")]
pub enum CosmeticEvent {
    WalletLoss(i32),
    ReputationGain(i32),
}

/// Resource deltas and feedback for a resolved choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeResolution {
    pub wallet_delta: i32,
    pub reputation_delta: i32,
    pub feedback: Feedback,
    pub events: Vec<CosmeticEvent>,
}

/// Map a chosen option to its resource deltas and feedback.
///
/// Deterministic, no randomness: `success` grants reputation, `neutral` and
/// `danger` cost wallet. Feedback text is copied verbatim from the option.
#[must_use]
pub fn evaluate(option: &ScenarioOption, rules: &RulesConfig) -> OutcomeResolution {
    let (wallet_delta, reputation_delta, kind) = match option.outcome {
        OutcomeKind::Success => (0, rules.success_reputation, FeedbackKind::Success),
        OutcomeKind::Neutral => (-rules.neutral_wallet_cost, 0, FeedbackKind::Warning),
        OutcomeKind::Danger => (-rules.danger_wallet_cost, 0, FeedbackKind::Danger),
    };

    let mut events = Vec::new();
    if wallet_delta < 0 {
        events.push(CosmeticEvent::WalletLoss(-wallet_delta));
    }
    if reputation_delta > 0 {
        events.push(CosmeticEvent::ReputationGain(reputation_delta));
    }

    OutcomeResolution {
        wallet_delta,
        reputation_delta,
        feedback: Feedback {
            kind,
            text: option.feedback.clone(),
        },
        events,
    }
}
