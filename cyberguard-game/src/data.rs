use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Classification of a response option.
///
/// Catalog values other than `success` and `neutral` all count as `danger`,
/// so an unrecognized label degrades to the harshest outcome rather than
/// failing the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Success,
    Neutral,
    Danger,
}

impl<'de> Deserialize<'de> for OutcomeKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(match label.as_str() {
            "success" => Self::Success,
            "neutral" => Self::Neutral,
            _ => Self::Danger,
        })
    }
}

impl OutcomeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Neutral => "neutral",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selectable response within a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOption {
    pub id: String,
    pub text: String,
    pub outcome: OutcomeKind,
    pub feedback: String,
}

/// One simulated incoming message plus its possible responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub sender: String,
    /// Presentation tag picked up by the UI layer; carries no gameplay truth.
    #[serde(default)]
    pub avatar: String,
    pub initial_message: String,
    #[serde(default)]
    pub clue: Option<String>,
    #[serde(default)]
    pub options: Vec<ScenarioOption>,
}

/// Container for all scenario data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScenarioCatalog {
    pub scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    /// Create an empty catalog (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            scenarios: Vec::new(),
        }
    }

    /// Load catalog data from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid scenario data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Create a catalog from pre-parsed scenarios
    #[must_use]
    pub fn from_scenarios(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Look up a scenario by its identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|scenario| scenario.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_from_json() {
        let json = r#"{
            "scenarios": [
                {
                    "id": "bank_alert",
                    "sender": "SecureBank",
                    "avatar": "bank",
                    "initial_message": "Your account is locked. Click here.",
                    "clue": "Banks never send links over chat.",
                    "options": [
                        {
                            "id": "report",
                            "text": "Report as phishing",
                            "outcome": "success",
                            "feedback": "Correct - the link is fake."
                        },
                        {
                            "id": "click",
                            "text": "Open the link",
                            "outcome": "danger",
                            "feedback": "The link drained your account."
                        }
                    ]
                }
            ]
        }"#;

        let catalog = ScenarioCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        let scenario = catalog.get("bank_alert").unwrap();
        assert_eq!(scenario.sender, "SecureBank");
        assert_eq!(scenario.options[0].outcome, OutcomeKind::Success);
        assert_eq!(scenario.options[1].outcome, OutcomeKind::Danger);
    }

    #[test]
    fn unknown_outcome_label_counts_as_danger() {
        let json = r#"{
            "id": "opt",
            "text": "Reply with your PIN",
            "outcome": "catastrophic",
            "feedback": "Never share a PIN."
        }"#;
        let option: ScenarioOption = serde_json::from_str(json).unwrap();
        assert_eq!(option.outcome, OutcomeKind::Danger);
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{
            "id": "bare",
            "sender": "Unknown",
            "initial_message": "Hello"
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert!(scenario.avatar.is_empty());
        assert!(scenario.clue.is_none());
        assert!(scenario.options.is_empty());
    }
}
