//! Match scripts: a god assignment plus an ordered list of actions.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_santorini::{Action, GodAssignment, GodPower};
use tracing::{debug, info, instrument};

/// A scripted match, usually loaded from TOML.
///
/// ```toml
/// god_a = "Apollo"
/// god_b = "None"
///
/// [[actions]]
/// action = "placeWorker"
/// x = 0
/// y = 0
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// Power held by player A.
    #[serde(default)]
    god_a: GodPower,

    /// Power held by player B.
    #[serde(default)]
    god_b: GodPower,

    /// Stop at the first rejected action instead of reporting and going on.
    #[serde(default = "default_stop_on_rejection")]
    stop_on_rejection: bool,

    /// Actions in submission order.
    #[serde(default)]
    actions: Vec<Action>,
}

fn default_stop_on_rejection() -> bool {
    true
}

impl ScriptConfig {
    /// Creates a script with the given powers and actions.
    #[instrument(skip(actions), fields(count = actions.len()))]
    pub fn new(god_a: GodPower, god_b: GodPower, actions: Vec<Action>) -> Self {
        Self {
            god_a,
            god_b,
            stop_on_rejection: default_stop_on_rejection(),
            actions,
        }
    }

    /// A starter script: the four workers placed near the corners.
    #[instrument]
    pub fn template(god_a: GodPower, god_b: GodPower) -> Self {
        let placements = [(1, 1), (3, 3), (1, 3), (3, 1)]
            .into_iter()
            .map(|(x, y)| Action::PlaceWorker { x, y })
            .collect();
        Self::new(god_a, god_b, placements)
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        debug!("Loading script from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(format!("Failed to read script file: {e}")))?;
        let script = Self::parse(&content)?;
        info!(
            god_a = %script.god_a,
            god_b = %script.god_b,
            actions = script.actions.len(),
            "Script loaded"
        );
        Ok(script)
    }

    /// Parses a script from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        toml::from_str(content)
            .map_err(|e| ScriptError::new(format!("Failed to parse script: {e}")))
    }

    /// Renders the script as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ScriptError> {
        toml::to_string(self)
            .map_err(|e| ScriptError::new(format!("Failed to serialize script: {e}")))
    }

    /// The god assignment the script plays with.
    pub fn gods(&self) -> GodAssignment {
        GodAssignment::new(self.god_a, self.god_b)
    }
}

/// Script loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_script() {
        let script = ScriptConfig::parse(
            r#"
            god_a = "Minotaur"

            [[actions]]
            action = "placeWorker"
            x = 2
            y = 2

            [[actions]]
            action = "build"
            x = 1
            y = 1
            buildDome = true

            [[actions]]
            action = "endTurn"
            "#,
        )
        .unwrap();

        assert_eq!(*script.god_a(), GodPower::Minotaur);
        assert_eq!(*script.god_b(), GodPower::Mortal);
        assert!(*script.stop_on_rejection());
        assert_eq!(
            script.actions(),
            &vec![
                Action::PlaceWorker { x: 2, y: 2 },
                Action::Build {
                    x: 1,
                    y: 1,
                    build_dome: true
                },
                Action::EndTurn,
            ]
        );
    }

    #[test]
    fn test_parse_error_carries_location() {
        let err = ScriptConfig::parse("god_a = \"Zeus\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse script"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_template_round_trips_through_toml() {
        let script = ScriptConfig::template(GodPower::Atlas, GodPower::Hermes);
        let text = script.to_toml().unwrap();
        assert_eq!(ScriptConfig::parse(&text).unwrap(), script);
    }
}
