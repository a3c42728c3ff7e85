//! Engine states, command outcomes and saved progress.

use serde::{Deserialize, Serialize};

/// Where the engine is in the dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Showing a node without choices; waiting for `advance`.
    Presenting(usize),
    /// Showing a node's choices; waiting for `select`.
    AwaitingChoice(usize),
    /// Past the last node. Absorbing.
    Terminal,
}

impl EngineState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, EngineState::Terminal)
    }

    pub fn is_awaiting_choice(&self) -> bool {
        matches!(self, EngineState::AwaitingChoice(_))
    }
}

/// Result of sending a command to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command caused a transition.
    Applied,
    /// The command was not valid in the current state; nothing changed.
    Ignored(IgnoredCommand),
}

impl CommandOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CommandOutcome::Applied)
    }
}

/// Why a command was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredCommand {
    /// `advance` while choices are shown.
    AwaitingChoice,
    /// `select` while no choices are shown.
    NotAwaitingChoice,
    /// `select` with an index the node does not offer.
    ChoiceOutOfRange { choice: usize, available: usize },
    /// Any command after the session ended.
    Terminal,
}

/// Saved position in a dialogue, kept apart from the player snapshot.
///
/// Resuming at an index past the last node ends the dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueProgress {
    pub node_index: usize,
}

impl DialogueProgress {
    pub fn at(node_index: usize) -> Self {
        Self { node_index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_predicates() {
        assert!(EngineState::Terminal.is_terminal());
        assert!(!EngineState::Presenting(0).is_terminal());
        assert!(EngineState::AwaitingChoice(3).is_awaiting_choice());
        assert!(!EngineState::Presenting(3).is_awaiting_choice());
    }

    #[test]
    fn test_outcome_predicates() {
        assert!(CommandOutcome::Applied.is_applied());
        assert!(!CommandOutcome::Ignored(IgnoredCommand::Terminal).is_applied());
    }

    #[test]
    fn test_progress_field_names() {
        let json = serde_json::to_value(DialogueProgress::at(4)).unwrap();
        assert_eq!(json, serde_json::json!({ "nodeIndex": 4 }));
    }
}
