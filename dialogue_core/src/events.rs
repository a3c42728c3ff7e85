//! Events emitted by the dialogue engine for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::effects::ChoiceEffect;
use crate::graph::ChoiceOption;

/// Something the presentation layer should show or react to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DialogueEvent {
    /// A node's line should be shown.
    NodePresented {
        index: usize,
        speaker: String,
        text: String,
    },

    /// The node's choices should be offered; advance is blocked until one
    /// is selected.
    ChoicesAvailable {
        index: usize,
        choices: Vec<ChoiceView>,
    },

    /// The selected choice carried player effects.
    ChoiceEffectsTriggered {
        index: usize,
        choice: usize,
        effects: Vec<ChoiceEffect>,
    },

    /// The dialogue ran past its last node; the host moves on to the next
    /// content unit.
    SessionEnded,
}

/// What the presentation layer needs to render one choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceView {
    pub image_label: String,
    pub text: String,
}

impl From<&ChoiceOption> for ChoiceView {
    fn from(choice: &ChoiceOption) -> Self {
        Self {
            image_label: choice.image_label.clone(),
            text: choice.text.clone(),
        }
    }
}

impl DialogueEvent {
    pub fn is_session_end(&self) -> bool {
        matches!(self, DialogueEvent::SessionEnded)
    }
}
