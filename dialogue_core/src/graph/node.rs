//! Node and choice definitions - the authored units of a dialogue graph.

use serde::{Deserialize, Deserializer, Serialize};

use crate::effects::ChoiceEffect;

/// One line of dialogue, optionally ending in a set of choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueNode {
    pub speaker: String,
    pub text: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub choices: Vec<ChoiceOption>,

    /// Jump targets, parallel to `choices`. May be shorter than `choices`;
    /// unrouted choices continue with the next node.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub next_indices: Vec<usize>,
}

impl DialogueNode {
    /// Create a plain line with no choices.
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            choices: Vec::new(),
            next_indices: Vec::new(),
        }
    }

    /// Add an unrouted choice.
    pub fn with_choice(mut self, choice: ChoiceOption) -> Self {
        self.choices.push(choice);
        self
    }

    /// Set the jump targets for the choices.
    pub fn with_next_indices(mut self, next_indices: Vec<usize>) -> Self {
        self.next_indices = next_indices;
        self
    }

    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }

    /// Explicit jump target for a choice, if one was authored.
    pub fn routed_target(&self, choice: usize) -> Option<usize> {
        self.next_indices.get(choice).copied()
    }
}

/// A selectable option shown under a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Name of the visual asset the presentation layer shows for this option.
    #[serde(rename = "imageName", alias = "imageLabel", default)]
    pub image_label: String,

    #[serde(default)]
    pub text: String,

    /// Applied to the player when this option is selected.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<ChoiceEffect>,
}

impl ChoiceOption {
    pub fn new(image_label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            image_label: image_label.into(),
            text: text.into(),
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: ChoiceEffect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Treat an explicit `null` list like a missing one.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
