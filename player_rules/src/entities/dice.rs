//! Dice definitions - catalog entities sold in shops.

use serde::{Deserialize, Serialize};

use super::DiceId;

/// A die from the catalog. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    pub id: DiceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Human-readable description of the die's special effect.
    #[serde(default)]
    pub effect: String,
    pub faces: Vec<i32>,
    pub price: u32,
}

impl Dice {
    /// Create a die with the given faces.
    pub fn new(id: impl Into<String>, name: impl Into<String>, faces: Vec<i32>, price: u32) -> Self {
        Self {
            id: DiceId::new(id),
            name: name.into(),
            description: String::new(),
            effect: String::new(),
            faces,
            price,
        }
    }

    /// A standard die with faces `1..=sides`.
    pub fn standard(id: impl Into<String>, name: impl Into<String>, sides: i32, price: u32) -> Self {
        Self::new(id, name, (1..=sides).collect(), price)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.effect = effect.into();
        self
    }

    /// Face shown for a roll index (wraps around the face list).
    pub fn face(&self, roll: usize) -> Option<i32> {
        if self.faces.is_empty() {
            None
        } else {
            Some(self.faces[roll % self.faces.len()])
        }
    }

    /// Expected value of a fair roll.
    pub fn average(&self) -> f32 {
        if self.faces.is_empty() {
            return 0.0;
        }
        let total: i64 = self.faces.iter().map(|&face| i64::from(face)).sum();
        (total as f64 / self.faces.len() as f64) as f32
    }
}
