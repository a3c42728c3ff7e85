//! Dice catalog - every die that exists in the game.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::entities::{Dice, DiceId};
use crate::error::{Result, RulesError};

/// Immutable collection of dice definitions, looked up by id.
#[derive(Debug, Clone, Default)]
pub struct DiceCatalog {
    dice: Vec<Dice>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    dice: Vec<Dice>,
}

impl DiceCatalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn from_dice(dice: Vec<Dice>) -> Result<Self> {
        let mut seen = HashSet::new();
        for die in &dice {
            if !seen.insert(&die.id) {
                return Err(RulesError::DuplicateDice(die.id.clone()));
            }
        }
        Ok(Self { dice })
    }

    /// Parse a catalog made of `[[dice]]` tables.
    ///
    /// ```toml
    /// [[dice]]
    /// id = "d6_lucky"
    /// name = "Lucky Die"
    /// effect = "Rerolls the first 1"
    /// faces = [1, 2, 3, 4, 5, 6]
    /// price = 30
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::from_dice(file.dice)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), dice = catalog.len(), "loaded dice catalog");
        Ok(catalog)
    }

    pub fn get(&self, id: &DiceId) -> Option<&Dice> {
        self.dice.iter().find(|die| &die.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dice> {
        self.dice.iter()
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }
}
