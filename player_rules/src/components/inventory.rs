//! Inventory: carried items, owned dice and the gold purse.

use crate::entities::{DiceId, Item, ItemId, ItemType};

/// Result of handing a die to the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiceAcquisition {
    /// The die was not owned before.
    Acquired,
    /// The die was already owned; nothing changed.
    AlreadyOwned,
}

/// Everything the player owns. Items and dice are owned at most once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Inventory {
    items: Vec<Item>,
    dice: Vec<DiceId>,
    gold: u32,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. Returns `false` if an item with that id is already owned.
    pub fn add_item(&mut self, item: Item) -> bool {
        if self.contains_item(&item.id) {
            tracing::debug!(item = %item.id, "item already owned");
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove an item, handing it back to the caller.
    pub fn remove_item(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn get_item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains_item(&self, id: &ItemId) -> bool {
        self.get_item(id).is_some()
    }

    /// Items in acquisition order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_by_type(&self, item_type: ItemType) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.item_type == item_type)
            .collect()
    }

    /// Replace the carried items, dropping later duplicates of an id.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items.clear();
        for item in items {
            self.add_item(item);
        }
    }

    /// Take ownership of a die.
    pub fn add_dice(&mut self, id: DiceId) -> DiceAcquisition {
        if self.has_dice(&id) {
            tracing::debug!(dice = %id, "dice already owned");
            return DiceAcquisition::AlreadyOwned;
        }
        tracing::debug!(dice = %id, "dice acquired");
        self.dice.push(id);
        DiceAcquisition::Acquired
    }

    pub fn has_dice(&self, id: &DiceId) -> bool {
        self.dice.contains(id)
    }

    /// Owned dice in acquisition order.
    pub fn owned_dice(&self) -> &[DiceId] {
        &self.dice
    }

    /// Replace the owned dice, keeping the first occurrence of each id.
    pub fn set_owned_dice(&mut self, dice: Vec<DiceId>) {
        self.dice.clear();
        for id in dice {
            if !self.dice.contains(&id) {
                self.dice.push(id);
            }
        }
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Spend gold. Fails without side effects if the purse is too light.
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        if self.gold >= amount {
            self.gold -= amount;
            true
        } else {
            false
        }
    }

    pub fn set_gold(&mut self, gold: u32) {
        self.gold = gold;
    }
}
