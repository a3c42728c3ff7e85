//! Dice shop purchase rules.
//!
//! The shop UI is a host concern; this module decides what is listed and
//! whether a purchase goes through.

mod catalog;

pub use catalog::*;

use crate::components::Inventory;
use crate::entities::{Dice, DiceId};

/// Outcome of a purchase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Gold was deducted and the die is now owned.
    Purchased,
    /// The die is already owned; nothing was charged.
    AlreadyOwned,
    /// The shop does not sell this die.
    NotStocked,
    InsufficientFunds { price: u32, available: u32 },
}

/// A shop selling a fixed stock of catalog dice.
#[derive(Debug, Clone)]
pub struct DiceShop {
    pub name: String,
    stock: Vec<DiceId>,
}

impl DiceShop {
    pub fn new(name: impl Into<String>, stock: Vec<DiceId>) -> Self {
        Self {
            name: name.into(),
            stock,
        }
    }

    pub fn stock(&self) -> &[DiceId] {
        &self.stock
    }

    pub fn sells(&self, id: &DiceId) -> bool {
        self.stock.contains(id)
    }

    /// Stocked dice the player does not own yet, in stock order.
    pub fn listing<'a>(&self, catalog: &'a DiceCatalog, inventory: &Inventory) -> Vec<&'a Dice> {
        self.stock
            .iter()
            .filter(|id| !inventory.has_dice(id))
            .filter_map(|id| catalog.get(id))
            .collect()
    }

    /// Try to buy a die with the inventory's gold.
    pub fn purchase(
        &self,
        catalog: &DiceCatalog,
        inventory: &mut Inventory,
        id: &DiceId,
    ) -> PurchaseOutcome {
        let Some(dice) = catalog.get(id).filter(|_| self.sells(id)) else {
            return PurchaseOutcome::NotStocked;
        };

        if inventory.has_dice(id) {
            return PurchaseOutcome::AlreadyOwned;
        }

        if !inventory.spend_gold(dice.price) {
            return PurchaseOutcome::InsufficientFunds {
                price: dice.price,
                available: inventory.gold(),
            };
        }

        inventory.add_dice(id.clone());
        tracing::info!(shop = %self.name, dice = %dice.name, price = dice.price, "dice purchased");
        PurchaseOutcome::Purchased
    }
}
