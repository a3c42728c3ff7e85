//! Choice effects - the handoff from dialogue choices to the player.

use player_rules::{DiceId, Item, Player, StatusEffect};
use serde::{Deserialize, Serialize};

/// A change to the player triggered by selecting a choice.
///
/// Authored in content as tagged objects, e.g.
/// `{"type": "grantExperience", "amount": 50}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChoiceEffect {
    GrantExperience { amount: u32 },
    Heal { amount: u32 },
    Damage { amount: u32 },
    RestoreMp { amount: u32 },
    SetLocation { location: String },
    GrantGold { amount: u32 },
    GrantItem { item: Item },
    GrantDice { dice: DiceId },
    ApplyStatus { effect: StatusEffect },
}

impl ChoiceEffect {
    /// Apply this effect to the player.
    pub fn apply(&self, player: &mut Player) {
        match self {
            ChoiceEffect::GrantExperience { amount } => {
                player.stats.add_experience(*amount);
            }
            ChoiceEffect::Heal { amount } => player.stats.heal(*amount),
            ChoiceEffect::Damage { amount } => player.stats.take_damage(*amount),
            ChoiceEffect::RestoreMp { amount } => player.stats.restore_mp(*amount),
            ChoiceEffect::SetLocation { location } => player.location.set(location.clone()),
            ChoiceEffect::GrantGold { amount } => player.inventory.add_gold(*amount),
            ChoiceEffect::GrantItem { item } => {
                player.inventory.add_item(item.clone());
            }
            ChoiceEffect::GrantDice { dice } => {
                player.inventory.add_dice(dice.clone());
            }
            ChoiceEffect::ApplyStatus { effect } => player.add_status_effect(effect.clone()),
        }
    }
}

/// Apply effects in authored order.
pub fn apply_effects(effects: &[ChoiceEffect], player: &mut Player) {
    for effect in effects {
        tracing::debug!(?effect, "applying choice effect");
        effect.apply(player);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use player_rules::{ItemId, StatusEffectKind};

    #[test]
    fn test_parse_effects() {
        let effects: Vec<ChoiceEffect> = serde_json::from_str(
            r#"[
                {"type": "grantExperience", "amount": 120},
                {"type": "setLocation", "location": "Tavern"},
                {"type": "grantItem", "item": {"id": "ale", "name": "Ale", "type": "Consumable",
                                               "effect": {"kind": "heal", "amount": 5}}},
                {"type": "grantDice", "dice": "d6_bone"},
                {"type": "applyStatus", "effect": {"id": "tipsy", "name": "Tipsy",
                                                   "duration": 3, "intensity": 1.0}}
            ]"#,
        )
        .unwrap();
        assert_eq!(effects.len(), 5);
        assert_eq!(effects[0], ChoiceEffect::GrantExperience { amount: 120 });
    }

    #[test]
    fn test_apply_effects() {
        let mut player = Player::new();
        let effects = vec![
            ChoiceEffect::GrantExperience { amount: 100 },
            ChoiceEffect::Damage { amount: 30 },
            ChoiceEffect::SetLocation {
                location: "Tavern".to_string(),
            },
            ChoiceEffect::GrantGold { amount: 12 },
            ChoiceEffect::GrantItem {
                item: Item::healing("ale", "Ale", 5),
            },
            ChoiceEffect::GrantDice {
                dice: DiceId::new("d6_bone"),
            },
            ChoiceEffect::ApplyStatus {
                effect: StatusEffect::new("tipsy", "Tipsy", 3, 4.0)
                    .with_kind(StatusEffectKind::Poison),
            },
        ];

        apply_effects(&effects, &mut player);

        assert_eq!(player.stats.level(), 2);
        // Level-up refilled to 110, then 30 damage and 4 poison.
        assert_eq!(player.stats.hp(), 76);
        assert_eq!(player.location.current(), "Tavern");
        assert_eq!(player.inventory.gold(), 12);
        assert!(player.inventory.contains_item(&ItemId::new("ale")));
        assert!(player.inventory.has_dice(&DiceId::new("d6_bone")));
        assert!(player.status_effects.contains("tipsy"));
    }
}
