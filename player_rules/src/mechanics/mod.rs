//! Game mechanics: equipment slots, status effect kinds, bonuses.

use serde::{Deserialize, Serialize};

use crate::components::PlayerStats;

/// Equipment slots on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Dice,
    Shield,
    OddTool,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 3] = [
        EquipmentSlot::Dice,
        EquipmentSlot::Shield,
        EquipmentSlot::OddTool,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Dice => "Dice",
            EquipmentSlot::Shield => "Shield",
            EquipmentSlot::OddTool => "OddTool",
        }
    }
}

/// Flat bonuses granted by equipped items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentBonuses {
    pub attack: i32,
    pub defense: i32,
    pub luck: i32,
}

impl std::ops::Add for EquipmentBonuses {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            attack: self.attack.saturating_add(rhs.attack),
            defense: self.defense.saturating_add(rhs.defense),
            luck: self.luck.saturating_add(rhs.luck),
        }
    }
}

/// What a status effect does when it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StatusEffectKind {
    /// No immediate effect; only tracked for its duration.
    #[default]
    Marker,
    /// Deals `intensity` damage on application.
    Poison,
    /// Heals `intensity` HP on application.
    Regeneration,
    /// Restores `intensity` MP on application.
    Focus,
}

impl StatusEffectKind {
    /// Apply the one-shot hook for this kind.
    pub fn apply(&self, intensity: f32, stats: &mut PlayerStats) {
        let amount = magnitude(intensity);
        match self {
            StatusEffectKind::Marker => {}
            StatusEffectKind::Poison => stats.take_damage(amount),
            StatusEffectKind::Regeneration => stats.heal(amount),
            StatusEffectKind::Focus => stats.restore_mp(amount),
        }
    }
}

/// Intensity rounded to a whole, non-negative stat amount.
fn magnitude(intensity: f32) -> u32 {
    if intensity.is_finite() && intensity > 0.0 {
        intensity.round() as u32
    } else {
        0
    }
}
