//! Timed status effects.

use serde::{Deserialize, Serialize};

use super::PlayerStats;
use crate::mechanics::StatusEffectKind;

/// A status effect with a remaining duration in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub id: String,
    pub name: String,
    pub duration: i32,
    pub intensity: f32,
    #[serde(default)]
    pub kind: StatusEffectKind,
}

impl StatusEffect {
    pub fn new(id: impl Into<String>, name: impl Into<String>, duration: i32, intensity: f32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration,
            intensity: finite_or_zero(intensity),
            kind: StatusEffectKind::Marker,
        }
    }

    pub fn with_kind(mut self, kind: StatusEffectKind) -> Self {
        self.kind = kind;
        self
    }

    /// Decrement the duration. Returns whether the effect is still active.
    fn tick(&mut self) -> bool {
        self.duration = self.duration.saturating_sub(1);
        self.duration > 0
    }

    pub fn to_data(&self) -> StatusEffectData {
        StatusEffectData {
            effect_id: self.id.clone(),
            name: self.name.clone(),
            duration: self.duration,
            intensity: self.intensity,
            kind: self.kind,
        }
    }

    /// Rebuild an effect from saved data. Does not run the apply hook.
    pub fn from_data(data: StatusEffectData) -> Self {
        Self {
            id: data.effect_id,
            name: data.name,
            duration: data.duration,
            intensity: finite_or_zero(data.intensity),
            kind: data.kind,
        }
    }
}

/// NaN and infinities cannot be written to JSON, so they are stored as zero.
fn finite_or_zero(intensity: f32) -> f32 {
    if intensity.is_finite() {
        intensity
    } else {
        0.0
    }
}

/// Serializable form of an active status effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEffectData {
    pub effect_id: String,
    #[serde(default)]
    pub name: String,
    pub duration: i32,
    pub intensity: f32,
    #[serde(default)]
    pub kind: StatusEffectKind,
}

/// The set of active status effects, at most one per id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusEffectSet {
    active: Vec<StatusEffect>,
}

impl StatusEffectSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate an effect, replacing any active effect with the same id,
    /// then run its apply hook once.
    pub fn add(&mut self, mut effect: StatusEffect, stats: &mut PlayerStats) {
        effect.intensity = finite_or_zero(effect.intensity);
        if self.remove(&effect.id).is_some() {
            tracing::debug!(effect = %effect.id, "status effect reapplied");
        }
        effect.kind.apply(effect.intensity, stats);
        self.active.push(effect);
    }

    pub fn remove(&mut self, id: &str) -> Option<StatusEffect> {
        let index = self.active.iter().position(|effect| effect.id == id)?;
        Some(self.active.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&StatusEffect> {
        self.active.iter().find(|effect| effect.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn active(&self) -> &[StatusEffect] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Advance one time step: decrement every duration and drop the effects
    /// that reached zero. Returns the expired effects.
    pub fn tick(&mut self) -> Vec<StatusEffect> {
        let mut expired = Vec::new();
        let mut remaining = Vec::with_capacity(self.active.len());

        for mut effect in self.active.drain(..) {
            if effect.tick() {
                remaining.push(effect);
            } else {
                tracing::debug!(effect = %effect.id, "status effect expired");
                expired.push(effect);
            }
        }

        self.active = remaining;
        expired
    }

    pub fn snapshot(&self) -> Vec<StatusEffectData> {
        self.active.iter().map(StatusEffect::to_data).collect()
    }

    /// Replace the active set from saved data without re-applying effects.
    pub fn restore(&mut self, data: Vec<StatusEffectData>) {
        self.active.clear();
        for entry in data {
            let effect = StatusEffect::from_data(entry);
            self.remove(&effect.id);
            self.active.push(effect);
        }
    }
}
