//! Play sessions - the explicit context object tying a player to the
//! dialogue currently being played.

use player_rules::{Player, PlayerSnapshot, StatusEffect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::effects::apply_effects;
use crate::engine::{CommandOutcome, DialogueEngine, DialogueProgress, EngineState};
use crate::events::DialogueEvent;
use crate::graph::{DialogueGraph, DialogueGraphLoader};

/// Unique identifier for a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player plus the dialogue they are in.
///
/// Every command runs to completion before the next one is accepted; the
/// host owns the session and passes it to whatever needs player or
/// dialogue access.
#[derive(Debug)]
pub struct GameSession {
    id: SessionId,
    player: Player,
    engine: DialogueEngine,
}

impl GameSession {
    pub fn new(player: Player, graph: DialogueGraph) -> Self {
        let id = SessionId::new();
        tracing::info!(session = %id, nodes = graph.len(), "session started");
        Self {
            id,
            player,
            engine: DialogueEngine::new(graph),
        }
    }

    /// Start a session from raw content, falling back to the empty graph
    /// if the content does not load.
    pub fn from_content(player: Player, raw: &str) -> Self {
        Self::new(player, DialogueGraphLoader::load_or_empty(raw))
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn engine(&self) -> &DialogueEngine {
        &self.engine
    }

    pub fn state(&self) -> EngineState {
        self.engine.state()
    }

    pub fn advance(&mut self) -> CommandOutcome {
        let _span = tracing::debug_span!("session", id = %self.id).entered();
        self.engine.advance()
    }

    /// Select a choice and apply its effects to the player.
    pub fn select(&mut self, choice: usize) -> CommandOutcome {
        let _span = tracing::debug_span!("session", id = %self.id).entered();

        let effects = self
            .engine
            .selectable_choice(choice)
            .map(|option| option.effects.clone())
            .unwrap_or_default();

        let outcome = self.engine.select(choice);
        if outcome.is_applied() {
            apply_effects(&effects, &mut self.player);
        }
        outcome
    }

    /// Advance time-based player effects by one step.
    pub fn tick(&mut self) -> Vec<StatusEffect> {
        self.player.tick()
    }

    pub fn drain_events(&mut self) -> Vec<DialogueEvent> {
        self.engine.drain_events()
    }

    /// Replace the dialogue with the next content unit. The player carries over.
    pub fn begin_dialogue(&mut self, graph: DialogueGraph) {
        tracing::info!(session = %self.id, nodes = graph.len(), "dialogue started");
        self.engine = DialogueEngine::new(graph);
    }

    /// Continue a dialogue from saved progress. The player carries over.
    pub fn resume_dialogue(&mut self, graph: DialogueGraph, progress: DialogueProgress) {
        tracing::info!(
            session = %self.id,
            nodes = graph.len(),
            node = progress.node_index,
            "dialogue resumed"
        );
        self.engine = DialogueEngine::restore(graph, progress);
    }

    /// Position in the current dialogue, saved separately from the player.
    pub fn progress(&self) -> DialogueProgress {
        self.engine.progress()
    }

    pub fn save(&self) -> PlayerSnapshot {
        self.player.save()
    }

    /// Restore the player. The dialogue position is not part of a snapshot.
    pub fn load(&mut self, snapshot: PlayerSnapshot) {
        self.player.load(snapshot);
    }

    /// End the session, handing back the player for a final save.
    pub fn finish(self) -> Player {
        tracing::info!(session = %self.id, "session finished");
        self.player
    }
}
