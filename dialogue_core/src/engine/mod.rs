//! Dialogue Engine - the traversal state machine.
//!
//! The engine walks a [`DialogueGraph`] one node at a time:
//! 1. **Presenting(i)**: node `i` is shown. `advance` moves to `i + 1`.
//! 2. **AwaitingChoice(i)**: node `i` has choices. Only `select` moves on,
//!    to the choice's jump target or to `i + 1` when none was authored.
//! 3. **Terminal**: the index ran past the last node. Nothing moves on.
//!
//! Commands that are not valid in the current state are ignored and
//! reported through [`CommandOutcome::Ignored`]. Events for the
//! presentation layer queue up until [`DialogueEngine::drain_events`].

mod state;

pub use state::*;

use std::collections::VecDeque;

use crate::events::{ChoiceView, DialogueEvent};
use crate::graph::{ChoiceOption, DialogueGraph, DialogueNode};

/// Owns the current position in a dialogue graph.
#[derive(Debug, Clone)]
pub struct DialogueEngine {
    graph: DialogueGraph,
    state: EngineState,
    current_index: usize,
    events: VecDeque<DialogueEvent>,
}

impl DialogueEngine {
    /// Start a dialogue at its first node.
    ///
    /// An empty graph starts in [`EngineState::Terminal`] with a
    /// `SessionEnded` event queued.
    pub fn new(graph: DialogueGraph) -> Self {
        Self::resume_at(graph, 0)
    }

    /// Start a dialogue at an arbitrary node, as when continuing a saved
    /// chapter. The node is entered normally, so a choice node awaits a
    /// choice and an index past the end starts terminal.
    pub fn resume_at(graph: DialogueGraph, index: usize) -> Self {
        let mut engine = Self {
            graph,
            state: EngineState::Presenting(0),
            current_index: 0,
            events: VecDeque::new(),
        };
        engine.enter(index);
        engine
    }

    /// Resume from a position recorded by [`progress`](Self::progress).
    pub fn restore(graph: DialogueGraph, progress: DialogueProgress) -> Self {
        Self::resume_at(graph, progress.node_index)
    }

    /// The current position, for saving alongside the player snapshot.
    pub fn progress(&self) -> DialogueProgress {
        DialogueProgress::at(self.current_index)
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Index of the current node. Equals the graph length once terminal.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn is_awaiting_choice(&self) -> bool {
        self.state.is_awaiting_choice()
    }

    pub fn graph(&self) -> &DialogueGraph {
        &self.graph
    }

    /// The node being shown, if the session has not ended.
    pub fn current_node(&self) -> Option<&DialogueNode> {
        match self.state {
            EngineState::Presenting(index) | EngineState::AwaitingChoice(index) => {
                self.graph.get(index)
            }
            EngineState::Terminal => None,
        }
    }

    /// Choices currently on offer. Empty unless awaiting a choice.
    pub fn available_choices(&self) -> &[ChoiceOption] {
        match self.state {
            EngineState::AwaitingChoice(index) => self
                .graph
                .get(index)
                .map(|node| node.choices.as_slice())
                .unwrap_or(&[]),
            _ => &[],
        }
    }

    /// The choice `select(choice)` would pick, if that selection is valid now.
    pub fn selectable_choice(&self, choice: usize) -> Option<&ChoiceOption> {
        self.available_choices().get(choice)
    }

    /// Move past a node that has no choices.
    pub fn advance(&mut self) -> CommandOutcome {
        match self.state {
            EngineState::Presenting(index) => {
                self.enter(index + 1);
                CommandOutcome::Applied
            }
            EngineState::AwaitingChoice(_) => self.ignore(IgnoredCommand::AwaitingChoice),
            EngineState::Terminal => self.ignore(IgnoredCommand::Terminal),
        }
    }

    /// Pick one of the offered choices.
    pub fn select(&mut self, choice: usize) -> CommandOutcome {
        let index = match self.state {
            EngineState::AwaitingChoice(index) => index,
            EngineState::Presenting(_) => return self.ignore(IgnoredCommand::NotAwaitingChoice),
            EngineState::Terminal => return self.ignore(IgnoredCommand::Terminal),
        };

        let Some(node) = self.graph.get(index) else {
            return self.ignore(IgnoredCommand::NotAwaitingChoice);
        };
        let available = node.choices.len();
        let Some(option) = node.choices.get(choice) else {
            return self.ignore(IgnoredCommand::ChoiceOutOfRange { choice, available });
        };

        let target = node.routed_target(choice).unwrap_or(index + 1);
        if !option.effects.is_empty() {
            self.events.push_back(DialogueEvent::ChoiceEffectsTriggered {
                index,
                choice,
                effects: option.effects.clone(),
            });
        }

        tracing::debug!(from = index, choice, to = target, "choice selected");
        self.enter(target);
        CommandOutcome::Applied
    }

    /// Take every event queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<DialogueEvent> {
        self.events.drain(..).collect()
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    fn enter(&mut self, index: usize) {
        self.current_index = index;

        let Some(node) = self.graph.get(index) else {
            // Jumps past the end clamp to the length.
            self.current_index = self.graph.len();
            self.state = EngineState::Terminal;
            self.events.push_back(DialogueEvent::SessionEnded);
            tracing::info!(target_index = index, nodes = self.graph.len(), "dialogue ended");
            return;
        };

        self.events.push_back(DialogueEvent::NodePresented {
            index,
            speaker: node.speaker.clone(),
            text: node.text.clone(),
        });

        if node.has_choices() {
            self.events.push_back(DialogueEvent::ChoicesAvailable {
                index,
                choices: node.choices.iter().map(ChoiceView::from).collect(),
            });
            self.state = EngineState::AwaitingChoice(index);
        } else {
            self.state = EngineState::Presenting(index);
        }

        tracing::debug!(index, state = ?self.state, "entered node");
    }

    fn ignore(&self, reason: IgnoredCommand) -> CommandOutcome {
        tracing::debug!(?reason, state = ?self.state, "command ignored");
        CommandOutcome::Ignored(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> DialogueNode {
        DialogueNode::new("Narrator", text)
    }

    fn two_way(targets: Vec<usize>) -> DialogueNode {
        DialogueNode::new("Guide", "Pick")
            .with_choice(ChoiceOption::new("a", "First"))
            .with_choice(ChoiceOption::new("b", "Second"))
            .with_next_indices(targets)
    }

    fn branching_graph() -> DialogueGraph {
        DialogueGraph::new(vec![
            two_way(vec![5, 2]),
            line("one"),
            line("two"),
            line("three"),
            line("four"),
            line("five"),
        ])
    }

    #[test]
    fn test_initial_state() {
        let mut engine = DialogueEngine::new(DialogueGraph::new(vec![line("hi")]));
        assert_eq!(engine.state(), EngineState::Presenting(0));
        assert_eq!(
            engine.drain_events(),
            vec![DialogueEvent::NodePresented {
                index: 0,
                speaker: "Narrator".to_string(),
                text: "hi".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_graph_is_terminal() {
        let mut engine = DialogueEngine::new(DialogueGraph::empty());
        assert!(engine.is_terminal());
        assert_eq!(engine.drain_events(), vec![DialogueEvent::SessionEnded]);
        assert_eq!(engine.advance(), CommandOutcome::Ignored(IgnoredCommand::Terminal));
    }

    #[test]
    fn test_single_node_terminal_boundary() {
        let mut engine = DialogueEngine::new(DialogueGraph::new(vec![line("only")]));
        assert_eq!(engine.state(), EngineState::Presenting(0));

        assert!(engine.advance().is_applied());
        assert!(engine.is_terminal());
        assert_eq!(engine.current_index(), 1);

        assert_eq!(engine.advance(), CommandOutcome::Ignored(IgnoredCommand::Terminal));
        assert_eq!(engine.select(0), CommandOutcome::Ignored(IgnoredCommand::Terminal));
        assert!(engine.is_terminal());
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn test_choice_node_awaits_choice() {
        let mut engine = DialogueEngine::new(branching_graph());
        assert_eq!(engine.state(), EngineState::AwaitingChoice(0));
        assert_eq!(engine.available_choices().len(), 2);

        let events = engine.drain_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[1],
            DialogueEvent::ChoicesAvailable { index: 0, choices } if choices[1].image_label == "b"
        ));
    }

    #[test]
    fn test_branch_resolution_is_deterministic() {
        for _ in 0..3 {
            let mut first = DialogueEngine::new(branching_graph());
            first.select(0);
            assert_eq!(first.current_index(), 5);
            assert_eq!(first.state(), EngineState::Presenting(5));

            let mut second = DialogueEngine::new(branching_graph());
            second.select(1);
            assert_eq!(second.current_index(), 2);
            assert_eq!(second.state(), EngineState::Presenting(2));
        }
    }

    #[test]
    fn test_unrouted_choice_falls_back() {
        let graph = DialogueGraph::new(vec![
            line("intro"),
            DialogueNode::new("Guide", "Ready?").with_choice(ChoiceOption::new("ok", "Yes")),
            line("go"),
        ]);
        let mut engine = DialogueEngine::new(graph);
        engine.advance();
        assert_eq!(engine.state(), EngineState::AwaitingChoice(1));

        assert!(engine.select(0).is_applied());
        assert_eq!(engine.current_index(), 2);
    }

    #[test]
    fn test_partial_routing_falls_back_for_missing_targets() {
        let mut engine = DialogueEngine::new(DialogueGraph::new(vec![
            two_way(vec![3]),
            line("one"),
            line("two"),
            line("three"),
        ]));
        engine.select(1);
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn test_advance_ignored_while_awaiting_choice() {
        let mut engine = DialogueEngine::new(branching_graph());
        engine.drain_events();

        for _ in 0..5 {
            assert_eq!(
                engine.advance(),
                CommandOutcome::Ignored(IgnoredCommand::AwaitingChoice)
            );
        }
        assert_eq!(engine.state(), EngineState::AwaitingChoice(0));
        assert_eq!(engine.current_index(), 0);
        assert!(!engine.has_pending_events());
    }

    #[test]
    fn test_select_ignored_while_presenting() {
        let mut engine = DialogueEngine::new(DialogueGraph::new(vec![line("a"), line("b")]));
        assert_eq!(
            engine.select(0),
            CommandOutcome::Ignored(IgnoredCommand::NotAwaitingChoice)
        );
        assert_eq!(engine.state(), EngineState::Presenting(0));
    }

    #[test]
    fn test_out_of_range_choice_is_ignored() {
        let mut engine = DialogueEngine::new(branching_graph());
        assert_eq!(
            engine.select(2),
            CommandOutcome::Ignored(IgnoredCommand::ChoiceOutOfRange {
                choice: 2,
                available: 2
            })
        );
        assert_eq!(engine.state(), EngineState::AwaitingChoice(0));
        assert!(engine.selectable_choice(2).is_none());
        assert!(engine.selectable_choice(1).is_some());
    }

    #[test]
    fn test_jump_past_end_terminates() {
        let mut engine = DialogueEngine::new(DialogueGraph::new(vec![two_way(vec![9, 1]), line("x")]));
        engine.drain_events();

        engine.select(0);
        assert!(engine.is_terminal());
        assert_eq!(engine.current_index(), 2);
        assert_eq!(engine.drain_events(), vec![DialogueEvent::SessionEnded]);
        assert!(engine.current_node().is_none());
    }

    #[test]
    fn test_choice_effects_event_precedes_next_node() {
        use crate::effects::ChoiceEffect;

        let graph = DialogueGraph::new(vec![
            DialogueNode::new("Merchant", "Take this.").with_choice(
                ChoiceOption::new("hand", "Thanks").with_effect(ChoiceEffect::GrantGold { amount: 5 }),
            ),
            line("after"),
        ]);
        let mut engine = DialogueEngine::new(graph);
        engine.drain_events();

        engine.select(0);
        let events = engine.drain_events();
        assert!(matches!(
            &events[0],
            DialogueEvent::ChoiceEffectsTriggered { index: 0, choice: 0, effects } if effects.len() == 1
        ));
        assert!(matches!(&events[1], DialogueEvent::NodePresented { index: 1, .. }));
    }

    #[test]
    fn test_loop_back_to_earlier_node() {
        let mut engine = DialogueEngine::new(DialogueGraph::new(vec![
            line("start"),
            two_way(vec![0, 2]),
            line("end"),
        ]));
        engine.advance();
        engine.select(0);
        assert_eq!(engine.state(), EngineState::Presenting(0));
        engine.advance();
        assert_eq!(engine.state(), EngineState::AwaitingChoice(1));
    }

    #[test]
    fn test_resume_at_plain_node() {
        let mut engine = DialogueEngine::resume_at(branching_graph(), 3);
        assert_eq!(engine.state(), EngineState::Presenting(3));
        assert!(matches!(
            engine.drain_events().as_slice(),
            [DialogueEvent::NodePresented { index: 3, text, .. }] if text == "three"
        ));

        engine.advance();
        assert_eq!(engine.state(), EngineState::Presenting(4));
    }

    #[test]
    fn test_resume_at_choice_node() {
        let graph = DialogueGraph::new(vec![line("intro"), two_way(vec![0, 2]), line("end")]);
        let mut engine = DialogueEngine::resume_at(graph, 1);
        assert_eq!(engine.state(), EngineState::AwaitingChoice(1));
        assert_eq!(engine.drain_events().len(), 2);

        assert!(engine.select(1).is_applied());
        assert_eq!(engine.state(), EngineState::Presenting(2));
    }

    #[test]
    fn test_resume_past_end_is_terminal() {
        let mut engine = DialogueEngine::resume_at(branching_graph(), 40);
        assert!(engine.is_terminal());
        assert_eq!(engine.current_index(), 6);
        assert_eq!(engine.drain_events(), vec![DialogueEvent::SessionEnded]);
    }

    #[test]
    fn test_progress_restores_position() {
        let mut engine = DialogueEngine::new(branching_graph());
        engine.select(1);
        engine.advance();
        let progress = engine.progress();
        assert_eq!(progress, DialogueProgress::at(3));

        let resumed = DialogueEngine::restore(branching_graph(), progress);
        assert_eq!(resumed.state(), engine.state());

        engine.advance();
        engine.advance();
        engine.advance();
        assert!(engine.is_terminal());
        let finished = DialogueEngine::restore(branching_graph(), engine.progress());
        assert!(finished.is_terminal());
    }
}
