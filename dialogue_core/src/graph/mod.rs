//! Dialogue graph - the immutable narrative content of one session.
//!
//! A node's identity is its position in the graph. Nodes are presented in
//! order unless a choice jumps elsewhere through `next_indices`.

mod loader;
mod node;

pub use loader::*;
pub use node::*;

use serde::{Deserialize, Serialize};

/// Ordered dialogue nodes. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogueGraph {
    nodes: Vec<DialogueNode>,
}

/// Authoring problems that do not prevent a graph from loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingIssue {
    /// The choice has no jump target and continues with the next node.
    SequentialFallback { node: usize, choice: usize },
    /// The jump target lies past the end of the graph and ends the session.
    TargetPastEnd {
        node: usize,
        choice: usize,
        target: usize,
    },
}

impl DialogueGraph {
    pub fn new(nodes: Vec<DialogueNode>) -> Self {
        Self { nodes }
    }

    /// The graph used when content fails to load. Ends immediately.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<&DialogueNode> {
        self.nodes.get(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[DialogueNode] {
        &self.nodes
    }

    /// Node reached by selecting `choice` at `index`.
    ///
    /// Returns `None` if the node does not exist or has no such choice.
    /// Unrouted choices fall through to `index + 1`.
    pub fn resolve_choice(&self, index: usize, choice: usize) -> Option<usize> {
        let node = self.get(index)?;
        if choice >= node.choices.len() {
            return None;
        }
        Some(node.routed_target(choice).unwrap_or(index + 1))
    }

    /// Every choice that relies on sequential fallback or jumps past the end.
    pub fn routing_report(&self) -> Vec<RoutingIssue> {
        let mut issues = Vec::new();

        for (node_index, node) in self.nodes.iter().enumerate() {
            for choice in 0..node.choices.len() {
                match node.routed_target(choice) {
                    None => issues.push(RoutingIssue::SequentialFallback {
                        node: node_index,
                        choice,
                    }),
                    // Jumping to exactly `len` is the authored way to end.
                    Some(target) if target > self.nodes.len() => {
                        issues.push(RoutingIssue::TargetPastEnd {
                            node: node_index,
                            choice,
                            target,
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        issues
    }
}
