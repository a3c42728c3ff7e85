//! Dialogue content loading.
//!
//! Content is JSON: either a bare array of node records or an object with a
//! `"dialogues"` array.
//!
//! ```json
//! [
//!   { "speaker": "Mara", "text": "You made it." },
//!   {
//!     "speaker": "Mara",
//!     "text": "Shop or tavern?",
//!     "choices": [
//!       { "imageName": "coin", "text": "Shop" },
//!       { "imageName": "mug", "text": "Tavern" }
//!     ],
//!     "nextIndices": [4, 7]
//!   }
//! ]
//! ```

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{DialogueGraph, DialogueNode, RoutingIssue};

/// Why dialogue content could not be turned into a graph.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dialogue content {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dialogue content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dialogue content must be an array of nodes or an object with a \"dialogues\" array")]
    Shape,

    #[error("dialogue content contains no nodes")]
    Empty,
}

/// Parses dialogue content into a [`DialogueGraph`].
pub struct DialogueGraphLoader;

impl DialogueGraphLoader {
    /// Parse raw content. Deterministic; never panics on bad input.
    pub fn load(raw: &str) -> Result<DialogueGraph, LoadError> {
        let nodes = match serde_json::from_str::<Value>(raw)? {
            nodes @ Value::Array(_) => nodes,
            Value::Object(mut wrapper) => wrapper
                .remove("dialogues")
                .filter(Value::is_array)
                .ok_or(LoadError::Shape)?,
            _ => return Err(LoadError::Shape),
        };

        let nodes: Vec<DialogueNode> = serde_json::from_value(nodes)?;
        if nodes.is_empty() {
            return Err(LoadError::Empty);
        }

        let graph = DialogueGraph::new(nodes);
        for issue in graph.routing_report() {
            match issue {
                RoutingIssue::SequentialFallback { node, choice } => {
                    tracing::debug!(node, choice, "choice falls back to the next node");
                }
                RoutingIssue::TargetPastEnd {
                    node,
                    choice,
                    target,
                } => {
                    tracing::warn!(node, choice, target, "choice jumps past the end of the dialogue");
                }
            }
        }

        tracing::debug!(nodes = graph.len(), "dialogue graph loaded");
        Ok(graph)
    }

    /// Read a content file supplied by the host and parse it.
    pub fn load_path(path: impl AsRef<Path>) -> Result<DialogueGraph, LoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(&raw)
    }

    /// Parse raw content, substituting the empty graph on failure.
    ///
    /// The empty graph ends the session immediately instead of crashing it.
    pub fn load_or_empty(raw: &str) -> DialogueGraph {
        Self::load(raw).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "dialogue content rejected, using empty graph");
            DialogueGraph::empty()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_bare_array() {
        let graph = DialogueGraphLoader::load(
            r#"[
                {"speaker": "Mara", "text": "Hello"},
                {"speaker": "Mara", "text": "Pick one",
                 "choices": [{"imageName": "a", "text": "A"}, {"imageName": "b", "text": "B"}],
                 "nextIndices": [0, 2]},
                {"speaker": "Mara", "text": "Bye"}
            ]"#,
        )
        .unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.get(1).unwrap().choices[1].image_label, "b");
        assert_eq!(graph.get(1).unwrap().next_indices, vec![0, 2]);
    }

    #[test]
    fn test_load_wrapped_object() {
        let graph =
            DialogueGraphLoader::load(r#"{"dialogues": [{"speaker": "", "text": "..."}]}"#).unwrap();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_load_is_deterministic() {
        let raw = r#"[{"speaker": "A", "text": "1"}, {"speaker": "B", "text": "2"}]"#;
        assert_eq!(
            DialogueGraphLoader::load(raw).unwrap(),
            DialogueGraphLoader::load(raw).unwrap()
        );
    }

    #[test]
    fn test_malformed_json() {
        let err = DialogueGraphLoader::load("[{\"speaker\": ").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_missing_required_field() {
        let err = DialogueGraphLoader::load(r#"[{"speaker": "A"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_negative_jump_target() {
        let err = DialogueGraphLoader::load(
            r#"[{"speaker": "A", "text": "B", "choices": [{"text": "x"}], "nextIndices": [-1]}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_wrong_shape() {
        assert!(matches!(
            DialogueGraphLoader::load("42"),
            Err(LoadError::Shape)
        ));
        assert!(matches!(
            DialogueGraphLoader::load(r#"{"nodes": []}"#),
            Err(LoadError::Shape)
        ));
        assert!(matches!(
            DialogueGraphLoader::load(r#"{"dialogues": "none"}"#),
            Err(LoadError::Shape)
        ));
    }

    #[test]
    fn test_empty_content() {
        assert!(matches!(DialogueGraphLoader::load("[]"), Err(LoadError::Empty)));
    }

    #[test]
    fn test_missing_file() {
        let err = DialogueGraphLoader::load_path("/no/such/chapter.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_load_or_empty() {
        assert!(DialogueGraphLoader::load_or_empty("not json").is_empty());
        assert_eq!(
            DialogueGraphLoader::load_or_empty(r#"[{"speaker": "A", "text": "B"}]"#).len(),
            1
        );
    }
}
