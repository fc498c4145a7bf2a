//! Serializable point-in-time view of a scoring tree.
//!
//! Rules are closures and cannot be serialized, so readers that need to
//! persist, diff or print a tree work from a `NodeSnapshot` instead.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Score;

use super::node::{NodeKind, ScoringNode};

/// Recursive capture of a node and its structural children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub label: String,
    pub kind: NodeKind,
    pub index: usize,
    pub play_count: usize,
    pub score: Score,
    pub complete: bool,
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    #[must_use]
    pub fn capture(node: &ScoringNode) -> Self {
        Self {
            label: node.label().to_owned(),
            kind: node.kind(),
            index: node.index(),
            play_count: node.play_count(),
            score: node.score(),
            complete: node.is_complete(),
            children: node.children().into_iter().map(NodeSnapshot::capture).collect(),
        }
    }

    /// Total number of nodes in the captured subtree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(NodeSnapshot::node_count).sum::<usize>()
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(
            f,
            "{:indent$}{} '{}' #{} plays={} score={}{}",
            "",
            self.kind,
            self.label,
            self.index,
            self.play_count,
            self.score,
            if self.complete { " complete" } else { "" },
            indent = depth * 4,
        )?;
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for NodeSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
