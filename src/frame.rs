//! Structural snapshot data model.
//!
//! A [`Frame`] is one immutable step of an animated operation: an ordered
//! set of nodes, an unordered set of directed edges, and an optional
//! label. Frames are pure values — the engine clones them on transition
//! start and never mutates one in place, so a recorded session can be
//! serialized and replayed verbatim.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The visual state of a single node within one frame.
///
/// `id` is the continuity key: the generator assigns ids monotonically
/// and never reuses one while the node exists across frames, which is
/// what lets the renderer track an entity as it moves between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeState {
    /// Stable identity, unique within one frame.
    pub id: u32,
    /// Display value. Values snap during interpolation; they never blend.
    pub value: i64,
    /// Semantic 2D position.
    pub pos: Vec2,
    /// Visual emphasis for the current step.
    #[serde(default)]
    pub highlight: bool,
}

impl NodeState {
    /// Node without highlight at the given position.
    #[must_use]
    pub fn new(id: u32, value: i64, pos: Vec2) -> Self {
        Self {
            id,
            value,
            pos,
            highlight: false,
        }
    }

    /// Same node with the highlight flag set.
    #[must_use]
    pub const fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }
}

/// A directed relation between two node ids.
///
/// Edges carry no independent identity; they are compared and rendered
/// purely by their endpoint ids and follow wherever those nodes are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeState {
    /// Source node id.
    pub from: u32,
    /// Target node id.
    pub to: u32,
}

impl EdgeState {
    /// Edge from `from` to `to`.
    #[must_use]
    pub const fn new(from: u32, to: u32) -> Self {
        Self { from, to }
    }
}

/// One immutable structural snapshot: nodes, edges, and an optional
/// human-readable label describing the operation step.
///
/// `Frame::default()` is the empty placeholder the engine renders when
/// the sequence is empty or an index has no frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Ordered node snapshots. Ids are unique within one frame.
    pub nodes: Vec<NodeState>,
    /// Directed edges between node ids.
    #[serde(default)]
    pub edges: Vec<EdgeState>,
    /// Step description shown alongside the structure.
    #[serde(default)]
    pub label: Option<String>,
}

impl Frame {
    /// Frame without a label.
    #[must_use]
    pub fn new(nodes: Vec<NodeState>, edges: Vec<EdgeState>) -> Self {
        Self {
            nodes,
            edges,
            label: None,
        }
    }

    /// Frame with a step label.
    #[must_use]
    pub fn labeled(
        nodes: Vec<NodeState>,
        edges: Vec<EdgeState>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            nodes,
            edges,
            label: Some(label.into()),
        }
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: u32) -> Option<&NodeState> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Monotonic node id source.
///
/// Owned by whichever component creates frames, scoped to one structure
/// instance's lifetime. Ids start at 1 and are never reused until
/// [`reset`](Self::reset), which marks a session boundary (e.g. the
/// structure was rebuilt from scratch).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeIdAllocator {
    next_id: u32,
}

impl NodeIdAllocator {
    /// Allocator with ids starting at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Hand out the next id.
    pub fn allocate(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Restart the id space for a fresh structure instance.
    pub fn reset(&mut self) {
        self.next_id = 1;
    }
}

impl Default for NodeIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
