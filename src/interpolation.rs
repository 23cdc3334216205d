//! Union-of-ids frame blending for renderers.
//!
//! During a transition the renderer needs an intermediate state between
//! the source and target frames. [`interpolate`] produces one: nodes
//! present on both sides glide between positions, nodes present on only
//! one side fade in or out instead of jumping, and edges are taken from
//! the target frame, following wherever their endpoint nodes currently
//! are.

use glam::Vec2;
use rustc_hash::FxHashMap;

use crate::frame::{EdgeState, Frame, NodeState};

/// A node within an interpolated frame, with its blend opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LerpNode {
    /// Stable identity carried over from the frames being blended.
    pub id: u32,
    /// Display value. Snaps to the target's value; never blends.
    pub value: i64,
    /// Interpolated position.
    pub pos: Vec2,
    /// Highlight from the source while `t < 0.5`, from the target after.
    pub highlight: bool,
    /// 1.0 for nodes on both sides; `t` fading in for target-only nodes,
    /// `1 - t` fading out for source-only nodes.
    pub opacity: f32,
}

/// An intermediate frame produced by [`interpolate`].
#[derive(Debug, Clone, PartialEq)]
pub struct LerpFrame {
    /// Union of both frames' nodes: source order first, then target-only
    /// nodes in target order.
    pub nodes: Vec<LerpNode>,
    /// The target frame's edge set.
    pub edges: Vec<EdgeState>,
}

/// Blend two frames at progress `t` (clamped to [0, 1]).
///
/// The node set is the union of both frames' ids. For an id on both
/// sides the position is linearly interpolated, the value snaps to the
/// target, and the highlight switches hard at the midpoint. Ids on one
/// side only are included as-is with a proportional fade.
#[must_use]
pub fn interpolate(a: &Frame, b: &Frame, t: f32) -> LerpFrame {
    let t = t.clamp(0.0, 1.0);

    let in_b: FxHashMap<u32, &NodeState> =
        b.nodes.iter().map(|n| (n.id, n)).collect();
    let in_a: FxHashMap<u32, &NodeState> =
        a.nodes.iter().map(|n| (n.id, n)).collect();

    let mut nodes = Vec::with_capacity(a.nodes.len() + b.nodes.len());

    for na in &a.nodes {
        if let Some(nb) = in_b.get(&na.id) {
            nodes.push(LerpNode {
                id: na.id,
                value: nb.value,
                pos: na.pos.lerp(nb.pos, t),
                highlight: if t < 0.5 { na.highlight } else { nb.highlight },
                opacity: 1.0,
            });
        } else {
            // Leaving the structure: fade out in place.
            nodes.push(LerpNode {
                id: na.id,
                value: na.value,
                pos: na.pos,
                highlight: na.highlight,
                opacity: 1.0 - t,
            });
        }
    }

    for nb in &b.nodes {
        if !in_a.contains_key(&nb.id) {
            // Entering the structure: fade in at the target position.
            nodes.push(LerpNode {
                id: nb.id,
                value: nb.value,
                pos: nb.pos,
                highlight: nb.highlight,
                opacity: t,
            });
        }
    }

    LerpFrame {
        nodes,
        edges: b.edges.clone(),
    }
}

/// Linear interpolation between two f32 values.
#[inline]
#[must_use]
pub fn lerp_f32(t: f32, start: f32, end: f32) -> f32 {
    start + (end - start) * t
}
