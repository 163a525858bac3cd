use core::cmp::Ordering;
use std::collections::BinaryHeap;

use thiserror::Error;
use voxnav_core::Vec3;

use crate::grid::VoxelGrid;
use crate::node::NodeId;
use crate::path::WaypointPath;
use crate::registry::PointRegistry;

/// A query endpoint failed to snap onto the grid.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("no grid node within snap radius of the start position")]
    NoStartNode,
    #[error("no grid node within snap radius of the goal position")]
    NoGoalNode,
}

/// Per-query record for one discovered node.
///
/// Created lazily when the search first reaches the node; owns only its own
/// score/predecessor state and never outlives the query.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    g: f32,
    h: f32,
    predecessor: Option<NodeId>,
    /// Order of first insertion into the open set; drives tie-breaks. A
    /// relaxation keeps the original value.
    seq: u64,
    closed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenEntry {
    /// `g + h` as raw bits; non-negative floats order correctly as `u32`.
    f: u32,
    seq: u64,
    node: NodeId,
    /// `g` bits at push time; a mismatch against the node's record marks the
    /// entry stale.
    g: u32,
}

impl OpenEntry {
    fn key(&self) -> (u32, u64, NodeId, u32) {
        (self.f, self.seq, self.node, self.g)
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reusable scratch buffers for path queries.
///
/// This avoids per-query allocations when many paths are requested against
/// the same grid.
#[derive(Debug, Default)]
pub struct PathQuery {
    open: BinaryHeap<OpenEntry>,
    nodes: Vec<Option<SearchNode>>,
}

/// Path-cost accumulation: each step compounds the previous cost rather than
/// adding a unit. Grows past `f32::MAX` to infinity within a dozen steps;
/// comparisons stay total, so long searches still terminate.
fn compound_g(g: f32) -> f32 {
    (g + 1.0) * (g + 1.0)
}

fn bits(v: f32) -> u32 {
    v.to_bits()
}

pub(crate) fn find_path(
    grid: &VoxelGrid,
    registry: &PointRegistry,
    snap_radius: f32,
    from: Vec3,
    to: Vec3,
    query: &mut PathQuery,
    out: &mut WaypointPath,
) -> Result<(), PathError> {
    out.points.clear();

    let start = registry
        .closest(from, snap_radius)
        .ok_or(PathError::NoStartNode)?;
    let goal = registry
        .closest(to, snap_radius)
        .ok_or(PathError::NoGoalNode)?;
    let goal_position = grid.node(goal).world_position();

    query.open.clear();
    query.nodes.clear();
    query.nodes.resize(grid.len(), None);

    let mut next_seq: u64 = 0;
    query.nodes[start.index()] = Some(SearchNode {
        g: 0.0,
        h: 0.0,
        predecessor: None,
        seq: next_seq,
        closed: false,
    });
    query.open.push(OpenEntry {
        f: bits(0.0),
        seq: next_seq,
        node: start,
        g: bits(0.0),
    });
    next_seq += 1;

    // Tracks the last selected node; reconstruction falls back to it when the
    // frontier drains before reaching the goal.
    let mut current = start;

    while let Some(entry) = query.open.pop() {
        let Some(record) = query.nodes[entry.node.index()] else {
            continue;
        };
        // Entries superseded by a relaxation, or belonging to an already
        // closed node, are stale leftovers, not selections.
        if record.closed || bits(record.g) != entry.g {
            continue;
        }

        current = entry.node;
        if current == goal {
            break;
        }

        query.nodes[current.index()] = Some(SearchNode {
            closed: true,
            ..record
        });

        let tentative_g = compound_g(record.g);
        for &neighbor in grid.node(current).neighbors() {
            let neighbor_node = grid.node(neighbor);
            if !neighbor_node.is_valid() {
                continue;
            }

            let slot = &mut query.nodes[neighbor.index()];
            match slot {
                None => {
                    let h = neighbor_node.world_position().distance_squared(goal_position);
                    *slot = Some(SearchNode {
                        g: tentative_g,
                        h,
                        predecessor: Some(current),
                        seq: next_seq,
                        closed: false,
                    });
                    query.open.push(OpenEntry {
                        f: bits(tentative_g + h),
                        seq: next_seq,
                        node: neighbor,
                        g: bits(tentative_g),
                    });
                    next_seq += 1;
                }
                Some(existing) => {
                    if existing.closed {
                        continue;
                    }
                    // No relaxation unless strictly smaller.
                    if tentative_g >= existing.g {
                        continue;
                    }
                    existing.g = tentative_g;
                    existing.predecessor = Some(current);
                    query.open.push(OpenEntry {
                        f: bits(tentative_g + existing.h),
                        seq: existing.seq,
                        node: neighbor,
                        g: bits(tentative_g),
                    });
                }
            }
        }
    }

    // Walk predecessor links from the terminal node back to the start, then
    // reverse into start -> goal order.
    let mut cursor = Some(current);
    while let Some(id) = cursor {
        out.points.push(grid.node(id).world_position());
        cursor = query.nodes[id.index()].and_then(|record| record.predecessor);
    }
    out.points.reverse();

    Ok(())
}
