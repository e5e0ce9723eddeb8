//! Observer protocol for traversal instrumentation
//!
//! The engine calls back into the driver at three well-defined points of the
//! traversal loop, synchronously and never concurrently. Pacing between
//! steps (animation delays, progress bars) is the observer's business; the
//! engine only guarantees the calling points.

use crate::error::Result;
use crate::graph::types::{Edge, Graph, Node, NodeId};
use serde::Serialize;

/// Callbacks invoked by the traversal engine.
///
/// - `visited_node`: once per node, when it is popped from the frontier and
///   marked Discovered
/// - `visited_edge`: once per edge, when its destination first transitions
///   Unknown to Discovered; may fail, and failure aborts the traversal,
///   propagating to the caller with partial graph state left in place
/// - `processed_node`: once per node, after all its outgoing edges have been
///   examined and it is marked Processed
pub trait SearchObserver {
    fn visited_node(&mut self, _node: &Node) {}

    fn visited_edge(&mut self, _edge: &Edge) -> Result<()> {
        Ok(())
    }

    fn processed_node(&mut self, _node: &Node) {}
}

/// Observer that ignores every callback
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Adapter building an observer from three closures, one per callback slot.
pub struct FnObserver<VN, VE, PN>
where
    VN: FnMut(&Node),
    VE: FnMut(&Edge) -> Result<()>,
    PN: FnMut(&Node),
{
    on_visited_node: VN,
    on_visited_edge: VE,
    on_processed_node: PN,
}

impl<VN, VE, PN> FnObserver<VN, VE, PN>
where
    VN: FnMut(&Node),
    VE: FnMut(&Edge) -> Result<()>,
    PN: FnMut(&Node),
{
    pub fn new(on_visited_node: VN, on_visited_edge: VE, on_processed_node: PN) -> Self {
        Self {
            on_visited_node,
            on_visited_edge,
            on_processed_node,
        }
    }
}

impl<VN, VE, PN> SearchObserver for FnObserver<VN, VE, PN>
where
    VN: FnMut(&Node),
    VE: FnMut(&Edge) -> Result<()>,
    PN: FnMut(&Node),
{
    fn visited_node(&mut self, node: &Node) {
        (self.on_visited_node)(node)
    }

    fn visited_edge(&mut self, edge: &Edge) -> Result<()> {
        (self.on_visited_edge)(edge)
    }

    fn processed_node(&mut self, node: &Node) {
        (self.on_processed_node)(node)
    }
}

/// Observer that records every callback in invocation order.
///
/// Drivers use the recorded lists to redraw incrementally, and
/// [`TraversalRecorder::progress`] to feed a progress indicator.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TraversalRecorder {
    pub visited_nodes: Vec<NodeId>,
    pub visited_edges: Vec<Edge>,
    pub processed_nodes: Vec<NodeId>,
    node_count: usize,
}

impl TraversalRecorder {
    /// Create a recorder sized against `graph` for progress reporting
    pub fn for_graph(graph: &Graph) -> Self {
        TraversalRecorder {
            node_count: graph.len(),
            ..Default::default()
        }
    }

    /// Fraction of the graph's nodes visited so far, in `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        if self.node_count == 0 {
            0.0
        } else {
            self.visited_nodes.len() as f32 / self.node_count as f32
        }
    }

    /// Drop recorded events, keeping the graph sizing
    pub fn clear(&mut self) {
        self.visited_nodes.clear();
        self.visited_edges.clear();
        self.processed_nodes.clear();
    }
}

impl SearchObserver for TraversalRecorder {
    fn visited_node(&mut self, node: &Node) {
        self.visited_nodes.push(node.id);
    }

    fn visited_edge(&mut self, edge: &Edge) -> Result<()> {
        self.visited_edges.push(*edge);
        Ok(())
    }

    fn processed_node(&mut self, node: &Node) {
        self.processed_nodes.push(node.id);
    }
}
