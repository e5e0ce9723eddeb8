use crate::cancel::CancelToken;
use crate::error::Result;
use crate::graph::observer::SearchObserver;
use crate::graph::types::{Graph, NodeId, NodeStatus};
use std::collections::VecDeque;

/// Frontier discipline for uninformed search.
///
/// Both disciplines share one double-ended queue and pop from the front;
/// they differ only in which end receives insertions: the back for FIFO
/// (breadth-first) and the front for LIFO (depth-first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierKind {
    Fifo,
    Lifo,
}

impl FrontierKind {
    fn insert(self, frontier: &mut VecDeque<NodeId>, id: NodeId) {
        match self {
            FrontierKind::Fifo => frontier.push_back(id),
            FrontierKind::Lifo => frontier.push_front(id),
        }
    }
}

/// Breadth-first traversal from the graph's start node.
#[tracing::instrument(skip(graph, observer, cancel), fields(nodes = graph.len()))]
pub fn bfs(
    graph: &mut Graph,
    observer: &mut dyn SearchObserver,
    cancel: &CancelToken,
    stop_at_target: bool,
) -> Result<()> {
    first_search(graph, FrontierKind::Fifo, observer, cancel, stop_at_target)
}

/// Depth-first traversal from the graph's start node.
#[tracing::instrument(skip(graph, observer, cancel), fields(nodes = graph.len()))]
pub fn dfs(
    graph: &mut Graph,
    observer: &mut dyn SearchObserver,
    cancel: &CancelToken,
    stop_at_target: bool,
) -> Result<()> {
    first_search(graph, FrontierKind::Lifo, observer, cancel, stop_at_target)
}

/// Shared frontier loop behind [`bfs`] and [`dfs`].
///
/// A missing start node is a silent no-op. With `stop_at_target`, the
/// traversal returns the instant the target node is popped, before any of
/// its callbacks fire. Neighbors expand in edge-list insertion order. The
/// cancellation token is checked once per popped node, after processing;
/// cancellation is an early `Ok`, not an error.
pub fn first_search(
    graph: &mut Graph,
    frontier_kind: FrontierKind,
    observer: &mut dyn SearchObserver,
    cancel: &CancelToken,
    stop_at_target: bool,
) -> Result<()> {
    for node in &mut graph.nodes {
        node.status = NodeStatus::Unknown;
    }
    let Some(start) = graph.start_node() else {
        return Ok(());
    };

    let mut frontier = VecDeque::new();
    frontier_kind.insert(&mut frontier, start);

    while let Some(id) = frontier.pop_front() {
        if stop_at_target && graph.nodes[id.0].is_target_node {
            tracing::debug!(node = %id, "target node popped, traversal complete");
            return Ok(());
        }

        graph.nodes[id.0].status = NodeStatus::Discovered;
        observer.visited_node(&graph.nodes[id.0]);

        for i in 0..graph.nodes[id.0].edges.len() {
            let edge = graph.nodes[id.0].edges[i];
            if graph.nodes[edge.destination.0].status == NodeStatus::Unknown {
                frontier_kind.insert(&mut frontier, edge.destination);
                // marking Discovered at insertion keeps a node from entering
                // the frontier twice
                graph.nodes[edge.destination.0].status = NodeStatus::Discovered;
                observer.visited_edge(&edge)?;
            }
        }

        graph.nodes[id.0].status = NodeStatus::Processed;
        observer.processed_node(&graph.nodes[id.0]);

        if cancel.is_canceled() {
            tracing::debug!(remaining = frontier.len(), "traversal canceled");
            return Ok(());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
