use crate::cancel::CancelToken;
use crate::error::Result;
use crate::graph::observer::SearchObserver;
use crate::graph::types::{distance, Graph, NodeId, NodeStatus, INFINITY_COST};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Frontier entry ordered by the path cost captured at insertion time.
///
/// Ordering compares cost only, so pop order on cost ties is undefined.
#[derive(Debug, Clone, Copy)]
pub struct CostEntry {
    pub node: NodeId,
    pub path_cost: i64,
}

impl PartialEq for CostEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.path_cost == other.path_cost
    }
}

impl Eq for CostEntry {}

impl PartialOrd for CostEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CostEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.path_cost.cmp(&other.path_cost)
    }
}

/// Uniform-cost search toward the graph's target node.
#[tracing::instrument(skip(graph, observer, cancel), fields(nodes = graph.len()))]
pub fn ucs(
    graph: &mut Graph,
    observer: &mut dyn SearchObserver,
    cancel: &CancelToken,
) -> Result<()> {
    cost_search(graph, observer, cancel, false)
}

/// A* search toward the graph's target node, using the distance metric as
/// the heuristic estimate.
#[tracing::instrument(skip(graph, observer, cancel), fields(nodes = graph.len()))]
pub fn astar(
    graph: &mut Graph,
    observer: &mut dyn SearchObserver,
    cancel: &CancelToken,
) -> Result<()> {
    cost_search(graph, observer, cancel, true)
}

/// Shared cost-ordered loop behind [`ucs`] and [`astar`].
///
/// A missing start or target node is a silent no-op. The traversal pops the
/// minimum-cost frontier entry, terminates the instant the target is popped,
/// and checks cancellation once per popped node after processing.
///
/// Relaxation overwrites the child's cost without comparing to its previous
/// best. That reproduces the observed contract of the system this engine
/// models, at the price of path costs that are not monotone across re-visits
/// of the same child; [`super::dijkstra`] carries the guarded variant.
pub fn cost_search(
    graph: &mut Graph,
    observer: &mut dyn SearchObserver,
    cancel: &CancelToken,
    use_heuristic: bool,
) -> Result<()> {
    for node in &mut graph.nodes {
        node.status = NodeStatus::Unknown;
        node.path_cost = INFINITY_COST;
    }
    let (Some(start), Some(_target)) = (graph.start_node(), graph.target_node()) else {
        return Ok(());
    };

    graph.nodes[start.0].path_cost = 0;
    let mut frontier: BinaryHeap<Reverse<CostEntry>> = BinaryHeap::new();
    frontier.push(Reverse(CostEntry {
        node: start,
        path_cost: 0,
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        let id = entry.node;
        if graph.nodes[id.0].is_target_node {
            tracing::debug!(node = %id, cost = graph.nodes[id.0].path_cost, "target reached");
            return Ok(());
        }

        graph.nodes[id.0].status = NodeStatus::Discovered;
        observer.visited_node(&graph.nodes[id.0]);

        for i in 0..graph.nodes[id.0].edges.len() {
            let edge = graph.nodes[id.0].edges[i];
            let child = edge.destination;
            let edge_cost = distance(&graph.nodes[id.0], &graph.nodes[child.0]);
            let heuristic = if use_heuristic {
                distance(&graph.nodes[start.0], &graph.nodes[child.0])
            } else {
                0
            };
            let new_cost = edge_cost + graph.nodes[id.0].path_cost + heuristic;
            graph.nodes[child.0].path_cost = new_cost;

            if graph.nodes[child.0].status == NodeStatus::Unknown {
                frontier.push(Reverse(CostEntry {
                    node: child,
                    path_cost: new_cost,
                }));
                graph.nodes[child.0].status = NodeStatus::Discovered;
                observer.visited_edge(&edge)?;
            } else if in_frontier(&frontier, child)
                && graph.nodes[child.0].path_cost > graph.nodes[id.0].path_cost
            {
                // the binary heap has no decrease-key; remove and reinsert
                // under the updated cost to force a reordering
                frontier.retain(|entry| entry.0.node != child);
                frontier.push(Reverse(CostEntry {
                    node: child,
                    path_cost: new_cost,
                }));
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

pub(super) fn in_frontier(frontier: &BinaryHeap<Reverse<CostEntry>>, node: NodeId) -> bool {
    frontier.iter().any(|entry| entry.0.node == node)
}
