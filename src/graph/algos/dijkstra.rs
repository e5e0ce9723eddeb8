use crate::cancel::CancelToken;
use crate::error::Result;
use crate::graph::algos::cost_search::{in_frontier, CostEntry};
use crate::graph::observer::SearchObserver;
use crate::graph::types::{distance, Graph, NodeStatus, INFINITY_COST};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Dijkstra shortest path from the start node to the target node.
///
/// Unlike [`super::cost_search`], relaxation here is guarded: a child's cost
/// and `parent_for_shortest_path` only change when the new path is strictly
/// cheaper. After a run that reached the target, the parent chain read by
/// [`Graph::shortest_path_to_target`] spells out the cheapest path.
///
/// Same contract otherwise: missing start or target node is a silent no-op,
/// the observer sees every discovery, the traversal stops when the target
/// pops, and cancellation is checked once per processed node.
#[tracing::instrument(skip(graph, observer, cancel), fields(nodes = graph.len()))]
pub fn dijkstra(
    graph: &mut Graph,
    observer: &mut dyn SearchObserver,
    cancel: &CancelToken,
) -> Result<()> {
    for node in &mut graph.nodes {
        node.status = NodeStatus::Unknown;
        node.path_cost = INFINITY_COST;
        node.parent_for_shortest_path = None;
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
            let new_cost = graph.nodes[id.0].path_cost + edge_cost;
            if new_cost >= graph.nodes[child.0].path_cost {
                continue;
            }

            graph.nodes[child.0].path_cost = new_cost;
            graph.nodes[child.0].parent_for_shortest_path = Some(id);

            if graph.nodes[child.0].status == NodeStatus::Unknown {
                frontier.push(Reverse(CostEntry {
                    node: child,
                    path_cost: new_cost,
                }));
                graph.nodes[child.0].status = NodeStatus::Discovered;
                observer.visited_edge(&edge)?;
            } else if in_frontier(&frontier, child) {
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
