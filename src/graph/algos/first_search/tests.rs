use super::*;
use crate::error::GraphlabError;
use crate::graph::observer::{FnObserver, TraversalRecorder};
use std::cell::RefCell;

/// Three-level tree: A -> B, A -> C, B -> D, C -> D (edges in that order)
fn layered_graph() -> (Graph, [NodeId; 4]) {
    let mut graph = Graph::new();
    let a = graph.add_node(0, 0);
    let b = graph.add_node(10, 0);
    let c = graph.add_node(0, 10);
    let d = graph.add_node(10, 10);
    graph.add_edge(a, b).unwrap();
    graph.add_edge(a, c).unwrap();
    graph.add_edge(b, d).unwrap();
    graph.add_edge(c, d).unwrap();
    graph.set_start_node(a).unwrap();
    (graph, [a, b, c, d])
}

#[test]
fn test_no_start_node_is_a_noop() {
    let mut graph = Graph::new();
    let a = graph.add_node(0, 0);
    let b = graph.add_node(1, 0);
    graph.add_edge(a, b).unwrap();

    for kind in [FrontierKind::Fifo, FrontierKind::Lifo] {
        let mut recorder = TraversalRecorder::for_graph(&graph);
        first_search(&mut graph, kind, &mut recorder, &CancelToken::new(), false).unwrap();
        assert!(recorder.visited_nodes.is_empty());
        assert!(recorder.visited_edges.is_empty());
        assert!(recorder.processed_nodes.is_empty());
        assert!(graph
            .nodes()
            .iter()
            .all(|n| n.status == NodeStatus::Unknown));
    }
}

#[test]
fn test_bfs_visits_in_level_order() {
    let (mut graph, [a, b, c, d]) = layered_graph();
    let mut recorder = TraversalRecorder::for_graph(&graph);
    bfs(&mut graph, &mut recorder, &CancelToken::new(), false).unwrap();
    assert_eq!(recorder.visited_nodes, vec![a, b, c, d]);
    assert_eq!(recorder.processed_nodes, vec![a, b, c, d]);
}

#[test]
fn test_dfs_visits_depth_first() {
    let (mut graph, [a, b, c, d]) = layered_graph();
    let mut recorder = TraversalRecorder::for_graph(&graph);
    dfs(&mut graph, &mut recorder, &CancelToken::new(), false).unwrap();
    // LIFO frontier with edges enumerated in list order: C (pushed last)
    // expands before B
    assert_eq!(recorder.visited_nodes, vec![a, c, d, b]);
}

#[test]
fn test_visitation_completeness() {
    let (mut graph, _) = layered_graph();
    let mut recorder = TraversalRecorder::for_graph(&graph);
    bfs(&mut graph, &mut recorder, &CancelToken::new(), false).unwrap();
    assert_eq!(recorder.visited_nodes.len(), 4);
    assert_eq!(recorder.processed_nodes.len(), 4);
    assert!(graph
        .nodes()
        .iter()
        .all(|n| n.status == NodeStatus::Processed));
}

#[test]
fn test_unreachable_nodes_stay_unknown() {
    let (mut graph, _) = layered_graph();
    let island = graph.add_node(50, 50);
    let mut recorder = TraversalRecorder::for_graph(&graph);
    bfs(&mut graph, &mut recorder, &CancelToken::new(), false).unwrap();
    assert_eq!(recorder.visited_nodes.len(), 4);
    assert_eq!(graph.node(island).unwrap().status, NodeStatus::Unknown);
}

#[test]
fn test_full_traversal_without_target() {
    // stop_at_target=false still walks every reachable node even when no
    // node carries the target flag
    let (mut graph, _) = layered_graph();
    let mut recorder = TraversalRecorder::for_graph(&graph);
    dfs(&mut graph, &mut recorder, &CancelToken::new(), false).unwrap();
    assert_eq!(recorder.visited_nodes.len(), 4);
}

#[test]
fn test_status_never_regresses() {
    let (mut graph, ids) = layered_graph();
    let events: RefCell<Vec<(NodeId, NodeStatus)>> = RefCell::new(Vec::new());
    {
        let mut observer = FnObserver::new(
            |n: &crate::graph::types::Node| events.borrow_mut().push((n.id, n.status)),
            |_e| Ok(()),
            |n: &crate::graph::types::Node| events.borrow_mut().push((n.id, n.status)),
        );
        bfs(&mut graph, &mut observer, &CancelToken::new(), false).unwrap();
    }
    let events = events.into_inner();
    for id in ids {
        let seen: Vec<NodeStatus> = events
            .iter()
            .filter(|(node, _)| *node == id)
            .map(|(_, status)| *status)
            .collect();
        // visited while Discovered, processed exactly once afterward
        assert_eq!(seen, vec![NodeStatus::Discovered, NodeStatus::Processed]);
    }
}

#[test]
fn test_stop_at_target_skips_target_callbacks() {
    let (mut graph, [a, b, _c, d]) = layered_graph();
    graph.set_target_node(b).unwrap();
    let mut recorder = TraversalRecorder::for_graph(&graph);
    bfs(&mut graph, &mut recorder, &CancelToken::new(), true).unwrap();
    // B is popped second; the traversal stops before visiting or
    // processing it
    assert_eq!(recorder.visited_nodes, vec![a]);
    assert_eq!(recorder.processed_nodes, vec![a]);
    assert_eq!(graph.node(d).unwrap().status, NodeStatus::Unknown);
}

#[test]
fn test_cancellation_after_one_processed_node() {
    let (mut graph, [a, ..]) = layered_graph();
    let cancel = CancelToken::new();
    cancel.cancel();
    let mut recorder = TraversalRecorder::for_graph(&graph);
    bfs(&mut graph, &mut recorder, &cancel, false).unwrap();
    assert_eq!(recorder.visited_nodes, vec![a]);
    assert_eq!(recorder.processed_nodes, vec![a]);
    assert_eq!(graph.node(a).unwrap().status, NodeStatus::Processed);
}

#[test]
fn test_repeated_runs_are_identical() {
    let (mut graph, _) = layered_graph();
    let mut first = TraversalRecorder::for_graph(&graph);
    bfs(&mut graph, &mut first, &CancelToken::new(), false).unwrap();
    let mut second = TraversalRecorder::for_graph(&graph);
    bfs(&mut graph, &mut second, &CancelToken::new(), false).unwrap();
    assert_eq!(first.visited_nodes, second.visited_nodes);
    assert_eq!(first.visited_edges, second.visited_edges);
    assert_eq!(first.processed_nodes, second.processed_nodes);
}

#[test]
fn test_edge_observer_failure_aborts_with_partial_state() {
    let (mut graph, [a, b, c, d]) = layered_graph();
    let mut calls = 0;
    let mut observer = FnObserver::new(
        |_n| {},
        |_e| {
            calls += 1;
            if calls == 2 {
                Err(GraphlabError::aborted("second edge refused"))
            } else {
                Ok(())
            }
        },
        |_n| {},
    );
    let result = bfs(&mut graph, &mut observer, &CancelToken::new(), false);
    assert!(result.is_err());
    // partial traversal stays visible: A was mid-expansion, B and C were
    // discovered, D never reached
    assert_eq!(graph.node(a).unwrap().status, NodeStatus::Discovered);
    assert_eq!(graph.node(b).unwrap().status, NodeStatus::Discovered);
    assert_eq!(graph.node(c).unwrap().status, NodeStatus::Discovered);
    assert_eq!(graph.node(d).unwrap().status, NodeStatus::Unknown);
}
