//! Graph search implementations
//!
//! Contains the traversal engine proper:
//! - `first_search`: uninformed BFS/DFS over a shared deque frontier
//! - `cost_search`: cost-ordered UCS/A* toward a target node
//! - `dijkstra`: guarded-relaxation shortest path with parent pointers

pub mod cost_search;
pub mod dijkstra;
pub mod first_search;

pub use cost_search::{astar, ucs};
pub use dijkstra::dijkstra;
pub use first_search::{bfs, dfs};

use crate::cancel::CancelToken;
use crate::error::Result;
use crate::graph::observer::SearchObserver;
use crate::graph::types::{Graph, SearchKind};

/// Dispatch a traversal by kind.
///
/// `stop_at_target` applies to BFS/DFS only; the cost-based searches always
/// terminate at the target node.
pub fn run_search(
    kind: SearchKind,
    graph: &mut Graph,
    observer: &mut dyn SearchObserver,
    cancel: &CancelToken,
    stop_at_target: bool,
) -> Result<()> {
    match kind {
        SearchKind::Bfs => bfs(graph, observer, cancel, stop_at_target),
        SearchKind::Dfs => dfs(graph, observer, cancel, stop_at_target),
        SearchKind::Ucs => ucs(graph, observer, cancel),
        SearchKind::AStar => astar(graph, observer, cancel),
        SearchKind::Dijkstra => dijkstra(graph, observer, cancel),
    }
}
