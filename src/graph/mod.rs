//! Graph model and search algorithms
//!
//! Provides the mutable node/edge graph and the traversal engine built on it:
//! - BFS/DFS frontier search for uninformed exploration
//! - UCS/A* cost-ordered search toward a target node
//! - Dijkstra shortest path with parent-chain reconstruction
//! - Observer trait for per-step visitation callbacks

pub mod algos;
pub mod observer;
pub mod types;

pub use algos::{astar, bfs, dfs, dijkstra, run_search, ucs};
pub use observer::{FnObserver, NoopObserver, SearchObserver, TraversalRecorder};
pub use types::{distance, Edge, Graph, Node, NodeId, NodeStatus, SearchKind, INFINITY_COST};
