//! Graphlab Core Library
//!
//! A graph search engine with four traversal strategies (BFS, DFS, UCS, A*),
//! driven from a mutable node/edge graph, instrumented with observer
//! callbacks and cooperatively cancelable mid-traversal.

pub mod cancel;
pub mod error;
pub mod graph;
pub mod logging;
