use crate::error::{GraphlabError, Result};
use serde::Serialize;
use std::collections::HashSet;

/// Sentinel path cost, guaranteed larger than any real accumulated cost
pub const INFINITY_COST: i64 = i64::MAX;

/// Index of a node in the graph's arena.
///
/// All cross-node references (edge endpoints, shortest-path parents) are
/// arena indices rather than owning pointers, so the parent chain can never
/// form a cyclic-ownership structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-node traversal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    /// Unseen by the current traversal
    #[default]
    Unknown,
    /// In the frontier, or just popped from it
    Discovered,
    /// Fully expanded
    Processed,
}

/// Directed edge between two arena nodes; cost is derived from node
/// coordinates, not stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: NodeId,
    pub destination: NodeId,
}

/// A graph node with mutable search state.
///
/// Coordinates are used only for the distance metric. The traversal engine
/// mutates `status`, `path_cost`, and `parent_for_shortest_path` for the
/// duration of one traversal call; everything else belongs to the driver.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub x: i64,
    pub y: i64,
    pub status: NodeStatus,
    pub path_cost: i64,
    pub parent_for_shortest_path: Option<NodeId>,
    pub is_start_node: bool,
    pub is_target_node: bool,
    pub edges: Vec<Edge>,
}

impl Node {
    fn new(id: NodeId, x: i64, y: i64) -> Self {
        Node {
            id,
            x,
            y,
            status: NodeStatus::Unknown,
            path_cost: INFINITY_COST,
            parent_for_shortest_path: None,
            is_start_node: false,
            is_target_node: false,
            edges: Vec::new(),
        }
    }
}

/// Integer distance between two nodes' coordinates, used both as edge cost
/// and as the heuristic estimate: `sqrt(|dx| + |dy|)` truncated toward zero.
pub fn distance(a: &Node, b: &Node) -> i64 {
    (((a.x - b.x).abs() + (a.y - b.y).abs()) as f64).sqrt() as i64
}

/// Arena-backed graph: owns all nodes, each node owns its outgoing edge list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at the given coordinates, returning its arena id
    pub fn add_node(&mut self, x: i64, y: i64) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, x, y));
        id
    }

    /// Add a directed edge; both endpoints must already exist
    pub fn add_edge(&mut self, source: NodeId, destination: NodeId) -> Result<()> {
        if destination.0 >= self.nodes.len() {
            return Err(GraphlabError::node_not_found(destination));
        }
        let node = self
            .nodes
            .get_mut(source.0)
            .ok_or(GraphlabError::NodeNotFound { id: source })?;
        node.edges.push(Edge {
            source,
            destination,
        });
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Mark `id` as the start node, clearing the flag everywhere else
    pub fn set_start_node(&mut self, id: NodeId) -> Result<()> {
        if id.0 >= self.nodes.len() {
            return Err(GraphlabError::node_not_found(id));
        }
        for node in &mut self.nodes {
            node.is_start_node = false;
        }
        self.nodes[id.0].is_start_node = true;
        Ok(())
    }

    /// Mark `id` as the searched/target node, clearing the flag everywhere else
    pub fn set_target_node(&mut self, id: NodeId) -> Result<()> {
        if id.0 >= self.nodes.len() {
            return Err(GraphlabError::node_not_found(id));
        }
        for node in &mut self.nodes {
            node.is_target_node = false;
        }
        self.nodes[id.0].is_target_node = true;
        Ok(())
    }

    pub fn start_node(&self) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.is_start_node).map(NodeId)
    }

    pub fn target_node(&self) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.is_target_node).map(NodeId)
    }

    /// Clear all per-node search state: statuses back to Unknown, path costs
    /// back to the infinity sentinel, parent pointers dropped
    pub fn reset_search_state(&mut self) {
        for node in &mut self.nodes {
            node.status = NodeStatus::Unknown;
            node.path_cost = INFINITY_COST;
            node.parent_for_shortest_path = None;
        }
    }

    /// Reconstruct the path from the start to the target node by walking
    /// `parent_for_shortest_path` backward from the target.
    ///
    /// Returns an empty path when there is no target node or the target was
    /// never reached (no parent chain). A node encountered twice during the
    /// walk means the parent chain loops, which is reported as an error
    /// rather than silently truncated.
    pub fn shortest_path_to_target(&self) -> Result<Vec<NodeId>> {
        let Some(target) = self.target_node() else {
            return Ok(Vec::new());
        };
        if self.nodes[target.0].parent_for_shortest_path.is_none() {
            return Ok(Vec::new());
        }

        let mut path = vec![target];
        let mut seen: HashSet<NodeId> = HashSet::from([target]);
        let mut current = target;
        while let Some(parent) = self.nodes[current.0].parent_for_shortest_path {
            if !seen.insert(parent) {
                return Err(GraphlabError::PathCycle { at: parent });
            }
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Ok(path)
    }
}

/// Which search strategy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Bfs,
    Dfs,
    Ucs,
    AStar,
    Dijkstra,
}

impl std::str::FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(SearchKind::Bfs),
            "dfs" => Ok(SearchKind::Dfs),
            "ucs" => Ok(SearchKind::Ucs),
            "astar" | "a*" => Ok(SearchKind::AStar),
            "dijkstra" => Ok(SearchKind::Dijkstra),
            other => Err(format!(
                "unknown search kind '{}' (expected: bfs, dfs, ucs, astar, dijkstra)",
                other
            )),
        }
    }
}

impl std::fmt::Display for SearchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SearchKind::Bfs => "BFS",
            SearchKind::Dfs => "DFS",
            SearchKind::Ucs => "UCS",
            SearchKind::AStar => "A*",
            SearchKind::Dijkstra => "Dijkstra",
        };
        write!(f, "{}", name)
    }
}
