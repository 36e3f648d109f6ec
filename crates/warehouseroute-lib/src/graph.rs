use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::location::Location;

/// Numeric identifier for a graph node.
pub type NodeId = i64;

/// Planar coordinates for a node on the warehouse floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Directed connection to another node with a traversal cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to_node: NodeId,
    pub cost: f64,
}

/// A graph node: one warehouse location pinned to a floor position, plus its
/// outgoing edges.
///
/// Two nodes compare equal when their id and location agree; position and
/// edges do not take part in equality.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub location: Location,
    pub position: Position,
    edges: Vec<Edge>,
    edge_targets: HashSet<NodeId>,
}

impl Node {
    pub fn new(id: NodeId, location: Location, position: Position) -> Self {
        Self {
            id,
            location,
            position,
            edges: Vec::new(),
            edge_targets: HashSet::new(),
        }
    }

    /// Append an outgoing edge unless one to the same target already exists.
    ///
    /// The first edge recorded for a target wins; later calls are ignored
    /// even when they carry a different cost.
    pub fn add_edge(&mut self, to_node: NodeId, cost: f64) {
        if self.edge_targets.insert(to_node) {
            self.edges.push(Edge { to_node, cost });
        }
    }

    /// Outgoing edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.location == other.location
    }
}

/// Mutable accumulator for assembling a [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: HashMap<NodeId, Node>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node unless its id is already taken; the first node added
    /// under an id wins.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.entry(node.id).or_insert(node);
    }

    /// Freeze the accumulated nodes into an immutable graph.
    pub fn build(self) -> Graph {
        Graph { nodes: self.nodes }
    }
}

/// In-memory routing graph over warehouse locations.
///
/// Assembled once through [`GraphBuilder`] and read-only from then on; every
/// query borrows the node table immutably.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<NodeId, Node>,
}

impl Graph {
    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Lookup a node by id.
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(&id).ok_or(Error::UnknownNode { id })
    }

    /// Iterate over all nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Ids of the nodes reachable over the outgoing edges of `id`.
    pub fn neighbors(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let node = self.node(id)?;
        Ok(node.edges().iter().map(|edge| edge.to_node).collect())
    }

    /// Cost of the edge from `from` to `to`, or `None` when no such edge
    /// exists.
    pub fn cost(&self, from: NodeId, to: NodeId) -> Result<Option<f64>> {
        let node = self.node(from)?;
        Ok(node
            .edges()
            .iter()
            .find(|edge| edge.to_node == to)
            .map(|edge| edge.cost))
    }

    /// Straight-line distance between two nodes, used by the shortest-path
    /// search as its estimate of the remaining cost.
    pub fn heuristic(&self, from: NodeId, to: NodeId) -> Result<f64> {
        let a = self.node(from)?.position;
        let b = self.node(to)?.position;
        Ok(a.distance_to(&b))
    }

    /// Find the single node carrying `location`.
    ///
    /// Fails when no node matches or when the location appears on more than
    /// one node.
    pub fn get_node_for_location(&self, location: &Location) -> Result<&Node> {
        let matches: Vec<&Node> = self
            .nodes
            .values()
            .filter(|node| &node.location == location)
            .collect();
        match matches.len() {
            1 => Ok(matches[0]),
            0 => Err(Error::NoNodeForLocation {
                location: location.to_string(),
            }),
            count => Err(Error::AmbiguousLocation {
                location: location.to_string(),
                count,
            }),
        }
    }

    /// Find the id of the single node carrying `location`.
    pub fn get_node_id_for_location(&self, location: &Location) -> Result<NodeId> {
        Ok(self.get_node_for_location(location)?.id)
    }

    /// Locations of every node, in no particular order.
    pub fn get_locations(&self) -> Vec<&Location> {
        self.nodes.values().map(|node| &node.location).collect()
    }
}
