//! Warehouse routing library entry points.
//!
//! This crate models a warehouse as a graph of located nodes, loads such
//! graphs from JSON files, and finds the cheapest path between two
//! locations. Higher-level consumers (CLI, tests) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod location;
pub mod output;
pub mod parser;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphBuilder, Node, NodeId, Position};
pub use location::Location;
pub use output::{RouteEndpoint, RouteStep, RouteSummary};
pub use parser::{load_graph, parse_graph, read_graph};
pub use path::{PathFinder, Route};
pub use routing::{fuzzy_location_matches, plan_route, resolve_location};
