//! Graph file parsing.
//!
//! A graph file is a JSON array of node records. Each record gives the node
//! id, its floor position, the warehouse location it corresponds to, and the
//! adjacencies connecting it to other nodes:
//!
//! ```json
//! [
//!     {
//!         "id": 0,
//!         "position": { "x": 12.5, "y": 28.5 },
//!         "location": {
//!             "locationType": 1,
//!             "mha": "PICK2",
//!             "rack": "5",
//!             "horcoor": "10",
//!             "vercoor": "10"
//!         },
//!         "adjacencies": [
//!             { "nodeTo": 1, "cost": 0.73 }
//!         ]
//!     }
//! ]
//! ```
//!
//! `locationType` selects the location kind (1 rack, 2 area, 3 deep
//! stacking) and decides which of the remaining location fields must be
//! present. Rack and coordinate identifiers may arrive as JSON strings or
//! numbers; numbers keep their JSON spelling when converted. Unknown fields
//! are ignored, and adjacency targets are taken as-is: an edge may point at
//! a node id the file never defines, which surfaces later as a lookup error
//! when a query walks over it.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphBuilder, Node, NodeId, Position};
use crate::location::Location;

const RACK_LOCATION_TYPE: i64 = 1;
const AREA_LOCATION_TYPE: i64 = 2;
const DEEP_STACKING_LOCATION_TYPE: i64 = 3;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodeRecord {
    id: NodeId,
    position: PositionRecord,
    location: LocationRecord,
    adjacencies: Vec<AdjacencyRecord>,
}

#[derive(Debug, Deserialize)]
struct PositionRecord {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocationRecord {
    location_type: i64,
    mha: String,
    rack: Option<Coord>,
    horcoor: Option<Coord>,
    vercoor: Option<Coord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdjacencyRecord {
    node_to: NodeId,
    cost: f64,
}

/// Identifier that may arrive as either a JSON string or a JSON number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Coord {
    Text(String),
    Number(serde_json::Number),
}

impl Coord {
    fn into_string(self) -> String {
        match self {
            Coord::Text(text) => text,
            Coord::Number(number) => number.to_string(),
        }
    }
}

/// Parse a graph from JSON text.
pub fn parse_graph(text: &str) -> Result<Graph> {
    let records: Vec<NodeRecord> = serde_json::from_str(text)?;
    build_graph(records)
}

/// Read a graph from a JSON reader.
pub fn read_graph<R: Read>(reader: R) -> Result<Graph> {
    let records: Vec<NodeRecord> = serde_json::from_reader(reader)?;
    build_graph(records)
}

/// Load a graph from a JSON file on disk.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let file = File::open(path)?;
    let graph = read_graph(BufReader::new(file))?;
    debug!(nodes = graph.len(), path = %path.display(), "loaded warehouse graph");
    Ok(graph)
}

fn build_graph(records: Vec<NodeRecord>) -> Result<Graph> {
    let mut builder = GraphBuilder::new();
    for record in records {
        let location = parse_location(record.location)?;
        let position = Position {
            x: record.position.x,
            y: record.position.y,
        };
        let mut node = Node::new(record.id, location, position);
        for adjacency in record.adjacencies {
            node.add_edge(adjacency.node_to, adjacency.cost);
        }
        builder.add_node(node);
    }
    Ok(builder.build())
}

fn parse_location(record: LocationRecord) -> Result<Location> {
    match record.location_type {
        RACK_LOCATION_TYPE => {
            let rack = require_field(record.rack, "rack", "rack")?;
            let horcoor = require_field(record.horcoor, "horcoor", "rack")?;
            let vercoor = require_field(record.vercoor, "vercoor", "rack")?;
            Ok(Location::Rack {
                mha: record.mha,
                rack,
                horcoor,
                vercoor,
            })
        }
        AREA_LOCATION_TYPE => Ok(Location::Area { mha: record.mha }),
        DEEP_STACKING_LOCATION_TYPE => {
            let horcoor = require_field(record.horcoor, "horcoor", "deep stacking")?;
            let vercoor = require_field(record.vercoor, "vercoor", "deep stacking")?;
            Ok(Location::DeepStacking {
                mha: record.mha,
                horcoor,
                vercoor,
            })
        }
        value => Err(Error::InvalidLocationType { value }),
    }
}

fn require_field(
    value: Option<Coord>,
    field: &'static str,
    location_type: &'static str,
) -> Result<String> {
    value.map(Coord::into_string).ok_or(Error::MissingLocationField {
        field,
        location_type,
    })
}
