//! Shared fixture builders for the integration tests.

use warehouseroute_lib::{Graph, GraphBuilder, Location, Node, Position};

/// Rack location carried by node 155 of the sample graph.
#[allow(dead_code)]
pub fn buffer_rack() -> Location {
    Location::Rack {
        mha: "BUFF2".to_string(),
        rack: "15".to_string(),
        horcoor: "20".to_string(),
        vercoor: "1".to_string(),
    }
}

/// Area location carried by node 157 of the sample graph.
#[allow(dead_code)]
pub fn buffer_area() -> Location {
    Location::Area {
        mha: "BUFF4".to_string(),
    }
}

/// Three buffer nodes with one-way edges: 155 -> 156 at cost 1.0,
/// 155 -> 157 at cost 2.0, and 156 -> 157 at cost 3.0. Node 157 has no
/// outgoing edges.
#[allow(dead_code)]
pub fn sample_graph() -> Graph {
    let mut node1 = Node::new(155, buffer_rack(), Position { x: 62.0, y: 37.4 });
    let mut node2 = Node::new(
        156,
        Location::Rack {
            mha: "BUFF2".to_string(),
            rack: "12".to_string(),
            horcoor: "34".to_string(),
            vercoor: "1".to_string(),
        },
        Position { x: 19.3, y: 4.0 },
    );
    let node3 = Node::new(157, buffer_area(), Position { x: 19.3, y: 4.0 });

    node1.add_edge(node2.id, 1.0);
    node1.add_edge(node3.id, 2.0);
    node2.add_edge(node3.id, 3.0);

    let mut builder = GraphBuilder::new();
    builder.add_node(node1);
    builder.add_node(node2);
    builder.add_node(node3);
    builder.build()
}
