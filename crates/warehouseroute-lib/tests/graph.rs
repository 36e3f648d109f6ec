mod common;

use warehouseroute_lib::{Error, GraphBuilder, Location, Node, Position};

use common::{buffer_area, buffer_rack, sample_graph};

#[test]
fn adding_an_edge_twice_keeps_one() {
    let mut node = Node::new(155, buffer_rack(), Position { x: 62.0, y: 37.4 });
    assert!(node.edges().is_empty());

    node.add_edge(5, 4.2);
    assert_eq!(node.edges().len(), 1);

    node.add_edge(5, 4.2);
    assert_eq!(node.edges().len(), 1);

    node.add_edge(8, 2.0);
    assert_eq!(node.edges().len(), 2);
}

#[test]
fn repeated_edge_keeps_the_first_cost() {
    let mut node = Node::new(155, buffer_rack(), Position { x: 62.0, y: 37.4 });
    node.add_edge(5, 4.2);
    node.add_edge(5, 9.9);

    assert_eq!(node.edges().len(), 1);
    assert_eq!(node.edges()[0].cost, 4.2);
}

#[test]
fn adding_a_node_twice_keeps_one() {
    let mut builder = GraphBuilder::new();
    let node = Node::new(155, buffer_rack(), Position { x: 62.0, y: 37.4 });

    builder.add_node(node.clone());
    builder.add_node(node);
    builder.add_node(Node::new(156, buffer_area(), Position { x: 19.3, y: 4.0 }));

    let graph = builder.build();
    assert_eq!(graph.len(), 2);
    assert!(!graph.is_empty());
}

#[test]
fn neighbors_lists_edge_targets() {
    let graph = sample_graph();

    let neighbors = graph.neighbors(155).expect("node 155 exists");
    assert_eq!(neighbors.len(), 2);
    assert!(neighbors.contains(&156));
    assert!(neighbors.contains(&157));

    let no_neighbors = graph.neighbors(157).expect("node 157 exists");
    assert!(no_neighbors.is_empty());
}

#[test]
fn neighbors_of_unknown_node_fails() {
    let graph = sample_graph();
    let err = graph.neighbors(999).expect_err("node 999 is absent");
    assert!(matches!(err, Error::UnknownNode { id: 999 }));
    assert_eq!(format!("{err}"), "unknown node id: 999");
}

#[test]
fn cost_follows_edge_direction() {
    let graph = sample_graph();

    assert_eq!(graph.cost(155, 156).expect("node 155 exists"), Some(1.0));
    assert_eq!(graph.cost(156, 155).expect("node 156 exists"), None);
    assert!(matches!(
        graph.cost(999, 155),
        Err(Error::UnknownNode { id: 999 })
    ));
}

#[test]
fn heuristic_is_straight_line_distance() {
    let graph = sample_graph();

    let expected = Position { x: 62.0, y: 37.4 }.distance_to(&Position { x: 19.3, y: 4.0 });
    assert_eq!(graph.heuristic(155, 156).expect("nodes exist"), expected);
    assert_eq!(graph.heuristic(156, 155).expect("nodes exist"), expected);

    // Nodes 156 and 157 share a position.
    assert_eq!(graph.heuristic(156, 157).expect("nodes exist"), 0.0);

    assert!(matches!(
        graph.heuristic(155, 999),
        Err(Error::UnknownNode { id: 999 })
    ));
}

#[test]
fn location_lookup_finds_the_unique_node() {
    let graph = sample_graph();

    let node = graph
        .get_node_for_location(&buffer_rack())
        .expect("one node carries the rack location");
    assert_eq!(node.id, 155);

    assert_eq!(
        graph
            .get_node_id_for_location(&buffer_area())
            .expect("one node carries the area location"),
        157
    );
}

#[test]
fn location_lookup_reports_missing_locations() {
    let graph = sample_graph();
    let nowhere = Location::Area {
        mha: "NOWHERE".to_string(),
    };

    let err = graph
        .get_node_for_location(&nowhere)
        .expect_err("no node carries the location");
    assert!(matches!(err, Error::NoNodeForLocation { .. }));
    assert_eq!(format!("{err}"), "no node found for location MHA NOWHERE");
}

#[test]
fn location_lookup_reports_duplicates() {
    let mut builder = GraphBuilder::new();
    builder.add_node(Node::new(1, buffer_area(), Position { x: 0.0, y: 0.0 }));
    builder.add_node(Node::new(2, buffer_area(), Position { x: 5.0, y: 5.0 }));
    let graph = builder.build();

    let err = graph
        .get_node_for_location(&buffer_area())
        .expect_err("two nodes carry the location");
    assert!(matches!(err, Error::AmbiguousLocation { count: 2, .. }));
    assert_eq!(format!("{err}"), "location MHA BUFF4 matches 2 nodes");
}

#[test]
fn get_locations_lists_every_node() {
    let graph = sample_graph();
    let locations = graph.get_locations();

    assert_eq!(locations.len(), 3);
    assert!(locations.iter().any(|location| **location == buffer_rack()));
    assert!(locations.iter().any(|location| **location == buffer_area()));
}
