use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::location::Location;
use crate::path::{PathFinder, Route};

/// Similarity floor below which a label is not offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;
/// Number of fuzzy suggestions attached to an unknown-label error.
const SUGGESTION_LIMIT: usize = 3;

/// Resolve a display label to the location it names.
///
/// Matching is exact on the label text. An unknown label fails with
/// suggestions for similar labels in the graph.
pub fn resolve_location<'a>(graph: &'a Graph, label: &str) -> Result<&'a Location> {
    match graph
        .get_locations()
        .into_iter()
        .find(|location| location.to_string() == label)
    {
        Some(location) => Ok(location),
        None => {
            let suggestions = fuzzy_location_matches(graph, label, SUGGESTION_LIMIT);
            Err(Error::UnknownLocation {
                label: label.to_string(),
                suggestions,
            })
        }
    }
}

/// Rank location labels by Jaro-Winkler similarity to `label`.
///
/// Labels scoring below 0.7 are dropped; the rest are returned best match
/// first, at most `limit` entries, without duplicates.
pub fn fuzzy_location_matches(graph: &Graph, label: &str, limit: usize) -> Vec<String> {
    let mut scored: Vec<(f64, String)> = Vec::new();
    for location in graph.get_locations() {
        let candidate = location.to_string();
        if scored.iter().any(|(_, seen)| *seen == candidate) {
            continue;
        }
        let score = strsim::jaro_winkler(label, &candidate);
        if score >= SUGGESTION_THRESHOLD {
            scored.push((score, candidate));
        }
    }
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.truncate(limit);
    scored.into_iter().map(|(_, candidate)| candidate).collect()
}

/// Plan a route between two locations given by their display labels.
///
/// Resolves both labels to nodes (a label carried by more than one node
/// propagates the ambiguity error from the lookup), runs the shortest-path
/// search, and reports an unreachable goal as [`Error::RouteNotFound`]
/// carrying the labels the caller asked for.
pub fn plan_route(graph: &Graph, from: &str, to: &str) -> Result<Route> {
    let start = graph.get_node_id_for_location(resolve_location(graph, from)?)?;
    let end = graph.get_node_id_for_location(resolve_location(graph, to)?)?;
    debug!(from = %from, to = %to, start, end, "planning route");

    let finder = PathFinder::new();
    finder
        .shortest_path(graph, start, end)?
        .ok_or_else(|| Error::RouteNotFound {
            start: from.to_string(),
            goal: to.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphBuilder, Node, NodeId, Position};

    fn graph_with_areas(mhas: &[&str]) -> Graph {
        let mut builder = GraphBuilder::new();
        for (index, mha) in mhas.iter().enumerate() {
            let location = Location::Area {
                mha: mha.to_string(),
            };
            let position = Position { x: 0.0, y: 0.0 };
            builder.add_node(Node::new(index as NodeId, location, position));
        }
        builder.build()
    }

    #[test]
    fn fuzzy_matches_drop_dissimilar_labels() {
        let graph = graph_with_areas(&["BUFF2", "BUFF4"]);
        let matches = fuzzy_location_matches(&graph, "something else entirely", 3);
        assert!(matches.is_empty());
    }

    #[test]
    fn fuzzy_matches_respect_limit_and_skip_duplicates() {
        let graph = graph_with_areas(&["BUFF1", "BUFF2", "BUFF3", "BUFF4"]);
        let matches = fuzzy_location_matches(&graph, "MHA BUFF", 2);
        assert_eq!(matches.len(), 2);

        let mut builder = GraphBuilder::new();
        let location = Location::Area {
            mha: "BUFF2".to_string(),
        };
        builder.add_node(Node::new(1, location.clone(), Position { x: 0.0, y: 0.0 }));
        builder.add_node(Node::new(2, location, Position { x: 1.0, y: 1.0 }));
        let duplicated = builder.build();
        let matches = fuzzy_location_matches(&duplicated, "MHA BUFF", 3);
        assert_eq!(matches, vec!["MHA BUFF2".to_string()]);
    }
}
